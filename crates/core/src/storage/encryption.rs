use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::errors::CoreError;

pub const SALT_LEN: usize = 16;
pub const NONCE_LEN: usize = 12;

/// Argon2id parameters, written into every vault header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Memory cost in KiB
    pub memory_cost: u32,
    /// Iterations
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            memory_cost: 65_536,
            time_cost: 3,
            parallelism: 4,
        }
    }
}

impl KdfParams {
    /// Bounds accepted when reading a header; anything outside is rejected
    /// before Argon2 ever runs.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(8..=1_048_576).contains(&self.memory_cost) {
            return Err(CoreError::InvalidFileFormat(format!(
                "KDF memory_cost out of range: {} KiB (expected 8..1048576)",
                self.memory_cost
            )));
        }
        if !(1..=20).contains(&self.time_cost) {
            return Err(CoreError::InvalidFileFormat(format!(
                "KDF time_cost out of range: {} (expected 1..20)",
                self.time_cost
            )));
        }
        if !(1..=16).contains(&self.parallelism) {
            return Err(CoreError::InvalidFileFormat(format!(
                "KDF parallelism out of range: {} (expected 1..16)",
                self.parallelism
            )));
        }
        Ok(())
    }
}

/// Output of [`seal`]: everything needed to decrypt again, given the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    /// AES-GCM ciphertext with the 16-byte tag appended
    pub ciphertext: Vec<u8>,
}

/// Derive a 256-bit key from a password with Argon2id.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN], params: &KdfParams) -> Result<[u8; 32], CoreError> {
    let argon2_params = Params::new(params.memory_cost, params.time_cost, params.parallelism, Some(32))
        .map_err(|e| CoreError::Encryption(format!("Invalid Argon2 params: {e}")))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = [0u8; 32];
    argon2
        .hash_password_into(password.as_bytes(), salt, &mut key)
        .map_err(|e| CoreError::Encryption(format!("Argon2 key derivation failed: {e}")))?;
    Ok(key)
}

/// Encrypt with a fresh salt and nonce.
pub fn seal(plaintext: &[u8], password: &str, params: &KdfParams) -> Result<Sealed, CoreError> {
    let salt: [u8; SALT_LEN] = random_bytes()?;
    let nonce: [u8; NONCE_LEN] = random_bytes()?;
    let key = derive_key(password, &salt, params)?;

    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| CoreError::Encryption(format!("Failed to create cipher: {e}")))?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| CoreError::Encryption(format!("Encryption failed: {e}")))?;

    Ok(Sealed {
        salt,
        nonce,
        ciphertext,
    })
}

/// Decrypt and authenticate. A wrong password or tampered data yields
/// [`CoreError::Decryption`].
pub fn open(sealed: &Sealed, password: &str, params: &KdfParams) -> Result<Vec<u8>, CoreError> {
    let key = derive_key(password, &sealed.salt, params)?;
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| CoreError::Encryption(format!("Failed to create cipher: {e}")))?;
    Ok(cipher.decrypt(Nonce::from_slice(&sealed.nonce), sealed.ciphertext.as_slice())?)
}

fn random_bytes<const N: usize>() -> Result<[u8; N], CoreError> {
    let mut buf = [0u8; N];
    getrandom::getrandom(&mut buf)
        .map_err(|e| CoreError::Encryption(format!("Failed to generate random bytes: {e}")))?;
    Ok(buf)
}
