use crate::errors::CoreError;
use crate::models::user_data::UserData;

use super::encryption::{self, KdfParams};
use super::format;

/// Save/load the whole user state as an encrypted vault.
pub struct StorageManager;

impl StorageManager {
    /// UserData → bincode → AES-256-GCM(Argon2id(password)) → FNAI bytes
    pub fn save_to_bytes(data: &UserData, password: &str) -> Result<Vec<u8>, CoreError> {
        Self::save_with_params(data, password, &KdfParams::default())
    }

    /// Same as [`StorageManager::save_to_bytes`] with explicit KDF cost.
    pub fn save_with_params(data: &UserData, password: &str, kdf: &KdfParams) -> Result<Vec<u8>, CoreError> {
        kdf.validate()?;
        let plaintext = bincode::serialize(data)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize user data: {e}")))?;
        let sealed = encryption::seal(&plaintext, password, kdf)?;
        Ok(format::encode(format::CURRENT_VERSION, kdf, &sealed))
    }

    /// FNAI bytes → header → Argon2id(password, salt) → AES-256-GCM → bincode → UserData
    pub fn load_from_bytes(bytes: &[u8], password: &str) -> Result<UserData, CoreError> {
        let (_version, kdf, sealed) = format::decode(bytes)?;
        let plaintext = encryption::open(&sealed, password, &kdf)?;
        bincode::deserialize(&plaintext)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize user data: {e}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(data: &UserData, path: &str, password: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(data, password)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, password: &str) -> Result<UserData, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes, password)
    }
}
