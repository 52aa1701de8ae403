use crate::errors::CoreError;

use super::encryption::{KdfParams, Sealed, NONCE_LEN, SALT_LEN};

/// Magic bytes identifying a FinAI vault file.
pub const MAGIC: &[u8; 4] = b"FNAI";

pub const CURRENT_VERSION: u16 = 1;

/// magic(4) + version(2) + kdf(12) + salt(16) + nonce(12) + ciphertext_len(8)
pub const HEADER_SIZE: usize = 4 + 2 + 12 + SALT_LEN + NONCE_LEN + 8;

/// Encode a sealed payload.
///
/// Layout (all integers little-endian):
/// ```text
/// [FNAI] [version u16] [memory_cost u32] [time_cost u32] [parallelism u32]
/// [salt 16B] [nonce 12B] [ciphertext_len u64] [ciphertext]
/// ```
pub fn encode(version: u16, kdf: &KdfParams, sealed: &Sealed) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + sealed.ciphertext.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&version.to_le_bytes());
    for field in [kdf.memory_cost, kdf.time_cost, kdf.parallelism] {
        buf.extend_from_slice(&field.to_le_bytes());
    }
    buf.extend_from_slice(&sealed.salt);
    buf.extend_from_slice(&sealed.nonce);
    buf.extend_from_slice(&(sealed.ciphertext.len() as u64).to_le_bytes());
    buf.extend_from_slice(&sealed.ciphertext);
    buf
}

/// Decode and validate a vault file. Returns the format version, the KDF
/// parameters and the sealed payload.
pub fn decode(data: &[u8]) -> Result<(u16, KdfParams, Sealed), CoreError> {
    if data.len() < HEADER_SIZE {
        return Err(CoreError::InvalidFileFormat(
            "File too small to be a FinAI vault".into(),
        ));
    }

    let mut reader = Reader { data, pos: 0 };

    if &reader.take::<4>()? != MAGIC {
        return Err(CoreError::InvalidFileFormat(
            "Invalid magic bytes, not a FinAI vault".into(),
        ));
    }

    let version = u16::from_le_bytes(reader.take()?);
    if version == 0 || version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }

    let kdf = KdfParams {
        memory_cost: u32::from_le_bytes(reader.take()?),
        time_cost: u32::from_le_bytes(reader.take()?),
        parallelism: u32::from_le_bytes(reader.take()?),
    };
    kdf.validate()?;

    let salt = reader.take::<SALT_LEN>()?;
    let nonce = reader.take::<NONCE_LEN>()?;
    let ciphertext_len = u64::from_le_bytes(reader.take()?);

    let remaining = data.len() - reader.pos;
    if (remaining as u64) < ciphertext_len {
        return Err(CoreError::InvalidFileFormat(format!(
            "File truncated: expected {ciphertext_len} bytes of ciphertext, got {remaining}"
        )));
    }
    let end = reader.pos + ciphertext_len as usize;
    let ciphertext = data[reader.pos..end].to_vec();

    Ok((
        version,
        kdf,
        Sealed {
            salt,
            nonce,
            ciphertext,
        },
    ))
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Reader<'_> {
    fn take<const N: usize>(&mut self) -> Result<[u8; N], CoreError> {
        let bytes = self
            .data
            .get(self.pos..self.pos + N)
            .ok_or_else(|| CoreError::InvalidFileFormat("Unexpected end of header".into()))?;
        self.pos += N;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}
