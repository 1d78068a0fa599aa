//! Key handling: operator-supplied base64 secret → 256-bit encryption key

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::KEY_SIZE;

/// The 256-bit banking-details encryption key.
///
/// Zeroized on drop to prevent key material lingering in memory.
#[derive(Clone)]
pub struct SecretKey {
    bytes: [u8; KEY_SIZE],
}

impl SecretKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Derive the key from the operator-configured secret.
    ///
    /// The secret must be base64 and decode to at least 32 bytes; the key is
    /// the first 32 decoded bytes. Truncation is the stored-data contract,
    /// see the crate docs.
    pub fn from_base64(secret: &str) -> Result<Self, CryptoError> {
        let mut decoded = B64
            .decode(secret.trim())
            .map_err(|_| CryptoError::Configuration("secret is not valid base64".into()))?;

        if decoded.len() < KEY_SIZE {
            decoded.zeroize();
            return Err(CryptoError::Configuration(format!(
                "key material too short: {} bytes decoded (need at least {KEY_SIZE})",
                decoded.len()
            )));
        }

        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(&decoded[..KEY_SIZE]);
        decoded.zeroize();

        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
