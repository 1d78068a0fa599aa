//! spesen-crypto: encryption of banking details at rest
//!
//! Sensitive profile fields (IBAN, account holder) are sealed into
//! self-contained base64 envelopes before they reach the database, and opened
//! only on owner-authorized reads.
//!
//! Envelope format (binary, before base64):
//! ```text
//! [1 byte: version = 0x01][12 bytes: random nonce][16 bytes: GCM tag][N bytes: ciphertext]
//! ```
//!
//! AES-256-GCM keeps the ciphertext the same length as the plaintext, so an
//! envelope is always exactly 29 + N bytes. The version byte exists so a
//! future key or algorithm change can be rolled out without breaking stored
//! records; 0x01 is the only version today.
//!
//! The key is the first 32 bytes of the operator-supplied base64 secret.
//! That is deliberate truncation, not a KDF: already-stored envelopes depend
//! on the exact bytes, so swapping in HKDF would be a breaking migration.

pub mod codec;
pub mod error;
pub mod key;
pub mod record;

pub use codec::SecretCodec;
pub use error::CryptoError;
pub use key::SecretKey;
pub use record::{decrypt_details, encrypt_details};

/// Size of the derived encryption key in bytes (256-bit)
pub const KEY_SIZE: usize = 32;

/// Size of an AES-GCM nonce (96-bit)
pub const NONCE_SIZE: usize = 12;

/// Size of a GCM authentication tag
pub const TAG_SIZE: usize = 16;

/// Current envelope format version
pub const ENVELOPE_VERSION: u8 = 0x01;

/// Smallest valid envelope: version + nonce + tag, empty ciphertext
pub const MIN_ENVELOPE_SIZE: usize = 1 + NONCE_SIZE + TAG_SIZE;
