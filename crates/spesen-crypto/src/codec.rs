//! AES-256-GCM envelope seal/open
//!
//! Envelope (binary, before base64):
//! ```text
//! [1 byte: version][12 bytes: random nonce][16 bytes: GCM tag][N bytes: ciphertext]
//! ```
//!
//! A fresh random nonce is drawn per call, so encrypting the same plaintext
//! twice yields different envelopes. Nonce uniqueness rests on the collision
//! probability of 96 random bits over the key's usage volume.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as B64, Engine};
use rand::RngCore;

use crate::error::CryptoError;
use crate::key::SecretKey;
use crate::{ENVELOPE_VERSION, MIN_ENVELOPE_SIZE, NONCE_SIZE, TAG_SIZE};

/// Seals and opens banking-details envelopes under one derived key.
///
/// Immutable after construction; construct once at service startup and share
/// by reference. Holds no other state, so concurrent use needs no
/// coordination.
pub struct SecretCodec {
    key: SecretKey,
}

impl SecretCodec {
    pub fn new(key: SecretKey) -> Self {
        Self { key }
    }

    /// Construct directly from the operator-configured base64 secret.
    ///
    /// Fails with [`CryptoError::Configuration`] if the secret decodes to
    /// fewer than 32 bytes; callers must treat that as fatal at startup.
    pub fn from_base64_secret(secret: &str) -> Result<Self, CryptoError> {
        Ok(Self::new(SecretKey::from_base64(secret)?))
    }

    /// Encrypt a plaintext string into a self-contained base64 envelope.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError> {
        let cipher = Aes256Gcm::new(self.key.as_bytes().into());

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        // aes-gcm returns ciphertext || tag; only inputs near the 64 GiB GCM
        // limit can fail, which no profile field reaches
        let ct_and_tag = cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| CryptoError::Configuration("plaintext exceeds AES-GCM limits".into()))?;
        let (ciphertext, tag) = ct_and_tag.split_at(ct_and_tag.len() - TAG_SIZE);

        let mut envelope = Vec::with_capacity(MIN_ENVELOPE_SIZE + ciphertext.len());
        envelope.push(ENVELOPE_VERSION);
        envelope.extend_from_slice(&nonce_bytes);
        envelope.extend_from_slice(tag);
        envelope.extend_from_slice(ciphertext);

        Ok(B64.encode(&envelope))
    }

    /// Decrypt an envelope back to the original plaintext.
    ///
    /// Fails closed: any truncation, unknown version, tag mismatch, or
    /// non-UTF-8 recovery is an error, never a partial result.
    pub fn decrypt(&self, envelope: &str) -> Result<String, CryptoError> {
        let bytes = B64
            .decode(envelope)
            .map_err(|_| CryptoError::MalformedEnvelope("not valid base64".into()))?;

        if bytes.len() < MIN_ENVELOPE_SIZE {
            return Err(CryptoError::MalformedEnvelope(format!(
                "{} bytes decoded (minimum {MIN_ENVELOPE_SIZE})",
                bytes.len()
            )));
        }
        if bytes[0] != ENVELOPE_VERSION {
            return Err(CryptoError::MalformedEnvelope(format!(
                "unknown envelope version {:#04x}",
                bytes[0]
            )));
        }

        let nonce = Nonce::from_slice(&bytes[1..1 + NONCE_SIZE]);
        let tag = &bytes[1 + NONCE_SIZE..MIN_ENVELOPE_SIZE];
        let ciphertext = &bytes[MIN_ENVELOPE_SIZE..];

        // aes-gcm expects ciphertext || tag and verifies in constant time
        let mut ct_and_tag = Vec::with_capacity(ciphertext.len() + TAG_SIZE);
        ct_and_tag.extend_from_slice(ciphertext);
        ct_and_tag.extend_from_slice(tag);

        let cipher = Aes256Gcm::new(self.key.as_bytes().into());
        let plaintext = cipher
            .decrypt(nonce, ct_and_tag.as_ref())
            .map_err(|_| CryptoError::Authentication)?;

        String::from_utf8(plaintext)
            .map_err(|_| CryptoError::MalformedEnvelope("recovered bytes are not UTF-8".into()))
    }
}
