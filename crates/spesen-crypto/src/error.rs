use thiserror::Error;

/// Failure kinds of the banking-details codec.
///
/// Callers on user-facing paths must collapse all of these into one generic
/// message; the distinction exists for startup checks and internal logs only.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key material missing, not base64, or too short. Fatal at startup or
    /// first use; a service that needs encryption must not come up with this.
    #[error("key configuration error: {0}")]
    Configuration(String),

    /// Envelope string is not valid base64, decodes below the minimum size,
    /// or carries an unknown format version.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// GCM tag verification failed: wrong key, corrupted ciphertext, or
    /// tampering. Deliberately carries no further detail.
    #[error("envelope authentication failed")]
    Authentication,
}
