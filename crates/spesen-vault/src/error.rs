use thiserror::Error;

/// Failures of the banking-details service.
///
/// All variants except `Storage` carry display strings that callers may
/// show to users as-is; `Storage` stays internal. Codec failures
/// are collapsed into [`VaultError::Unreadable`] / [`VaultError::Unwritable`]
/// so an attacker cannot tell a wrong key from corrupted or malformed data;
/// the specific kind is logged internally before the collapse.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("not allowed to access these banking details")]
    Forbidden,

    #[error("unable to read banking details")]
    Unreadable,

    #[error("unable to store banking details")]
    Unwritable,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
