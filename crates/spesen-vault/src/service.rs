//! Owner-only access to encrypted banking details

use std::sync::Arc;

use spesen_core::types::{BankingDetails, UserId};
use spesen_crypto::{decrypt_details, encrypt_details, SecretCodec};

use crate::error::VaultError;
use crate::store::BankingStore;

/// Banking-details service: encrypt-before-store, decrypt-on-demand.
///
/// The codec is constructed once at startup and shared; the service holds no
/// other state and is safe to call from any number of request handlers.
pub struct BankingService<S> {
    store: S,
    codec: Arc<SecretCodec>,
}

impl<S: BankingStore> BankingService<S> {
    pub fn new(store: S, codec: Arc<SecretCodec>) -> Self {
        Self { store, codec }
    }

    /// Encrypt and store the banking details of `owner`.
    pub async fn save_details(
        &self,
        requester: UserId,
        owner: UserId,
        details: &BankingDetails,
    ) -> Result<(), VaultError> {
        authorize(requester, owner)?;

        let sealed = encrypt_details(&self.codec, details).map_err(|err| {
            tracing::error!(user = %owner, kind = %err, "banking details encryption failed");
            VaultError::Unwritable
        })?;

        self.store.save(owner, sealed).await?;
        Ok(())
    }

    /// Fetch and decrypt the banking details of `owner`.
    ///
    /// Returns `Ok(None)` if no record exists. Any decryption failure is
    /// logged with its specific kind and surfaced as the one generic
    /// [`VaultError::Unreadable`] — never as a partial or defaulted record.
    pub async fn read_details(
        &self,
        requester: UserId,
        owner: UserId,
    ) -> Result<Option<BankingDetails>, VaultError> {
        authorize(requester, owner)?;

        let Some(sealed) = self.store.load(owner).await? else {
            return Ok(None);
        };

        match decrypt_details(&self.codec, &sealed) {
            Ok(details) => Ok(Some(details)),
            Err(err) => {
                tracing::warn!(user = %owner, kind = %err, "banking details decryption failed");
                Err(VaultError::Unreadable)
            }
        }
    }

    /// Remove the stored banking details of `owner`.
    pub async fn delete_details(&self, requester: UserId, owner: UserId) -> Result<(), VaultError> {
        authorize(requester, owner)?;
        self.store.delete(owner).await?;
        Ok(())
    }
}

/// Owner-only visibility. Checked before any store or codec call.
fn authorize(requester: UserId, owner: UserId) -> Result<(), VaultError> {
    if requester != owner {
        tracing::warn!(
            requester = %requester,
            owner = %owner,
            "denied banking details access for non-owner"
        );
        return Err(VaultError::Forbidden);
    }
    Ok(())
}
