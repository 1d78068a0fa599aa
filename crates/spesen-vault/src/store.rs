//! Storage interface for encrypted banking details
//!
//! The production store lives in the web application's persistence layer;
//! it persists the envelope strings as opaque text columns. [`MemoryStore`]
//! implements the same contract for tests and local development.

use std::collections::HashMap;

use tokio::sync::RwLock;

use spesen_core::types::{EncryptedBankingDetails, UserId};

/// Persistence contract for encrypted banking details.
///
/// Implementations only ever see sealed envelopes; they must not interpret,
/// index, or query on their content.
#[allow(async_fn_in_trait)]
pub trait BankingStore {
    async fn load(&self, user: UserId) -> anyhow::Result<Option<EncryptedBankingDetails>>;

    async fn save(&self, user: UserId, record: EncryptedBankingDetails) -> anyhow::Result<()>;

    async fn delete(&self, user: UserId) -> anyhow::Result<()>;
}

/// In-memory store, one record per user.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<UserId, EncryptedBankingDetails>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BankingStore for MemoryStore {
    async fn load(&self, user: UserId) -> anyhow::Result<Option<EncryptedBankingDetails>> {
        Ok(self.records.read().await.get(&user).cloned())
    }

    async fn save(&self, user: UserId, record: EncryptedBankingDetails) -> anyhow::Result<()> {
        self.records.write().await.insert(user, record);
        Ok(())
    }

    async fn delete(&self, user: UserId) -> anyhow::Result<()> {
        self.records.write().await.remove(&user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque_record() -> EncryptedBankingDetails {
        EncryptedBankingDetails {
            iban: "AWlyb24tZW52ZWxvcGU=".into(),
            account_holder: "AW90aGVyLWVudmVsb3Bl".into(),
        }
    }

    #[tokio::test]
    async fn test_load_missing_record() {
        let store = MemoryStore::new();
        assert!(store.load(UserId(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_load_delete() {
        let store = MemoryStore::new();
        store.save(UserId(1), opaque_record()).await.unwrap();

        let loaded = store.load(UserId(1)).await.unwrap().unwrap();
        assert_eq!(loaded, opaque_record());

        store.delete(UserId(1)).await.unwrap();
        assert!(store.load(UserId(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_existing() {
        let store = MemoryStore::new();
        store.save(UserId(1), opaque_record()).await.unwrap();

        let replacement = EncryptedBankingDetails {
            iban: "AXJlcGxhY2VtZW50".into(),
            account_holder: "AXN3YXBwZWQ=".into(),
        };
        store.save(UserId(1), replacement.clone()).await.unwrap();

        assert_eq!(store.load(UserId(1)).await.unwrap().unwrap(), replacement);
    }
}
