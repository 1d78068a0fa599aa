//! Integration tests for the fail-closed read path.
//!
//! Verifies that records sealed under one key, or corrupted in storage,
//! surface as the single generic "unable to read" error and never as
//! partial plaintext.

use std::sync::Arc;

use spesen_core::types::{BankingDetails, UserId};
use spesen_crypto::{encrypt_details, SecretCodec, SecretKey};
use spesen_vault::{BankingService, BankingStore, MemoryStore, VaultError};

fn details() -> BankingDetails {
    BankingDetails {
        iban: "DE89370400440532013000".into(),
        account_holder: "Erika Mustermann".into(),
    }
}

#[tokio::test]
async fn record_sealed_under_old_key_reads_as_generic_error() {
    let owner = UserId(1);

    // Seal under key A, directly into the store
    let old_codec = SecretCodec::new(SecretKey::from_bytes([0xAAu8; 32]));
    let sealed = encrypt_details(&old_codec, &details()).unwrap();

    let store = MemoryStore::new();
    store.save(owner, sealed).await.unwrap();

    // Service comes up with key B
    let codec = Arc::new(SecretCodec::new(SecretKey::from_bytes([0xBBu8; 32])));
    let service = BankingService::new(store, codec);

    let err = service.read_details(owner, owner).await.unwrap_err();
    assert!(matches!(err, VaultError::Unreadable));
    assert_eq!(err.to_string(), "unable to read banking details");
}

#[tokio::test]
async fn corrupted_stored_field_reads_as_generic_error() {
    let owner = UserId(2);
    let codec = Arc::new(SecretCodec::new(SecretKey::from_bytes([0xAAu8; 32])));

    let mut sealed = encrypt_details(&codec, &details()).unwrap();
    // One valid field, one truncated in storage
    sealed.iban.truncate(10);

    let store = MemoryStore::new();
    store.save(owner, sealed).await.unwrap();

    let service = BankingService::new(store, codec);
    let err = service.read_details(owner, owner).await.unwrap_err();

    // Malformed data collapses to the same message as a wrong key
    assert!(matches!(err, VaultError::Unreadable));
    assert_eq!(err.to_string(), "unable to read banking details");
}

#[tokio::test]
async fn healthy_record_still_roundtrips() {
    let owner = UserId(3);
    let codec = Arc::new(SecretCodec::new(SecretKey::from_bytes([0xAAu8; 32])));
    let service = BankingService::new(MemoryStore::new(), codec);

    service.save_details(owner, owner, &details()).await.unwrap();
    let read = service.read_details(owner, owner).await.unwrap();

    assert_eq!(read, Some(details()));
}
