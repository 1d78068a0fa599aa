//! Field-level helpers for the banking-details record
//!
//! Each field is sealed with its own fresh nonce; nonces are never shared
//! across fields or records. Decryption is atomic: the first failing field
//! aborts the whole operation, so callers never see a half-decrypted record.

use spesen_core::types::{BankingDetails, EncryptedBankingDetails};

use crate::codec::SecretCodec;
use crate::error::CryptoError;

/// Seal every sensitive field of a banking-details record.
pub fn encrypt_details(
    codec: &SecretCodec,
    details: &BankingDetails,
) -> Result<EncryptedBankingDetails, CryptoError> {
    Ok(EncryptedBankingDetails {
        iban: codec.encrypt(&details.iban)?,
        account_holder: codec.encrypt(&details.account_holder)?,
    })
}

/// Open every sensitive field of a stored record.
///
/// Fails closed on the first field that does not decrypt.
pub fn decrypt_details(
    codec: &SecretCodec,
    stored: &EncryptedBankingDetails,
) -> Result<BankingDetails, CryptoError> {
    Ok(BankingDetails {
        iban: codec.decrypt(&stored.iban)?,
        account_holder: codec.decrypt(&stored.account_holder)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::SecretKey;
    use crate::KEY_SIZE;

    fn test_codec() -> SecretCodec {
        SecretCodec::new(SecretKey::from_bytes([42u8; KEY_SIZE]))
    }

    fn test_details() -> BankingDetails {
        BankingDetails {
            iban: "DE89370400440532013000".into(),
            account_holder: "Erika Mustermann".into(),
        }
    }

    #[test]
    fn test_record_roundtrip() {
        let codec = test_codec();
        let stored = encrypt_details(&codec, &test_details()).unwrap();
        let recovered = decrypt_details(&codec, &stored).unwrap();
        assert_eq!(recovered, test_details());
    }

    #[test]
    fn test_fields_get_independent_envelopes() {
        let codec = test_codec();
        let same_value = BankingDetails {
            iban: "identical".into(),
            account_holder: "identical".into(),
        };

        let stored = encrypt_details(&codec, &same_value).unwrap();
        assert_ne!(
            stored.iban, stored.account_holder,
            "per-field nonces must make identical plaintexts encrypt differently"
        );
    }

    #[test]
    fn test_stored_fields_are_not_plaintext() {
        let codec = test_codec();
        let stored = encrypt_details(&codec, &test_details()).unwrap();

        assert!(!stored.iban.contains("DE89"));
        assert!(!stored.account_holder.contains("Mustermann"));
    }

    #[test]
    fn test_one_corrupted_field_fails_whole_record() {
        let codec = test_codec();
        let mut stored = encrypt_details(&codec, &test_details()).unwrap();

        // iban stays valid, account_holder gets truncated
        stored.account_holder.truncate(8);

        let result = decrypt_details(&codec, &stored);
        assert!(result.is_err(), "partial decryption must not be returned");
    }

    #[test]
    fn test_wrong_key_fails_whole_record() {
        let codec_a = SecretCodec::new(SecretKey::from_bytes([1u8; KEY_SIZE]));
        let codec_b = SecretCodec::new(SecretKey::from_bytes([2u8; KEY_SIZE]));

        let stored = encrypt_details(&codec_a, &test_details()).unwrap();
        let err = decrypt_details(&codec_b, &stored).unwrap_err();
        assert!(matches!(err, CryptoError::Authentication));
    }
}
