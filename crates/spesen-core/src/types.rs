use serde::{Deserialize, Serialize};

/// Identifier of a Spesen-Tool user account.
///
/// Users belong to an organization; organization membership and roles are
/// handled by the auth layer, not here. The banking-details service only
/// needs identity equality for its owner check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Plaintext banking details of a user, as entered in the profile form.
///
/// Exists only transiently in memory around encrypt/decrypt calls; the
/// persisted shape is [`EncryptedBankingDetails`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankingDetails {
    /// International Bank Account Number, e.g. "DE89370400440532013000"
    pub iban: String,
    /// Name of the account holder as printed on the account
    pub account_holder: String,
}

/// Banking details with every sensitive field sealed into a base64 envelope.
///
/// The persistence layer stores these strings as opaque text columns. It must
/// not interpret, index, or query on their content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedBankingDetails {
    pub iban: String,
    pub account_holder: String,
}
