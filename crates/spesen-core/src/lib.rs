//! spesen-core: shared types and config schema for the Spesen-Tool
//! banking-details subsystem

pub mod config;
pub mod types;

pub use config::SpesenConfig;
pub use types::{BankingDetails, EncryptedBankingDetails, UserId};
