//! spesen-vault: the banking-details service boundary
//!
//! Owns the two contracts around the codec:
//! - decrypt-on-demand, owner-only visibility: the requesting identity must
//!   own the record before any store or codec call happens
//! - fail closed on the read path: every codec failure collapses to one
//!   generic user-facing error, with the specific kind logged internally
//!
//! Persistence itself stays external; [`store::BankingStore`] is the
//! interface it implements, and [`store::MemoryStore`] backs tests and local
//! development.

pub mod error;
pub mod service;
pub mod store;

pub use error::VaultError;
pub use service::BankingService;
pub use store::{BankingStore, MemoryStore};
