//! Core ledger primitives for microledger.
//!
//! This crate provides the fundamental types used throughout the ledger:
//! - Content hashing over canonical serialization
//! - Account identifiers
//! - Balance-transfer transactions and their admissibility rules
//! - Ledger state (account balances)
//! - Blocks and block construction

pub mod account;
pub mod block;
pub mod hash;
pub mod state;
pub mod transaction;
pub mod validate;

// Re-export commonly used types at the crate root
pub use account::AccountId;
pub use block::{Block, BlockContents};
pub use hash::{content_hash, Hash, H256};
pub use state::Ledger;
pub use transaction::Transaction;
pub use validate::{TransactionValidator, ValidationError};
