//! Chain building and verification for microledger.
//!
//! This crate drives the core ledger types end to end:
//! - **Buffer**: candidate transactions queued for inclusion
//! - **Builder**: drains the buffer into validated, sealed blocks
//! - **Replay**: re-derives state from genesis, verifying every block
//! - **Encoding**: the JSON wire form chains travel in
//!
//! # Example
//!
//! ```rust
//! use microledger_chain::{ChainBuilder, ChainValidator};
//! use microledger_core::{AccountId, Ledger, Transaction};
//!
//! // Start from initial balances.
//! let initial: Ledger = [("Alice", 100), ("Bob", 100)].into_iter().collect();
//! let mut builder = ChainBuilder::new(initial);
//!
//! // Queue transfers and seal them into blocks.
//! builder.submit(Transaction::transfer("Alice", "Bob", 30));
//! let summary = builder.drain();
//! assert_eq!(summary.accepted, 1);
//!
//! // Anyone can replay the chain from genesis and get the same balances.
//! let chain = builder.into_chain();
//! let ledger = ChainValidator::verify(&chain).unwrap();
//! assert_eq!(ledger.balance(&AccountId::from("Bob")), 130);
//! ```

pub mod buffer;
pub mod builder;
pub mod encoding;
pub mod replay;

// Re-export commonly used types
pub use buffer::{DrainOrder, TxnBuffer};
pub use builder::{ChainBuilder, ChainConfig, DrainSummary, RejectedTxn};
pub use encoding::{decode_chain, encode_chain, encode_chain_pretty};
pub use replay::{ChainError, ChainValidator};
