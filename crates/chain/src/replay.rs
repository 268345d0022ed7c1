//! Chain replay verification.
//!
//! Recomputes ledger state from the genesis block forward, trusting nothing
//! but the transactions themselves. Any hash, numbering, or linkage
//! inconsistency fails the whole chain; there is no partial recovery, since a
//! single broken link invalidates all state derived after it.

use microledger_core::{Block, Ledger, Transaction, TransactionValidator, ValidationError};
use thiserror::Error;

/// Errors found while verifying a chain.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("chain is empty")]
    EmptyChain,

    #[error("hash does not match contents of block {block_number}")]
    HashMismatch { block_number: u64 },

    #[error("invalid transaction in block {block_number}: {reason}")]
    InvalidTransaction {
        block_number: u64,
        txn: Transaction,
        reason: ValidationError,
    },

    #[error("block {block_number} does not follow block {parent_number}")]
    BlockNumberMismatch { block_number: u64, parent_number: u64 },

    #[error("parent hash not accurate at block {block_number}")]
    ParentHashMismatch { block_number: u64 },

    #[error("malformed chain input: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// Replays chains from genesis, verifying every block.
pub struct ChainValidator;

impl ChainValidator {
    /// Verify a chain from genesis and return the final ledger state.
    ///
    /// The genesis block's synthetic transaction sets the initial balances
    /// and is exempt from the admissibility rules. Every subsequent block is
    /// checked in order: transactions against the running state, then the
    /// stored hash, then numbering, then parent linkage. Fails fast on the
    /// first inconsistency.
    pub fn verify(chain: &[Block]) -> Result<Ledger, ChainError> {
        let genesis = chain.first().ok_or(ChainError::EmptyChain)?;

        let mut ledger = Ledger::new().apply_all(genesis.txns());
        if !genesis.verify_hash() {
            return Err(ChainError::HashMismatch { block_number: genesis.block_number() });
        }

        let mut parent = genesis;
        for block in &chain[1..] {
            ledger = Self::check_block(block, parent, ledger)?;
            parent = block;
        }

        Ok(ledger)
    }

    /// Decode a JSON-encoded chain, then verify it.
    pub fn verify_json(input: &str) -> Result<Ledger, ChainError> {
        let chain = crate::encoding::decode_chain(input)?;
        Self::verify(&chain)
    }

    /// Check one block against its parent and the running state, returning
    /// the advanced state.
    fn check_block(
        block: &Block,
        parent: &Block,
        mut ledger: Ledger,
    ) -> Result<Ledger, ChainError> {
        for txn in block.txns() {
            TransactionValidator::validate(txn, &ledger).map_err(|reason| {
                ChainError::InvalidTransaction {
                    block_number: block.block_number(),
                    txn: txn.clone(),
                    reason,
                }
            })?;
            ledger = ledger.apply(txn);
        }

        if !block.verify_hash() {
            return Err(ChainError::HashMismatch { block_number: block.block_number() });
        }

        // Wire input may number blocks arbitrarily; a parent at u64::MAX
        // has no valid successor.
        if parent.block_number().checked_add(1) != Some(block.block_number()) {
            return Err(ChainError::BlockNumberMismatch {
                block_number: block.block_number(),
                parent_number: parent.block_number(),
            });
        }

        if block.parent_hash() != Some(parent.hash) {
            return Err(ChainError::ParentHashMismatch { block_number: block.block_number() });
        }

        Ok(ledger)
    }
}
