//! Chain construction: draining buffered transactions into sealed blocks.

use crate::buffer::{DrainOrder, TxnBuffer};
use microledger_core::{Block, Ledger, Transaction, TransactionValidator, ValidationError};
use tracing::debug;

/// Configuration for chain building.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Maximum transactions per sealed block.
    pub max_block_size: usize,
    /// Order in which buffered transactions are consumed.
    pub drain_order: DrainOrder,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_block_size: 10,
            drain_order: DrainOrder::Fifo,
        }
    }
}

/// A transaction dropped during a drain pass, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedTxn {
    /// The dropped transaction.
    pub txn: Transaction,
    /// Why the validator refused it.
    pub reason: ValidationError,
}

/// Outcome of one [`ChainBuilder::drain`] pass.
#[derive(Debug, Clone, Default)]
pub struct DrainSummary {
    /// Number of blocks sealed.
    pub blocks_sealed: usize,
    /// Number of transactions accepted into those blocks.
    pub accepted: usize,
    /// Transactions dropped, in the order they were considered.
    pub rejected: Vec<RejectedTxn>,
}

/// Builds a chain by draining candidate transactions into sealed blocks.
///
/// The builder owns the growing chain and the running ledger state. Every
/// accepted transaction advances the state immediately, so later transactions
/// in the same batch can spend balances created by earlier ones. Invalid
/// transactions are dropped and reported, never fatal.
pub struct ChainBuilder {
    /// Configuration.
    config: ChainConfig,
    /// Candidate transactions not yet drained.
    buffer: TxnBuffer,
    /// The chain, genesis first.
    chain: Vec<Block>,
    /// Balances after all sealed blocks.
    ledger: Ledger,
}

impl ChainBuilder {
    /// Create a builder seeded with a genesis block for `initial` balances.
    pub fn new(initial: Ledger) -> Self {
        Self::with_config(initial, ChainConfig::default())
    }

    /// Create a builder with the given configuration.
    pub fn with_config(initial: Ledger, config: ChainConfig) -> Self {
        let genesis = Block::genesis(&initial);
        Self {
            config,
            buffer: TxnBuffer::new(),
            chain: vec![genesis],
            ledger: initial,
        }
    }

    /// Queue a candidate transaction for a future block.
    pub fn submit(&mut self, txn: Transaction) {
        self.buffer.push(txn);
    }

    /// Queue a batch of candidate transactions.
    pub fn submit_all(&mut self, txns: impl IntoIterator<Item = Transaction>) {
        self.buffer.extend(txns);
    }

    /// Drain the whole buffer into sealed blocks.
    ///
    /// Rejections are logged at debug level; use
    /// [`drain_with`](Self::drain_with) to observe them directly.
    pub fn drain(&mut self) -> DrainSummary {
        self.drain_with(|txn, reason| {
            debug!(%txn, %reason, "ignored transaction");
        })
    }

    /// Drain the buffer, invoking `on_reject` once per dropped transaction.
    ///
    /// Each pass through the buffer fills a batch of up to
    /// `max_block_size` valid transactions and seals it, repeating until the
    /// buffer is empty. A batch left empty because every drained candidate
    /// was invalid still seals a block with `txn_count` 0; block numbering
    /// reflects every sealed block.
    pub fn drain_with<F>(&mut self, mut on_reject: F) -> DrainSummary
    where
        F: FnMut(&Transaction, &ValidationError),
    {
        let mut summary = DrainSummary::default();

        while !self.buffer.is_empty() {
            let mut batch = Vec::new();

            while batch.len() < self.config.max_block_size {
                let txn = match self.buffer.pop(self.config.drain_order) {
                    Some(txn) => txn,
                    None => break,
                };

                match TransactionValidator::validate(&txn, &self.ledger) {
                    Ok(()) => {
                        self.ledger = self.ledger.apply(&txn);
                        batch.push(txn);
                        summary.accepted += 1;
                    }
                    Err(reason) => {
                        on_reject(&txn, &reason);
                        summary.rejected.push(RejectedTxn { txn, reason });
                    }
                }
            }

            let parent = self.chain.last().expect("chain always holds the genesis block");
            let block = Block::new(parent, batch);
            debug!(
                block_number = block.block_number(),
                txn_count = block.txn_count(),
                "sealed block"
            );
            self.chain.push(block);
            summary.blocks_sealed += 1;
        }

        summary
    }

    /// The blocks sealed so far, genesis first.
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Balances after all sealed blocks.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Number of candidate transactions still buffered.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Consume the builder, returning the chain.
    pub fn into_chain(self) -> Vec<Block> {
        self.chain
    }
}
