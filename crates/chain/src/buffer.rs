//! Buffer of candidate transactions awaiting inclusion in a block.

use microledger_core::Transaction;
use std::collections::VecDeque;

/// Order in which buffered transactions are consumed.
///
/// Consumption order matters: validity depends on the running ledger state,
/// so draining the same buffer from different ends can accept different
/// transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrainOrder {
    /// Oldest submission first (arrival order).
    #[default]
    Fifo,
    /// Newest submission first (stack order).
    Lifo,
}

/// Holds candidate transactions until the builder drains them.
#[derive(Debug, Clone, Default)]
pub struct TxnBuffer {
    txns: VecDeque<Transaction>,
}

impl TxnBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction to the buffer.
    pub fn push(&mut self, txn: Transaction) {
        self.txns.push_back(txn);
    }

    /// Take the next transaction according to `order`.
    pub fn pop(&mut self, order: DrainOrder) -> Option<Transaction> {
        match order {
            DrainOrder::Fifo => self.txns.pop_front(),
            DrainOrder::Lifo => self.txns.pop_back(),
        }
    }

    /// Number of buffered transactions.
    pub fn len(&self) -> usize {
        self.txns.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.txns.is_empty()
    }
}

impl Extend<Transaction> for TxnBuffer {
    fn extend<I: IntoIterator<Item = Transaction>>(&mut self, iter: I) {
        self.txns.extend(iter);
    }
}

impl FromIterator<Transaction> for TxnBuffer {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self { txns: iter.into_iter().collect() }
    }
}
