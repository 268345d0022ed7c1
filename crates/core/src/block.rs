//! Block structure: a hashed batch of transactions linked to its parent.

use crate::hash::{content_hash, Hash};
use crate::state::Ledger;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// The hashed portion of a block.
///
/// This is exactly what the block hash commits to. Serialized with camelCase
/// keys so the canonical form matches the wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockContents {
    /// Position in the chain (0 for genesis).
    pub block_number: u64,
    /// Hash of the parent block's contents. `None` only for genesis.
    pub parent_hash: Option<Hash>,
    /// Number of transactions recorded at sealing time.
    pub txn_count: u64,
    /// The transactions, in application order.
    pub txns: Vec<Transaction>,
}

impl BlockContents {
    /// Calculate the content hash of this block.
    pub fn hash(&self) -> Hash {
        content_hash(self)
    }
}

/// A sealed block: contents plus the hash committing to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// The hashed contents.
    #[serde(flatten)]
    pub contents: BlockContents,
    /// Content hash, fixed at sealing time.
    pub hash: Hash,
}

impl Block {
    /// Seal a new block of `txns` on top of `parent`.
    pub fn new(parent: &Block, txns: Vec<Transaction>) -> Self {
        let contents = BlockContents {
            block_number: parent.contents.block_number + 1,
            parent_hash: Some(parent.hash),
            txn_count: txns.len() as u64,
            txns,
        };
        let hash = contents.hash();
        Self { contents, hash }
    }

    /// Seal the genesis block for an initial ledger.
    ///
    /// The initial balances are recorded as a single synthetic transaction so
    /// that replaying the chain from an empty ledger reproduces them. That
    /// transaction is exempt from the admissibility rules.
    pub fn genesis(initial: &Ledger) -> Self {
        let contents = BlockContents {
            block_number: 0,
            parent_hash: None,
            txn_count: 1,
            txns: vec![initial.genesis_transaction()],
        };
        let hash = contents.hash();
        Self { contents, hash }
    }

    /// Get the block number.
    pub fn block_number(&self) -> u64 {
        self.contents.block_number
    }

    /// Get the parent hash, if any.
    pub fn parent_hash(&self) -> Option<Hash> {
        self.contents.parent_hash
    }

    /// Get the transactions in this block.
    pub fn txns(&self) -> &[Transaction] {
        &self.contents.txns
    }

    /// Get the number of transactions in this block.
    pub fn txn_count(&self) -> usize {
        self.contents.txns.len()
    }

    /// Check if this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.contents.block_number == 0 && self.contents.parent_hash.is_none()
    }

    /// Verify the stored hash matches the contents.
    pub fn verify_hash(&self) -> bool {
        self.hash == self.contents.hash()
    }
}
