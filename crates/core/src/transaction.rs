//! Balance-transfer transactions.

use crate::account::AccountId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A transaction: signed balance deltas keyed by account.
///
/// An admissible transfer moves value between accounts without creating or
/// destroying it, so its deltas sum to zero. The one exception is the
/// synthetic genesis transaction, whose deltas seed the initial balances and
/// which is never run through the validator.
///
/// Transactions are ephemeral: each one is either accepted into a block or
/// discarded, exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transaction(BTreeMap<AccountId, i64>);

impl Transaction {
    /// Create a transaction from explicit deltas.
    pub fn from_deltas(deltas: BTreeMap<AccountId, i64>) -> Self {
        Self(deltas)
    }

    /// Create a two-party transfer: `from` pays `amount` to `to`.
    pub fn transfer(from: impl Into<AccountId>, to: impl Into<AccountId>, amount: i64) -> Self {
        let mut deltas = BTreeMap::new();
        *deltas.entry(from.into()).or_insert(0) -= amount;
        *deltas.entry(to.into()).or_insert(0) += amount;
        Self(deltas)
    }

    /// The delta for `account` (0 if the transaction does not touch it).
    pub fn delta(&self, account: &AccountId) -> i64 {
        self.0.get(account).copied().unwrap_or(0)
    }

    /// Iterate over (account, delta) pairs in account order.
    pub fn deltas(&self) -> impl Iterator<Item = (&AccountId, i64)> {
        self.0.iter().map(|(account, delta)| (account, *delta))
    }

    /// Sum of all deltas. Zero for every admissible transfer.
    ///
    /// Accumulated in `i128`, which no combination of `i64` deltas can
    /// overflow, so the sum is exact.
    pub fn delta_sum(&self) -> i128 {
        self.0.values().map(|&delta| delta as i128).sum()
    }

    /// Number of accounts the transaction touches.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the transaction touches no accounts at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<A: Into<AccountId>> FromIterator<(A, i64)> for Transaction {
    fn from_iter<I: IntoIterator<Item = (A, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(account, delta)| (account.into(), delta)).collect())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (account, delta)) in self.deltas().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", account, delta)?;
        }
        write!(f, "}}")
    }
}
