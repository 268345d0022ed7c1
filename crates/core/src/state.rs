//! Ledger state: the account-balance mapping.

use crate::account::AccountId;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Account balances at a point in chain history.
///
/// Exactly one authoritative copy exists while a chain is being built. The
/// replay validator derives its own copy from scratch and never touches the
/// live one. Balances are never negative after a transaction has been
/// accepted; only the validator's trial arithmetic may go below zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger(BTreeMap<AccountId, i64>);

impl Ledger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance for `account`. Absent accounts read as 0.
    pub fn balance(&self, account: &AccountId) -> i64 {
        self.0.get(account).copied().unwrap_or(0)
    }

    /// Apply a transaction, returning the resulting ledger.
    ///
    /// Every account named by the transaction has its balance incremented by
    /// the corresponding delta; absent accounts are created. The receiver is
    /// left untouched. Admissibility is the validator's job and must be
    /// checked *before* applying.
    pub fn apply(&self, txn: &Transaction) -> Ledger {
        let mut next = self.clone();
        for (account, delta) in txn.deltas() {
            let balance = next.0.entry(account.clone()).or_insert(0);
            *balance = balance.saturating_add(delta);
        }
        next
    }

    /// Apply a sequence of transactions in order.
    pub fn apply_all<'a>(&self, txns: impl IntoIterator<Item = &'a Transaction>) -> Ledger {
        txns.into_iter().fold(self.clone(), |state, txn| state.apply(txn))
    }

    /// Render these balances as a single synthetic transaction that recreates
    /// them from an empty ledger. Used to seed the genesis block.
    pub fn genesis_transaction(&self) -> Transaction {
        self.0.iter().map(|(account, balance)| (account.clone(), *balance)).collect()
    }

    /// Iterate over (account, balance) pairs in account order.
    pub fn accounts(&self) -> impl Iterator<Item = (&AccountId, i64)> {
        self.0.iter().map(|(account, balance)| (account, *balance))
    }

    /// Number of accounts with an explicit entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the ledger has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<A: Into<AccountId>> FromIterator<(A, i64)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (A, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(account, balance)| (account.into(), balance)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funded() -> Ledger {
        [("Alice", 100), ("Bob", 100)].into_iter().collect()
    }

    #[test]
    fn test_balance_defaults_to_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance(&AccountId::new("Alice")), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_apply_is_functional() {
        let before = funded();
        let after = before.apply(&Transaction::transfer("Alice", "Bob", 30));

        // The original is untouched.
        assert_eq!(before.balance(&"Alice".into()), 100);
        assert_eq!(before.balance(&"Bob".into()), 100);

        assert_eq!(after.balance(&"Alice".into()), 70);
        assert_eq!(after.balance(&"Bob".into()), 130);
    }

    #[test]
    fn test_apply_creates_absent_accounts() {
        let after = funded().apply(&Transaction::transfer("Alice", "Carol", 10));
        assert_eq!(after.balance(&"Carol".into()), 10);
        assert_eq!(after.len(), 3);
    }

    #[test]
    fn test_apply_all_in_order() {
        let txns = vec![
            Transaction::transfer("Alice", "Bob", 10),
            Transaction::transfer("Alice", "Bob", 20),
        ];
        let after = funded().apply_all(&txns);
        assert_eq!(after.balance(&"Alice".into()), 70);
        assert_eq!(after.balance(&"Bob".into()), 130);
    }

    #[test]
    fn test_genesis_transaction_recreates_balances() {
        let initial = funded();
        let rebuilt = Ledger::new().apply(&initial.genesis_transaction());
        assert_eq!(rebuilt, initial);
    }
}
