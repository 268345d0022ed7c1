//! Transaction admissibility rules.

use crate::account::AccountId;
use crate::state::Ledger;
use crate::transaction::Transaction;
use thiserror::Error;

/// Reasons a transaction is inadmissible against a given ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("transaction deltas sum to {sum}, expected 0")]
    Unbalanced { sum: i128 },

    #[error("overdraft on account {account}: balance {balance}, delta {delta}")]
    Overdraft { account: AccountId, balance: i64, delta: i64 },
}

/// Validates transactions against ledger state.
pub struct TransactionValidator;

impl TransactionValidator {
    /// Check a transaction against the current ledger.
    ///
    /// Two rules, checked in order:
    /// 1. Conservation: the deltas must sum to exactly zero.
    /// 2. No overdrafts: every account's balance plus its delta must stay
    ///    non-negative. Absent accounts have balance 0, so any negative delta
    ///    on an unknown account is an overdraft.
    pub fn validate(txn: &Transaction, ledger: &Ledger) -> Result<(), ValidationError> {
        let sum = txn.delta_sum();
        if sum != 0 {
            return Err(ValidationError::Unbalanced { sum });
        }

        for (account, delta) in txn.deltas() {
            let balance = ledger.balance(account);
            // Trial arithmetic in i128 cannot wrap for any i64 pair.
            if (balance as i128) + (delta as i128) < 0 {
                return Err(ValidationError::Overdraft {
                    account: account.clone(),
                    balance,
                    delta,
                });
            }
        }

        Ok(())
    }

    /// Boolean form of [`validate`](Self::validate).
    pub fn is_valid(txn: &Transaction, ledger: &Ledger) -> bool {
        Self::validate(txn, ledger).is_ok()
    }
}
