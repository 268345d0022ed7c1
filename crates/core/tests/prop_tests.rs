use proptest::prelude::*;

use microledger_core::{
    content_hash, Block, Hash, Ledger, Transaction, TransactionValidator, ValidationError,
};

fn account_name() -> impl Strategy<Value = String> {
    "[a-z]{3,8}"
}

fn balances() -> impl Strategy<Value = Ledger> {
    prop::collection::btree_map("[a-z]{3,8}", 0i64..10_000, 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    /// Hash hex roundtrip: to_hex -> from_hex reproduces the hash.
    #[test]
    fn hash_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = Hash::from_bytes(bytes);
        prop_assert_eq!(Hash::from_hex(&hash.to_hex()).unwrap(), hash);
    }

    /// Content hashing is insensitive to key insertion order.
    #[test]
    fn content_hash_key_order_independent(
        entries in prop::collection::btree_map("[a-z]{3,8}", -1000i64..1000, 1..8),
    ) {
        let forward: Transaction = entries.clone().into_iter().collect();
        let reverse: Transaction = entries.into_iter().rev().collect();
        prop_assert_eq!(content_hash(&forward), content_hash(&reverse));
    }

    /// Two-party transfers always conserve value.
    #[test]
    fn transfers_are_balanced(
        from in account_name(),
        to in account_name(),
        amount in 1i64..1000,
    ) {
        let txn = Transaction::transfer(from, to, amount);
        prop_assert_eq!(txn.delta_sum(), 0);
    }

    /// Applying a balanced transaction preserves total supply.
    #[test]
    fn balanced_apply_preserves_supply(
        ledger in balances(),
        credits in prop::collection::btree_map("[a-z]{3,8}", 1i64..100, 1..6),
    ) {
        // Lowercase generated names cannot collide with the uppercase hub.
        let hub_debit: i64 = credits.values().sum();
        let txn: Transaction = credits
            .into_iter()
            .chain([("HUB".to_string(), -hub_debit)])
            .collect();
        prop_assert_eq!(txn.delta_sum(), 0);

        let total = |state: &Ledger| state.accounts().map(|(_, balance)| balance).sum::<i64>();
        let before = total(&ledger);
        let after = total(&ledger.apply(&txn));
        prop_assert_eq!(before, after);
    }

    /// Transactions the validator accepts never drive a balance negative.
    #[test]
    fn accepted_txns_never_overdraw(
        ledger in balances(),
        from in account_name(),
        to in account_name(),
        amount in 1i64..1000,
    ) {
        let txn = Transaction::transfer(from, to, amount);
        if TransactionValidator::validate(&txn, &ledger).is_ok() {
            let after = ledger.apply(&txn);
            for (_, balance) in after.accounts() {
                prop_assert!(balance >= 0);
            }
        }
    }

    /// The validator rejects any transaction whose deltas do not sum to zero.
    #[test]
    fn unbalanced_always_rejected(
        credits in prop::collection::btree_map("[a-z]{3,8}", 1i64..100, 1..6),
        skew in 1i64..100,
    ) {
        let hub_debit: i64 = credits.values().sum();
        let txn: Transaction = credits
            .into_iter()
            .chain([("HUB".to_string(), -hub_debit), ("SKEW".to_string(), skew)])
            .collect();
        prop_assert_eq!(
            TransactionValidator::validate(&txn, &Ledger::new()),
            Err(ValidationError::Unbalanced { sum: skew as i128 })
        );
    }

    /// Rebuilding balances from the genesis transaction is lossless.
    #[test]
    fn genesis_transaction_roundtrip(ledger in balances()) {
        let rebuilt = Ledger::new().apply(&ledger.genesis_transaction());
        prop_assert_eq!(rebuilt, ledger);
    }

    /// Sealed blocks always verify their own hash and link to their parent.
    #[test]
    fn sealed_blocks_verify(
        ledger in balances(),
        from in account_name(),
        to in account_name(),
        amount in 1i64..100,
    ) {
        let genesis = Block::genesis(&ledger);
        prop_assert!(genesis.verify_hash());

        let block = Block::new(&genesis, vec![Transaction::transfer(from, to, amount)]);
        prop_assert!(block.verify_hash());
        prop_assert_eq!(block.parent_hash(), Some(genesis.hash));
        prop_assert_eq!(block.block_number(), 1);
    }

    /// Block wire roundtrip: the flat JSON form decodes back to the same block.
    #[test]
    fn block_json_roundtrip(ledger in balances(), amount in 1i64..100) {
        let genesis = Block::genesis(&ledger);
        let block = Block::new(&genesis, vec![Transaction::transfer("alice", "bob", amount)]);
        let encoded = serde_json::to_string(&block).unwrap();
        let decoded: Block = serde_json::from_str(&encoded).unwrap();
        prop_assert!(decoded.verify_hash());
        prop_assert_eq!(decoded, block);
    }
}
