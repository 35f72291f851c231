//! Merge reconciliation for imported data
//!
//! Integrates a mapped import fragment into existing application data
//! without duplicating wallets/categories and without ever appending a
//! transaction that points at a nonexistent wallet or category. Matching is
//! by case-insensitive name (and kind, for categories); imported ids are
//! never trusted and are always replaced by fresh ones when entities or
//! transactions are appended. The merge is pure: callers persist the result.

use std::collections::HashMap;

use crate::models::{AppData, CategoryId, CategoryKind, TransactionId, WalletId};

/// Post-dedup counts describing what a merge actually changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Wallets appended (imported wallets matched by name are not counted)
    pub wallets_added: usize,
    /// Categories appended
    pub categories_added: usize,
    /// Transactions appended
    pub transactions_added: usize,
    /// Transactions dropped because a wallet/category mapping was missing
    pub transactions_dropped: usize,
}

/// Merge an imported AppData fragment into the current data.
///
/// Returns the combined AppData and the counts of entities actually added.
pub fn merge_imported_data(current: &AppData, imported: AppData) -> (AppData, MergeStats) {
    let mut merged = current.clone();
    let mut stats = MergeStats::default();

    // Normalized-name indexes over the existing entities, built once
    let existing_wallets_by_name: HashMap<String, WalletId> = current
        .wallets
        .iter()
        .map(|w| (w.name.to_lowercase(), w.id.clone()))
        .collect();
    let existing_categories_by_name: HashMap<String, (CategoryId, CategoryKind)> = current
        .categories
        .iter()
        .map(|c| (c.name.to_lowercase(), (c.id.clone(), c.kind)))
        .collect();

    // Wallets: match by name or append under a fresh id
    let mut wallet_id_mapping: HashMap<WalletId, WalletId> = HashMap::new();
    for mut wallet in imported.wallets {
        let old_id = wallet.id.clone();
        if let Some(existing_id) = existing_wallets_by_name.get(&wallet.name.to_lowercase()) {
            wallet_id_mapping.insert(old_id, existing_id.clone());
        } else {
            wallet.id = WalletId::new();
            wallet_id_mapping.insert(old_id, wallet.id.clone());
            merged.wallets.push(wallet);
            stats.wallets_added += 1;
        }
    }

    // Categories: match requires both name and kind; a same-named category
    // of a different kind is distinct
    let mut category_id_mapping: HashMap<CategoryId, CategoryId> = HashMap::new();
    for mut category in imported.categories {
        let old_id = category.id.clone();
        let matched = existing_categories_by_name
            .get(&category.name.to_lowercase())
            .filter(|(_, kind)| *kind == category.kind);

        if let Some((existing_id, _)) = matched {
            category_id_mapping.insert(old_id, existing_id.clone());
        } else {
            category.id = CategoryId::new();
            category_id_mapping.insert(old_id, category.id.clone());
            merged.categories.push(category);
            stats.categories_added += 1;
        }
    }

    // Transactions: both references must resolve or the record is dropped
    for mut transaction in imported.transactions {
        let new_wallet_id = wallet_id_mapping.get(&transaction.wallet_id);
        let new_category_id = category_id_mapping.get(&transaction.category_id);

        match (new_wallet_id, new_category_id) {
            (Some(wallet_id), Some(category_id)) => {
                transaction.id = TransactionId::new();
                transaction.wallet_id = wallet_id.clone();
                transaction.category_id = category_id.clone();
                merged.transactions.push(transaction);
                stats.transactions_added += 1;
            }
            _ => {
                stats.transactions_dropped += 1;
            }
        }
    }

    (merged, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Transaction, Wallet};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn imported_fragment() -> AppData {
        let wallet = Wallet {
            id: WalletId::from("w1"),
            name: "Main".to_string(),
            currency: "USD".to_string(),
            decimals: 2,
        };
        let category = Category {
            id: CategoryId::from("c1"),
            name: "Food".to_string(),
            kind: CategoryKind::Expense,
            color: None,
        };
        let transaction = Transaction {
            id: TransactionId::from("t1"),
            date: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            description: "lunch".to_string(),
            amount: Decimal::new(1250, 2),
            kind: CategoryKind::Expense,
            category_id: CategoryId::from("c1"),
            wallet_id: WalletId::from("w1"),
        };

        AppData {
            categories: vec![category],
            wallets: vec![wallet],
            transactions: vec![transaction],
            ..AppData::empty()
        }
    }

    #[test]
    fn test_merge_into_empty() {
        let current = AppData::empty();
        let (merged, stats) = merge_imported_data(&current, imported_fragment());

        assert_eq!(stats.wallets_added, 1);
        assert_eq!(stats.categories_added, 1);
        assert_eq!(stats.transactions_added, 1);
        assert_eq!(stats.transactions_dropped, 0);

        // References are rewritten to the freshly generated ids
        let txn = &merged.transactions[0];
        assert_eq!(txn.wallet_id, merged.wallets[0].id);
        assert_eq!(txn.category_id, merged.categories[0].id);
        assert_ne!(txn.id, TransactionId::from("t1"));
    }

    #[test]
    fn test_wallet_name_match_is_case_insensitive() {
        let mut current = AppData::empty();
        current
            .add_wallet(Wallet::new("main", "USD", 2))
            .unwrap();
        let existing_id = current.wallets[0].id.clone();

        let (merged, stats) = merge_imported_data(&current, imported_fragment());

        assert_eq!(merged.wallets.len(), 1);
        assert_eq!(stats.wallets_added, 0);
        assert_eq!(merged.transactions[0].wallet_id, existing_id);
    }

    #[test]
    fn test_category_match_requires_same_kind() {
        let mut current = AppData::empty();
        current
            .add_category(Category::new("Food", CategoryKind::Income))
            .unwrap();

        let (merged, stats) = merge_imported_data(&current, imported_fragment());

        // Same name but different kind: imported category is appended as new
        assert_eq!(merged.categories.len(), 2);
        assert_eq!(stats.categories_added, 1);
    }

    #[test]
    fn test_category_match_same_name_and_kind() {
        let mut current = AppData::empty();
        current
            .add_category(Category::new("food", CategoryKind::Expense))
            .unwrap();
        let existing_id = current.categories[0].id.clone();

        let (merged, stats) = merge_imported_data(&current, imported_fragment());

        assert_eq!(merged.categories.len(), 1);
        assert_eq!(stats.categories_added, 0);
        assert_eq!(merged.transactions[0].category_id, existing_id);
    }

    #[test]
    fn test_dangling_transaction_dropped() {
        let mut fragment = imported_fragment();
        fragment.transactions[0].wallet_id = WalletId::from("no-such-wallet");

        let (merged, stats) = merge_imported_data(&AppData::empty(), fragment);

        assert!(merged.transactions.is_empty());
        assert_eq!(stats.transactions_added, 0);
        assert_eq!(stats.transactions_dropped, 1);
    }

    #[test]
    fn test_existing_data_untouched() {
        let mut current = AppData::empty();
        current.ensure_default_wallet();
        current
            .add_category(Category::new("Rent", CategoryKind::Expense))
            .unwrap();

        let (merged, _) = merge_imported_data(&current, imported_fragment());

        // Existing entities keep their ids and positions
        assert_eq!(merged.wallets[0], current.wallets[0]);
        assert_eq!(merged.categories[0], current.categories[0]);
    }

    #[test]
    fn test_roundtrip_counts_match() {
        // Export then re-import against empty data: counts match exactly
        let (original, _) = merge_imported_data(&AppData::empty(), imported_fragment());

        let exported = serde_json::to_value(&original).unwrap();
        let reimported: AppData = serde_json::from_value(exported).unwrap();
        let (merged, stats) = merge_imported_data(&AppData::empty(), reimported);

        assert_eq!(merged.wallets.len(), original.wallets.len());
        assert_eq!(merged.categories.len(), original.categories.len());
        assert_eq!(merged.transactions.len(), original.transactions.len());
        assert_eq!(stats.transactions_dropped, 0);
    }
}
