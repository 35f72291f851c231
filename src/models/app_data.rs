//! AppData aggregate root
//!
//! AppData is the single unit of persistence: the whole application state is
//! one serializable blob. Sequence order of `transactions` is not
//! guaranteed; consumers sort by date explicitly when order matters.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::{CategoryId, TransactionId, WalletId};
use super::transaction::Transaction;
use super::wallet::Wallet;
use crate::error::{PocketbookError, PocketbookResult};

/// Version of the persisted/exported document shape
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// The complete application state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    /// Document schema version (always 1)
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// All categories
    pub categories: Vec<Category>,

    /// All wallets
    pub wallets: Vec<Wallet>,

    /// All transactions (newest-first by convention at entry time)
    pub transactions: Vec<Transaction>,
}

impl Default for AppData {
    fn default() -> Self {
        Self::empty()
    }
}

impl AppData {
    /// Create an empty AppData
    pub fn empty() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            categories: Vec::new(),
            wallets: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// Find a category by id
    pub fn find_category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Find a wallet by id
    pub fn find_wallet(&self, id: &WalletId) -> Option<&Wallet> {
        self.wallets.iter().find(|w| &w.id == id)
    }

    /// Find a category by name (case-insensitive)
    pub fn find_category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Find a wallet by name (case-insensitive)
    pub fn find_wallet_by_name(&self, name: &str) -> Option<&Wallet> {
        self.wallets
            .iter()
            .find(|w| w.name.eq_ignore_ascii_case(name))
    }

    /// Insert the default wallet if no wallets exist yet (first run).
    /// Returns true if a wallet was added.
    pub fn ensure_default_wallet(&mut self) -> bool {
        if self.wallets.is_empty() {
            self.wallets.push(Wallet::default_wallet());
            true
        } else {
            false
        }
    }

    /// Add a validated wallet
    pub fn add_wallet(&mut self, wallet: Wallet) -> PocketbookResult<()> {
        wallet.validate()?;
        self.wallets.push(wallet);
        Ok(())
    }

    /// Add a validated category
    pub fn add_category(&mut self, category: Category) -> PocketbookResult<()> {
        category.validate()?;
        self.categories.push(category);
        Ok(())
    }

    /// Add a transaction after checking its references and that its kind
    /// matches the referenced category's kind
    pub fn add_transaction(&mut self, transaction: Transaction) -> PocketbookResult<()> {
        transaction.validate()?;

        let category = self
            .find_category(&transaction.category_id)
            .ok_or_else(|| PocketbookError::category_not_found(transaction.category_id.as_str()))?;

        if category.kind != transaction.kind {
            return Err(PocketbookError::Validation(format!(
                "Transaction type '{}' does not match category '{}' ({})",
                transaction.kind, category.name, category.kind
            )));
        }

        if self.find_wallet(&transaction.wallet_id).is_none() {
            return Err(PocketbookError::wallet_not_found(
                transaction.wallet_id.as_str(),
            ));
        }

        self.transactions.insert(0, transaction);
        Ok(())
    }

    /// Whether any transaction references the category
    pub fn category_in_use(&self, id: &CategoryId) -> bool {
        self.transactions.iter().any(|t| &t.category_id == id)
    }

    /// Whether any transaction references the wallet
    pub fn wallet_in_use(&self, id: &WalletId) -> bool {
        self.transactions.iter().any(|t| &t.wallet_id == id)
    }

    /// Remove a category; blocked while transactions reference it
    pub fn remove_category(&mut self, id: &CategoryId) -> PocketbookResult<()> {
        let category = self
            .find_category(id)
            .ok_or_else(|| PocketbookError::category_not_found(id.as_str()))?;

        if self.category_in_use(id) {
            return Err(PocketbookError::InUse {
                entity_type: "Category",
                identifier: category.name.clone(),
            });
        }

        self.categories.retain(|c| &c.id != id);
        Ok(())
    }

    /// Remove a wallet; blocked while transactions reference it
    pub fn remove_wallet(&mut self, id: &WalletId) -> PocketbookResult<()> {
        let wallet = self
            .find_wallet(id)
            .ok_or_else(|| PocketbookError::wallet_not_found(id.as_str()))?;

        if self.wallet_in_use(id) {
            return Err(PocketbookError::InUse {
                entity_type: "Wallet",
                identifier: wallet.name.clone(),
            });
        }

        self.wallets.retain(|w| &w.id != id);
        Ok(())
    }

    /// Remove a transaction by id
    pub fn remove_transaction(&mut self, id: &TransactionId) -> PocketbookResult<()> {
        let before = self.transactions.len();
        self.transactions.retain(|t| &t.id != id);

        if self.transactions.len() == before {
            return Err(PocketbookError::transaction_not_found(id.as_str()));
        }

        Ok(())
    }
}
