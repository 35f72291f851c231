//! Transaction model
//!
//! A transaction records a single non-negative amount in major currency
//! units. Direction is carried solely by `kind` (serialized as `type`),
//! which must match the kind of the referenced category. Transactions are
//! never mutated in place; corrections are new transactions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::CategoryKind;
use super::ids::{CategoryId, TransactionId, WalletId};
use crate::error::{PocketbookError, PocketbookResult};

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// When the transaction happened (stored as a UTC instant)
    pub date: DateTime<Utc>,

    /// Free-form description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Non-negative amount in major currency units
    pub amount: Decimal,

    /// Income or expense; must equal the referenced category's kind
    #[serde(rename = "type")]
    pub kind: CategoryKind,

    /// The category this transaction belongs to
    pub category_id: CategoryId,

    /// The wallet this transaction belongs to
    pub wallet_id: WalletId,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        date: DateTime<Utc>,
        amount: Decimal,
        kind: CategoryKind,
        category_id: CategoryId,
        wallet_id: WalletId,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            description: String::new(),
            amount,
            kind,
            category_id,
            wallet_id,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the transaction falls within `[start, end]`, inclusive on
    /// both bounds
    pub fn in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.date >= start && self.date <= end
    }

    /// Validate the transaction
    pub fn validate(&self) -> PocketbookResult<()> {
        if self.amount.is_sign_negative() {
            return Err(PocketbookError::Validation(
                "Transaction amount cannot be negative".into(),
            ));
        }

        Ok(())
    }
}
