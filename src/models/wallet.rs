//! Wallet model
//!
//! A wallet is a pool of money in a single currency. The `decimals` field
//! records the currency's minor-unit precision and drives the conversion of
//! imported minor-unit amounts into major units.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::WalletId;
use crate::error::{PocketbookError, PocketbookResult};

/// A user wallet holding transactions in one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Unique identifier
    pub id: WalletId,

    /// Wallet name
    pub name: String,

    /// ISO-4217-like currency code (e.g. "USD")
    pub currency: String,

    /// Minor-unit precision of the currency (e.g. 2 for cents)
    pub decimals: u32,
}

impl Wallet {
    /// Create a new wallet with a fresh id
    pub fn new(name: impl Into<String>, currency: impl Into<String>, decimals: u32) -> Self {
        Self {
            id: WalletId::new(),
            name: name.into(),
            currency: currency.into(),
            decimals,
        }
    }

    /// The wallet created on first run when no wallets exist yet
    pub fn default_wallet() -> Self {
        Self::new("Main Wallet", "USD", 2)
    }

    /// Validate the wallet
    pub fn validate(&self) -> PocketbookResult<()> {
        if self.name.trim().is_empty() {
            return Err(PocketbookError::Validation(
                "Wallet name cannot be empty".into(),
            ));
        }

        if self.currency.trim().is_empty() {
            return Err(PocketbookError::Validation(
                "Wallet currency cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wallet() {
        let wallet = Wallet::new("Cash", "EUR", 2);
        assert_eq!(wallet.name, "Cash");
        assert_eq!(wallet.currency, "EUR");
        assert_eq!(wallet.decimals, 2);
    }

    #[test]
    fn test_default_wallet() {
        let wallet = Wallet::default_wallet();
        assert_eq!(wallet.name, "Main Wallet");
        assert_eq!(wallet.currency, "USD");
        assert_eq!(wallet.decimals, 2);
    }

    #[test]
    fn test_validation() {
        let mut wallet = Wallet::new("Valid", "USD", 2);
        assert!(wallet.validate().is_ok());

        wallet.name = String::new();
        assert!(wallet.validate().is_err());

        wallet.name = "Valid".to_string();
        wallet.currency = " ".to_string();
        assert!(wallet.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let wallet = Wallet::new("Savings", "JPY", 0);
        let json = serde_json::to_string(&wallet).unwrap();
        let deserialized: Wallet = serde_json::from_str(&json).unwrap();
        assert_eq!(wallet, deserialized);
    }
}
