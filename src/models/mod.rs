//! Core data models for pocketbook

pub mod app_data;
pub mod category;
pub mod ids;
pub mod transaction;
pub mod wallet;

pub use app_data::{AppData, SCHEMA_VERSION};
pub use category::{Category, CategoryKind};
pub use ids::{CategoryId, TransactionId, WalletId};
pub use transaction::Transaction;
pub use wallet::Wallet;
