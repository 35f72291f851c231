//! pocketbook - personal income/expense tracker
//!
//! This library provides the core functionality for the pocketbook CLI:
//! recording income/expense transactions against user-defined categories
//! and wallets, aggregating them by date range and category, and importing
//! the third-party Money Tracker JSON export format.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (wallets, categories, transactions, AppData)
//! - `storage`: Single-blob JSON persistence gateway
//! - `import`: Money Tracker mapping and merge reconciliation
//! - `reports`: Date-range aggregation (totals and expense distribution)
//! - `export`: Native JSON export
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! The transformation and aggregation functions are pure: they accept and
//! return `AppData` values and never touch storage directly. Persistence
//! goes through the `storage::DataStore` trait, so tests run against an
//! in-memory store.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{PocketbookError, PocketbookResult};
