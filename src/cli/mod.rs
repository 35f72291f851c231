//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the core model, import, and report layers.
//! Handlers load the blob through the persistence gateway, work on the
//! in-memory AppData value, and save the whole blob back.

pub mod category;
pub mod data;
pub mod report;
pub mod transaction;
pub mod wallet;

pub use category::{handle_category_command, CategoryCommands};
pub use data::{handle_export_command, handle_import_command};
pub use report::{handle_report_command, ReportArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use wallet::{handle_wallet_command, WalletCommands};

use crate::error::PocketbookResult;
use crate::models::AppData;
use crate::storage::DataStore;

/// Load the blob, bootstrapping the default wallet on first run
pub fn load_bootstrapped(store: &dyn DataStore) -> PocketbookResult<AppData> {
    let mut data = store.load()?;
    if data.ensure_default_wallet() {
        store.save(&data)?;
    }
    Ok(data)
}
