//! Import and export commands

use std::path::Path;

use serde_json::Value;

use crate::cli::load_bootstrapped;
use crate::error::{PocketbookError, PocketbookResult};
use crate::export::export_to_path;
use crate::import::import_into;
use crate::storage::DataStore;

/// Import a Money Tracker or native JSON export and merge it into the
/// current data. The blob is only saved after the whole document was
/// recognized and merged; an unreadable or unrecognized file leaves the
/// stored state untouched.
pub fn handle_import_command(store: &dyn DataStore, file: &Path) -> PocketbookResult<()> {
    let contents = std::fs::read_to_string(file).map_err(|e| {
        PocketbookError::Import(format!("Failed to read {}: {}", file.display(), e))
    })?;
    let json: Value = serde_json::from_str(&contents).map_err(|e| {
        PocketbookError::Import(format!("Failed to parse {}: {}", file.display(), e))
    })?;

    let data = load_bootstrapped(store)?;
    let (merged, stats) = import_into(&data, &json)?;
    store.save(&merged)?;

    println!(
        "Imported {} transactions, {} categories, {} wallets.",
        stats.transactions_added, stats.categories_added, stats.wallets_added
    );
    if stats.transactions_dropped > 0 {
        println!(
            "Skipped {} transactions with unresolved references.",
            stats.transactions_dropped
        );
    }

    Ok(())
}

/// Export the current data as a native JSON document
pub fn handle_export_command(store: &dyn DataStore, file: &Path) -> PocketbookResult<()> {
    let data = load_bootstrapped(store)?;
    export_to_path(&data, file)?;
    println!("Exported to {}", file.display());
    Ok(())
}
