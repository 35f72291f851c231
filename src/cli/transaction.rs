//! Transaction management commands

use chrono::{NaiveDate, TimeZone, Utc};
use clap::Subcommand;
use rust_decimal::Decimal;

use crate::cli::load_bootstrapped;
use crate::display::format_transaction_register;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Transaction, TransactionId};
use crate::storage::DataStore;

#[derive(Debug, Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount in major units (e.g. 12.50)
        amount: String,
        /// Category name
        category: String,
        /// Wallet name (defaults to the first wallet)
        #[arg(short, long)]
        wallet: Option<String>,
        /// Transaction date (YYYY-MM-DD, defaults to now)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Delete a transaction by id
    Delete {
        /// Transaction id
        id: String,
    },
}

pub fn handle_transaction_command(
    store: &dyn DataStore,
    cmd: TransactionCommands,
) -> PocketbookResult<()> {
    let mut data = load_bootstrapped(store)?;

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            wallet,
            date,
            description,
        } => {
            let amount: Decimal = amount.parse().map_err(|_| {
                PocketbookError::Validation(format!("Invalid amount: '{}'", amount))
            })?;

            let category = data
                .find_category_by_name(&category)
                .ok_or_else(|| PocketbookError::category_not_found(&category))?;
            let (category_id, kind) = (category.id.clone(), category.kind);

            let wallet_id = match wallet {
                Some(name) => data
                    .find_wallet_by_name(&name)
                    .map(|w| w.id.clone())
                    .ok_or_else(|| PocketbookError::wallet_not_found(&name))?,
                None => data
                    .wallets
                    .first()
                    .map(|w| w.id.clone())
                    .ok_or_else(|| PocketbookError::wallet_not_found("default"))?,
            };

            let when = match date {
                Some(s) => {
                    let parsed = NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
                        PocketbookError::Validation(format!(
                            "Invalid date '{}' (expected YYYY-MM-DD)",
                            s
                        ))
                    })?;
                    Utc.from_utc_datetime(&parsed.and_hms_opt(12, 0, 0).ok_or_else(|| {
                        PocketbookError::Validation(format!("Invalid date '{}'", s))
                    })?)
                }
                None => Utc::now(),
            };

            let txn = Transaction::new(when, amount, kind, category_id, wallet_id)
                .with_description(description);
            let id = txn.id.clone();
            data.add_transaction(txn)?;
            store.save(&data)?;
            println!("Added transaction: {}", id);
        }
        TransactionCommands::List { limit } => {
            let mut sorted: Vec<&Transaction> = data.transactions.iter().collect();
            sorted.sort_by(|a, b| b.date.cmp(&a.date));
            sorted.truncate(limit);
            print!("{}", format_transaction_register(&sorted, &data));
        }
        TransactionCommands::Delete { id } => {
            data.remove_transaction(&TransactionId::from(id.as_str()))?;
            store.save(&data)?;
            println!("Deleted transaction: {}", id);
        }
    }

    Ok(())
}
