use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketbook::cli::{
    handle_category_command, handle_export_command, handle_import_command, handle_report_command,
    handle_transaction_command, handle_wallet_command, CategoryCommands, ReportArgs,
    TransactionCommands, WalletCommands,
};
use pocketbook::config::paths::PocketbookPaths;
use pocketbook::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Personal income/expense tracker",
    long_about = "pocketbook records income and expense transactions against \
                  user-defined categories and wallets, summarizes them by date \
                  range and category, and imports Money Tracker JSON exports."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wallet management commands
    #[command(subcommand)]
    Wallet(WalletCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Tx(TransactionCommands),

    /// Import a Money Tracker or native JSON export
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Export all data as a native JSON document
    Export {
        /// Destination path
        file: PathBuf,
    },

    /// Summarize a date range: totals and spending by category
    Report(ReportArgs),

    /// Show the resolved data paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PocketbookPaths::new()?;
    let store = JsonFileStore::new(&paths)?;

    match cli.command {
        Commands::Wallet(cmd) => handle_wallet_command(&store, cmd)?,
        Commands::Category(cmd) => handle_category_command(&store, cmd)?,
        Commands::Tx(cmd) => handle_transaction_command(&store, cmd)?,
        Commands::Import { file } => handle_import_command(&store, &file)?,
        Commands::Export { file } => handle_export_command(&store, &file)?,
        Commands::Report(args) => handle_report_command(&store, args)?,
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.data_file().display());
        }
    }

    Ok(())
}
