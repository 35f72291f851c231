//! Wallet management commands

use clap::Subcommand;

use crate::cli::load_bootstrapped;
use crate::display::format_wallets;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Wallet;
use crate::storage::DataStore;

#[derive(Debug, Subcommand)]
pub enum WalletCommands {
    /// Add a new wallet
    Add {
        /// Wallet name
        name: String,
        /// Currency code
        #[arg(short, long, default_value = "USD")]
        currency: String,
        /// Minor-unit precision of the currency
        #[arg(short, long, default_value = "2")]
        decimals: u32,
    },
    /// List all wallets
    List,
    /// Delete a wallet (blocked while transactions reference it)
    Delete {
        /// Wallet name
        name: String,
    },
}

pub fn handle_wallet_command(store: &dyn DataStore, cmd: WalletCommands) -> PocketbookResult<()> {
    let mut data = load_bootstrapped(store)?;

    match cmd {
        WalletCommands::Add {
            name,
            currency,
            decimals,
        } => {
            let wallet = Wallet::new(name, currency, decimals);
            let display = wallet.to_string();
            data.add_wallet(wallet)?;
            store.save(&data)?;
            println!("Added wallet: {}", display);
        }
        WalletCommands::List => {
            print!("{}", format_wallets(&data.wallets));
        }
        WalletCommands::Delete { name } => {
            let id = data
                .find_wallet_by_name(&name)
                .map(|w| w.id.clone())
                .ok_or_else(|| PocketbookError::wallet_not_found(&name))?;
            data.remove_wallet(&id)?;
            store.save(&data)?;
            println!("Deleted wallet: {}", name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DataStore, MemoryStore};

    #[test]
    fn test_add_and_delete_wallet() {
        let store = MemoryStore::new();

        handle_wallet_command(
            &store,
            WalletCommands::Add {
                name: "Savings".to_string(),
                currency: "EUR".to_string(),
                decimals: 2,
            },
        )
        .unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.wallets.len(), 2); // default wallet + Savings

        handle_wallet_command(
            &store,
            WalletCommands::Delete {
                name: "Savings".to_string(),
            },
        )
        .unwrap();
        assert_eq!(store.load().unwrap().wallets.len(), 1);
    }

    #[test]
    fn test_delete_unknown_wallet() {
        let store = MemoryStore::new();
        let err = handle_wallet_command(
            &store,
            WalletCommands::Delete {
                name: "Nope".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
