//! Category management commands

use clap::Subcommand;

use crate::cli::load_bootstrapped;
use crate::display::format_categories;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Category, CategoryKind};
use crate::storage::DataStore;

#[derive(Debug, Subcommand)]
pub enum CategoryCommands {
    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// "income" or "expense"
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Display color (hex string like "#FF0000")
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List all categories
    List,
    /// Delete a category (blocked while transactions reference it)
    Delete {
        /// Category name
        name: String,
    },
}

fn parse_kind(s: &str) -> PocketbookResult<CategoryKind> {
    match s.to_lowercase().as_str() {
        "income" => Ok(CategoryKind::Income),
        "expense" => Ok(CategoryKind::Expense),
        other => Err(PocketbookError::Validation(format!(
            "Unknown category kind '{}' (expected income or expense)",
            other
        ))),
    }
}

pub fn handle_category_command(
    store: &dyn DataStore,
    cmd: CategoryCommands,
) -> PocketbookResult<()> {
    let mut data = load_bootstrapped(store)?;

    match cmd {
        CategoryCommands::Add { name, kind, color } => {
            let mut category = Category::new(name, parse_kind(&kind)?);
            if let Some(color) = color {
                category = category.with_color(color);
            }
            let display = category.name.clone();
            data.add_category(category)?;
            store.save(&data)?;
            println!("Added category: {}", display);
        }
        CategoryCommands::List => {
            print!("{}", format_categories(&data.categories));
        }
        CategoryCommands::Delete { name } => {
            let id = data
                .find_category_by_name(&name)
                .map(|c| c.id.clone())
                .ok_or_else(|| PocketbookError::category_not_found(&name))?;
            data.remove_category(&id)?;
            store.save(&data)?;
            println!("Deleted category: {}", name);
        }
    }

    Ok(())
}
