//! Terminal display formatting
//!
//! Formats amounts, entity lists, and range summaries for terminal output.

use rust_decimal::Decimal;

use crate::models::{AppData, Category, Transaction, Wallet};
use crate::reports::RangeSummary;

/// Format an amount with its currency code, padded to the wallet's precision
pub fn format_amount(amount: Decimal, currency: &str, decimals: u32) -> String {
    format!("{:.*} {}", decimals as usize, amount, currency)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Format the wallet list
pub fn format_wallets(wallets: &[Wallet]) -> String {
    if wallets.is_empty() {
        return "No wallets found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<24} {:>8} {:>8}\n", "Name", "Currency", "Prec"));
    output.push_str(&"-".repeat(42));
    output.push('\n');

    for wallet in wallets {
        output.push_str(&format!(
            "{:<24} {:>8} {:>8}\n",
            truncate(&wallet.name, 24),
            wallet.currency,
            wallet.decimals
        ));
    }

    output
}

/// Format the category list
pub fn format_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<24} {:>8} {:>10}\n", "Name", "Kind", "Color"));
    output.push_str(&"-".repeat(44));
    output.push('\n');

    for category in categories {
        output.push_str(&format!(
            "{:<24} {:>8} {:>10}\n",
            truncate(&category.name, 24),
            category.kind,
            category.color.as_deref().unwrap_or("-")
        ));
    }

    output
}

/// Format a single transaction row for the register view
pub fn format_transaction_row(txn: &Transaction, data: &AppData) -> String {
    let category_name = data
        .find_category(&txn.category_id)
        .map(|c| c.name.as_str())
        .unwrap_or("(unknown)");
    let currency = data
        .find_wallet(&txn.wallet_id)
        .map(|w| w.currency.as_str())
        .unwrap_or("");

    let description = if txn.description.is_empty() {
        "(no description)".to_string()
    } else {
        txn.description.clone()
    };

    format!(
        "{} {:7} {:<18} {:<20} {:>12}",
        txn.date.format("%Y-%m-%d"),
        txn.kind.to_string(),
        truncate(category_name, 18),
        truncate(&description, 20),
        format!("{} {}", txn.amount, currency)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[&Transaction], data: &AppData) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:7} {:<18} {:<20} {:>12}\n",
        "Date", "Type", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, data));
        output.push('\n');
    }

    output
}

/// Format a range summary: totals plus the expense distribution table
pub fn format_summary(summary: &RangeSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Summary: {} to {}\n",
        summary.start.format("%Y-%m-%d"),
        summary.end.format("%Y-%m-%d")
    ));
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "Income:  {}\n",
        format_amount(summary.totals.income, currency, 2)
    ));
    output.push_str(&format!(
        "Expense: {}\n",
        format_amount(summary.totals.expense, currency, 2)
    ));
    output.push_str(&format!(
        "Net:     {}\n\n",
        format_amount(summary.totals.net, currency, 2)
    ));

    if summary.expense_by_category.is_empty() {
        output.push_str("No expenses in selected range.\n");
        return output;
    }

    output.push_str("Spending by Category\n");
    output.push_str(&format!(
        "{:<24} {:>12} {:>8}\n",
        "Category", "Amount", "%"
    ));
    output.push_str(&"-".repeat(46));
    output.push('\n');

    for slice in &summary.expense_by_category {
        output.push_str(&format!(
            "{:<24} {:>12} {:>7.1}%\n",
            truncate(&slice.label, 24),
            format_amount(slice.amount, currency, 2),
            slice.percentage
        ));
    }

    output
}
