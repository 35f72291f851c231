//! Date-range summary report
//!
//! Filters transactions to a closed date range and computes income/expense
//! totals plus the per-category expense distribution that drives chart
//! rendering. All sums are exact decimal additions in major units; nothing
//! is rounded until display.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{AppData, CategoryId, CategoryKind};

/// Income/expense totals over a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    /// Sum of income amounts
    pub income: Decimal,
    /// Sum of expense amounts
    pub expense: Decimal,
    /// income - expense
    pub net: Decimal,
}

/// One slice of the expense distribution (chart datum)
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    /// Category id
    pub category_id: CategoryId,
    /// Category name
    pub label: String,
    /// Category color, or a deterministic name-derived fallback
    pub color: String,
    /// Summed expense amount for this category
    pub amount: Decimal,
    /// Share of the distribution total, 0-100 (0 when the total is zero)
    pub percentage: f64,
}

/// Aggregated view of the transactions inside `[start, end]`
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSummary {
    /// Inclusive range start
    pub start: DateTime<Utc>,
    /// Inclusive range end
    pub end: DateTime<Utc>,
    /// Number of transactions in range
    pub transaction_count: usize,
    /// Income/expense/net totals
    pub totals: Totals,
    /// Expense distribution, sorted by amount descending. Ties keep the
    /// order in which each category was first encountered while scanning.
    pub expense_by_category: Vec<CategorySlice>,
}

impl RangeSummary {
    /// Compute the summary for a closed range, inclusive on both bounds
    pub fn generate(data: &AppData, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let in_range: Vec<_> = data
            .transactions
            .iter()
            .filter(|t| t.in_range(start, end))
            .collect();

        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;

        // Group expenses by category, preserving first-encounter order
        let mut groups: Vec<(CategoryId, Decimal)> = Vec::new();
        let mut group_index: HashMap<CategoryId, usize> = HashMap::new();

        for txn in &in_range {
            match txn.kind {
                CategoryKind::Income => income += txn.amount,
                CategoryKind::Expense => {
                    expense += txn.amount;
                    match group_index.get(&txn.category_id) {
                        Some(&idx) => groups[idx].1 += txn.amount,
                        None => {
                            group_index.insert(txn.category_id.clone(), groups.len());
                            groups.push((txn.category_id.clone(), txn.amount));
                        }
                    }
                }
            }
        }

        // Groups whose category no longer resolves are dropped before the
        // distribution total is computed
        let mut slices: Vec<CategorySlice> = groups
            .into_iter()
            .filter_map(|(category_id, amount)| {
                let category = data.find_category(&category_id)?;
                let color = category
                    .color
                    .clone()
                    .unwrap_or_else(|| fallback_color(&category.name));
                Some(CategorySlice {
                    category_id,
                    label: category.name.clone(),
                    color,
                    amount,
                    percentage: 0.0,
                })
            })
            .collect();

        // Stable sort: equal amounts keep first-insertion order
        slices.sort_by(|a, b| b.amount.cmp(&a.amount));

        let distribution_total: Decimal = slices.iter().map(|s| s.amount).sum();
        if !distribution_total.is_zero() {
            for slice in &mut slices {
                let share = slice.amount / distribution_total * Decimal::from(100);
                slice.percentage = share.to_f64().unwrap_or(0.0);
            }
        }

        Self {
            start,
            end,
            transaction_count: in_range.len(),
            totals: Totals {
                income,
                expense,
                net: income - expense,
            },
            expense_by_category: slices,
        }
    }
}

/// The closed range covering a whole calendar month: first instant of day 1
/// through 23:59:59.999 of the last day
pub fn month_range(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = next_month.pred_opt()?;

    let start = Utc.from_utc_datetime(&first.and_hms_opt(0, 0, 0)?);
    let end = Utc.from_utc_datetime(&last.and_hms_milli_opt(23, 59, 59, 999)?);
    Some((start, end))
}

/// The closed range covering a whole day
pub fn day_bounds(date: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
    let end = Utc.from_utc_datetime(&date.and_hms_milli_opt(23, 59, 59, 999)?);
    Some((start, end))
}

/// Deterministic display color derived from a category name, for categories
/// without an explicit color
pub fn fallback_color(name: &str) -> String {
    let mut hash: i32 = 0;
    for c in name.chars() {
        hash = (c as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    let hue = hash.unsigned_abs() % 360;
    format!("hsl({}, 70%, 45%)", hue)
}
