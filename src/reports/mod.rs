//! Reporting and aggregation

pub mod summary;

pub use summary::{day_bounds, fallback_color, month_range, CategorySlice, RangeSummary, Totals};
