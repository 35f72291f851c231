//! Range summary report command

use chrono::{Datelike, NaiveDate, Utc};
use clap::Args;

use crate::cli::load_bootstrapped;
use crate::display::format_summary;
use crate::error::{PocketbookError, PocketbookResult};
use crate::reports::{day_bounds, month_range, RangeSummary};
use crate::storage::DataStore;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Range start date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "month")]
    pub from: Option<String>,

    /// Range end date (YYYY-MM-DD, inclusive)
    #[arg(long, conflicts_with = "month")]
    pub to: Option<String>,

    /// Whole calendar month (YYYY-MM); defaults to the current month
    #[arg(long)]
    pub month: Option<String>,
}

fn parse_date(s: &str) -> PocketbookResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        PocketbookError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", s))
    })
}

fn parse_month(s: &str) -> PocketbookResult<(i32, u32)> {
    let parts: Vec<&str> = s.split('-').collect();
    let parsed = match parts.as_slice() {
        [year, month] => match (year.parse::<i32>(), month.parse::<u32>()) {
            (Ok(y), Ok(m)) if (1..=12).contains(&m) => Some((y, m)),
            _ => None,
        },
        _ => None,
    };
    parsed.ok_or_else(|| {
        PocketbookError::Validation(format!("Invalid month '{}' (expected YYYY-MM)", s))
    })
}

pub fn handle_report_command(store: &dyn DataStore, args: ReportArgs) -> PocketbookResult<()> {
    let data = load_bootstrapped(store)?;

    let (start, end) = match (&args.from, &args.to, &args.month) {
        (Some(from), Some(to), _) => {
            let (start, _) = day_bounds(parse_date(from)?)
                .ok_or_else(|| PocketbookError::Validation("Invalid start date".into()))?;
            let (_, end) = day_bounds(parse_date(to)?)
                .ok_or_else(|| PocketbookError::Validation("Invalid end date".into()))?;
            (start, end)
        }
        (None, None, Some(month)) => {
            let (year, month) = parse_month(month)?;
            month_range(year, month)
                .ok_or_else(|| PocketbookError::Validation("Invalid month".into()))?
        }
        (None, None, None) => {
            let now = Utc::now();
            month_range(now.year(), now.month())
                .ok_or_else(|| PocketbookError::Validation("Invalid month".into()))?
        }
        _ => {
            return Err(PocketbookError::Validation(
                "Provide both --from and --to, or --month".into(),
            ));
        }
    };

    let summary = RangeSummary::generate(&data, start, end);
    let currency = data
        .wallets
        .first()
        .map(|w| w.currency.as_str())
        .unwrap_or("USD");
    print!("{}", format_summary(&summary, currency));

    Ok(())
}
