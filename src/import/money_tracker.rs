//! Money Tracker import mapping
//!
//! Detects whether a parsed JSON document is a Money Tracker export and
//! converts it into a native `AppData` fragment. The foreign document uses
//! minor-unit amounts, numeric enum codes, and ids that may be strings or
//! numbers, so conversion goes through an explicit coercion layer with
//! documented defaults. Mapping is purely functional: no persisted state is
//! read or written, and malformed optional fields never raise errors.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::models::{
    AppData, Category, CategoryId, CategoryKind, Transaction, TransactionId, Wallet, WalletId,
};

/// Foreign category type codes
const FOREIGN_TYPE_INCOME: i64 = 0;
const FOREIGN_TYPE_TRANSFER: i64 = 2;

/// Decimal precision assumed when a currency is not listed in the export
const DEFAULT_DECIMALS: u32 = 2;

/// Check whether a parsed JSON document is a Money Tracker export.
///
/// A document qualifies when it is an object with array-typed `categories`
/// and `transactions` fields, and either omits `wallets` or provides it as
/// an array. Anything else is not recognized (which is a verdict, not an
/// error).
pub fn detect(json: &Value) -> bool {
    let Some(obj) = json.as_object() else {
        return false;
    };

    obj.get("categories").is_some_and(Value::is_array)
        && obj.get("transactions").is_some_and(Value::is_array)
        && obj.get("wallets").map_or(true, Value::is_array)
}

/// Convert a detected Money Tracker document into a native AppData fragment.
///
/// The fragment is self-contained: transactions only reference wallets and
/// categories produced by this same conversion. Merging with existing
/// application data is a separate step.
pub fn map_to_app_data(json: &Value) -> AppData {
    let decimals_by_iso = currency_decimals(json);

    // Wallets; currency defaults to USD, decimals resolved via the lookup
    let mut wallets: Vec<Wallet> = Vec::new();
    for entry in array_field(json, "wallets") {
        let Some(id) = coerce_string(entry.get("id")) else {
            continue;
        };
        let currency = coerce_string(entry.get("currency")).unwrap_or_else(|| "USD".to_string());
        let decimals = decimals_by_iso
            .get(&currency)
            .copied()
            .unwrap_or(DEFAULT_DECIMALS);
        wallets.push(Wallet {
            id: WalletId::from(id),
            name: coerce_string(entry.get("name")).unwrap_or_default(),
            currency,
            decimals,
        });
    }

    // Categories: type 0 => income, 2 => transfer (skipped), others => expense
    let mut categories: Vec<Category> = Vec::new();
    let mut foreign_type_by_id: HashMap<CategoryId, i64> = HashMap::new();
    for entry in array_field(json, "categories") {
        let Some(id) = coerce_string(entry.get("id")) else {
            continue;
        };
        let foreign_type = coerce_i64(entry.get("type"));
        if foreign_type == Some(FOREIGN_TYPE_TRANSFER) {
            continue;
        }

        let id = CategoryId::from(id);
        if let Some(t) = foreign_type {
            foreign_type_by_id.insert(id.clone(), t);
        }

        let kind = if foreign_type == Some(FOREIGN_TYPE_INCOME) {
            CategoryKind::Income
        } else {
            CategoryKind::Expense
        };

        categories.push(Category {
            id,
            name: coerce_string(entry.get("name")).unwrap_or_default(),
            kind,
            color: extract_icon_color(entry.get("icon")),
        });
    }

    let wallet_decimals: HashMap<&WalletId, u32> =
        wallets.iter().map(|w| (&w.id, w.decimals)).collect();
    let valid_category_ids: HashSet<&CategoryId> = categories.iter().map(|c| &c.id).collect();

    let mut transactions: Vec<Transaction> = Vec::new();
    for entry in array_field(json, "transactions") {
        // An explicit deleted=true excludes; count_in_total only excludes
        // when explicitly false
        if coerce_bool(entry.get("deleted")) == Some(true) {
            continue;
        }
        if coerce_bool(entry.get("count_in_total")) == Some(false) {
            continue;
        }

        // Only transactions referencing a surviving category are kept
        let Some(category_id) = coerce_string(entry.get("category")).map(CategoryId::from) else {
            continue;
        };
        if !valid_category_ids.contains(&category_id) {
            continue;
        }

        let Some(date) =
            coerce_string(entry.get("date")).and_then(|s| parse_money_tracker_date(&s))
        else {
            continue;
        };

        let wallet_id = WalletId::from(
            coerce_string(entry.get("wallet")).unwrap_or_else(|| "default".to_string()),
        );
        let decimals = wallet_decimals
            .get(&wallet_id)
            .copied()
            .unwrap_or(DEFAULT_DECIMALS);

        let minor_units = coerce_f64(entry.get("money")).unwrap_or(0.0);
        // Precision is capped so the divisor stays within u64 range
        let divisor = Decimal::from(10u64.pow(decimals.min(18)));
        let amount = (Decimal::try_from(minor_units).unwrap_or_default() / divisor).abs();

        // Any one true signal classifies as income; there is no precedence
        // among the three
        let kind = if coerce_i64(entry.get("direction")) == Some(1)
            || coerce_i64(entry.get("type")) == Some(1)
            || foreign_type_by_id.get(&category_id) == Some(&FOREIGN_TYPE_INCOME)
        {
            CategoryKind::Income
        } else {
            CategoryKind::Expense
        };

        let id = coerce_string(entry.get("id"))
            .filter(|s| !s.is_empty())
            .map(TransactionId::from)
            .unwrap_or_default();

        transactions.push(Transaction {
            id,
            date,
            description: coerce_string(entry.get("description")).unwrap_or_default(),
            amount,
            kind,
            category_id,
            wallet_id,
        });
    }

    AppData {
        categories,
        wallets,
        transactions,
        ..AppData::empty()
    }
}

/// Parse a Money Tracker date string (`YYYY-MM-DD HH:mm:ss`, seconds
/// optional) interpreted in local time, into a UTC instant
pub fn parse_money_tracker_date(s: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .ok()?;

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        // Nonexistent local time (DST gap): fall back to reading it as UTC
        LocalResult::None => Some(Utc.from_utc_datetime(&naive)),
    }
}

/// Build the ISO code -> decimal precision lookup from the `currencies` list
fn currency_decimals(json: &Value) -> HashMap<String, u32> {
    let mut decimals_by_iso = HashMap::new();
    for entry in array_field(json, "currencies") {
        if let Some(iso) = coerce_string(entry.get("iso")) {
            let decimals = coerce_u32(entry.get("decimals")).unwrap_or(DEFAULT_DECIMALS);
            decimals_by_iso.insert(iso, decimals);
        }
    }
    decimals_by_iso
}

/// The icon field may hold a JSON-encoded object `{"type":"color","color":..}`;
/// extract the color, silently ignoring any other shape or parse failure
fn extract_icon_color(icon: Option<&Value>) -> Option<String> {
    let raw = icon?.as_str()?;
    let descriptor: Value = serde_json::from_str(raw).ok()?;
    if descriptor.get("type")?.as_str()? != "color" {
        return None;
    }
    coerce_string(descriptor.get("color"))
}

fn array_field<'a>(json: &'a Value, field: &str) -> impl Iterator<Item = &'a Value> {
    json.get(field)
        .and_then(Value::as_array)
        .map(|a| a.iter())
        .unwrap_or_default()
}

/// String-coerce a value the way the foreign format expects: strings pass
/// through, numbers render to their decimal form
fn coerce_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_i64(value: Option<&Value>) -> Option<i64> {
    value?.as_i64()
}

fn coerce_u32(value: Option<&Value>) -> Option<u32> {
    value?.as_u64().and_then(|n| u32::try_from(n).ok())
}

fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    value?.as_f64()
}

fn coerce_bool(value: Option<&Value>) -> Option<bool> {
    value?.as_bool()
}
