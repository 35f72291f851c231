//! Import pipeline
//!
//! Two document formats are accepted: the Money Tracker export (mapped
//! field-by-field into the native model) and the native export itself
//! (already in the persisted shape). Recognized documents are merged into
//! the existing data through the reconciler; anything else is rejected as a
//! whole with no partial import.

pub mod merge;
pub mod money_tracker;

pub use merge::{merge_imported_data, MergeStats};

use serde_json::Value;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{AppData, SCHEMA_VERSION};

/// Parse a JSON document into a native AppData fragment.
///
/// The native check runs first: a native export also carries category and
/// transaction arrays, so the foreign detector would claim it otherwise.
///
/// Returns an import error when the document matches no known format.
pub fn parse_import_document(json: &Value) -> PocketbookResult<AppData> {
    if is_native_document(json) {
        return serde_json::from_value(json.clone())
            .map_err(|e| PocketbookError::Import(format!("Invalid native document: {}", e)));
    }

    if money_tracker::detect(json) {
        return Ok(money_tracker::map_to_app_data(json));
    }

    Err(PocketbookError::Import(
        "Unrecognized JSON format".to_string(),
    ))
}

/// Parse a document and merge it into `current`, returning the merged data
/// and what the merge actually added
pub fn import_into(current: &AppData, json: &Value) -> PocketbookResult<(AppData, MergeStats)> {
    let fragment = parse_import_document(json)?;
    Ok(merge_imported_data(current, fragment))
}

/// A native document is an object with `schemaVersion: 1` and an array of
/// transactions; it round-trips through export/import with no mapping
fn is_native_document(json: &Value) -> bool {
    json.get("schemaVersion")
        .and_then(Value::as_u64)
        .is_some_and(|v| v == u64::from(SCHEMA_VERSION))
        && json.get("transactions").is_some_and(Value::is_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unrecognized_format_rejected() {
        let err = parse_import_document(&json!({"foo": "bar"})).unwrap_err();
        assert!(matches!(err, PocketbookError::Import(_)));
        assert!(err.to_string().contains("Unrecognized"));
    }

    #[test]
    fn test_money_tracker_document_recognized() {
        let doc = json!({
            "categories": [{"id": 1, "name": "Food", "type": 1}],
            "transactions": []
        });
        let fragment = parse_import_document(&doc).unwrap();
        assert_eq!(fragment.categories.len(), 1);
    }

    #[test]
    fn test_native_document_recognized() {
        let doc = json!({
            "schemaVersion": 1,
            "categories": [],
            "wallets": [],
            "transactions": []
        });
        let fragment = parse_import_document(&doc).unwrap();
        assert_eq!(fragment, AppData::empty());
    }

    #[test]
    fn test_native_document_takes_precedence_over_foreign_detection() {
        // Native exports also have category/transaction arrays; the
        // schemaVersion marker must win so they skip the foreign mapper
        let doc = json!({
            "schemaVersion": 1,
            "categories": [
                {"id": "c1", "name": "Salary", "kind": "income"}
            ],
            "wallets": [],
            "transactions": []
        });

        let fragment = parse_import_document(&doc).unwrap();
        assert_eq!(fragment.categories[0].kind, crate::models::CategoryKind::Income);
    }

    #[test]
    fn test_import_into_merges_and_counts() {
        let doc = json!({
            "wallets": [{"id": 1, "name": "Cash"}],
            "categories": [{"id": 2, "name": "Food", "type": 1}],
            "transactions": [
                {"id": 3, "date": "2024-01-15 10:00:00", "money": 500,
                 "category": 2, "wallet": 1}
            ]
        });

        let (merged, stats) = import_into(&AppData::empty(), &doc).unwrap();
        assert_eq!(merged.wallets.len(), 1);
        assert_eq!(merged.categories.len(), 1);
        assert_eq!(merged.transactions.len(), 1);
        assert_eq!(stats.transactions_added, 1);
    }
}
