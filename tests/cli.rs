//! End-to-end tests driving the pocketbook binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pocketbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocketbook").unwrap();
    cmd.env("POCKETBOOK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn first_run_bootstraps_default_wallet() {
    let data_dir = TempDir::new().unwrap();

    pocketbook(&data_dir)
        .args(["wallet", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Wallet"));

    assert!(data_dir.path().join("data.json").exists());
}

#[test]
fn import_then_report() {
    let data_dir = TempDir::new().unwrap();
    let export = data_dir.path().join("money_tracker.json");
    std::fs::write(
        &export,
        r#"{
            "currencies": [{"iso": "USD", "decimals": 2}],
            "wallets": [{"id": 1, "name": "Cash", "currency": "USD"}],
            "categories": [
                {"id": 10, "name": "Salary", "type": 0},
                {"id": 11, "name": "Food", "type": 1}
            ],
            "transactions": [
                {"id": 100, "date": "2024-01-15 10:00:00", "money": 1250,
                 "category": 11, "wallet": 1, "description": "lunch"},
                {"id": 101, "date": "2024-01-16 09:00:00", "money": 100000,
                 "category": 10, "wallet": 1}
            ]
        }"#,
    )
    .unwrap();

    pocketbook(&data_dir)
        .args(["import"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 2 transactions, 2 categories, 1 wallets.",
        ));

    pocketbook(&data_dir)
        .args(["report", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense: 12.50 USD"))
        .stdout(predicate::str::contains("Income:  1000.00 USD"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn reimport_deduplicates_by_name() {
    let data_dir = TempDir::new().unwrap();
    let export = data_dir.path().join("export.json");
    std::fs::write(
        &export,
        r#"{
            "wallets": [{"id": 1, "name": "Main Wallet"}],
            "categories": [{"id": 2, "name": "Food", "type": 1}],
            "transactions": []
        }"#,
    )
    .unwrap();

    pocketbook(&data_dir)
        .args(["import"])
        .arg(&export)
        .assert()
        .success()
        // "Main Wallet" matches the bootstrapped default wallet by name
        .stdout(predicate::str::contains(
            "Imported 0 transactions, 1 categories, 0 wallets.",
        ));

    pocketbook(&data_dir)
        .args(["import"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 0 transactions, 0 categories, 0 wallets.",
        ));
}

#[test]
fn unrecognized_import_fails() {
    let data_dir = TempDir::new().unwrap();
    let junk = data_dir.path().join("junk.json");
    std::fs::write(&junk, r#"{"random": [1, 2, 3]}"#).unwrap();

    pocketbook(&data_dir)
        .args(["import"])
        .arg(&junk)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized JSON format"));
}

#[test]
fn export_writes_native_document() {
    let data_dir = TempDir::new().unwrap();
    let out = data_dir.path().join("backup.json");

    pocketbook(&data_dir)
        .args(["export"])
        .arg(&out)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("\"schemaVersion\": 1"));
    assert!(contents.contains("Main Wallet"));
}

#[test]
fn add_and_list_transaction() {
    let data_dir = TempDir::new().unwrap();

    pocketbook(&data_dir)
        .args(["category", "add", "Groceries", "--kind", "expense"])
        .assert()
        .success();

    pocketbook(&data_dir)
        .args([
            "tx",
            "add",
            "42.00",
            "Groceries",
            "--date",
            "2024-03-10",
            "--description",
            "weekly shop",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"));

    pocketbook(&data_dir)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("weekly shop"));
}
