// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use financeflow::db::SqliteStore;
use financeflow::ledger::ExpenseLedger;
use financeflow::models::{Category, Expense, ExpenseDraft};
use financeflow::{cli, commands::exporter};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn csv_lines_quote_title_and_category_only() {
    let records = vec![
        Expense {
            id: "1".to_string(),
            title: "Weekly Groceries".to_string(),
            amount: "52.30".parse().unwrap(),
            category: Category::Food,
            date: date("2025-03-01"),
            created_at: 0,
        },
        Expense {
            id: "2".to_string(),
            title: "Bus pass".to_string(),
            amount: "30".parse().unwrap(),
            category: Category::Transport,
            date: date("2025-03-02"),
            created_at: 0,
        },
    ];
    assert_eq!(
        exporter::csv_string(&records),
        "Title,Amount,Category,Date\n\
         \"Weekly Groceries\",52.30,\"Food\",2025-03-01\n\
         \"Bus pass\",30,\"Transport\",2025-03-02"
    );
}

#[test]
fn csv_escapes_embedded_quotes() {
    let records = vec![Expense {
        id: "1".to_string(),
        title: "Tickets to \"Hamlet\"".to_string(),
        amount: "45".parse().unwrap(),
        category: Category::Entertainment,
        date: date("2025-03-01"),
        created_at: 0,
    }];
    assert_eq!(
        exporter::csv_string(&records),
        "Title,Amount,Category,Date\n\
         \"Tickets to \"\"Hamlet\"\"\",45,\"Entertainment\",2025-03-01"
    );
}

#[test]
fn csv_of_empty_collection_is_just_the_header() {
    assert_eq!(exporter::csv_string(&[]), "Title,Amount,Category,Date");
}

#[test]
fn default_filename_carries_the_date() {
    assert_eq!(
        exporter::default_filename(date("2025-03-04")),
        "expenses_2025-03-04.csv"
    );
}

#[test]
fn export_writes_the_full_collection() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut ledger = ExpenseLedger::load(store);
    ledger
        .add(ExpenseDraft {
            title: "Corner Shop".to_string(),
            amount: "12.34".parse::<Decimal>().unwrap(),
            category: Category::Food,
            date: date("2025-01-02"),
        })
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from(["financeflow", "export", "--out", &out_str]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&ledger, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        contents,
        "Title,Amount,Category,Date\n\"Corner Shop\",12.34,\"Food\",2025-01-02"
    );
}
