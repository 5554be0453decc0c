// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use financeflow::models::{Category, Expense};
use serde_json::json;

#[test]
fn record_serializes_to_the_stored_shape() {
    let record = Expense {
        id: "9b2f".to_string(),
        title: "Lunch".to_string(),
        amount: "12.5".parse().unwrap(),
        category: Category::Food,
        date: NaiveDate::parse_from_str("2024-03-05", "%Y-%m-%d").unwrap(),
        created_at: 1709600000000,
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "9b2f",
            "title": "Lunch",
            "amount": 12.5,
            "category": "Food",
            "date": "2024-03-05",
            "createdAt": 1709600000000i64
        })
    );
}

#[test]
fn stored_shape_deserializes_back() {
    let raw = r#"[{
        "id": "9b2f",
        "title": "Lunch",
        "amount": 12.5,
        "category": "Food",
        "date": "2024-03-05",
        "createdAt": 1709600000000
    }]"#;
    let records: Vec<Expense> = serde_json::from_str(raw).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "9b2f");
    assert_eq!(records[0].amount, "12.5".parse().unwrap());
    assert_eq!(records[0].category, Category::Food);
    assert_eq!(records[0].date.to_string(), "2024-03-05");
    assert_eq!(records[0].created_at, 1709600000000);
}

#[test]
fn integer_amounts_survive_the_float_wire() {
    let raw = r#"[{
        "id": "a",
        "title": "Rent",
        "amount": 1000,
        "category": "Rent",
        "date": "2024-01-01",
        "createdAt": 0
    }]"#;
    let records: Vec<Expense> = serde_json::from_str(raw).unwrap();
    assert_eq!(records[0].amount, "1000".parse().unwrap());
}
