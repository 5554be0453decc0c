// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use financeflow::insights::{category_breakdown, summarize, trailing_monthly_trend};
use financeflow::models::{Category, Expense};
use rust_decimal::Decimal;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn expense(title: &str, amount: &str, category: Category, on: &str) -> Expense {
    Expense {
        id: title.to_string(),
        title: title.to_string(),
        amount: dec(amount),
        category,
        date: date(on),
        created_at: 0,
    }
}

fn scenario() -> Vec<Expense> {
    vec![
        expense("Groceries", "50", Category::Food, "2024-01-15"),
        expense("January rent", "1000", Category::Rent, "2024-01-01"),
        expense("Lunch", "20", Category::Food, "2024-02-01"),
    ]
}

#[test]
fn summarize_buckets_by_record_date() {
    let summary = summarize(&scenario(), date("2024-02-01"));
    assert_eq!(summary.total, dec("1070"));
    assert_eq!(summary.monthly, dec("20"));
    assert_eq!(summary.daily, dec("20"));
}

#[test]
fn summarize_total_ignores_reference_date() {
    let records = scenario();
    for d in ["2020-06-15", "2024-01-15", "2030-12-31"] {
        let summary = summarize(&records, date(d));
        assert_eq!(summary.total, dec("1070"));
        assert!(summary.daily <= summary.monthly);
        assert!(summary.monthly <= summary.total);
    }
}

#[test]
fn summarize_empty_is_zero() {
    let summary = summarize(&[], date("2024-02-01"));
    assert_eq!(summary.total, Decimal::ZERO);
    assert_eq!(summary.monthly, Decimal::ZERO);
    assert_eq!(summary.daily, Decimal::ZERO);
}

#[test]
fn breakdown_uses_declaration_order_and_omits_zero() {
    let insights = category_breakdown(&scenario());
    let pairs: Vec<(&str, Decimal)> = insights.iter().map(|c| (c.name, c.value)).collect();
    // Food is declared before Rent; Transport etc. had no spend and are absent
    assert_eq!(pairs, [("Food", dec("70")), ("Rent", dec("1000"))]);
}

#[test]
fn breakdown_values_sum_to_total() {
    let records = scenario();
    let total: Decimal = category_breakdown(&records).iter().map(|c| c.value).sum();
    assert_eq!(total, summarize(&records, date("2024-02-01")).total);
}

#[test]
fn breakdown_carries_category_colors() {
    let insights = category_breakdown(&scenario());
    assert_eq!(insights[0].color, "#f87171");
    assert_eq!(insights[1].color, "#fbbf24");
}

#[test]
fn breakdown_empty_is_empty() {
    assert!(category_breakdown(&[]).is_empty());
}

#[test]
fn trend_spans_year_boundaries_without_gaps() {
    let points = trailing_monthly_trend(&scenario(), date("2024-02-01"), 6);
    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
    let amounts: Vec<Decimal> = points.iter().map(|p| p.amount).collect();
    assert_eq!(
        amounts,
        [
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            dec("1050"),
            dec("20")
        ]
    );
}

#[test]
fn trend_distinguishes_same_month_of_other_years() {
    let mut records = scenario();
    // Same calendar month as the in-window January, one year earlier
    records.push(expense("Old rent", "999", Category::Rent, "2023-01-10"));
    let points = trailing_monthly_trend(&records, date("2024-02-01"), 6);
    assert_eq!(points[4].label, "Jan");
    assert_eq!(points[4].amount, dec("1050"));
}

#[test]
fn trend_ignores_records_outside_window() {
    let mut records = scenario();
    records.push(expense("Ancient", "500", Category::Other, "2023-08-31"));
    let points = trailing_monthly_trend(&records, date("2024-02-01"), 6);
    let total: Decimal = points.iter().map(|p| p.amount).sum();
    assert_eq!(total, dec("1070"));
}

#[test]
fn trend_empty_collection_is_six_zero_points() {
    let points = trailing_monthly_trend(&[], date("2024-02-01"), 6);
    assert_eq!(points.len(), 6);
    assert!(points.iter().all(|p| p.amount == Decimal::ZERO));
}

#[test]
fn trend_window_size_is_respected() {
    for window in [1, 3, 12] {
        let points = trailing_monthly_trend(&scenario(), date("2024-02-01"), window);
        assert_eq!(points.len(), window);
    }
}
