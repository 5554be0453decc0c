// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Category, CategoryInsight, Expense, Summary, TrendPoint};

// Total functions over the full collection: no input, including the empty
// one, produces an error. Summaries never run over a filtered view.

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// All-time, this-month and same-day totals relative to `reference`, in one
/// pass. Bucketing uses the record's `date`, never its creation stamp.
pub fn summarize(records: &[Expense], reference: NaiveDate) -> Summary {
    let mut summary = Summary::default();
    for e in records {
        summary.total += e.amount;
        if e.date == reference {
            summary.daily += e.amount;
        }
        if e.date.year() == reference.year() && e.date.month() == reference.month() {
            summary.monthly += e.amount;
        }
    }
    summary
}

/// Per-category totals in category-declaration order. Zero-spend categories
/// are omitted, not reported as zero. Magnitude ordering ("top N") is a
/// presentation concern layered on top of this output.
pub fn category_breakdown(records: &[Expense]) -> Vec<CategoryInsight> {
    Category::ALL
        .iter()
        .filter_map(|&cat| {
            let value: Decimal = records
                .iter()
                .filter(|e| e.category == cat)
                .map(|e| e.amount)
                .sum();
            (value > Decimal::ZERO).then(|| CategoryInsight {
                name: cat.label(),
                value,
                color: cat.color(),
            })
        })
        .collect()
}

/// `window` consecutive calendar months ending at `reference`'s month,
/// oldest first. Buckets are keyed by `YYYY-MM` so January of different
/// years never collides; records outside the window are ignored.
pub fn trailing_monthly_trend(
    records: &[Expense],
    reference: NaiveDate,
    window: usize,
) -> Vec<TrendPoint> {
    // Months as a flat serial (year * 12 + month0) keeps the window
    // arithmetic total across year boundaries.
    let newest = reference.year() as i64 * 12 + i64::from(reference.month0());
    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();
    for i in 0..window as i64 {
        buckets.insert(month_key(newest - i), Decimal::ZERO);
    }
    for e in records {
        let key = format!("{:04}-{:02}", e.date.year(), e.date.month());
        if let Some(bucket) = buckets.get_mut(&key) {
            *bucket += e.amount;
        }
    }
    let mut points = Vec::with_capacity(window);
    for i in (0..window as i64).rev() {
        let serial = newest - i;
        let amount = buckets
            .get(&month_key(serial))
            .copied()
            .unwrap_or(Decimal::ZERO);
        points.push(TrendPoint {
            label: MONTH_LABELS[serial.rem_euclid(12) as usize].to_string(),
            amount,
        });
    }
    points
}

fn month_key(serial: i64) -> String {
    format!("{:04}-{:02}", serial.div_euclid(12), serial.rem_euclid(12) + 1)
}
