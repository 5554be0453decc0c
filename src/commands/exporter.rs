// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::fs;

use crate::db::KeyValueStore;
use crate::ledger::ExpenseLedger;
use crate::models::Expense;

pub fn handle<S: KeyValueStore>(ledger: &ExpenseLedger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let out = match sub.get_one::<String>("out") {
        Some(p) => p.clone(),
        None => default_filename(Utc::now().date_naive()),
    };
    fs::write(&out, csv_string(ledger.records())).with_context(|| format!("Write CSV to {}", out))?;
    println!("Exported {} expenses to {}", ledger.records().len(), out);
    Ok(())
}

pub fn default_filename(date: NaiveDate) -> String {
    format!("expenses_{}.csv", date)
}

/// One line per record: title and category quoted, amount and date bare,
/// amounts at full precision. Always the full collection, never a filtered
/// view.
pub fn csv_string(records: &[Expense]) -> String {
    let mut lines = vec!["Title,Amount,Category,Date".to_string()];
    for e in records {
        lines.push(format!(
            "\"{}\",{},\"{}\",{}",
            e.title.replace('"', "\"\""),
            e.amount,
            e.category,
            e.date
        ));
    }
    lines.join("\n")
}
