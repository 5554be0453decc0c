// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDate, Utc};

use crate::db::KeyValueStore;
use crate::insights;
use crate::ledger::ExpenseLedger;
use crate::utils::{maybe_print_json, parse_date, pretty_table};

pub fn handle<S: KeyValueStore>(ledger: &ExpenseLedger<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(ledger, sub)?,
        Some(("breakdown", sub)) => breakdown(ledger, sub)?,
        Some(("trend", sub)) => trend(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn reference_date(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("date") {
        Some(s) => parse_date(s.trim()),
        None => Ok(Utc::now().date_naive()),
    }
}

fn summary<S: KeyValueStore>(ledger: &ExpenseLedger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let reference = reference_date(sub)?;
    let summary = insights::summarize(ledger.records(), reference);
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let rows = vec![
            vec!["All time".to_string(), format!("{:.2}", summary.total)],
            vec![
                format!("This month ({})", reference.format("%Y-%m")),
                format!("{:.2}", summary.monthly),
            ],
            vec![
                format!("Today ({})", reference),
                format!("{:.2}", summary.daily),
            ],
        ];
        println!("{}", pretty_table(&["Period", "Spent"], rows));
    }
    Ok(())
}

fn breakdown<S: KeyValueStore>(ledger: &ExpenseLedger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut data = insights::category_breakdown(ledger.records());
    if let Some(&top) = sub.get_one::<usize>("top") {
        data.sort_by(|a, b| b.value.cmp(&a.value));
        data.truncate(top);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|c| vec![c.name.to_string(), format!("{:.2}", c.value)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn trend<S: KeyValueStore>(ledger: &ExpenseLedger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&6);
    let reference = reference_date(sub)?;
    let points = insights::trailing_monthly_trend(ledger.records(), reference, months);
    if !maybe_print_json(json_flag, jsonl_flag, &points)? {
        let rows: Vec<Vec<String>> = points
            .iter()
            .map(|p| vec![p.label.clone(), format!("{:.2}", p.amount)])
            .collect();
        println!("{}", pretty_table(&["Month", "Spent"], rows));
    }
    Ok(())
}
