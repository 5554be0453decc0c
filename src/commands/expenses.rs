// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::db::KeyValueStore;
use crate::filter::{filter_records, CategoryFilter};
use crate::ledger::ExpenseLedger;
use crate::models::{Expense, ExpenseDraft};
use crate::utils::{
    maybe_print_json, parse_category, parse_category_filter, parse_date, parse_decimal,
    pretty_table,
};

pub fn handle<S: KeyValueStore>(
    ledger: &mut ExpenseLedger<S>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("edit", sub)) => edit(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: KeyValueStore>(ledger: &mut ExpenseLedger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    let category = parse_category(sub.get_one::<String>("category").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s.trim())?,
        None => Utc::now().date_naive(),
    };
    let record = ledger.add(ExpenseDraft {
        title,
        amount,
        category,
        date,
    })?;
    println!(
        "Recorded {} on {} for '{}' ({})",
        record.amount, record.date, record.title, record.category
    );
    Ok(())
}

fn list<S: KeyValueStore>(ledger: &ExpenseLedger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.title.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Title", "Amount", "Category", "Id"], rows)
        );
    }
    Ok(())
}

fn edit<S: KeyValueStore>(ledger: &mut ExpenseLedger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let existing = ledger
        .records()
        .iter()
        .find(|e| e.id == id)
        .with_context(|| format!("Expense '{}' not found", id))?
        .clone();
    let title = match sub.get_one::<String>("title") {
        Some(t) => t.trim().to_string(),
        None => existing.title.clone(),
    };
    let amount = match sub.get_one::<String>("amount") {
        Some(a) => parse_decimal(a.trim())?,
        None => existing.amount,
    };
    let category = match sub.get_one::<String>("category") {
        Some(c) => parse_category(c)?,
        None => existing.category,
    };
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d.trim())?,
        None => existing.date,
    };
    ledger.update(Expense {
        id: existing.id,
        title,
        amount,
        category,
        date,
        created_at: existing.created_at,
    })?;
    println!("Updated expense '{}'", id);
    Ok(())
}

fn rm<S: KeyValueStore>(ledger: &mut ExpenseLedger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim().to_string();
    let target = match ledger.records().iter().find(|e| e.id == id) {
        Some(e) => e.clone(),
        None => {
            println!("No expense with id '{}'", id);
            return Ok(());
        }
    };
    if !sub.get_flag("yes") {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Delete '{}' ({} on {})?",
                target.title, target.amount, target.date
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted");
            return Ok(());
        }
    }
    ledger.remove(&id)?;
    println!("Removed expense '{}'", id);
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: String,
    pub date: String,
    pub title: String,
    pub amount: String,
    pub category: String,
}

pub fn query_rows<S: KeyValueStore>(
    ledger: &ExpenseLedger<S>,
    sub: &clap::ArgMatches,
) -> Result<Vec<ExpenseRow>> {
    let search = sub
        .get_one::<String>("search")
        .map(|s| s.as_str())
        .unwrap_or("");
    let category = match sub.get_one::<String>("category") {
        Some(s) => parse_category_filter(s)?,
        None => CategoryFilter::All,
    };
    let mut visible = filter_records(ledger.records(), search, category);
    if let Some(&limit) = sub.get_one::<usize>("limit") {
        visible.truncate(limit);
    }
    Ok(visible
        .into_iter()
        .map(|e| ExpenseRow {
            id: e.id.clone(),
            date: e.date.to_string(),
            title: e.title.clone(),
            amount: format!("{:.2}", e.amount),
            category: e.category.to_string(),
        })
        .collect())
}
