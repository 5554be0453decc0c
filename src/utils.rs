// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::filter::CategoryFilter;
use crate::models::Category;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_category(s: &str) -> Result<Category> {
    let cat = match s.trim().to_lowercase().as_str() {
        "food" => Category::Food,
        "transport" => Category::Transport,
        "rent" => Category::Rent,
        "entertainment" => Category::Entertainment,
        "utilities" => Category::Utilities,
        "other" => Category::Other,
        _ => anyhow::bail!(
            "Unknown category '{}', expected one of Food, Transport, Rent, Entertainment, Utilities, Other",
            s
        ),
    };
    Ok(cat)
}

/// "All" (any casing) disables the category filter.
pub fn parse_category_filter(s: &str) -> Result<CategoryFilter> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(CategoryFilter::All);
    }
    Ok(CategoryFilter::Only(parse_category(s)?))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
