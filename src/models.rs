// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One user-entered expense. Replaced whole on edit; `created_at` is
/// assigned once and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    pub created_at: i64, // epoch milliseconds
}

/// Creation payload, before an id and creation stamp exist.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.amount <= Decimal::ZERO {
            return Err(DraftError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
}

/// Closed category set. `ALL` fixes the declaration order that breakdowns
/// report in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Rent,
    Entertainment,
    Utilities,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Rent,
        Category::Entertainment,
        Category::Utilities,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Rent => "Rent",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }

    /// Chart color used wherever this category is plotted.
    pub fn color(self) -> &'static str {
        match self {
            Category::Food => "#f87171",
            Category::Transport => "#60a5fa",
            Category::Rent => "#fbbf24",
            Category::Entertainment => "#a78bfa",
            Category::Utilities => "#34d399",
            Category::Other => "#94a3b8",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Spending totals relative to a reference date. Derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub daily: Decimal,
}

/// Total spent in one category. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInsight {
    pub name: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub color: &'static str,
}

/// One month of the trailing spending trend. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}
