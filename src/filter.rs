// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Expense};

/// Category side of the history filter; `All` disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

/// Case-insensitive title substring AND category match, preserving input
/// order. An empty search term matches every title.
pub fn filter_records<'a>(
    records: &'a [Expense],
    search_term: &str,
    category: CategoryFilter,
) -> Vec<&'a Expense> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|e| e.title.to_lowercase().contains(&needle) && category.matches(e.category))
        .collect()
}
