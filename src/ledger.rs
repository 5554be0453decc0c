// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::db::{KeyValueStore, STORAGE_KEY};
use crate::models::{Expense, ExpenseDraft};

/// Owns the canonical expense collection, newest-created first. Every
/// mutation rewrites the whole collection under [`STORAGE_KEY`]; other
/// components only ever see read-only snapshots.
pub struct ExpenseLedger<S: KeyValueStore> {
    store: S,
    records: Vec<Expense>,
}

impl<S: KeyValueStore> ExpenseLedger<S> {
    /// Missing or unparseable persisted data loads as an empty collection.
    pub fn load(store: S) -> Self {
        let records = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        };
        ExpenseLedger { store, records }
    }

    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    /// Validates the draft, stamps a fresh id and creation time, prepends
    /// the record and persists. Nothing is stored on a validation error.
    pub fn add(&mut self, draft: ExpenseDraft) -> Result<Expense> {
        draft.validate()?;
        let record = Expense {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            created_at: Utc::now().timestamp_millis(),
        };
        self.records.insert(0, record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Full replace by id. `created_at` must be carried over from the
    /// existing record by the caller. Returns false when no record matches.
    pub fn update(&mut self, record: Expense) -> Result<bool> {
        ExpenseDraft {
            title: record.title.clone(),
            amount: record.amount,
            category: record.category,
            date: record.date,
        }
        .validate()?;
        let replaced = match self.records.iter_mut().find(|e| e.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        };
        self.persist()?;
        Ok(replaced)
    }

    /// Returns false when no record matches. Irreversible; callers confirm
    /// with the user first.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|e| e.id != id);
        let removed = self.records.len() != before;
        self.persist()?;
        Ok(removed)
    }

    // A failed write leaves the in-memory collection mutated; the session
    // stays internally consistent and the store catches up on the next
    // successful write.
    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.records)?;
        self.store.set(STORAGE_KEY, &raw)
    }
}
