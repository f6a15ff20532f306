//! Append-only transaction log behind the "Recent Transactions" table.

use chrono::NaiveDate;
use nexus_capture::ExpenseRecord;
use nexus_core::{Category, PaymentMethod};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, `trx-<uuid>`
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
    /// Whole rupees
    pub amount: u64,
    pub method: PaymentMethod,
}

impl Transaction {
    /// Stamp a parsed expense with a fresh id and the given date.
    pub fn from_expense(expense: ExpenseRecord, date: NaiveDate) -> Self {
        Self {
            id: format!("trx-{}", Uuid::new_v4()),
            date,
            description: expense.description,
            category: expense.category,
            amount: expense.amount,
            method: expense.method,
        }
    }
}

/// Table filters. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub category: Option<Category>,
    pub method: Option<PaymentMethod>,
    /// Case-insensitive substring over description or category name
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        let category_allowed = self.category.is_none_or(|c| c == txn.category);
        let method_allowed = self.method.is_none_or(|m| m == txn.method);
        let search_hit = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                txn.description.to_lowercase().contains(&term)
                    || txn.category.as_str().to_lowercase().contains(&term)
            }
        };
        category_allowed && method_allowed && search_hit
    }
}

/// Insertion-ordered, append-only. Entries are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a parsed expense and return the stored transaction.
    pub fn record(&mut self, expense: ExpenseRecord, date: NaiveDate) -> &Transaction {
        self.push(Transaction::from_expense(expense, date))
    }

    /// Append an already-built transaction.
    pub fn push(&mut self, txn: Transaction) -> &Transaction {
        log::debug!("logged {} ₹{} under {}", txn.id, txn.amount, txn.category);
        self.entries.push(txn);
        &self.entries[self.entries.len() - 1]
    }

    /// Oldest first
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    /// Newest first, the order the dashboard table shows
    pub fn recent(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.entries.iter().find(|t| t.id == id)
    }

    /// Newest-first transactions passing the filter
    pub fn filter(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.recent().filter(|t| filter.matches(t)).collect()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|t| t.amount).fold(0, u64::saturating_add)
    }

    pub fn total_for(&self, category: Category) -> u64 {
        self.entries
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.amount)
            .fold(0, u64::saturating_add)
    }

    /// Spend per category, categories without spend omitted
    pub fn category_totals(&self) -> BTreeMap<Category, u64> {
        let mut totals: BTreeMap<Category, u64> = BTreeMap::new();
        for t in &self.entries {
            let slot = totals.entry(t.category).or_insert(0);
            *slot = slot.saturating_add(t.amount);
        }
        totals
    }

    /// Largest `n` spends, highest first. Equal amounts keep log order.
    pub fn top_spends(&self, n: usize) -> Vec<&Transaction> {
        let mut by_amount: Vec<&Transaction> = self.entries.iter().collect();
        by_amount.sort_by(|a, b| b.amount.cmp(&a.amount));
        by_amount.truncate(n);
        by_amount
    }
}
