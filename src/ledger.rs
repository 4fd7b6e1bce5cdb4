use crate::schema::ExpenseEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered list of expenses with sum and group-by helpers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLedger {
    entries: Vec<ExpenseEntry>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: ExpenseEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    pub fn recurring_total(&self) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.recurring)
            .map(|e| e.amount)
            .sum()
    }

    /// Sums amounts per category, keyed alphabetically.
    pub fn by_category(&self) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for entry in &self.entries {
            *totals.entry(entry.category.clone()).or_insert(0.0) += entry.amount;
        }
        totals
    }
}

impl FromIterator<ExpenseEntry> for ExpenseLedger {
    fn from_iter<I: IntoIterator<Item = ExpenseEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<ExpenseEntry> for ExpenseLedger {
    fn extend<I: IntoIterator<Item = ExpenseEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
