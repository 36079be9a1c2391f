//! Data types produced by the aggregation pipeline.

use chrono::NaiveDate;
use serde::Serialize;

/// A single `(category, total)` row of a [`SummaryTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal<K> {
    pub category: K,
    pub total: u64,
}

/// Ordered totals per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SummaryTable<K> {
    rows: Vec<CategoryTotal<K>>,
}

impl<K> SummaryTable<K> {
    pub(crate) fn from_rows(rows: Vec<CategoryTotal<K>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[CategoryTotal<K>] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal<K>> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of every row's total.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.total).sum()
    }

    pub fn totals(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.total).collect()
    }
}

impl<K: PartialEq> SummaryTable<K> {
    pub fn get(&self, category: &K) -> Option<u64> {
        self.rows
            .iter()
            .find(|r| &r.category == category)
            .map(|r| r.total)
    }
}

impl<'a, K> IntoIterator for &'a SummaryTable<K> {
    type Item = &'a CategoryTotal<K>;
    type IntoIter = std::slice::Iter<'a, CategoryTotal<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Rentals per calendar day, ascending by date.
pub type DailyTotals = SummaryTable<NaiveDate>;

/// Rentals per season label, Springer through Winter.
pub type SeasonTotals = SummaryTable<&'static str>;

/// Rentals per weekday label, Sunday through Saturday.
pub type WeekdayTotals = SummaryTable<&'static str>;

/// Rentals per hour of day, 0 through 23.
pub type HourTotals = SummaryTable<u8>;

/// Rentals split on the holiday flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HolidayTotals {
    pub non_holiday: u64,
    pub holiday: u64,
}
