use serde::Serialize;

use crate::analyzers::types::DailyTotals;

/// Headline numbers over the daily totals of a selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentMetrics {
    pub total: u64,
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub days: usize,
}

impl RentMetrics {
    pub fn from_daily(daily: &DailyTotals) -> Self {
        RentMetrics {
            total: daily.total(),
            min: daily.iter().map(|r| r.total).min(),
            max: daily.iter().map(|r| r.total).max(),
            days: daily.len(),
        }
    }

    /// Average rentals per day, or 0.0 when no days were selected.
    pub fn daily_mean(&self) -> f64 {
        if self.days == 0 {
            0.0
        } else {
            self.total as f64 / self.days as f64
        }
    }
}
