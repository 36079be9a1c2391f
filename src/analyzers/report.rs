use crate::analyzers::aggregate::{
    daily_totals, filter_by_date_range, holiday_totals, hour_totals, season_totals,
    weekday_totals,
};
use crate::analyzers::correlation::{CorrelationMatrix, correlation_matrix};
use crate::analyzers::types::{DailyTotals, HolidayTotals, HourTotals, SeasonTotals, WeekdayTotals};
use crate::parser::{load_daily, load_hourly};
use crate::range::{DateRange, RangeError, RangeSelection};
use crate::records::{HourlyRentalRecord, RentalRecord};
use crate::stats::RentMetrics;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// Both source tables, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub daily: Vec<RentalRecord>,
    pub hourly: Vec<HourlyRentalRecord>,
}

impl Dataset {
    pub fn new(daily: Vec<RentalRecord>, hourly: Vec<HourlyRentalRecord>) -> Self {
        Self { daily, hourly }
    }

    pub fn load(daily_path: &Path, hourly_path: &Path) -> Result<Self> {
        let daily = load_daily(daily_path)?;
        let hourly = load_hourly(hourly_path)?;
        info!(
            daily_rows = daily.len(),
            hourly_rows = hourly.len(),
            "Dataset loaded"
        );
        Ok(Self { daily, hourly })
    }

    /// Full span of the daily table, the default selection.
    pub fn span(&self) -> Option<DateRange> {
        DateRange::spanning(self.daily.iter().map(|r| r.date))
    }

    /// Resolves picked endpoints against this dataset.
    ///
    /// Returns `Ok(None)` when only a start date was picked: the selection
    /// is unfinished and nothing should be aggregated yet. No endpoints
    /// select the full span.
    pub fn resolve_selection(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Option<DateRange>, RangeError> {
        let selection = RangeSelection::from_endpoints(start, end)?;

        if let RangeSelection::Partial(start) = selection {
            warn!(%start, "Only a start date was selected; pick an end date to finish the range");
            return Ok(None);
        }

        let range = selection.resolve(self.span())?;
        info!(
            start = %range.start(),
            end = %range.end(),
            days = range.num_days(),
            "Date range selected"
        );
        Ok(Some(range))
    }
}

/// Everything displayed for one date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub range: DateRange,
    pub metrics: RentMetrics,
    pub daily: DailyTotals,
    pub holiday: HolidayTotals,
    pub seasons: SeasonTotals,
    pub weekdays: WeekdayTotals,
    pub hours: HourTotals,
    pub correlation: CorrelationMatrix,
}

impl Report {
    #[tracing::instrument(skip(dataset), fields(start = %range.start(), end = %range.end()))]
    pub fn build(dataset: &Dataset, range: DateRange) -> Self {
        let days = filter_by_date_range(&dataset.daily, &range);
        let hours = filter_by_date_range(&dataset.hourly, &range);
        info!(
            daily_rows = days.len(),
            hourly_rows = hours.len(),
            "Records selected"
        );

        let daily = daily_totals(&days);

        Report {
            range,
            metrics: RentMetrics::from_daily(&daily),
            holiday: holiday_totals(&days),
            seasons: season_totals(&days),
            weekdays: weekday_totals(&days),
            hours: hour_totals(&hours),
            correlation: correlation_matrix(&days),
            daily,
        }
    }
}
