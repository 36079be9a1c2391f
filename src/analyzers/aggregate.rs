use crate::analyzers::types::{
    CategoryTotal, DailyTotals, HolidayTotals, HourTotals, SeasonTotals, SummaryTable,
    WeekdayTotals,
};
use crate::range::DateRange;
use crate::records::{Hour, HourlyRentalRecord, Rental, RentalRecord, Season, Weekday};
use std::collections::BTreeMap;

/// Keeps the records whose date falls inside `range`, bounds included.
pub fn filter_by_date_range<R: Rental + Clone>(records: &[R], range: &DateRange) -> Vec<R> {
    records
        .iter()
        .filter(|r| range.contains(r.date()))
        .cloned()
        .collect()
}

/// Sums counts per calendar date, ascending by date.
///
/// Only dates present in `records` appear; days with no rows are not
/// inserted.
pub fn daily_totals<R: Rental>(records: &[R]) -> DailyTotals {
    let mut by_date: BTreeMap<_, u64> = BTreeMap::new();
    for r in records {
        *by_date.entry(r.date()).or_default() += r.count();
    }

    SummaryTable::from_rows(
        by_date
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect(),
    )
}

pub fn holiday_totals(records: &[RentalRecord]) -> HolidayTotals {
    records
        .iter()
        .fold(HolidayTotals::default(), |mut acc, r| {
            if r.is_holiday() {
                acc.holiday += r.count;
            } else {
                acc.non_holiday += r.count;
            }
            acc
        })
}

/// Sums counts per season. All four seasons are present.
pub fn season_totals(records: &[RentalRecord]) -> SeasonTotals {
    let mut sums = [0u64; 4];
    for r in records {
        sums[u8::from(r.season) as usize - 1] += r.count;
    }

    SummaryTable::from_rows(
        Season::ALL
            .iter()
            .zip(sums)
            .map(|(season, total)| CategoryTotal {
                category: season.label(),
                total,
            })
            .collect(),
    )
}

/// Sums counts per weekday. All seven days are present, Sunday first.
pub fn weekday_totals(records: &[RentalRecord]) -> WeekdayTotals {
    let mut sums = [0u64; 7];
    for r in records {
        sums[r.weekday.index()] += r.count;
    }

    SummaryTable::from_rows(
        Weekday::ALL
            .iter()
            .zip(sums)
            .map(|(weekday, total)| CategoryTotal {
                category: weekday.label(),
                total,
            })
            .collect(),
    )
}

/// Sums counts per hour of day. All 24 hours are present.
pub fn hour_totals(records: &[HourlyRentalRecord]) -> HourTotals {
    let mut sums = [0u64; Hour::COUNT];
    for r in records {
        sums[usize::from(r.hour.get())] += r.count;
    }

    SummaryTable::from_rows(
        (0u8..24)
            .zip(sums)
            .map(|(category, total)| CategoryTotal { category, total })
            .collect(),
    )
}
