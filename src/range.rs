//! Date range selection.
//!
//! A [`RangeSelection`] models what the user has picked so far. Only a
//! [`RangeSelection::Complete`] selection (or an unset one, which falls back
//! to the dataset span) resolves to a [`DateRange`] the aggregator accepts.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
    #[error("end date {end} given without a start date")]
    MissingStart { end: NaiveDate },
    #[error("only the start date {start} has been selected")]
    Incomplete { start: NaiveDate },
    #[error("no records to derive a default date range from")]
    NoData,
}

/// Inclusive date interval with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range from the earliest to the latest of `dates`, or `None` if empty.
    pub fn spanning<I>(dates: I) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut iter = dates.into_iter();
        let first = iter.next()?;
        let (start, end) = iter.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// The user's current, possibly unfinished, choice of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSelection {
    /// Nothing picked yet; the full dataset span applies.
    Unset,
    /// Only the first endpoint has been picked.
    Partial(NaiveDate),
    Complete(DateRange),
}

impl RangeSelection {
    pub fn from_endpoints(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, RangeError> {
        match (start, end) {
            (None, None) => Ok(RangeSelection::Unset),
            (Some(start), None) => Ok(RangeSelection::Partial(start)),
            (None, Some(end)) => Err(RangeError::MissingStart { end }),
            (Some(start), Some(end)) => Ok(RangeSelection::Complete(DateRange::new(start, end)?)),
        }
    }

    pub fn is_complete(&self) -> bool {
        !matches!(self, RangeSelection::Partial(_))
    }

    /// Turns the selection into a concrete range, using `span` when unset.
    pub fn resolve(&self, span: Option<DateRange>) -> Result<DateRange, RangeError> {
        match *self {
            RangeSelection::Unset => span.ok_or(RangeError::NoData),
            RangeSelection::Partial(start) => Err(RangeError::Incomplete { start }),
            RangeSelection::Complete(range) => Ok(range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let err = DateRange::new(d(2012, 1, 2), d(2012, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            RangeError::Inverted {
                start: d(2012, 1, 2),
                end: d(2012, 1, 1)
            }
        );
    }

    #[test]
    fn test_single_day_range_contains_its_day() {
        let range = DateRange::new(d(2012, 3, 4), d(2012, 3, 4)).unwrap();
        assert!(range.contains(d(2012, 3, 4)));
        assert!(!range.contains(d(2012, 3, 5)));
        assert_eq!(range.num_days(), 1);
    }

    #[test]
    fn test_spanning() {
        assert_eq!(DateRange::spanning(Vec::new()), None);

        let span = DateRange::spanning(vec![d(2011, 5, 1), d(2011, 1, 1), d(2011, 3, 1)]).unwrap();
        assert_eq!(span.start(), d(2011, 1, 1));
        assert_eq!(span.end(), d(2011, 5, 1));
    }

    #[test]
    fn test_selection_from_endpoints() {
        assert_eq!(
            RangeSelection::from_endpoints(None, None),
            Ok(RangeSelection::Unset)
        );
        assert_eq!(
            RangeSelection::from_endpoints(Some(d(2011, 1, 1)), None),
            Ok(RangeSelection::Partial(d(2011, 1, 1)))
        );
        assert_eq!(
            RangeSelection::from_endpoints(None, Some(d(2011, 1, 1))),
            Err(RangeError::MissingStart { end: d(2011, 1, 1) })
        );
        assert!(RangeSelection::from_endpoints(Some(d(2011, 2, 1)), Some(d(2011, 1, 1))).is_err());
    }

    #[test]
    fn test_resolve() {
        let span = DateRange::new(d(2011, 1, 1), d(2012, 12, 31)).unwrap();

        assert_eq!(RangeSelection::Unset.resolve(Some(span)), Ok(span));
        assert_eq!(RangeSelection::Unset.resolve(None), Err(RangeError::NoData));

        let partial = RangeSelection::Partial(d(2011, 6, 1));
        assert!(!partial.is_complete());
        assert_eq!(
            partial.resolve(Some(span)),
            Err(RangeError::Incomplete { start: d(2011, 6, 1) })
        );

        let picked = DateRange::new(d(2011, 6, 1), d(2011, 6, 30)).unwrap();
        assert_eq!(RangeSelection::Complete(picked).resolve(Some(span)), Ok(picked));
    }
}
