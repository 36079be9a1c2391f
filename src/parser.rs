//! CSV loader for the daily and hourly rental tables.
//!
//! Rows are deserialized straight into the typed records, so a missing
//! column or an unparseable value fails the load instead of producing
//! silently wrong aggregates later on.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::records::{HourlyRentalRecord, RentalRecord, SchemaError};

fn read_rows<T, R, F>(reader: R, validate: F) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
    F: Fn(&T) -> Result<(), SchemaError>,
{
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (i, result) in rdr.deserialize().enumerate() {
        // header is line 1
        let line = i + 2;
        let record: T = result.with_context(|| format!("malformed row at line {line}"))?;
        validate(&record).with_context(|| format!("invalid row at line {line}"))?;
        rows.push(record);
    }

    Ok(rows)
}

/// Parses daily records from any CSV source with a header row.
pub fn parse_daily<R: Read>(reader: R) -> Result<Vec<RentalRecord>> {
    read_rows(reader, RentalRecord::validate)
}

/// Parses hourly records from any CSV source with a header row.
pub fn parse_hourly<R: Read>(reader: R) -> Result<Vec<HourlyRentalRecord>> {
    read_rows(reader, HourlyRentalRecord::validate)
}

#[tracing::instrument]
pub fn load_daily(path: &Path) -> Result<Vec<RentalRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let rows = parse_daily(file).with_context(|| format!("loading {}", path.display()))?;
    debug!(rows = rows.len(), "Daily table loaded");
    Ok(rows)
}

#[tracing::instrument]
pub fn load_hourly(path: &Path) -> Result<Vec<HourlyRentalRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let rows = parse_hourly(file).with_context(|| format!("loading {}", path.display()))?;
    debug!(rows = rows.len(), "Hourly table loaded");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Season, Weekday};
    use chrono::NaiveDate;

    const DAY_HEADER: &str =
        "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt\n";

    #[test]
    fn test_parse_daily_ignores_extra_columns() {
        let csv = format!(
            "{DAY_HEADER}1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985\n\
             2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801\n"
        );

        let rows = parse_daily(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(rows[0].season, Season::Spring);
        assert_eq!(rows[0].weekday, Weekday::Saturday);
        assert_eq!(rows[1].count, 801);
    }

    #[test]
    fn test_parse_daily_empty_table() {
        let rows = parse_daily(DAY_HEADER.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_daily_rejects_missing_column() {
        let csv = "dteday,season,holiday,weekday,workingday,cnt\n2011-01-01,1,0,6,0,985\n";
        assert!(parse_daily(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_daily_rejects_bad_season() {
        let csv = "dteday,season,holiday,weekday,workingday,weathersit,cnt\n2011-01-01,5,0,6,0,1,985\n";
        let err = parse_daily(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn test_parse_daily_rejects_bad_flag() {
        let csv = "dteday,season,holiday,weekday,workingday,weathersit,cnt\n\
                   2011-01-01,1,0,6,0,1,985\n\
                   2011-01-02,1,3,0,0,1,801\n";
        let err = parse_daily(csv.as_bytes()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("line 3"));
        assert!(message.contains("holiday"));
    }

    #[test]
    fn test_parse_hourly() {
        let csv = "dteday,season,holiday,weekday,workingday,weathersit,hr,cnt\n\
                   2011-01-01,1,0,6,0,1,0,16\n\
                   2011-01-01,1,0,6,0,1,1,40\n";
        let rows = parse_hourly(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].hour.get(), 1);
        assert_eq!(rows[1].count, 40);
    }

    #[test]
    fn test_parse_hourly_rejects_hour_out_of_range() {
        let csv = "dteday,season,holiday,weekday,workingday,weathersit,hr,cnt\n2011-01-01,1,0,6,0,1,24,16\n";
        assert!(parse_hourly(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_daily_missing_file() {
        let path = std::env::temp_dir().join("bike_rental_report_does_not_exist.csv");
        assert!(load_daily(&path).is_err());
    }
}
