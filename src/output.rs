//! Output formatting and persistence for rental reports.
//!
//! Supports plain-text rendering, JSON serialization, and CSV export of the
//! individual summary tables.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::{Display, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyzers::report::Report;
use crate::analyzers::types::SummaryTable;
use csv::WriterBuilder;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &Report) {
    debug!("{:#?}", report);
}

/// Serializes a report as pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn or_dash(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn write_section<K: Display>(out: &mut String, title: &str, table: &SummaryTable<K>) {
    let _ = writeln!(out, "\n{title}");
    for row in table {
        let _ = writeln!(out, "  {:<12} {:>10}", row.category.to_string(), row.total);
    }
}

/// Renders a report as a human-readable text block.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Rent Bike Report {} .. {}",
        report.range.start(),
        report.range.end()
    );
    let _ = writeln!(out, "\nDaily Rents");
    let _ = writeln!(out, "  Total Rent Bike  {}", report.metrics.total);
    let _ = writeln!(out, "  Min Rent Bike    {}", or_dash(report.metrics.min));
    let _ = writeln!(out, "  Max Rent Bike    {}", or_dash(report.metrics.max));
    let _ = writeln!(out, "  Mean Rent Bike   {:.1}", report.metrics.daily_mean());
    let _ = writeln!(out, "\nHoliday");
    let _ = writeln!(out, "  Non-Holiday      {}", report.holiday.non_holiday);
    let _ = writeln!(out, "  Holiday          {}", report.holiday.holiday);

    write_section(&mut out, "Daily Rents by Season", &report.seasons);
    write_section(&mut out, "Daily Rents by Day in Week", &report.weekdays);
    write_section(&mut out, "Daily Rents by Hour in a Day", &report.hours);

    let _ = writeln!(out, "\nCorrelation");
    let _ = write!(out, "  {:<12}", "");
    for column in &report.correlation.columns {
        let _ = write!(out, " {column:>10}");
    }
    let _ = writeln!(out);
    for (column, row) in report.correlation.columns.iter().zip(&report.correlation.values) {
        let _ = write!(out, "  {column:<12}");
        for value in row {
            match value {
                Some(v) => {
                    let _ = write!(out, " {v:>10.2}");
                }
                None => {
                    let _ = write!(out, " {:>10}", "-");
                }
            }
        }
        let _ = writeln!(out);
    }

    write_section(&mut out, "Daily Series", &report.daily);

    out
}

/// Writes a summary table to `path` as CSV with a `category,total` header.
///
/// Overwrites any existing file.
pub fn write_table<K: Serialize>(path: &Path, table: &SummaryTable<K>) -> Result<()> {
    debug!(path = %path.display(), rows = table.len(), "Writing CSV table");

    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for row in table {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes every summary table of `report` into `dir`, one CSV per table.
///
/// Returns the paths written.
pub fn export_report(dir: &Path, report: &Report) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let daily = dir.join("daily_totals.csv");
    let seasons = dir.join("season_totals.csv");
    let weekdays = dir.join("weekday_totals.csv");
    let hours = dir.join("hour_totals.csv");
    let holiday = dir.join("holiday_totals.csv");

    write_table(&daily, &report.daily)?;
    write_table(&seasons, &report.seasons)?;
    write_table(&weekdays, &report.weekdays)?;
    write_table(&hours, &report.hours)?;

    let mut writer = WriterBuilder::new()
        .from_path(&holiday)
        .with_context(|| format!("creating {}", holiday.display()))?;
    writer.serialize(report.holiday)?;
    writer.flush()?;

    info!(dir = %dir.display(), "Report exported");
    Ok(vec![daily, seasons, weekdays, hours, holiday])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::report::Dataset;
    use crate::range::DateRange;
    use crate::records::{Hour, HourlyRentalRecord, RentalRecord, Season, Weekday};
    use chrono::NaiveDate;
    use std::env;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn report() -> Report {
        let date = NaiveDate::from_ymd_opt(2012, 12, 31).unwrap();
        let daily = vec![RentalRecord {
            date,
            season: Season::Spring,
            holiday: 0,
            workingday: 1,
            weekday: Weekday::Monday,
            weathersit: 2,
            count: 2729,
        }];
        let hourly = vec![HourlyRentalRecord {
            date,
            season: Season::Spring,
            holiday: 0,
            workingday: 1,
            weekday: Weekday::Monday,
            weathersit: 2,
            hour: Hour::new(23).unwrap(),
            count: 49,
        }];
        let range = DateRange::new(date, date).unwrap();
        Report::build(&Dataset::new(daily, hourly), range)
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&report());
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metrics"]["total"], 2729);
        assert_eq!(value["holiday"]["non_holiday"], 2729);
        assert_eq!(value["weekdays"][1]["category"], "Monday");
        assert_eq!(value["hours"][23]["total"], 49);
        assert_eq!(value["daily"][0]["category"], "2012-12-31");
        assert_eq!(value["range"]["start"], "2012-12-31");
        // a single row has no defined correlation
        assert!(value["correlation"]["values"][5][5].is_null());
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&report());

        assert!(text.contains("Total Rent Bike  2729"));
        assert!(text.contains("Mean Rent Bike   2729.0"));
        assert!(text.contains("Springer"));
        assert!(text.contains("Saturday"));
        assert!(text.contains("2012-12-31"));
        assert_eq!(
            text.lines().filter(|l| l.trim_start().starts_with("Monday")).count(),
            1
        );
    }

    #[test]
    fn test_render_text_empty_selection() {
        let data = Dataset::default();
        let day = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        let text = render_text(&Report::build(&data, DateRange::new(day, day).unwrap()));

        assert!(text.contains("Min Rent Bike    -"));
        assert!(text.contains("Mean Rent Bike   0.0"));
        assert!(text.contains("Holiday          0"));
    }

    #[test]
    fn test_write_table_header_and_rows() {
        let path = temp_path("bike_rental_report_test_hours.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        write_table(&path, &report().hours).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "category,total");
        // 1 header + 24 hours
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[24], "23,49");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_export_report_writes_every_table() {
        let dir = temp_path("bike_rental_report_test_export");
        let _ = fs::remove_dir_all(&dir);

        let paths = export_report(&dir, &report()).unwrap();
        assert_eq!(paths.len(), 5);
        assert!(paths.iter().all(|p| p.exists()));

        let holiday = fs::read_to_string(dir.join("holiday_totals.csv")).unwrap();
        assert_eq!(holiday.lines().collect::<Vec<_>>(), vec!["non_holiday,holiday", "2729,0"]);

        let seasons = fs::read_to_string(dir.join("season_totals.csv")).unwrap();
        assert!(seasons.contains("Springer,2729"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
