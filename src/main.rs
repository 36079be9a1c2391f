//! CLI entry point for the bike rental report.
//!
//! Loads the daily and hourly rental tables, resolves the selected date
//! range, and prints or exports the summary views for it.

use anyhow::Result;
use bike_rental_report::analyzers::report::{Dataset, Report};
use bike_rental_report::output::{export_report, print_pretty, render_text, to_json};
use bike_rental_report::parser::load_daily;
use bike_rental_report::range::DateRange;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bike_rental_report")]
#[command(about = "Summary statistics over the bike sharing dataset", long_about = None)]
struct Cli {
    /// Daily rental table
    #[arg(long, env = "BIKE_DAY_CSV", default_value = "day_data.csv", global = true)]
    day_csv: PathBuf,

    /// Hourly rental table
    #[arg(long, env = "BIKE_HOUR_CSV", default_value = "hour_data.csv", global = true)]
    hour_csv: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Selection {
    /// First day of the range (YYYY-MM-DD), defaults to the first day in the data
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day of the range (YYYY-MM-DD), requires --start
    #[arg(long)]
    end: Option<NaiveDate>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary views for a date range
    Report {
        #[command(flatten)]
        selection: Selection,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the date span covered by the daily table
    Span,
    /// Write each summary table to a CSV file
    Export {
        #[command(flatten)]
        selection: Selection,

        /// Directory to write the CSV files to
        #[arg(short, long, default_value = "report")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { selection, format } => {
            let dataset = Dataset::load(&cli.day_csv, &cli.hour_csv)?;
            let Some(range) = dataset.resolve_selection(selection.start, selection.end)? else {
                return Ok(());
            };
            let report = Report::build(&dataset, range);
            print_pretty(&report);

            match format {
                Format::Text => print!("{}", render_text(&report)),
                Format::Json => println!("{}", to_json(&report)?),
            }
        }
        Commands::Span => {
            let daily = load_daily(&cli.day_csv)?;
            match DateRange::spanning(daily.iter().map(|r| r.date)) {
                Some(span) => {
                    println!("{} {} ({} days)", span.start(), span.end(), span.num_days())
                }
                None => warn!("Daily table is empty"),
            }
        }
        Commands::Export {
            selection,
            output_dir,
        } => {
            let dataset = Dataset::load(&cli.day_csv, &cli.hour_csv)?;
            let Some(range) = dataset.resolve_selection(selection.start, selection.end)? else {
                return Ok(());
            };
            let report = Report::build(&dataset, range);
            for path in export_report(&output_dir, &report)? {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bike_rental_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bike_rental_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}
