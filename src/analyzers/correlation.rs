use crate::analyzers::utility::pearson;
use crate::records::RentalRecord;
use serde::Serialize;

/// Columns of the daily table that take part in the correlation matrix.
pub const CORRELATION_COLUMNS: [&str; 6] = [
    "season",
    "weathersit",
    "holiday",
    "workingday",
    "weekday",
    "cnt",
];

/// Pairwise Pearson coefficients between daily columns.
///
/// `values[i][j]` relates `columns[i]` and `columns[j]`; `None` where the
/// coefficient is undefined (fewer than two rows, or a constant column).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<&'static str>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| *c == a)?;
        let j = self.columns.iter().position(|c| *c == b)?;
        self.values[i][j]
    }
}

fn column(records: &[RentalRecord], name: &str) -> Vec<f64> {
    records
        .iter()
        .map(|r| match name {
            "season" => f64::from(u8::from(r.season)),
            "weathersit" => f64::from(r.weathersit),
            "holiday" => f64::from(r.holiday),
            "workingday" => f64::from(r.workingday),
            "weekday" => f64::from(u8::from(r.weekday)),
            _ => r.count as f64,
        })
        .collect()
}

pub fn correlation_matrix(records: &[RentalRecord]) -> CorrelationMatrix {
    let series: Vec<Vec<f64>> = CORRELATION_COLUMNS
        .iter()
        .map(|name| column(records, name))
        .collect();

    let values = series
        .iter()
        .map(|x| series.iter().map(|y| pearson(x, y)).collect())
        .collect();

    CorrelationMatrix {
        columns: CORRELATION_COLUMNS.to_vec(),
        values,
    }
}
