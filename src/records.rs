//! Typed rows of the daily and hourly rental tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field value outside the domain the tables are defined over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("season must be in 1..=4, got {0}")]
    Season(u8),
    #[error("{field} must be 0 or 1, got {value}")]
    Flag { field: &'static str, value: u8 },
    #[error("weekday must be in 0..=6, got {0}")]
    Weekday(u8),
    #[error("weathersit must be in 1..=4, got {0}")]
    Weather(u8),
    #[error("hr must be in 0..=23, got {0}")]
    Hour(u8),
}

/// Meteorological season as encoded in the `season` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Fall = 3,
    Winter = 4,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Label shown in reports. Season 1 keeps the dataset's "Springer" spelling.
    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Springer",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl TryFrom<u8> for Season {
    type Error = SchemaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Season::Spring),
            2 => Ok(Season::Summer),
            3 => Ok(Season::Fall),
            4 => Ok(Season::Winter),
            other => Err(SchemaError::Season(other)),
        }
    }
}

impl From<Season> for u8 {
    fn from(season: Season) -> Self {
        season as u8
    }
}

/// Day of week as encoded in the `weekday` column, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Weekday {
    type Error = SchemaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Weekday::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(SchemaError::Weekday(value))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday as u8
    }
}

/// Hour of day, always in `0..24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    pub const COUNT: usize = 24;

    pub fn new(hour: u8) -> Result<Self, SchemaError> {
        if usize::from(hour) < Self::COUNT {
            Ok(Hour(hour))
        } else {
            Err(SchemaError::Hour(hour))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Hour {
    type Error = SchemaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Hour::new(value)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

/// Anything that carries a calendar date and a rental count.
pub trait Rental {
    fn date(&self) -> NaiveDate;
    fn count(&self) -> u64;
}

/// One row of the daily table (`day_data.csv`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    pub season: Season,
    pub holiday: u8,
    pub workingday: u8,
    pub weekday: Weekday,
    pub weathersit: u8,
    #[serde(rename = "cnt")]
    pub count: u64,
}

/// One row of the hourly table (`hour_data.csv`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRentalRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    pub season: Season,
    pub holiday: u8,
    pub workingday: u8,
    pub weekday: Weekday,
    pub weathersit: u8,
    #[serde(rename = "hr")]
    pub hour: Hour,
    #[serde(rename = "cnt")]
    pub count: u64,
}

fn check_common(holiday: u8, workingday: u8, weathersit: u8) -> Result<(), SchemaError> {
    if holiday > 1 {
        return Err(SchemaError::Flag {
            field: "holiday",
            value: holiday,
        });
    }
    if workingday > 1 {
        return Err(SchemaError::Flag {
            field: "workingday",
            value: workingday,
        });
    }
    if !(1..=4).contains(&weathersit) {
        return Err(SchemaError::Weather(weathersit));
    }
    Ok(())
}

impl RentalRecord {
    /// Checks the integer-coded columns against their domains.
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_common(self.holiday, self.workingday, self.weathersit)
    }

    pub fn is_holiday(&self) -> bool {
        self.holiday == 1
    }
}

impl HourlyRentalRecord {
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_common(self.holiday, self.workingday, self.weathersit)
    }
}

impl Rental for RentalRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Rental for HourlyRentalRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn count(&self) -> u64 {
        self.count
    }
}
