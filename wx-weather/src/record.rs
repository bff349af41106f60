use crate::error::ParseError;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Date format used in the weather CSV: "M/D/YYYY"
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// CSV header names the loader requires.
pub const DATE_COLUMN: &str = "date";
pub const CITY_COLUMN: &str = "city";
pub const MAX_TEMP_COLUMN: &str = "average_max_temp";
pub const PRECIPITATION_COLUMN: &str = "actual_precipitation";

pub const REQUIRED_COLUMNS: [&str; 4] = [
    DATE_COLUMN,
    CITY_COLUMN,
    MAX_TEMP_COLUMN,
    PRECIPITATION_COLUMN,
];

/// A row as it appears in the CSV, every field still a string.
/// Columns other than these four are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawWeatherRow {
    pub date: String,
    pub city: String,
    pub average_max_temp: String,
    pub actual_precipitation: String,
}

/// One day of weather for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub city: String,
    pub date: NaiveDate,
    /// Average daily maximum temperature in °F
    pub max_temp: f64,
    /// Actual precipitation in inches
    pub precipitation: f64,
}

impl WeatherRecord {
    pub fn new(city: impl Into<String>, date: NaiveDate, max_temp: f64, precipitation: f64) -> Self {
        WeatherRecord {
            city: city.into(),
            date,
            max_temp,
            precipitation,
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Parse a "M/D/YYYY" date string.
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| ParseError::InvalidDate {
        value: trimmed.to_string(),
        source,
    })
}

/// Parse a numeric CSV field, rejecting NaN and infinities.
pub fn parse_metric(field: &'static str, value: &str) -> Result<f64, ParseError> {
    let trimmed = value.trim();
    let parsed = trimmed
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        })?;
    if !parsed.is_finite() {
        return Err(ParseError::NonFinite {
            field,
            value: trimmed.to_string(),
        });
    }
    Ok(parsed)
}

impl TryFrom<RawWeatherRow> for WeatherRecord {
    type Error = ParseError;

    fn try_from(row: RawWeatherRow) -> Result<Self, Self::Error> {
        let city = row.city.trim();
        if city.is_empty() {
            return Err(ParseError::MissingCity);
        }
        Ok(WeatherRecord {
            city: city.to_string(),
            date: parse_date(&row.date)?,
            max_temp: parse_metric(MAX_TEMP_COLUMN, &row.average_max_temp)?,
            precipitation: parse_metric(PRECIPITATION_COLUMN, &row.actual_precipitation)?,
        })
    }
}
