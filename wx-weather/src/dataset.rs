//! Loading the weather CSV into memory.
//!
//! The whole file is parsed once; rows that fail to parse are skipped with a
//! warning and kept on the [`Dataset`] so callers can report them.

use crate::error::{ParseError, Result, WeatherError};
use crate::record::{RawWeatherRow, WeatherRecord, REQUIRED_COLUMNS};
use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, StringRecord};
use log::{info, warn};
use std::collections::{BTreeSet, HashSet};
use std::io::Read;
use std::path::Path;

/// A CSV row that was skipped during loading.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the source CSV
    pub line: u64,
    pub error: ParseError,
}

/// The loaded, read-only record collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<WeatherRecord>,
    skipped: Vec<SkippedRow>,
}

impl Dataset {
    /// Build a dataset from already-parsed records.
    pub fn from_records(records: Vec<WeatherRecord>) -> Self {
        Dataset {
            records,
            skipped: Vec::new(),
        }
    }

    /// Parse a CSV string (with a header row) into a dataset.
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Open and parse a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| WeatherError::Csv(csv::Error::from(e)))?;
        Self::from_reader(file)
    }

    /// Parse CSV from any reader. Fails only when the header row is missing
    /// a required column or cannot be read; bad data rows are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        check_headers(&headers)?;

        let mut dataset = Dataset::default();
        for result in rdr.records() {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    dataset.skip(line, ParseError::Malformed(e.to_string()));
                    continue;
                }
            };
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            match parse_row(&row, &headers) {
                Ok(record) => dataset.records.push(record),
                Err(error) => dataset.skip(line, error),
            }
        }

        info!(
            "Loaded {} weather records ({} skipped)",
            dataset.records.len(),
            dataset.skipped.len()
        );
        Ok(dataset)
    }

    fn skip(&mut self, line: u64, error: ParseError) {
        warn!("Skipping CSV line {}: {}", line, error);
        self.skipped.push(SkippedRow { line, error });
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<WeatherRecord> {
        self.records
    }

    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct city names in first-encounter order.
    pub fn cities(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.city.as_str()))
            .map(|r| r.city.clone())
            .collect()
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.date.year())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Earliest and latest date, or `None` for an empty dataset.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        date_extent(&self.records)
    }

    /// Largest maximum temperature across all records.
    pub fn max_temp(&self) -> Option<f64> {
        self.records.iter().map(|r| r.max_temp).reduce(f64::max)
    }
}

/// Earliest and latest date among `records`.
pub fn date_extent(records: &[WeatherRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let min = records.iter().map(|r| r.date).min()?;
    let max = records.iter().map(|r| r.date).max()?;
    Some((min, max))
}

fn check_headers(headers: &StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(WeatherError::MissingColumn(column));
        }
    }
    Ok(())
}

fn parse_row(row: &StringRecord, headers: &StringRecord) -> std::result::Result<WeatherRecord, ParseError> {
    let raw: RawWeatherRow = row
        .deserialize(Some(headers))
        .map_err(|e| ParseError::Malformed(e.to_string()))?;
    raw.try_into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
date,actual_mean_temp,city,average_max_temp,actual_precipitation
7/1/2014,81,Charlotte,88,0.5
7/1/2014,70,Seattle,75,0.0
7/2/2014,80,Charlotte,88,1.25
1/15/2015,40,Seattle,47,0.3
";

    #[test]
    fn test_load_csv() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        assert_eq!(dataset.len(), 4);
        assert!(dataset.skipped().is_empty());
        assert_eq!(dataset.records()[0].city, "Charlotte");
        assert_eq!(dataset.records()[2].precipitation, 1.25);
    }

    #[test]
    fn test_cities_in_encounter_order() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        assert_eq!(dataset.cities(), vec!["Charlotte", "Seattle"]);
    }

    #[test]
    fn test_years_ascending() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        assert_eq!(dataset.years(), vec![2014, 2015]);
    }

    #[test]
    fn test_extent_and_max_temp() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let (start, end) = dataset.date_extent().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2014, 7, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2015, 1, 15).unwrap());
        assert_eq!(dataset.max_temp(), Some(88.0));
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let csv_data = "\
date,city,average_max_temp,actual_precipitation
7/1/2014,Charlotte,88,0.5
2014-07-02,Charlotte,88,0.5
7/3/2014,Charlotte,hot,0.5
7/4/2014,Charlotte
7/5/2014,Charlotte,90,0.1
";
        let dataset = Dataset::from_csv_str(csv_data).unwrap();
        assert_eq!(dataset.len(), 2);
        let lines: Vec<u64> = dataset.skipped().iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert!(matches!(
            dataset.skipped()[0].error,
            ParseError::InvalidDate { .. }
        ));
        assert!(matches!(
            dataset.skipped()[1].error,
            ParseError::InvalidNumber { .. }
        ));
        assert!(matches!(dataset.skipped()[2].error, ParseError::Malformed(_)));
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "date,city,average_max_temp\n7/1/2014,Charlotte,88\n";
        let result = Dataset::from_csv_str(csv_data);
        assert!(matches!(
            result,
            Err(WeatherError::MissingColumn("actual_precipitation"))
        ));
    }

    #[test]
    fn test_load_fixture() {
        let dataset = Dataset::from_csv_str(include_str!("../../fixtures/weather.csv")).unwrap();
        assert_eq!(dataset.len(), 318);
        assert!(dataset.skipped().is_empty());
        assert_eq!(dataset.cities().len(), 6);
        assert_eq!(dataset.years(), vec![2014, 2015]);
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("wx-weather-{}-from-path.csv", std::process::id()));
        std::fs::write(&path, CSV).unwrap();
        let dataset = Dataset::from_path(&path).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.cities(), vec!["Charlotte", "Seattle"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Dataset::from_path("/nonexistent/weather.csv");
        assert!(matches!(result, Err(WeatherError::Csv(_))));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_csv_str("date,city,average_max_temp,actual_precipitation\n").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.date_extent(), None);
        assert_eq!(dataset.max_temp(), None);
        assert!(dataset.cities().is_empty());
    }
}
