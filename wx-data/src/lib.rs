//! Data processing for the weather charts.
//!
//! This crate turns loaded weather records into forms suitable for
//! charting: per-city series, per-city precipitation totals, scales, chart
//! models and the selection views that recompute them.

pub mod aggregation;
pub mod chart;
pub mod grouping;
pub mod scale;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use wx_weather::WeatherRecord;

    pub fn record(city: &str, y: i32, m: u32, d: u32, max_temp: f64, precip: f64) -> WeatherRecord {
        WeatherRecord::new(
            city,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            max_temp,
            precip,
        )
    }

    /// The three-record example: A has 1.0 in 2014 and 2.0 in 2015, B has 5.0 in 2014.
    pub fn example_records() -> Vec<WeatherRecord> {
        vec![
            record("A", 2014, 1, 1, 50.0, 1.0),
            record("A", 2015, 1, 1, 55.0, 2.0),
            record("B", 2014, 6, 1, 80.0, 5.0),
        ]
    }
}
