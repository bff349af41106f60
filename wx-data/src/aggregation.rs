//! Per-city precipitation totals.

use serde::Serialize;
use std::collections::HashMap;
use wx_weather::{WeatherRecord, YearFilter};

/// Total precipitation for one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityAggregate {
    pub city: String,
    pub sum: f64,
}

/// Sum precipitation per city for the records accepted by `filter`.
///
/// The result is sorted ascending by `sum`. Ties keep the order in which the
/// cities were first encountered. Cities with no surviving record are absent.
pub fn aggregate_precipitation(records: &[WeatherRecord], filter: &YearFilter) -> Vec<CityAggregate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CityAggregate> = Vec::new();
    for record in records.iter().filter(|r| filter.matches(&r.date)) {
        let slot = *index.entry(record.city.as_str()).or_insert_with(|| {
            totals.push(CityAggregate {
                city: record.city.clone(),
                sum: 0.0,
            });
            totals.len() - 1
        });
        totals[slot].sum += record.precipitation;
    }
    totals.sort_by(|a, b| a.sum.total_cmp(&b.sum));
    totals
}

/// Largest sum in an aggregate sequence.
pub fn max_sum(aggregates: &[CityAggregate]) -> Option<f64> {
    aggregates.iter().map(|a| a.sum).reduce(f64::max)
}
