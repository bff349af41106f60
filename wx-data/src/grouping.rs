//! Partition records into one ordered series per city.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use wx_weather::{CityFilter, WeatherRecord};

/// Which measurement a series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    MaxTemp,
    Precipitation,
}

impl Metric {
    pub fn value(&self, record: &WeatherRecord) -> f64 {
        match self {
            Metric::MaxTemp => record.max_temp,
            Metric::Precipitation => record.precipitation,
        }
    }
}

/// A single (date, value) pair in a city's series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// All of one city's values, in input row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitySeries {
    pub city: String,
    pub values: Vec<SeriesPoint>,
}

impl CitySeries {
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().map(|p| p.value).reduce(f64::max)
    }
}

/// Group records by city. Cities appear in first-encounter order and each
/// series keeps the original row order.
pub fn group_by_city(records: &[WeatherRecord], metric: Metric) -> Vec<CitySeries> {
    group_by_city_filtered(records, metric, &CityFilter::All)
}

/// Group records by city, keeping only cities accepted by `filter`.
pub fn group_by_city_filtered(
    records: &[WeatherRecord],
    metric: Metric,
    filter: &CityFilter,
) -> Vec<CitySeries> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut result: Vec<CitySeries> = Vec::new();
    for record in records.iter().filter(|r| filter.matches(&r.city)) {
        let slot = *index.entry(record.city.as_str()).or_insert_with(|| {
            result.push(CitySeries {
                city: record.city.clone(),
                values: Vec::new(),
            });
            result.len() - 1
        });
        result[slot].values.push(SeriesPoint {
            date: record.date,
            value: metric.value(record),
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{example_records, record};
    use std::collections::BTreeSet;

    #[test]
    fn test_group_example() {
        let series = group_by_city(&example_records(), Metric::Precipitation);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].city, "A");
        assert_eq!(
            series[0].values.iter().map(|p| p.value).collect::<Vec<_>>(),
            vec![1.0, 2.0]
        );
        assert_eq!(series[1].city, "B");
        assert_eq!(series[1].values.len(), 1);
    }

    #[test]
    fn test_group_keeps_row_order_not_date_order() {
        let records = vec![
            record("A", 2015, 3, 1, 60.0, 0.0),
            record("A", 2014, 3, 1, 61.0, 0.0),
        ];
        let series = group_by_city(&records, Metric::MaxTemp);
        assert_eq!(series[0].values[0].value, 60.0);
        assert_eq!(series[0].values[1].value, 61.0);
    }

    #[test]
    fn test_no_record_dropped_or_duplicated() {
        let records = vec![
            record("Seattle", 2014, 7, 1, 75.0, 0.1),
            record("Chicago", 2014, 7, 1, 84.0, 0.0),
            record("Seattle", 2014, 7, 2, 76.0, 0.2),
            record("Houston", 2014, 7, 1, 93.0, 1.1),
            record("Chicago", 2014, 7, 2, 83.0, 0.4),
        ];
        let series = group_by_city(&records, Metric::Precipitation);
        let total: usize = series.iter().map(|s| s.values.len()).sum();
        assert_eq!(total, records.len());

        let grouped: BTreeSet<&str> = series.iter().map(|s| s.city.as_str()).collect();
        let input: BTreeSet<&str> = records.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(grouped, input);
        assert_eq!(grouped.len(), series.len());
    }

    #[test]
    fn test_group_filtered_by_city() {
        let filter = CityFilter::City("B".to_string());
        let series = group_by_city_filtered(&example_records(), Metric::Precipitation, &filter);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].city, "B");
        assert_eq!(series[0].values[0].value, 5.0);
    }

    #[test]
    fn test_group_unknown_city_is_empty() {
        let filter = CityFilter::City("Nowhere".to_string());
        let series = group_by_city_filtered(&example_records(), Metric::Precipitation, &filter);
        assert!(series.is_empty());
    }

    #[test]
    fn test_max_value() {
        let series = group_by_city(&example_records(), Metric::MaxTemp);
        assert_eq!(series[0].max_value(), Some(55.0));
    }
}
