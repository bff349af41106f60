//! `summary` and `series` subcommands: plain-text and CSV reports on stdout.

use crate::load::load_dataset;
use std::io::Write;
use wx_data::aggregation::{aggregate_precipitation, CityAggregate};
use wx_data::grouping::{group_by_city_filtered, CitySeries, Metric};
use wx_weather::{CityFilter, YearFilter};

/// Date format used for CSV output: "YYYY-MM-DD"
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

pub async fn run_summary(csv_path: &str, year: &str) -> anyhow::Result<()> {
    let filter: YearFilter = year.parse()?;
    let dataset = load_dataset(csv_path).await?;
    let aggregates = aggregate_precipitation(dataset.records(), &filter);
    let stdout = std::io::stdout();
    write_summary(&mut stdout.lock(), &filter, &aggregates)?;
    Ok(())
}

pub async fn run_series(csv_path: &str, city: &str, metric: Metric) -> anyhow::Result<()> {
    let filter: CityFilter = city.parse()?;
    let dataset = load_dataset(csv_path).await?;
    let series = group_by_city_filtered(dataset.records(), metric, &filter);
    if series.is_empty() {
        log::warn!("No records for city '{}'", filter);
    }
    write_series(std::io::stdout().lock(), &series)?;
    Ok(())
}

/// Aligned table of city totals, smallest first.
pub fn write_summary<W: Write>(
    out: &mut W,
    filter: &YearFilter,
    aggregates: &[CityAggregate],
) -> std::io::Result<()> {
    writeln!(out, "Total precipitation ({})", filter)?;
    if aggregates.is_empty() {
        writeln!(out, "  no records")?;
        return Ok(());
    }
    let width = aggregates
        .iter()
        .map(|a| a.city.chars().count())
        .max()
        .unwrap_or(0);
    for aggregate in aggregates {
        writeln!(
            out,
            "  {:<width$}  {:>8.2} in",
            aggregate.city,
            aggregate.sum,
            width = width
        )?;
    }
    Ok(())
}

/// `city,date,value` rows in series order.
pub fn write_series<W: Write>(out: W, series: &[CitySeries]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["city", "date", "value"])?;
    for city_series in series {
        for point in &city_series.values {
            let date = point.date.format(OUTPUT_DATE_FORMAT).to_string();
            let value = point.value.to_string();
            wtr.write_record([city_series.city.as_str(), date.as_str(), value.as_str()])?;
        }
    }
    wtr.flush()?;
    Ok(())
}
