//! `export` subcommand: the three chart models as one JSON document.

use crate::load::{load_dataset, load_layout};
use anyhow::Context;
use log::info;
use serde::Serialize;
use wx_data::aggregation::aggregate_precipitation;
use wx_data::chart::{BarChartModel, BarDomain, ChartLayout, LineChartModel};
use wx_data::grouping::{group_by_city_filtered, Metric};
use wx_data::scale::OrdinalScale;
use wx_weather::{CityFilter, Dataset, YearFilter};

pub struct ExportOptions {
    pub year: String,
    pub city: String,
    pub layout_path: Option<String>,
    pub derive_bar_domain: bool,
}

/// Everything the drawing layer needs for one page state.
#[derive(Debug, Serialize)]
pub struct ChartExport {
    pub year: String,
    pub city: String,
    pub skipped_rows: usize,
    pub temperature: Option<LineChartModel>,
    pub precipitation_totals: Option<BarChartModel>,
    pub precipitation_series: Option<LineChartModel>,
}

pub async fn run_export(csv_path: &str, out_path: &str, options: &ExportOptions) -> anyhow::Result<()> {
    let year: YearFilter = options.year.parse()?;
    let city: CityFilter = options.city.parse()?;
    let layout = load_layout(options.layout_path.as_deref()).await?;
    let dataset = load_dataset(csv_path).await?;

    let domain = if options.derive_bar_domain {
        BarDomain::FromData
    } else {
        BarDomain::default()
    };
    let export = build_export(&dataset, &year, &city, &layout, domain);
    let json = serde_json::to_string_pretty(&export)?;
    tokio::fs::write(out_path, json)
        .await
        .with_context(|| format!("Failed to write {}", out_path))?;

    info!("Chart export complete. Output: {}", out_path);
    Ok(())
}

pub fn build_export(
    dataset: &Dataset,
    year: &YearFilter,
    city: &CityFilter,
    layout: &ChartLayout,
    domain: BarDomain,
) -> ChartExport {
    let records = dataset.records();
    let colors = OrdinalScale::city_colors(dataset.cities());
    let aggregates = aggregate_precipitation(records, year);
    let series = group_by_city_filtered(records, Metric::Precipitation, city);

    ChartExport {
        year: year.to_string(),
        city: city.to_string(),
        skipped_rows: dataset.skipped().len(),
        temperature: LineChartModel::temperature(records, layout),
        precipitation_totals: BarChartModel::precipitation(&aggregates, layout, domain),
        precipitation_series: LineChartModel::precipitation(&series, &colors, layout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
date,city,average_max_temp,actual_precipitation
1/1/2014,A,50,1.0
1/1/2015,A,55,2.0
6/1/2014,B,80,5.0
6/2/2014,B,81,oops
";

    #[test]
    fn test_build_export_all() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let export = build_export(
            &dataset,
            &YearFilter::All,
            &CityFilter::All,
            &ChartLayout::default(),
            BarDomain::default(),
        );
        assert_eq!(export.year, "All Data");
        assert_eq!(export.city, "All Cities");
        assert_eq!(export.skipped_rows, 1);

        let bars = export.precipitation_totals.unwrap().bars;
        let sums: Vec<(&str, f64)> = bars.iter().map(|b| (b.city.as_str(), b.sum)).collect();
        assert_eq!(sums, vec![("A", 3.0), ("B", 5.0)]);

        assert_eq!(export.temperature.unwrap().y_domain, (0.0, 90.0));
        assert_eq!(export.precipitation_series.unwrap().series.len(), 2);
    }

    #[test]
    fn test_build_export_filtered() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let export = build_export(
            &dataset,
            &YearFilter::Year(2015),
            &CityFilter::City("B".to_string()),
            &ChartLayout::default(),
            BarDomain::FromData,
        );
        let totals = export.precipitation_totals.unwrap();
        assert_eq!(totals.bars.len(), 1);
        assert_eq!(totals.y_domain, (0.0, 2.0));

        let series = export.precipitation_series.unwrap().series;
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].city, "B");
        assert_eq!(series[0].color, "#EA4335");
    }

    #[test]
    fn test_build_export_unknown_city_has_no_series_chart() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let export = build_export(
            &dataset,
            &YearFilter::All,
            &CityFilter::City("Atlantis".to_string()),
            &ChartLayout::default(),
            BarDomain::default(),
        );
        assert!(export.precipitation_series.is_none());
        assert!(export.precipitation_totals.is_some());
    }
}
