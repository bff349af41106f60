//! Chart models: scaled mark coordinates handed to the drawing layer.
//!
//! Every builder takes its [`ChartLayout`] explicitly and returns `None`
//! when there is nothing to draw.

use crate::aggregation::{max_sum, CityAggregate};
use crate::grouping::{group_by_city, CitySeries, Metric};
use crate::scale::{BandScale, LinearScale, OrdinalScale, TimeScale, CITY_PALETTE};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use wx_weather::WeatherRecord;

/// Headroom added above the hottest reading on the temperature chart.
pub const TEMPERATURE_HEADROOM: f64 = 10.0;

/// Upper bound of the precipitation bar chart's y axis.
pub const DEFAULT_BAR_MAX: f64 = 50.0;

/// Inner and outer band padding for the bar chart.
pub const BAR_PADDING: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Margin {
            top: 50.0,
            right: 30.0,
            bottom: 60.0,
            left: 70.0,
        }
    }
}

/// Outer SVG size and the margin reserved for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub margin: Margin,
    pub outer_width: f64,
    pub outer_height: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        ChartLayout {
            margin: Margin::default(),
            outer_width: 900.0,
            outer_height: 400.0,
        }
    }
}

impl ChartLayout {
    pub fn inner_width(&self) -> f64 {
        self.outer_width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f64 {
        self.outer_height - self.margin.top - self.margin.bottom
    }
}

/// How the bar chart's y domain upper bound is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarDomain {
    Fixed(f64),
    FromData,
}

impl Default for BarDomain {
    fn default() -> Self {
        BarDomain::Fixed(DEFAULT_BAR_MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub city: String,
    pub color: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartModel {
    pub layout: ChartLayout,
    pub x_domain: (NaiveDate, NaiveDate),
    pub y_domain: (f64, f64),
    pub series: Vec<LineSeries>,
}

impl LineChartModel {
    /// Daily maximum temperature, one line per city.
    /// The y axis runs from 0 to the hottest reading plus [`TEMPERATURE_HEADROOM`].
    pub fn temperature(records: &[WeatherRecord], layout: &ChartLayout) -> Option<Self> {
        let series = group_by_city(records, Metric::MaxTemp);
        let max_temp = series.iter().filter_map(CitySeries::max_value).reduce(f64::max)?;
        let colors = OrdinalScale::city_colors(series.iter().map(|s| s.city.clone()).collect());
        Self::from_series(&series, &colors, layout, (0.0, max_temp + TEMPERATURE_HEADROOM))
    }

    /// Daily precipitation for the displayed cities.
    /// `colors` should cover every city so a city keeps its colour across selections.
    pub fn precipitation(
        series: &[CitySeries],
        colors: &OrdinalScale<&'static str>,
        layout: &ChartLayout,
    ) -> Option<Self> {
        let max = series.iter().filter_map(CitySeries::max_value).reduce(f64::max)?;
        Self::from_series(series, colors, layout, (0.0, positive_or_one(max)))
    }

    fn from_series(
        series: &[CitySeries],
        colors: &OrdinalScale<&'static str>,
        layout: &ChartLayout,
        y_domain: (f64, f64),
    ) -> Option<Self> {
        let dates = series.iter().flat_map(|s| s.values.iter().map(|p| p.date));
        let (start, end) = dates.fold(None, |acc: Option<(NaiveDate, NaiveDate)>, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })?;

        let x = TimeScale::new((start, end), (0.0, layout.inner_width()));
        let y = LinearScale::new(y_domain, (layout.inner_height(), 0.0));

        let lines = series
            .iter()
            .map(|s| LineSeries {
                city: s.city.clone(),
                color: colors
                    .apply(&s.city)
                    .copied()
                    .unwrap_or(CITY_PALETTE[0])
                    .to_string(),
                points: s
                    .values
                    .iter()
                    .map(|p| Point {
                        x: x.apply(p.date),
                        y: y.apply(p.value),
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        debug!(
            "Line chart: {} series from {} to {}, y {:?}",
            lines.len(),
            start,
            end,
            y_domain
        );
        Some(LineChartModel {
            layout: *layout,
            x_domain: (start, end),
            y_domain,
            series: lines,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub city: String,
    pub sum: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartModel {
    pub layout: ChartLayout,
    pub y_domain: (f64, f64),
    pub bars: Vec<Bar>,
}

impl BarChartModel {
    /// One bar per city, left to right in aggregate (ascending sum) order.
    pub fn precipitation(
        aggregates: &[CityAggregate],
        layout: &ChartLayout,
        domain: BarDomain,
    ) -> Option<Self> {
        let data_max = max_sum(aggregates)?;
        let y_max = match domain {
            BarDomain::Fixed(max) => max,
            BarDomain::FromData => positive_or_one(data_max),
        };
        let height = layout.inner_height();
        let x = BandScale::new(
            aggregates.iter().map(|a| a.city.clone()).collect(),
            (0.0, layout.inner_width()),
        )
        .with_padding(BAR_PADDING);
        let y = LinearScale::new((0.0, y_max), (height, 0.0));

        let bars = aggregates
            .iter()
            .map(|a| {
                let top = y.apply(a.sum);
                Bar {
                    city: a.city.clone(),
                    sum: a.sum,
                    x: x.apply(&a.city).unwrap_or(0.0),
                    y: top,
                    width: x.bandwidth(),
                    height: height - top,
                }
            })
            .collect();

        Some(BarChartModel {
            layout: *layout,
            y_domain: (0.0, y_max),
            bars,
        })
    }
}

// All-zero data still gets a usable axis.
fn positive_or_one(max: f64) -> f64 {
    if max > 0.0 {
        max
    } else {
        1.0
    }
}
