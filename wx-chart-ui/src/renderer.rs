//! `ChartRenderer` implementations that build chart models and draw them
//! through the D3 bridge. Each renderer owns its container and layout; the
//! bridge empties the container right before each draw.

use crate::js_bridge;
use serde_json::json;
use wx_data::aggregation::CityAggregate;
use wx_data::chart::{BarChartModel, BarDomain, ChartLayout, LineChartModel};
use wx_data::grouping::CitySeries;
use wx_data::scale::OrdinalScale;
use wx_data::view::ChartRenderer;
use wx_weather::WeatherRecord;

/// Draw the max temperature line chart once. It has no selector.
pub fn render_temperature_chart(container_id: &str, records: &[WeatherRecord], layout: &ChartLayout) {
    match LineChartModel::temperature(records, layout) {
        Some(model) => {
            let config = json!({
                "title": "Daily Max Temperature by City",
                "yAxisLabel": "Max Temp (°F)",
                "dateFormat": "%m/%d/%Y",
            });
            draw_line(container_id, &model, &config);
        }
        None => js_bridge::destroy_chart(container_id),
    }
}

fn draw_line(container_id: &str, model: &LineChartModel, config: &serde_json::Value) {
    let model_json = serde_json::to_string(model).unwrap_or_default();
    js_bridge::render_line_chart(container_id, &model_json, &config.to_string());
}

/// Precipitation totals bar chart, redrawn on each year selection.
pub struct D3BarChart {
    container_id: &'static str,
    layout: ChartLayout,
    domain: BarDomain,
}

impl D3BarChart {
    pub fn new(container_id: &'static str, layout: ChartLayout, domain: BarDomain) -> Self {
        D3BarChart {
            container_id,
            layout,
            domain,
        }
    }
}

impl ChartRenderer<[CityAggregate]> for D3BarChart {
    fn replace_dataset(&mut self, data: &[CityAggregate]) {
        let Some(model) = BarChartModel::precipitation(data, &self.layout, self.domain) else {
            log::info!("No precipitation totals to draw in {}", self.container_id);
            js_bridge::destroy_chart(self.container_id);
            return;
        };
        let model_json = serde_json::to_string(&model).unwrap_or_default();
        let config = json!({
            "title": "Total Precipitation by City",
            "yAxisLabel": "Precipitation (in)",
        });
        js_bridge::render_bar_chart(self.container_id, &model_json, &config.to_string());
    }
}

/// Daily precipitation line chart, redrawn on each city selection.
pub struct D3PrecipitationChart {
    container_id: &'static str,
    layout: ChartLayout,
    colors: OrdinalScale<&'static str>,
}

impl D3PrecipitationChart {
    /// `cities` is every city in the dataset, so colours stay stable when
    /// only one city is shown.
    pub fn new(container_id: &'static str, layout: ChartLayout, cities: Vec<String>) -> Self {
        D3PrecipitationChart {
            container_id,
            layout,
            colors: OrdinalScale::city_colors(cities),
        }
    }
}

impl ChartRenderer<[CitySeries]> for D3PrecipitationChart {
    fn replace_dataset(&mut self, data: &[CitySeries]) {
        let Some(model) = LineChartModel::precipitation(data, &self.colors, &self.layout) else {
            log::info!("No precipitation series to draw in {}", self.container_id);
            js_bridge::destroy_chart(self.container_id);
            return;
        };
        let config = json!({
            "title": "Daily Precipitation",
            "yAxisLabel": "Precipitation (in)",
            "dateFormat": "%m/%d/%Y",
        });
        draw_line(self.container_id, &model, &config);
    }
}
