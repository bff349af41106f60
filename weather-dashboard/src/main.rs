//! Weather Dashboard
//!
//! Three D3.js charts over one weather CSV:
//! - daily max temperature per city (static)
//! - total precipitation per city, filtered by a year dropdown
//! - daily precipitation per city, filtered by a city dropdown
//!
//! Data flow:
//! 1. `build.rs` checks `fixtures/weather.csv` and copies it into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse once into a shared record set, draw the temperature
//!    chart, and build the two selection views (which draw their initial state).
//! 4. On selector change: the matching view recomputes from the full record
//!    set and replaces its chart's dataset.

use std::rc::Rc;
use wx_chart_ui::components::{
    ChartSection, CitySelector, ErrorDisplay, LoadingSpinner, SkippedRowsNotice, YearSelector,
};
use wx_chart_ui::renderer::{render_temperature_chart, D3BarChart, D3PrecipitationChart};
use wx_chart_ui::state::AppState;
use wx_data::chart::{BarDomain, ChartLayout};
use wx_data::view::{CitySelectionView, YearSelectionView};
use wx_weather::{Dataset, WeatherRecord};
use dioxus::prelude::*;

const WEATHER_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/weather.csv"));

/// DOM ids for the three D3 chart containers.
const TEMPERATURE_CHART_ID: &str = "temperature-line-chart";
const PRECIPITATION_BAR_CHART_ID: &str = "precipitation-bar-chart";
const PRECIPITATION_LINE_CHART_ID: &str = "precipitation-line-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weather-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut year_view: Signal<Option<YearSelectionView<D3BarChart>>> = use_signal(|| None);
    let mut city_view: Signal<Option<CitySelectionView<D3PrecipitationChart>>> =
        use_signal(|| None);

    // ─── Effect 1: Parse CSV once on mount ───
    use_effect(move || {
        let dataset = match Dataset::from_csv_str(WEATHER_CSV) {
            Ok(dataset) => dataset,
            Err(e) => {
                log::error!("Failed to load weather data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load weather data: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        state.skipped_rows.set(dataset.skipped().len());
        if dataset.is_empty() {
            state.error_msg.set(Some("No weather data available.".to_string()));
            state.loading.set(false);
            return;
        }

        let cities = dataset.cities();
        state.years.set(dataset.years());
        state.cities.set(cities.clone());

        let layout = ChartLayout::default();
        let records: Rc<[WeatherRecord]> = dataset.into_records().into();

        render_temperature_chart(TEMPERATURE_CHART_ID, &records, &layout);
        year_view.set(Some(YearSelectionView::new(
            Rc::clone(&records),
            D3BarChart::new(PRECIPITATION_BAR_CHART_ID, layout, BarDomain::default()),
        )));
        city_view.set(Some(CitySelectionView::new(
            records,
            D3PrecipitationChart::new(PRECIPITATION_LINE_CHART_ID, layout, cities),
        )));

        state.loading.set(false);
    });

    // ─── Effect 2: Year dropdown drives the bar chart ───
    use_effect(move || {
        let year = (state.selected_year)();
        if (state.loading)() {
            return;
        }
        if let Some(view) = &mut *year_view.write() {
            if let Err(e) = view.on_change(&year) {
                log::warn!("Ignoring year selection: {}", e);
            }
        }
    });

    // ─── Effect 3: City dropdown drives the precipitation line chart ───
    use_effect(move || {
        let city = (state.selected_city)();
        if (state.loading)() {
            return;
        }
        if let Some(view) = &mut *city_view.write() {
            if let Err(e) = view.on_change(&city) {
                log::warn!("Ignoring city selection: {}", e);
            }
        }
    });

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                SkippedRowsNotice { count: (state.skipped_rows)() }

                ChartSection {
                    id: TEMPERATURE_CHART_ID.to_string(),
                    title: "Daily Max Temperature by City".to_string(),
                    y_axis_label: "Max Temp (°F)".to_string(),
                }

                ChartSection {
                    id: PRECIPITATION_BAR_CHART_ID.to_string(),
                    title: "Total Precipitation by City".to_string(),
                    y_axis_label: "Precipitation (in)".to_string(),
                    YearSelector {}
                }

                ChartSection {
                    id: PRECIPITATION_LINE_CHART_ID.to_string(),
                    title: "Daily Precipitation".to_string(),
                    y_axis_label: "Precipitation (in)".to_string(),
                    CitySelector {}
                }
            }
        }
    }
}
