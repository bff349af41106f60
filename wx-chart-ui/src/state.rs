//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wx_weather::selection::{ALL_CITIES, ALL_DATA};

/// Shared application state for the weather dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Number of CSV rows skipped while loading
    pub skipped_rows: Signal<usize>,
    /// Year selector value ("All Data" or a four-digit year)
    pub selected_year: Signal<String>,
    /// City selector value ("All Cities" or a city name)
    pub selected_city: Signal<String>,
    /// Years present in the dataset, ascending
    pub years: Signal<Vec<i32>>,
    /// Cities present in the dataset, in CSV order
    pub cities: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            skipped_rows: Signal::new(0),
            selected_year: Signal::new(ALL_DATA.to_string()),
            selected_city: Signal::new(ALL_CITIES.to_string()),
            years: Signal::new(Vec::new()),
            cities: Signal::new(Vec::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
