//! Reusable Dioxus RSX components for the weather chart apps.

mod chart_section;
mod city_selector;
mod status;
mod year_selector;

pub use chart_section::ChartSection;
pub use city_selector::CitySelector;
pub use status::{ErrorDisplay, LoadingSpinner, SkippedRowsNotice};
pub use year_selector::YearSelector;
