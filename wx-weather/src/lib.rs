//! Core types for the weather charts workspace.
//!
//! - `record`: raw CSV rows and the parsed [`record::WeatherRecord`]
//! - `dataset`: loading a CSV into an in-memory [`dataset::Dataset`]
//! - `selection`: year and city filters driven by the page selectors
//! - `error`: error types shared by the above

pub mod dataset;
pub mod error;
pub mod record;
pub mod selection;

pub use dataset::Dataset;
pub use error::{ParseError, Result, WeatherError};
pub use record::WeatherRecord;
pub use selection::{CityFilter, YearFilter};
