/// Error types for weather data loading and selection
use thiserror::Error;

/// A single CSV row that could not be turned into a `WeatherRecord`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Date field does not match `M/D/YYYY`
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Numeric field could not be parsed
    #[error("invalid number in '{field}': '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// Numeric field parsed to NaN or infinity
    #[error("non-finite value in '{field}': '{value}'")]
    NonFinite { field: &'static str, value: String },

    /// City field is empty
    #[error("missing city")]
    MissingCity,

    /// Row could not be read at all (missing fields, bad encoding)
    #[error("malformed row: {0}")]
    Malformed(String),
}

/// Main error type for weather dataset operations
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Failed to read CSV data
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required CSV column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// Year selector value is neither "All Data" nor a four-digit year
    #[error("Invalid year selection: '{0}'")]
    InvalidYear(String),

    /// City selector value is empty
    #[error("Empty city selection")]
    EmptyCity,
}

/// Type alias for Results using WeatherError
pub type Result<T> = std::result::Result<T, WeatherError>;
