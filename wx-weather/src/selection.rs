//! Filters driven by the page's year and city dropdowns.
//!
//! Each selector emits a plain string. The sentinel values select the
//! complete dataset; anything else narrows it.

use crate::error::WeatherError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Year selector value meaning "no year filter".
pub const ALL_DATA: &str = "All Data";

/// City selector value meaning "no city filter".
pub const ALL_CITIES: &str = "All Cities";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    pub fn matches(&self, date: &NaiveDate) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(year) => date.year() == *year,
        }
    }
}

impl FromStr for YearFilter {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value == ALL_DATA {
            return Ok(YearFilter::All);
        }
        if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(year) = value.parse::<i32>() {
                return Ok(YearFilter::Year(year));
            }
        }
        Err(WeatherError::InvalidYear(value.to_string()))
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str(ALL_DATA),
            YearFilter::Year(year) => write!(f, "{year}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CityFilter {
    #[default]
    All,
    City(String),
}

impl CityFilter {
    pub fn matches(&self, city: &str) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::City(selected) => selected == city,
        }
    }
}

impl FromStr for CityFilter {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(WeatherError::EmptyCity),
            ALL_CITIES => Ok(CityFilter::All),
            city => Ok(CityFilter::City(city.to_string())),
        }
    }
}

impl fmt::Display for CityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityFilter::All => f.write_str(ALL_CITIES),
            CityFilter::City(city) => f.write_str(city),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_filter_parse() {
        assert_eq!("All Data".parse::<YearFilter>().unwrap(), YearFilter::All);
        assert_eq!("2014".parse::<YearFilter>().unwrap(), YearFilter::Year(2014));
        assert_eq!(" 2015 ".parse::<YearFilter>().unwrap(), YearFilter::Year(2015));
    }

    #[test]
    fn test_year_filter_rejects_garbage() {
        for value in ["", "14", "20145", "twenty", "-201", "all data"] {
            assert!(
                matches!(value.parse::<YearFilter>(), Err(WeatherError::InvalidYear(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_year_filter_matches() {
        let date = NaiveDate::from_ymd_opt(2014, 6, 1).unwrap();
        assert!(YearFilter::All.matches(&date));
        assert!(YearFilter::Year(2014).matches(&date));
        assert!(!YearFilter::Year(2015).matches(&date));
    }

    #[test]
    fn test_year_filter_display_round_trips_selector_value() {
        assert_eq!(YearFilter::All.to_string(), ALL_DATA);
        assert_eq!(YearFilter::Year(2015).to_string(), "2015");
    }

    #[test]
    fn test_city_filter_parse() {
        assert_eq!("All Cities".parse::<CityFilter>().unwrap(), CityFilter::All);
        assert_eq!(
            "Seattle".parse::<CityFilter>().unwrap(),
            CityFilter::City("Seattle".to_string())
        );
        assert!(matches!(
            "  ".parse::<CityFilter>(),
            Err(WeatherError::EmptyCity)
        ));
    }

    #[test]
    fn test_city_filter_matches() {
        let seattle = CityFilter::City("Seattle".to_string());
        assert!(seattle.matches("Seattle"));
        assert!(!seattle.matches("Chicago"));
        assert!(CityFilter::All.matches("Chicago"));
    }
}
