//! Mapping domain values to pixel positions and colours.
//!
//! These follow the D3 scale semantics the drawing layer expects:
//! linear and time scales interpolate, band scales divide a range into
//! evenly padded slots, ordinal scales cycle through a fixed palette.

use chrono::{Datelike, NaiveDate};

/// Colours assigned to cities, in domain order, wrapping around.
pub const CITY_PALETTE: [&str; 6] = [
    "#4285F4", "#EA4335", "#FBBC05", "#34A853", "#FF6D01", "#00B9E6",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range. A zero-width domain maps
    /// everything to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Map a range value back into the domain.
    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }
}

/// Linear scale over calendar days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let (start, end) = domain;
        TimeScale {
            start,
            end,
            inner: LinearScale::new((day_number(start), day_number(end)), range),
        }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    pub fn apply(&self, date: NaiveDate) -> f64 {
        self.inner.apply(day_number(date))
    }
}

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Evenly spaced bands for categorical keys (one bar per city).
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64)) -> Self {
        BandScale {
            domain,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
        }
    }

    /// Set inner and outer padding together, as a fraction of the step.
    pub fn with_padding(mut self, padding: f64) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        self.padding_inner = padding;
        self.padding_outer = padding;
        self
    }

    pub fn with_padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self
    }

    pub fn with_padding_outer(mut self, padding: f64) -> Self {
        self.padding_outer = padding.max(0.0);
        self
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let (lo, hi) = self.bounds();
        (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Start position of the band for `key`, or `None` if it is not in the domain.
    pub fn apply(&self, key: &str) -> Option<f64> {
        let index = self.domain.iter().position(|k| k == key)?;
        let n = self.domain.len();
        let (lo, hi) = self.bounds();
        let step = self.step();
        let start = lo + (hi - lo - step * (n as f64 - self.padding_inner)) * self.align;
        let slot = if self.range.1 < self.range.0 {
            n - 1 - index
        } else {
            index
        };
        Some(start + step * slot as f64)
    }

    fn bounds(&self) -> (f64, f64) {
        let (r0, r1) = self.range;
        if r1 < r0 {
            (r1, r0)
        } else {
            (r0, r1)
        }
    }
}

/// Categorical keys to values, cycling through `range` when the domain is longer.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale<T> {
    domain: Vec<String>,
    range: Vec<T>,
}

impl<T> OrdinalScale<T> {
    pub fn new(domain: Vec<String>, range: Vec<T>) -> Self {
        OrdinalScale { domain, range }
    }

    pub fn apply(&self, key: &str) -> Option<&T> {
        if self.range.is_empty() {
            return None;
        }
        let index = self.domain.iter().position(|k| k == key)?;
        self.range.get(index % self.range.len())
    }
}

impl OrdinalScale<&'static str> {
    /// Colour scale over `cities` using [`CITY_PALETTE`].
    pub fn city_colors(cities: Vec<String>) -> Self {
        OrdinalScale::new(cities, CITY_PALETTE.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_linear_apply_and_invert() {
        let y = LinearScale::new((0.0, 100.0), (290.0, 0.0));
        assert!(approx(y.apply(0.0), 290.0));
        assert!(approx(y.apply(100.0), 0.0));
        assert!(approx(y.apply(50.0), 145.0));
        assert!(approx(y.invert(145.0), 50.0));
    }

    #[test]
    fn test_linear_degenerate_domain() {
        let y = LinearScale::new((5.0, 5.0), (0.0, 200.0));
        assert!(approx(y.apply(5.0), 100.0));
        assert!(approx(y.apply(42.0), 100.0));
    }

    #[test]
    fn test_time_scale() {
        let start = NaiveDate::from_ymd_opt(2014, 7, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2014, 7, 11).unwrap();
        let x = TimeScale::new((start, end), (0.0, 800.0));
        assert!(approx(x.apply(start), 0.0));
        assert!(approx(x.apply(end), 800.0));
        let mid = NaiveDate::from_ymd_opt(2014, 7, 6).unwrap();
        assert!(approx(x.apply(mid), 400.0));
    }

    #[test]
    fn test_band_no_padding() {
        let x = BandScale::new(keys(&["A", "B"]), (0.0, 100.0));
        assert!(approx(x.step(), 50.0));
        assert!(approx(x.bandwidth(), 50.0));
        assert_eq!(x.apply("A"), Some(0.0));
        assert_eq!(x.apply("B"), Some(50.0));
        assert_eq!(x.apply("C"), None);
    }

    #[test]
    fn test_band_with_padding() {
        let x = BandScale::new(keys(&["A", "B"]), (0.0, 100.0)).with_padding(0.1);
        let step = 100.0 / 2.1;
        assert!(approx(x.step(), step));
        assert!(approx(x.bandwidth(), step * 0.9));
        let start = (100.0 - step * 1.9) / 2.0;
        assert!(approx(x.apply("A").unwrap(), start));
        assert!(approx(x.apply("B").unwrap(), start + step));
    }

    #[test]
    fn test_band_reversed_range() {
        let x = BandScale::new(keys(&["A", "B"]), (100.0, 0.0));
        assert_eq!(x.apply("A"), Some(50.0));
        assert_eq!(x.apply("B"), Some(0.0));
    }

    #[test]
    fn test_band_empty_domain() {
        let x = BandScale::new(Vec::new(), (0.0, 100.0));
        assert!(approx(x.step(), 100.0));
        assert_eq!(x.apply("A"), None);
    }

    #[test]
    fn test_ordinal_cycles_palette() {
        let names: Vec<String> = (0..8).map(|i| format!("City {i}")).collect();
        let color = OrdinalScale::city_colors(names);
        assert_eq!(color.apply("City 0"), Some(&"#4285F4"));
        assert_eq!(color.apply("City 5"), Some(&"#00B9E6"));
        assert_eq!(color.apply("City 6"), Some(&"#4285F4"));
        assert_eq!(color.apply("Elsewhere"), None);
    }
}
