//! Selection views: the state behind the year and city dropdowns.
//!
//! A view holds the complete record set and the currently displayed data.
//! Every selection recomputes from the complete set, never from the
//! previous result, and hands the new data to its [`ChartRenderer`] whole.

use crate::aggregation::{aggregate_precipitation, CityAggregate};
use crate::grouping::{group_by_city_filtered, CitySeries, Metric};
use log::info;
use std::rc::Rc;
use wx_weather::{CityFilter, Result, WeatherRecord, YearFilter};

/// Something that draws a dataset and can have it swapped out.
pub trait ChartRenderer<D: ?Sized> {
    /// Discard whatever is drawn and draw `data` instead.
    fn replace_dataset(&mut self, data: &D);
}

/// Precipitation totals per city, optionally restricted to one year.
pub struct YearSelectionView<R> {
    records: Rc<[WeatherRecord]>,
    selection: YearFilter,
    displayed: Vec<CityAggregate>,
    renderer: R,
}

impl<R: ChartRenderer<[CityAggregate]>> YearSelectionView<R> {
    /// Start in the "All Data" state and draw it.
    pub fn new(records: Rc<[WeatherRecord]>, renderer: R) -> Self {
        let mut view = YearSelectionView {
            records,
            selection: YearFilter::All,
            displayed: Vec::new(),
            renderer,
        };
        view.select(YearFilter::All);
        view
    }

    /// Handle a raw selector value ("All Data" or a four-digit year).
    /// Invalid values leave the current state untouched, and re-selecting
    /// the current year does not redraw.
    pub fn on_change(&mut self, value: &str) -> Result<&[CityAggregate]> {
        let filter: YearFilter = value.parse()?;
        if filter == self.selection {
            return Ok(&self.displayed);
        }
        Ok(self.select(filter))
    }

    pub fn select(&mut self, filter: YearFilter) -> &[CityAggregate] {
        self.displayed = aggregate_precipitation(&self.records, &filter);
        self.selection = filter;
        info!(
            "Year selection '{}': {} cities",
            self.selection,
            self.displayed.len()
        );
        self.renderer.replace_dataset(&self.displayed);
        &self.displayed
    }

    pub fn selection(&self) -> YearFilter {
        self.selection
    }

    pub fn displayed(&self) -> &[CityAggregate] {
        &self.displayed
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

/// Daily precipitation series, either for every city or a single one.
pub struct CitySelectionView<R> {
    records: Rc<[WeatherRecord]>,
    selection: CityFilter,
    displayed: Vec<CitySeries>,
    renderer: R,
}

impl<R: ChartRenderer<[CitySeries]>> CitySelectionView<R> {
    /// Start in the "All Cities" state and draw it.
    pub fn new(records: Rc<[WeatherRecord]>, renderer: R) -> Self {
        let mut view = CitySelectionView {
            records,
            selection: CityFilter::All,
            displayed: Vec::new(),
            renderer,
        };
        view.select(CityFilter::All);
        view
    }

    /// Handle a raw selector value ("All Cities" or a city name).
    /// An unknown city displays nothing; an empty value is an error.
    pub fn on_change(&mut self, value: &str) -> Result<&[CitySeries]> {
        let filter: CityFilter = value.parse()?;
        if filter == self.selection {
            return Ok(&self.displayed);
        }
        Ok(self.select(filter))
    }

    pub fn select(&mut self, filter: CityFilter) -> &[CitySeries] {
        self.displayed = group_by_city_filtered(&self.records, Metric::Precipitation, &filter);
        self.selection = filter;
        info!(
            "City selection '{}': {} series",
            self.selection,
            self.displayed.len()
        );
        self.renderer.replace_dataset(&self.displayed);
        &self.displayed
    }

    pub fn selection(&self) -> &CityFilter {
        &self.selection
    }

    pub fn displayed(&self) -> &[CitySeries] {
        &self.displayed
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
