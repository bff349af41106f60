//! Dropdown selector for the precipitation bar chart's year.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_weather::selection::ALL_DATA;

/// Year dropdown: "All Data" followed by every year in the dataset.
/// Writes the raw option value to `selected_year`.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let years = state.years.read().clone();
    let selected = (state.selected_year)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_year.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "year-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Year: "
            }
            select {
                id: "year-select",
                onchange: on_change,
                option {
                    value: ALL_DATA,
                    selected: selected == ALL_DATA,
                    "{ALL_DATA}"
                }
                for year in years.iter() {
                    option {
                        value: "{year}",
                        selected: year.to_string() == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
