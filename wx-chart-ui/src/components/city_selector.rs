//! Dropdown selector for the precipitation line chart's city.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_weather::selection::ALL_CITIES;

#[component]
pub fn CitySelector() -> Element {
    let mut state = use_context::<AppState>();
    let cities = state.cities.read().clone();
    let selected = (state.selected_city)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_city.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "city-select",
                style: "font-weight: bold; margin-right: 8px;",
                "City: "
            }
            select {
                id: "city-select",
                onchange: on_change,
                option {
                    value: ALL_CITIES,
                    selected: selected == ALL_CITIES,
                    "{ALL_CITIES}"
                }
                for city in cities.iter() {
                    option {
                        value: "{city}",
                        selected: *city == selected,
                        "{city}"
                    }
                }
            }
        }
    }
}
