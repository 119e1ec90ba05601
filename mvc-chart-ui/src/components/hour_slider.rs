//! Slider for the hour of day.

use crate::state::AppState;
use dioxus::prelude::*;
use mvc_data::filter::MAX_HOUR;
use mvc_views::labels::HOUR_SLIDER;

/// Range input bound to `AppState::hour`.
#[component]
pub fn HourSlider() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.hour)();

    let on_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<u8>() {
            state.hour.set(value.min(MAX_HOUR));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "hour-slider",
                style: "font-weight: bold; display: block;",
                "{HOUR_SLIDER}: {current}"
            }
            input {
                id: "hour-slider",
                r#type: "range",
                min: "0",
                max: "{MAX_HOUR}",
                value: "{current}",
                style: "width: 100%;",
                oninput: on_input,
            }
        }
    }
}
