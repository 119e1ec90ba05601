//! Slider for the minimum number of injured persons.

use crate::state::AppState;
use dioxus::prelude::*;
use mvc_data::filter::MAX_INJURED_THRESHOLD;
use mvc_views::labels::INJURED_SLIDER;

/// Range input bound to `AppState::min_injured`.
#[component]
pub fn InjuredSlider() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.min_injured)();

    let on_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<u8>() {
            state.min_injured.set(value.min(MAX_INJURED_THRESHOLD));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "injured-slider",
                style: "font-weight: bold; display: block;",
                "{INJURED_SLIDER}: {current}"
            }
            input {
                id: "injured-slider",
                r#type: "range",
                min: "0",
                max: "{MAX_INJURED_THRESHOLD}",
                value: "{current}",
                style: "width: 100%;",
                oninput: on_input,
            }
        }
    }
}
