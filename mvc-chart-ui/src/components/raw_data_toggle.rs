use crate::state::AppState;
use dioxus::prelude::*;
use mvc_views::labels::RAW_TOGGLE;

/// "Show Raw Data" checkbox.
#[component]
pub fn RawDataToggle() -> Element {
    let mut state = use_context::<AppState>();
    let checked = (state.show_raw)();

    rsx! {
        div {
            style: "margin: 16px 0 8px 0;",
            label {
                style: "font-weight: bold;",
                input {
                    r#type: "checkbox",
                    checked: checked,
                    style: "margin-right: 6px;",
                    onchange: move |_| state.show_raw.set(!checked),
                }
                "{RAW_TOGGLE}"
            }
        }
    }
}
