//! Dropdown selector for the affected type of people.

use crate::state::AppState;
use dioxus::prelude::*;
use mvc_source::AffectedType;
use mvc_views::labels::AFFECTED_SELECT;

/// Affected-type dropdown. Updates `AppState::affected` on change.
#[component]
pub fn AffectedSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.affected)();
    let options: Vec<(&'static str, bool)> = AffectedType::ALL
        .iter()
        .map(|a| (a.label(), *a == selected))
        .collect();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<AffectedType>() {
        Ok(affected) => state.affected.set(affected),
        Err(e) => log::warn!("{}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "affected-select",
                style: "font-weight: bold; margin-right: 8px;",
                "{AFFECTED_SELECT}: "
            }
            select {
                id: "affected-select",
                onchange: on_change,
                for (label, is_selected) in options {
                    option {
                        value: "{label}",
                        selected: is_selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
