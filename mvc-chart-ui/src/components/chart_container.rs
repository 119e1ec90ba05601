//! Container div the map and chart renderers draw into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id handed to the renderer
    pub id: String,
    /// Minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

fn container_style(min_height: u32) -> String {
    format!(
        "min-height: {}px; position: relative; width: 100%;",
        min_height
    )
}

/// A positioned div for deck.gl maps and D3.js charts. Page-level loading is
/// shown by `LoadingSpinner` before any container mounts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = container_style(props.min_height);

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; height: {props.min_height}px; position: relative;",
            }
        }
    }
}
