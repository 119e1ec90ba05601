//! Motor Vehicle Collisions dashboard
//!
//! An interactive view of New York City motor vehicle collisions:
//! - a 2D map of crashes with at least N injured persons
//! - a 3D hexagon density map of crashes during a chosen hour
//! - a per-minute breakdown of that hour
//! - the top 5 dangerous streets for pedestrians, cyclists or motorists
//! - an optional raw table of the hour's rows
//!
//! Data flow:
//! 1. `build.rs` copies `collisions.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded once through a `DatasetCache`.
//! 4. Every control change rebuilds the views with `build_views()` and hands
//!    them to the deck.gl and D3.js renderers.

use dioxus::prelude::*;
use mvc_cache::DatasetCache;
use mvc_chart_ui::components::{
    AffectedSelector, ChartContainer, ChartHeader, ErrorDisplay, HourSlider, InjuredSlider,
    LoadingSpinner, RawDataToggle,
};
use mvc_chart_ui::js_bridge;
use mvc_chart_ui::state::AppState;
use mvc_source::{StaticSource, DEFAULT_ROWS};
use mvc_views::labels::TITLE;
use mvc_views::models::{BarChartConfig, DEFAULT_CENTER, MAP_STYLE};
use mvc_views::{build_views, DashboardViews};

/// Collision sample bundled at build time.
const COLLISIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/collisions.csv"));

/// Container DOM element IDs the renderers draw into.
const MAP_ID: &str = "collisions-map";
const HEXAGON_ID: &str = "collisions-hexagon-map";
const MINUTE_CHART_ID: &str = "collisions-minute-chart";
const RANKING_TABLE_ID: &str = "collisions-ranking-table";
const RAW_TABLE_ID: &str = "collisions-raw-table";

/// Zoom of the flat 2D map.
const MAP_ZOOM: u8 = 10;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("collisions-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let cache = use_hook(|| DatasetCache::new(StaticSource::new(COLLISIONS_CSV)));

    // Load the dataset once on mount
    use_future(move || {
        let cache = cache.clone();
        async move {
            match cache.load(DEFAULT_ROWS).await {
                Ok(dataset) => {
                    log::info!(
                        "[MVC] loaded {} collisions ({} dropped)",
                        dataset.len(),
                        dataset.dropped()
                    );
                    state.dataset.set(Some(dataset));
                }
                Err(e) => {
                    log::error!("Failed to load collisions: {}", e);
                    state.error_msg.set(Some(e.to_string()));
                }
            }
            state.loading.set(false);
        }
    });

    // Recomputed whenever the dataset or a control changes
    let views = use_memo(move || {
        let filter = state.filter();
        state
            .dataset
            .read()
            .as_ref()
            .map(|dataset| build_views(dataset, &filter))
    });

    // Render maps and charts after the views change
    use_effect(move || {
        if let Some(views) = &*views.read() {
            js_bridge::init_charts();
            render_views(views);
        }
    });

    let labels = views.read().as_ref().map(|v| v.labels.clone());
    let show_raw = (state.show_raw)();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 { style: "font-size: 24px;", "{TITLE}" }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else if let Some(labels) = labels {
                ChartHeader { title: labels.map_header.to_string() }
                InjuredSlider {}
                ChartContainer { id: MAP_ID.to_string(), min_height: 450 }

                ChartHeader { title: labels.hour_header.to_string() }
                HourSlider {}
                ChartHeader { title: labels.hour_window.clone() }
                ChartContainer { id: HEXAGON_ID.to_string(), min_height: 500 }

                ChartHeader { title: labels.minute_breakdown.clone() }
                ChartContainer { id: MINUTE_CHART_ID.to_string(), min_height: BarChartConfig::default().height }

                ChartHeader { title: labels.ranking_header.to_string() }
                AffectedSelector {}
                ChartContainer { id: RANKING_TABLE_ID.to_string(), min_height: 160 }

                RawDataToggle {}
                if show_raw {
                    ChartHeader {
                        title: labels.raw_header.to_string(),
                        subtitle: labels.raw_count.clone().unwrap_or_default(),
                    }
                    ChartContainer { id: RAW_TABLE_ID.to_string(), min_height: 200 }
                }
            }
        }
    }
}

/// Hand every view to its renderer.
fn render_views(views: &DashboardViews) {
    let map_config = serde_json::json!({
        "mapStyle": MAP_STYLE,
        "initialViewState": {
            "latitude": DEFAULT_CENTER.latitude,
            "longitude": DEFAULT_CENTER.longitude,
            "zoom": MAP_ZOOM,
            "pitch": 0,
        },
    });
    if let (Some(data), Some(config)) = (
        js_bridge::to_json(&views.map),
        js_bridge::to_json(&map_config),
    ) {
        js_bridge::render_scatter_map(MAP_ID, &data, &config);
    }

    if !views.deck.centered {
        log::info!("[MVC] no collisions in hour {}", views.filter.hour());
    }
    if let Some(deck) = js_bridge::to_json(&views.deck) {
        js_bridge::render_hexagon_map(HEXAGON_ID, &deck);
    }

    if let (Some(data), Some(config)) = (
        js_bridge::to_json(&views.histogram),
        js_bridge::to_json(&BarChartConfig::default()),
    ) {
        js_bridge::render_bar_chart(MINUTE_CHART_ID, &data, &config);
    }

    if let (Some(data), Some(config)) = (
        js_bridge::to_json(&views.ranking.rows),
        js_bridge::to_json(&views.ranking.table_config()),
    ) {
        js_bridge::render_data_table(RANKING_TABLE_ID, &data, &config);
    }

    match &views.raw {
        Some(raw) => {
            if let Some(data) = js_bridge::to_json(&raw.rows) {
                js_bridge::render_data_table(RAW_TABLE_ID, &data, "{}");
            }
        }
        None => js_bridge::destroy_chart(RAW_TABLE_ID),
    }
}
