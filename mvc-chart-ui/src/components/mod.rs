//! Reusable Dioxus RSX components for the collisions dashboard.

mod affected_selector;
mod chart_container;
mod chart_header;
mod error_display;
mod hour_slider;
mod injured_slider;
mod loading_spinner;
mod raw_data_toggle;

pub use affected_selector::AffectedSelector;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use hour_slider::HourSlider;
pub use injured_slider::InjuredSlider;
pub use loading_spinner::LoadingSpinner;
pub use raw_data_toggle::RawDataToggle;
