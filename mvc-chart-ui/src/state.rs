//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use mvc_data::FilterState;
use mvc_source::{AffectedType, Dataset};
use std::rc::Rc;

/// Shared application state for the collisions dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until the first load finishes)
    pub dataset: Signal<Option<Rc<Dataset>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Injured-persons slider, 0..=19
    pub min_injured: Signal<u8>,
    /// Hour slider, 0..=23
    pub hour: Signal<u8>,
    /// Affected-type dropdown
    pub affected: Signal<AffectedType>,
    /// "Show Raw Data" checkbox
    pub show_raw: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with the controls at their initial values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            min_injured: Signal::new(0),
            hour: Signal::new(0),
            affected: Signal::new(AffectedType::Pedestrians),
            show_raw: Signal::new(false),
        }
    }

    /// Snapshot of the controls. Reading it subscribes the caller to every
    /// control signal.
    pub fn filter(&self) -> FilterState {
        FilterState::clamped(
            (self.min_injured)(),
            (self.hour)(),
            (self.affected)(),
            (self.show_raw)(),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
