//! Shared Dioxus components and map/chart bridge for the collisions dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the deck.gl and D3.js render functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (sliders, selectors, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
