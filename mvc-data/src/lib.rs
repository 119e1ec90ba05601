//! Filtering and aggregation of collision records.
//!
//! This crate turns a loaded [`mvc_source::Dataset`] and the current
//! [`filter::FilterState`] into the numbers the dashboard views need.
//! Nothing here allocates records; everything works on borrowed rows.

pub mod aggregate;
pub mod filter;

pub use aggregate::{midpoint, minute_histogram, top_streets, Midpoint, StreetRank, TOP_N};
pub use filter::{FilterControls, FilterError, FilterState};
