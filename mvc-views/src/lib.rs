//! Presentation adapter for the collisions dashboard.
//!
//! Shapes filtered and aggregated collision data into the structures the
//! external renderers expect: a 2D scatter map, a 3D hexagon layer, a
//! per-minute bar chart and tables.

pub mod dashboard;
pub mod labels;
pub mod models;

pub use dashboard::build_views;
pub use models::DashboardViews;
