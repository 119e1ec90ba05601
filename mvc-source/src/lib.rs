//! Loading and normalization of the NYC motor vehicle collisions dataset.
//!
//! - [`loader`]: header validation, row limit and date/time merging
//! - [`normalize`]: coordinate filtering, column renaming and typing
//! - [`source`]: the [`source::CollisionSource`] seam and the composed load step
//! - `http` (feature `api`): the remote CSV export

pub mod columns;
pub mod dataset;
pub mod error;
#[cfg(feature = "api")]
pub mod http;
pub mod loader;
pub mod normalize;
pub mod record;
pub mod source;

pub use dataset::Dataset;
pub use error::{CollisionError, Result};
pub use record::{AffectedType, CollisionRecord};
pub use source::{load_dataset, CollisionSource, StaticSource, DATA_URL, DEFAULT_ROWS};
