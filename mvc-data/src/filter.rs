//! Predicates driven by the dashboard controls.
//!
//! Every filter borrows from its input and keeps the input order, so the
//! original dataset stays untouched and can feed several chains at once.

use mvc_source::{AffectedType, CollisionRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of the injured-persons slider.
pub const MAX_INJURED_THRESHOLD: u8 = 19;

/// Upper bound of the hour slider.
pub const MAX_HOUR: u8 = 23;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Injured persons threshold {0} is outside 0..=19")]
    InjuredOutOfRange(u8),

    #[error("Hour {0} is outside 0..=23")]
    HourOutOfRange(u8),
}

/// Current values of the dashboard controls. Rebuilt on every interaction.
///
/// Deserializing goes through [`FilterState::new`], so out-of-range values
/// are rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "FilterControls")]
pub struct FilterState {
    min_injured: u8,
    hour: u8,
    affected: AffectedType,
    show_raw: bool,
}

impl FilterState {
    pub fn new(
        min_injured: u8,
        hour: u8,
        affected: AffectedType,
        show_raw: bool,
    ) -> Result<Self, FilterError> {
        if min_injured > MAX_INJURED_THRESHOLD {
            return Err(FilterError::InjuredOutOfRange(min_injured));
        }
        if hour > MAX_HOUR {
            return Err(FilterError::HourOutOfRange(hour));
        }
        Ok(FilterState {
            min_injured,
            hour,
            affected,
            show_raw,
        })
    }

    /// Like [`FilterState::new`] but pins out-of-range values to the nearest
    /// slider bound, for controls that can overshoot.
    pub fn clamped(min_injured: u8, hour: u8, affected: AffectedType, show_raw: bool) -> Self {
        FilterState {
            min_injured: min_injured.min(MAX_INJURED_THRESHOLD),
            hour: hour.min(MAX_HOUR),
            affected,
            show_raw,
        }
    }

    pub fn min_injured(&self) -> u8 {
        self.min_injured
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn affected(&self) -> AffectedType {
        self.affected
    }

    pub fn show_raw(&self) -> bool {
        self.show_raw
    }
}

/// Unvalidated control values, as read from serialized input.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FilterControls {
    pub min_injured: u8,
    pub hour: u8,
    #[serde(default)]
    pub affected: AffectedType,
    #[serde(default)]
    pub show_raw: bool,
}

impl TryFrom<FilterControls> for FilterState {
    type Error = FilterError;

    fn try_from(c: FilterControls) -> Result<Self, Self::Error> {
        FilterState::new(c.min_injured, c.hour, c.affected, c.show_raw)
    }
}

/// Rows with at least `threshold` injured persons.
pub fn with_min_injured<'a, I>(rows: I, threshold: u32) -> Vec<&'a CollisionRecord>
where
    I: IntoIterator<Item = &'a CollisionRecord>,
{
    rows.into_iter()
        .filter(|r| r.injured_persons >= threshold)
        .collect()
}

/// Rows whose crash happened during `hour`.
pub fn in_hour<'a, I>(rows: I, hour: u8) -> Vec<&'a CollisionRecord>
where
    I: IntoIterator<Item = &'a CollisionRecord>,
{
    rows.into_iter()
        .filter(|r| r.hour() == u32::from(hour))
        .collect()
}

/// Rows where at least one person of the `affected` category was injured.
pub fn affected_at_least_one<'a, I>(rows: I, affected: AffectedType) -> Vec<&'a CollisionRecord>
where
    I: IntoIterator<Item = &'a CollisionRecord>,
{
    rows.into_iter()
        .filter(|r| r.injured(affected) >= 1)
        .collect()
}
