use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::columns;

/// The category of people affected by a collision, as offered in the
/// "Affected type of people" dropdown.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
pub enum AffectedType {
    #[default]
    Pedestrians,
    Cyclists,
    Motorists,
}

impl AffectedType {
    /// Dropdown order.
    pub const ALL: [AffectedType; 3] = [
        AffectedType::Pedestrians,
        AffectedType::Cyclists,
        AffectedType::Motorists,
    ];

    /// Label shown in the dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            AffectedType::Pedestrians => "Pedestrians",
            AffectedType::Cyclists => "Cyclists",
            AffectedType::Motorists => "Motorists",
        }
    }

    /// Canonical column holding this category's injury count.
    pub fn column(&self) -> &'static str {
        match self {
            AffectedType::Pedestrians => columns::INJURED_PEDESTRIANS,
            AffectedType::Cyclists => columns::INJURED_CYCLISTS,
            AffectedType::Motorists => columns::INJURED_MOTORISTS,
        }
    }
}

impl fmt::Display for AffectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no affected type.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownAffectedType(pub String);

impl fmt::Display for UnknownAffectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown affected type `{}` (expected pedestrians, cyclists or motorists)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAffectedType {}

impl FromStr for AffectedType {
    type Err = UnknownAffectedType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pedestrians" | "pedestrian" => Ok(AffectedType::Pedestrians),
            "cyclists" | "cyclist" => Ok(AffectedType::Cyclists),
            "motorists" | "motorist" => Ok(AffectedType::Motorists),
            _ => Err(UnknownAffectedType(s.to_string())),
        }
    }
}

/// A single collision event after normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionRecord {
    /// Crash date and time merged into one value.
    #[serde(rename = "date/time")]
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub injured_persons: u32,
    pub injured_pedestrians: u32,
    pub injured_cyclists: u32,
    pub injured_motorists: u32,
    #[serde(rename = "on street name")]
    pub on_street_name: Option<String>,
    /// Every other column, keyed by its normalized name.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl CollisionRecord {
    /// A record at the given time and place with no injuries recorded.
    pub fn new(timestamp: NaiveDateTime, latitude: f64, longitude: f64) -> Self {
        CollisionRecord {
            timestamp,
            latitude,
            longitude,
            injured_persons: 0,
            injured_pedestrians: 0,
            injured_cyclists: 0,
            injured_motorists: 0,
            on_street_name: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.on_street_name = Some(street.into());
        self
    }

    /// Set the injury count of one category. The persons total is raised to
    /// at least the sum of the three categories.
    pub fn with_injured(mut self, affected: AffectedType, count: u32) -> Self {
        match affected {
            AffectedType::Pedestrians => self.injured_pedestrians = count,
            AffectedType::Cyclists => self.injured_cyclists = count,
            AffectedType::Motorists => self.injured_motorists = count,
        }
        let categories = self
            .injured_pedestrians
            .saturating_add(self.injured_cyclists)
            .saturating_add(self.injured_motorists);
        self.injured_persons = self.injured_persons.max(categories);
        self
    }

    pub fn with_injured_persons(mut self, count: u32) -> Self {
        self.injured_persons = count;
        self
    }

    /// Injury count for the given category.
    pub fn injured(&self, affected: AffectedType) -> u32 {
        match affected {
            AffectedType::Pedestrians => self.injured_pedestrians,
            AffectedType::Cyclists => self.injured_cyclists,
            AffectedType::Motorists => self.injured_motorists,
        }
    }

    /// Hour of day (0-23) of the crash.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Minute of the hour (0-59) of the crash.
    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }
}
