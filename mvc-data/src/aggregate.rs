//! Aggregations over filtered collision rows.

use crate::filter::affected_at_least_one;
use mvc_source::{AffectedType, CollisionRecord};
use serde::Serialize;

/// Number of minute buckets in the per-hour histogram.
pub const MINUTES_PER_HOUR: usize = 60;

/// Length of the dangerous-streets ranking.
pub const TOP_N: usize = 5;

/// Added to the mean position so the tilted initial 3D view frames the
/// points (latitude, longitude).
pub const VIEW_OFFSET: (f64, f64) = (0.2, -0.5);

/// Mean position of a set of collisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Midpoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl Midpoint {
    /// The midpoint shifted by [`VIEW_OFFSET`].
    pub fn view_center(&self) -> Midpoint {
        Midpoint {
            latitude: self.latitude + VIEW_OFFSET.0,
            longitude: self.longitude + VIEW_OFFSET.1,
        }
    }
}

/// Arithmetic mean of latitude and longitude, or `None` for no rows.
pub fn midpoint<'a, I>(rows: I) -> Option<Midpoint>
where
    I: IntoIterator<Item = &'a CollisionRecord>,
{
    let (count, lat_sum, lon_sum) = rows
        .into_iter()
        .fold((0usize, 0.0f64, 0.0f64), |(n, lat, lon), r| {
            (n + 1, lat + r.latitude, lon + r.longitude)
        });
    if count == 0 {
        return None;
    }
    Some(Midpoint {
        latitude: lat_sum / count as f64,
        longitude: lon_sum / count as f64,
    })
}

/// Crash counts by minute of the hour, zero-filled.
pub fn minute_histogram<'a, I>(rows: I) -> [u32; MINUTES_PER_HOUR]
where
    I: IntoIterator<Item = &'a CollisionRecord>,
{
    let mut buckets = [0u32; MINUTES_PER_HOUR];
    for r in rows {
        // minute() is always < 60
        buckets[r.minute() as usize] += 1;
    }
    buckets
}

/// One line of the dangerous-streets ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreetRank {
    pub street: String,
    pub count: u32,
}

/// The streets of the worst collisions for `affected`.
///
/// Rows with no injured person of that category are ignored, the rest are
/// sorted by count (descending, ties keep input order), rows without a
/// street name are dropped and the first `limit` are kept.
pub fn top_streets<'a, I>(original: I, affected: AffectedType, limit: usize) -> Vec<StreetRank>
where
    I: IntoIterator<Item = &'a CollisionRecord>,
{
    let mut hits = affected_at_least_one(original, affected);
    hits.sort_by(|a, b| b.injured(affected).cmp(&a.injured(affected)));
    hits.into_iter()
        .filter_map(|r| {
            r.on_street_name.as_ref().map(|street| StreetRank {
                street: street.clone(),
                count: r.injured(affected),
            })
        })
        .take(limit)
        .collect()
}
