//! View structs handed to the rendering collaborators.
//!
//! All structs derive `Serialize` so hosts can pass them to the JS renderers
//! (deck.gl style map layers, a bar chart, tables) as JSON. Deck structs use
//! camelCase keys, matching the layer props they feed.

use chrono::NaiveDateTime;
use mvc_data::{FilterState, Midpoint, StreetRank};
use mvc_source::columns::ON_STREET_NAME;
use mvc_source::{AffectedType, CollisionRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Base map style of the 3D view.
pub const MAP_STYLE: &str = "mapbox://styles/mapbox/light-v9";

/// Center used when the selected hour has no collisions (Manhattan).
pub const DEFAULT_CENTER: Midpoint = Midpoint {
    latitude: 40.7128,
    longitude: -74.0060,
};

pub const INITIAL_ZOOM: u8 = 11;
pub const INITIAL_PITCH: u8 = 50;

/// Hexagon cell radius in meters.
pub const HEXAGON_RADIUS: u32 = 100;
pub const HEXAGON_ELEVATION_SCALE: u32 = 8;
pub const HEXAGON_ELEVATION_RANGE: [u32; 2] = [0, 1000];

/// A point on the 2D scatter map.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&CollisionRecord> for MapPoint {
    fn from(r: &CollisionRecord) -> Self {
        MapPoint {
            latitude: r.latitude,
            longitude: r.longitude,
        }
    }
}

/// A point fed to the hexagon density layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HexagonPoint {
    #[serde(rename = "date/time")]
    pub date_time: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&CollisionRecord> for HexagonPoint {
    fn from(r: &CollisionRecord) -> Self {
        HexagonPoint {
            date_time: r.timestamp,
            latitude: r.latitude,
            longitude: r.longitude,
        }
    }
}

/// Camera of the 3D view.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub pitch: u8,
}

impl ViewState {
    pub fn centered_on(center: Midpoint) -> Self {
        ViewState {
            latitude: center.latitude,
            longitude: center.longitude,
            zoom: INITIAL_ZOOM,
            pitch: INITIAL_PITCH,
        }
    }
}

/// Props of the 3D hexagon layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HexagonLayerView {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: Vec<HexagonPoint>,
    /// Field names to read `[lng, lat]` from.
    pub get_position: [&'static str; 2],
    pub radius: u32,
    pub extruded: bool,
    pub pickable: bool,
    pub elevation_scale: u32,
    pub elevation_range: [u32; 2],
}

impl HexagonLayerView {
    pub fn new(data: Vec<HexagonPoint>) -> Self {
        HexagonLayerView {
            kind: "HexagonLayer",
            data,
            get_position: ["longitude", "latitude"],
            radius: HEXAGON_RADIUS,
            extruded: true,
            pickable: true,
            elevation_scale: HEXAGON_ELEVATION_SCALE,
            elevation_range: HEXAGON_ELEVATION_RANGE,
        }
    }
}

/// Everything the 3D renderer needs.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeckView {
    pub map_style: &'static str,
    pub initial_view_state: ViewState,
    pub hexagon: HexagonLayerView,
    /// False when there was nothing to average and the default center and
    /// an empty layer were substituted.
    pub centered: bool,
}

/// One bar of the per-minute chart.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MinuteBucket {
    pub minute: u32,
    pub crashes: u32,
}

/// Static settings of the per-minute bar chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarChartConfig {
    pub x: &'static str,
    pub y: &'static str,
    pub hover_data: [&'static str; 2],
    pub height: u32,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        BarChartConfig {
            x: "minute",
            y: "crashes",
            hover_data: ["minute", "crashes"],
            height: 400,
        }
    }
}

/// One row of the dangerous-streets table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankingRow {
    #[serde(rename = "on street name")]
    pub street: String,
    pub count: u32,
}

impl From<StreetRank> for RankingRow {
    fn from(rank: StreetRank) -> Self {
        RankingRow {
            street: rank.street,
            count: rank.count,
        }
    }
}

/// The top-5 table for the selected affected type.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankingView {
    pub affected: AffectedType,
    /// Canonical column the counts come from, used as the table header.
    pub column: &'static str,
    pub rows: Vec<RankingRow>,
}

impl RankingView {
    /// Table layout: street then count, with the count headed by the
    /// canonical column it was read from.
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            columns: vec![ON_STREET_NAME, "count"],
            headers: BTreeMap::from([("count", self.column)]),
        }
    }
}

/// Column order and header text for the table renderer. Columns missing
/// from `headers` are headed by their key.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct TableConfig {
    pub columns: Vec<&'static str>,
    pub headers: BTreeMap<&'static str, &'static str>,
}

/// The raw rows of the selected hour.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RawTableView {
    pub rows: Vec<CollisionRecord>,
    pub count: usize,
}

/// Human-readable strings shown around the views.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Labels {
    pub title: &'static str,
    pub map_header: &'static str,
    pub injured_slider: &'static str,
    pub hour_header: &'static str,
    pub hour_slider: &'static str,
    pub hour_window: String,
    pub minute_breakdown: String,
    pub ranking_header: &'static str,
    pub affected_select: &'static str,
    pub raw_toggle: &'static str,
    pub raw_header: &'static str,
    /// Only set when the raw table is shown.
    pub raw_count: Option<String>,
}

/// The complete output of one interaction.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardViews {
    pub filter: FilterState,
    pub map: Vec<MapPoint>,
    pub deck: DeckView,
    pub histogram: Vec<MinuteBucket>,
    pub ranking: RankingView,
    pub raw: Option<RawTableView>,
    pub labels: Labels,
}
