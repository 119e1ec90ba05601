//! The per-interaction pipeline: filter, aggregate, shape.
//!
//! [`build_views`] is a pure function of the loaded dataset and the control
//! values. Hosts call it from their update loop on every interaction and
//! hand each part of the result to its renderer.

use crate::models::{
    DashboardViews, DeckView, HexagonLayerView, HexagonPoint, Labels, MapPoint, MinuteBucket,
    RankingRow, RankingView, RawTableView, ViewState, DEFAULT_CENTER, MAP_STYLE,
};
use log::{debug, info};
use mvc_data::filter::{in_hour, with_min_injured};
use mvc_data::{midpoint, minute_histogram, top_streets, FilterState, TOP_N};
use mvc_source::{CollisionRecord, Dataset};

/// Compute every view for one interaction.
///
/// - the 2D map shows rows meeting the injured-persons threshold
/// - the 3D layer, histogram and raw table show rows of the selected hour
/// - the ranking always reads the original dataset, whatever the hour
pub fn build_views(dataset: &Dataset, filter: &FilterState) -> DashboardViews {
    let original = dataset;
    let injured = with_min_injured(dataset, u32::from(filter.min_injured()));
    let hour_rows = in_hour(dataset, filter.hour());

    let map: Vec<MapPoint> = injured.iter().map(|r| MapPoint::from(*r)).collect();
    let deck = deck_view(&hour_rows);
    let histogram = histogram_view(&hour_rows);
    let ranking = RankingView {
        affected: filter.affected(),
        column: filter.affected().column(),
        rows: top_streets(original, filter.affected(), TOP_N)
            .into_iter()
            .map(RankingRow::from)
            .collect(),
    };
    let raw = filter.show_raw().then(|| RawTableView {
        rows: hour_rows.iter().map(|r| (*r).clone()).collect(),
        count: hour_rows.len(),
    });
    let labels = Labels::for_filter(filter, raw.as_ref().map(|r| r.count));

    debug!(
        "views: {} map points, {} rows in hour {}, {} ranked streets",
        map.len(),
        hour_rows.len(),
        filter.hour(),
        ranking.rows.len()
    );
    DashboardViews {
        filter: *filter,
        map,
        deck,
        histogram,
        ranking,
        raw,
        labels,
    }
}

/// The 3D view over the selected hour. An empty hour has no midpoint, so
/// the camera falls back to [`DEFAULT_CENTER`] and the layer gets no data.
pub fn deck_view(hour_rows: &[&CollisionRecord]) -> DeckView {
    match midpoint(hour_rows.iter().copied()) {
        Some(mid) => DeckView {
            map_style: MAP_STYLE,
            initial_view_state: ViewState::centered_on(mid.view_center()),
            hexagon: HexagonLayerView::new(
                hour_rows.iter().map(|r| HexagonPoint::from(*r)).collect(),
            ),
            centered: true,
        },
        None => {
            info!("views: no collisions in the selected hour, using the default center");
            DeckView {
                map_style: MAP_STYLE,
                initial_view_state: ViewState::centered_on(DEFAULT_CENTER),
                hexagon: HexagonLayerView::new(Vec::new()),
                centered: false,
            }
        }
    }
}

/// Sixty zero-filled minute buckets.
pub fn histogram_view(hour_rows: &[&CollisionRecord]) -> Vec<MinuteBucket> {
    minute_histogram(hour_rows.iter().copied())
        .iter()
        .enumerate()
        .map(|(minute, &crashes)| MinuteBucket {
            minute: minute as u32,
            crashes,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use mvc_source::AffectedType;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 10, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn filter(min_injured: u8, hour: u8, affected: AffectedType, show_raw: bool) -> FilterState {
        FilterState::new(min_injured, hour, affected, show_raw).unwrap()
    }

    /// Three hour-14 crashes with pedestrian counts 2, 0, 5 on streets A, B, C
    /// plus one 3am crash with a single injured motorist.
    fn dataset() -> Dataset {
        vec![
            CollisionRecord::new(at(14, 5), 40.70, -73.90)
                .with_street("A")
                .with_injured(AffectedType::Pedestrians, 2),
            CollisionRecord::new(at(14, 5), 40.80, -73.80).with_street("B"),
            CollisionRecord::new(at(14, 45), 40.90, -74.00)
                .with_street("C")
                .with_injured(AffectedType::Pedestrians, 5),
            CollisionRecord::new(at(3, 0), 40.60, -73.95)
                .with_street("D")
                .with_injured(AffectedType::Motorists, 1),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn ranking_scenario_ignores_threshold() {
        let data = dataset();
        for threshold in [0, 7, 19] {
            let views = build_views(&data, &filter(threshold, 14, AffectedType::Pedestrians, false));
            let ranked: Vec<(&str, u32)> = views
                .ranking
                .rows
                .iter()
                .map(|r| (r.street.as_str(), r.count))
                .collect();
            assert_eq!(ranked, vec![("C", 5), ("A", 2)]);
            assert_eq!(views.ranking.column, "injured_pedestrians");
        }
    }

    #[test]
    fn ranking_reads_all_hours() {
        let data = dataset();
        let views = build_views(&data, &filter(0, 14, AffectedType::Motorists, false));
        assert_eq!(views.ranking.rows.len(), 1);
        assert_eq!(views.ranking.rows[0].street, "D");
    }

    #[test]
    fn map_uses_threshold_across_hours() {
        let data = dataset();
        let views = build_views(&data, &filter(1, 14, AffectedType::Pedestrians, false));
        assert_eq!(views.map.len(), 3);
        let views = build_views(&data, &filter(3, 14, AffectedType::Pedestrians, false));
        assert_eq!(views.map, vec![MapPoint { latitude: 40.90, longitude: -74.00 }]);
    }

    #[test]
    fn deck_centers_on_offset_midpoint() {
        let data = dataset();
        let views = build_views(&data, &filter(0, 14, AffectedType::Pedestrians, false));
        assert!(views.deck.centered);
        assert_eq!(views.deck.hexagon.data.len(), 3);
        let view = views.deck.initial_view_state;
        assert!((view.latitude - (40.80 + 0.2)).abs() < 1e-9);
        assert!((view.longitude - (-73.90 - 0.5)).abs() < 1e-9);
        assert_eq!((view.zoom, view.pitch), (11, 50));
    }

    #[test]
    fn empty_hour_degrades_gracefully() {
        let data = dataset();
        let views = build_views(&data, &filter(0, 9, AffectedType::Pedestrians, true));

        assert!(!views.deck.centered);
        assert!(views.deck.hexagon.data.is_empty());
        assert_eq!(views.deck.initial_view_state.latitude, DEFAULT_CENTER.latitude);
        assert!(views.deck.initial_view_state.longitude.is_finite());

        assert_eq!(views.histogram.len(), 60);
        assert!(views.histogram.iter().all(|b| b.crashes == 0));
        assert_eq!(views.raw.as_ref().map(|r| r.count), Some(0));
    }

    #[test]
    fn histogram_sums_to_hour_rows() {
        let data = dataset();
        let views = build_views(&data, &filter(0, 14, AffectedType::Pedestrians, false));
        assert_eq!(views.histogram[5].crashes, 2);
        assert_eq!(views.histogram[45].crashes, 1);
        let total: u32 = views.histogram.iter().map(|b| b.crashes).sum();
        assert_eq!(total, 3);
        assert_eq!(views.histogram[59].minute, 59);
    }

    #[test]
    fn raw_table_only_when_requested() {
        let data = dataset();
        let hidden = build_views(&data, &filter(0, 14, AffectedType::Pedestrians, false));
        assert!(hidden.raw.is_none());
        assert!(hidden.labels.raw_count.is_none());

        let shown = build_views(&data, &filter(0, 14, AffectedType::Pedestrians, true));
        let raw = shown.raw.as_ref().unwrap();
        assert_eq!(raw.count, 3);
        assert_eq!(raw.rows[2].on_street_name.as_deref(), Some("C"));
        assert_eq!(
            shown.labels.raw_count.as_deref(),
            Some("Number of queried data showed = 3")
        );
    }

    #[test]
    fn views_serialize_for_renderers() {
        let data = dataset();
        let views = build_views(&data, &filter(0, 14, AffectedType::Pedestrians, false));
        let json = serde_json::to_value(&views).unwrap();
        assert_eq!(json["deck"]["mapStyle"], MAP_STYLE);
        assert_eq!(json["deck"]["hexagon"]["type"], "HexagonLayer");
        assert_eq!(json["deck"]["hexagon"]["elevationScale"], 8);
        assert_eq!(json["deck"]["hexagon"]["getPosition"][0], "longitude");
        assert_eq!(json["deck"]["hexagon"]["data"][0]["date/time"], "2022-10-03T14:05:00");
        assert_eq!(json["ranking"]["rows"][0]["on street name"], "C");
        assert_eq!(json["histogram"].as_array().map(|a| a.len()), Some(60));
    }
}
