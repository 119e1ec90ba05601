use crate::models::Labels;
use mvc_data::FilterState;
use mvc_utils::dates::hour_window;

pub const TITLE: &str = "Motor Vehicle Collisions";
pub const MAP_HEADER: &str = "Where are the most people injured?";
pub const INJURED_SLIDER: &str = "Number of persons injured in Vehicle collisions";
pub const HOUR_HEADER: &str = "How many collisions occur during a given time of date?";
pub const HOUR_SLIDER: &str = "Hour to look at";
pub const RANKING_HEADER: &str = "Top 5 dangerous street by affected type";
pub const AFFECTED_SELECT: &str = "Affected type of people";
pub const RAW_TOGGLE: &str = "Show Raw Data";
pub const RAW_HEADER: &str = "Raw data of vehicle collisions";

impl Labels {
    /// Labels for `filter`; `raw_rows` is the size of the raw table, if shown.
    pub fn for_filter(filter: &FilterState, raw_rows: Option<usize>) -> Self {
        let window = hour_window(filter.hour());
        Labels {
            title: TITLE,
            map_header: MAP_HEADER,
            injured_slider: INJURED_SLIDER,
            hour_header: HOUR_HEADER,
            hour_slider: HOUR_SLIDER,
            hour_window: format!("Vehicle Collisions {}", window),
            minute_breakdown: format!("Breakdown by minute {}", window),
            ranking_header: RANKING_HEADER,
            affected_select: AFFECTED_SELECT,
            raw_toggle: RAW_TOGGLE,
            raw_header: RAW_HEADER,
            raw_count: raw_rows.map(|n| format!("Number of queried data showed = {}", n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mvc_source::AffectedType;

    #[test]
    fn test_hour_labels_wrap_at_midnight() {
        let filter = FilterState::new(0, 23, AffectedType::Pedestrians, false).unwrap();
        let labels = Labels::for_filter(&filter, None);
        assert_eq!(labels.hour_window, "Vehicle Collisions between 23:00 and 0:00");
        assert_eq!(labels.minute_breakdown, "Breakdown by minute between 23:00 and 0:00");
        assert_eq!(labels.raw_count, None);
    }

    #[test]
    fn test_raw_count_label() {
        let filter = FilterState::new(0, 9, AffectedType::Pedestrians, true).unwrap();
        let labels = Labels::for_filter(&filter, Some(42));
        assert_eq!(
            labels.raw_count.as_deref(),
            Some("Number of queried data showed = 42")
        );
    }
}
