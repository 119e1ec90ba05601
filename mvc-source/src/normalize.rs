//! Cleaning and reshaping of fetched rows into a [`Dataset`].

use crate::columns::{self, normalize_column_name};
use crate::dataset::Dataset;
use crate::loader::RawTable;
use crate::record::CollisionRecord;
use log::{info, warn};
use std::collections::BTreeMap;

/// Parse a coordinate, treating blanks and non-finite values as missing.
fn parse_coordinate(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an injury count. Missing, blank or unparsable values count as 0.
fn parse_count(s: &str) -> u32 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<u32>() {
        Ok(n) => n,
        // counts occasionally arrive as "2.0"
        Err(_) => match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => v.round() as u32,
            _ => 0,
        },
    }
}

fn parse_street(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Drop rows lacking coordinates, lowercase and rename columns, and type the
/// canonical fields. Columns outside the canonical set pass through in
/// [`CollisionRecord::extra`] under their normalized names.
pub fn normalize(raw: RawTable, row_limit: usize) -> Dataset {
    let timestamp_column = match normalize_column_name(&raw.timestamp_column) {
        name if name.is_empty() => columns::DATE_TIME.to_string(),
        name => name,
    };
    if timestamp_column != columns::DATE_TIME {
        warn!(
            "normalizer: merged timestamp column `{}` has no canonical name",
            raw.timestamp_column
        );
    }
    let names: Vec<String> = raw
        .headers
        .iter()
        .map(|h| normalize_column_name(h))
        .collect();
    let index_of = |name: &str| names.iter().position(|n| n == name);

    let lat_idx = index_of(columns::LATITUDE);
    let lon_idx = index_of(columns::LONGITUDE);
    let persons_idx = index_of(columns::INJURED_PERSONS);
    let pedestrians_idx = index_of(columns::INJURED_PEDESTRIANS);
    let cyclists_idx = index_of(columns::INJURED_CYCLISTS);
    let motorists_idx = index_of(columns::INJURED_MOTORISTS);
    let street_idx = index_of(columns::ON_STREET_NAME);
    let typed = [
        lat_idx,
        lon_idx,
        persons_idx,
        pedestrians_idx,
        cyclists_idx,
        motorists_idx,
        street_idx,
    ];

    let field = |fields: &[String], idx: Option<usize>| -> String {
        idx.and_then(|i| fields.get(i)).cloned().unwrap_or_default()
    };

    let fetched = raw.rows.len();
    let records: Vec<CollisionRecord> = raw
        .rows
        .into_iter()
        .filter_map(|row| {
            let latitude = parse_coordinate(&field(&row.fields, lat_idx))?;
            let longitude = parse_coordinate(&field(&row.fields, lon_idx))?;
            let extra: BTreeMap<String, String> = names
                .iter()
                .enumerate()
                .filter(|(i, _)| !typed.contains(&Some(*i)))
                .map(|(i, name)| (name.clone(), row.fields.get(i).cloned().unwrap_or_default()))
                .collect();
            Some(CollisionRecord {
                timestamp: row.timestamp,
                latitude,
                longitude,
                injured_persons: parse_count(&field(&row.fields, persons_idx)),
                injured_pedestrians: parse_count(&field(&row.fields, pedestrians_idx)),
                injured_cyclists: parse_count(&field(&row.fields, cyclists_idx)),
                injured_motorists: parse_count(&field(&row.fields, motorists_idx)),
                on_street_name: parse_street(&field(&row.fields, street_idx)),
                extra,
            })
        })
        .collect();

    let dropped = fetched - records.len();
    info!(
        "normalizer: kept {} rows, dropped {} without coordinates",
        records.len(),
        dropped
    );
    Dataset::new(records, row_limit, dropped).with_timestamp_column(timestamp_column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_raw_table;
    use crate::record::AffectedType;

    const CSV: &str = r#"CRASH DATE,CRASH TIME,BOROUGH,LATITUDE,LONGITUDE,ON STREET NAME,NUMBER OF PERSONS INJURED,NUMBER OF PERSONS KILLED,NUMBER OF PEDESTRIANS INJURED,NUMBER OF CYCLIST INJURED,NUMBER OF MOTORIST INJURED
09/11/2021,2:39,,40.667202,-73.8665,WHITESTONE EXPRESSWAY                ,2,0,0,0,2
03/26/2022,11:45,BROOKLYN,40.683304,-73.917274,,1,0,1,0,0
06/29/2022,6:55,,,,WESTCHESTER AVENUE,0,0,0,0,0
09/11/2021,9:35,BRONX,40.86816,,3 AVENUE,1,0,0,1,0
12/14/2021,8:13,,40.75144,-73.93397,,2.0,0,,,
"#;

    fn dataset() -> Dataset {
        normalize(parse_raw_table(CSV, 100).unwrap(), 100)
    }

    #[test]
    fn test_normalize_drops_rows_without_coordinates() {
        let data = dataset();
        assert_eq!(data.len(), 3);
        assert_eq!(data.dropped(), 2);
        assert_eq!(data.row_limit(), 100);
        assert!(data
            .iter()
            .all(|r| r.latitude.is_finite() && r.longitude.is_finite()));
    }

    #[test]
    fn test_normalize_types_canonical_fields() {
        let data = dataset();
        let first = &data.records()[0];
        assert_eq!(first.injured_persons, 2);
        assert_eq!(first.injured(AffectedType::Motorists), 2);
        assert_eq!(first.on_street_name.as_deref(), Some("WHITESTONE EXPRESSWAY"));

        let second = &data.records()[1];
        assert_eq!(second.injured(AffectedType::Pedestrians), 1);
        assert_eq!(second.on_street_name, None);
    }

    #[test]
    fn test_normalize_defaults_missing_counts() {
        let data = dataset();
        let last = &data.records()[2];
        assert_eq!(last.injured_persons, 2);
        assert_eq!(last.injured_pedestrians, 0);
        assert_eq!(last.injured_cyclists, 0);
        assert_eq!(last.injured_motorists, 0);
    }

    #[test]
    fn test_normalize_passes_through_lowercased_columns() {
        let data = dataset();
        let second = &data.records()[1];
        assert_eq!(second.extra.get("borough").map(String::as_str), Some("BROOKLYN"));
        assert_eq!(
            second.extra.get("number of persons killed").map(String::as_str),
            Some("0")
        );
        assert!(!second.extra.contains_key("latitude"));
        assert!(!second.extra.contains_key("injured_persons"));
        assert_eq!(second.extra.len(), 2);
    }

    #[test]
    fn test_normalize_renames_merged_timestamp_column() {
        assert_eq!(dataset().timestamp_column(), "date/time");

        let lowercase = CSV.replacen("CRASH DATE,CRASH TIME", "crash date , Crash Time", 1);
        let data = normalize(parse_raw_table(&lowercase, 100).unwrap(), 100);
        assert_eq!(data.timestamp_column(), "date/time");

        let untouched = RawTable {
            timestamp_column: "WHEN".to_string(),
            ..RawTable::default()
        };
        assert_eq!(normalize(untouched, 10).timestamp_column(), "when");
        assert_eq!(normalize(RawTable::default(), 10).timestamp_column(), "date/time");
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), 3);
        assert_eq!(parse_count(" 2.0 "), 2);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("-1"), 0);
        assert_eq!(parse_count("n/a"), 0);
    }
}
