//! Column names of the NYC collisions CSV export and their canonical forms.

/// Source column holding the crash date (`MM/DD/YYYY`).
pub const CRASH_DATE: &str = "CRASH DATE";
/// Source column holding the crash time (`H:MM`).
pub const CRASH_TIME: &str = "CRASH TIME";

/// Columns the loader refuses to work without.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    CRASH_DATE,
    CRASH_TIME,
    "LATITUDE",
    "LONGITUDE",
    "NUMBER OF PERSONS INJURED",
    "NUMBER OF PEDESTRIANS INJURED",
    "NUMBER OF CYCLIST INJURED",
    "NUMBER OF MOTORIST INJURED",
    "ON STREET NAME",
];

/// Canonical names after lowercasing and renaming.
pub const DATE_TIME: &str = "date/time";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const INJURED_PERSONS: &str = "injured_persons";
pub const INJURED_PEDESTRIANS: &str = "injured_pedestrians";
pub const INJURED_CYCLISTS: &str = "injured_cyclists";
pub const INJURED_MOTORISTS: &str = "injured_motorists";
pub const ON_STREET_NAME: &str = "on street name";

/// Lowercased source name -> canonical name.
pub const RENAMES: [(&str, &str); 5] = [
    ("crash date_crash time", DATE_TIME),
    ("number of persons injured", INJURED_PERSONS),
    ("number of pedestrians injured", INJURED_PEDESTRIANS),
    ("number of cyclist injured", INJURED_CYCLISTS),
    ("number of motorist injured", INJURED_MOTORISTS),
];

/// Name of the column produced by merging the date and time columns.
pub fn merged_timestamp_column(date_column: &str, time_column: &str) -> String {
    format!("{}_{}", date_column.trim(), time_column.trim())
}

/// Lowercase a column name, then apply the fixed renaming map.
pub fn normalize_column_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    RENAMES
        .iter()
        .find(|(from, _)| *from == lowered)
        .map(|(_, to)| to.to_string())
        .unwrap_or(lowered)
}

/// Position of `name` in `headers`, ignoring case and surrounding whitespace.
pub fn find_column<'a, I>(headers: I, name: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    headers
        .into_iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("LATITUDE"), "latitude");
        assert_eq!(normalize_column_name("ON STREET NAME"), "on street name");
        assert_eq!(
            normalize_column_name("NUMBER OF PERSONS INJURED"),
            "injured_persons"
        );
        assert_eq!(
            normalize_column_name("NUMBER OF CYCLIST INJURED"),
            "injured_cyclists"
        );
        assert_eq!(
            normalize_column_name(&merged_timestamp_column("CRASH DATE", "CRASH TIME")),
            "date/time"
        );
        // killed counts are not part of the renaming map
        assert_eq!(
            normalize_column_name("NUMBER OF PERSONS KILLED"),
            "number of persons killed"
        );
    }

    #[test]
    fn test_find_column_is_case_insensitive() {
        let headers = ["crash date", " Latitude ", "LONGITUDE"];
        assert_eq!(find_column(headers, "LATITUDE"), Some(1));
        assert_eq!(find_column(headers, "CRASH DATE"), Some(0));
        assert_eq!(find_column(headers, "ON STREET NAME"), None);
    }
}
