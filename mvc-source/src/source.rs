//! Where collision CSV text comes from, and the load step that composes
//! fetching, parsing and normalizing.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::loader::parse_raw_table;
use crate::normalize::normalize;
use log::info;

/// Public NYC Open Data export of "Motor Vehicle Collisions - Crashes".
pub const DATA_URL: &str =
    "https://data.cityofnewyork.us/api/views/h9gi-nx95/rows.csv?accessType=DOWNLOAD";

/// Row count requested by the dashboard.
pub const DEFAULT_ROWS: usize = 100_000;

/// A provider of collision CSV text.
#[allow(async_fn_in_trait)]
pub trait CollisionSource {
    /// Fetch CSV text holding the header followed by at least the first
    /// `n_rows` data rows, when the source has that many.
    async fn fetch_csv(&self, n_rows: usize) -> Result<String>;

    /// Short description for log lines.
    fn describe(&self) -> String;
}

/// CSV text already held in memory (embedded fixtures, tests).
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSource {
    csv: String,
}

impl StaticSource {
    pub fn new(csv: impl Into<String>) -> Self {
        StaticSource { csv: csv.into() }
    }
}

impl CollisionSource for StaticSource {
    async fn fetch_csv(&self, _n_rows: usize) -> Result<String> {
        Ok(self.csv.clone())
    }

    fn describe(&self) -> String {
        format!("static CSV ({} bytes)", self.csv.len())
    }
}

/// Fetch up to `n_rows` rows from `source`, then normalize them.
///
/// This is the unit the dataset cache memoizes. Errors are propagated
/// untouched.
pub async fn load_dataset<S: CollisionSource>(source: &S, n_rows: usize) -> Result<Dataset> {
    info!("loading up to {} rows from {}", n_rows, source.describe());
    let csv_text = source.fetch_csv(n_rows).await?;
    let raw = parse_raw_table(&csv_text, n_rows)?;
    Ok(normalize(raw, n_rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollisionError;

    const CSV: &str = r#"CRASH DATE,CRASH TIME,LATITUDE,LONGITUDE,ON STREET NAME,NUMBER OF PERSONS INJURED,NUMBER OF PEDESTRIANS INJURED,NUMBER OF CYCLIST INJURED,NUMBER OF MOTORIST INJURED
07/04/2022,14:10,40.71,-73.99,CANAL STREET,1,1,0,0
07/04/2022,14:52,,,BOWERY,3,0,0,3
07/04/2022,15:05,40.72,-73.98,DELANCEY STREET,0,0,0,0
"#;

    #[tokio::test]
    async fn test_load_dataset_from_static_source() {
        let source = StaticSource::new(CSV);
        let data = load_dataset(&source, 10).await.unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.dropped(), 1);
        assert_eq!(data.row_limit(), 10);
    }

    #[tokio::test]
    async fn test_load_dataset_limits_rows_before_dropping() {
        let source = StaticSource::new(CSV);
        // the second row is counted against the limit, then dropped
        let data = load_dataset(&source, 2).await.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.records()[0].on_street_name.as_deref(), Some("CANAL STREET"));
    }

    #[tokio::test]
    async fn test_load_dataset_propagates_schema_mismatch() {
        let source = StaticSource::new("CRASH DATE,CRASH TIME\n07/04/2022,14:10\n");
        let err = load_dataset(&source, 10).await.unwrap_err();
        assert!(matches!(
            err,
            CollisionError::SchemaMismatch { ref column } if column == "LATITUDE"
        ));
    }
}
