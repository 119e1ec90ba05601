//! Parsing of the raw collisions CSV.
//!
//! The loader validates the header, reads at most `n_rows` data rows and
//! merges the `CRASH DATE` and `CRASH TIME` columns into a single timestamp.
//! Everything else is left as text for the normalizer.

use crate::columns::{self, CRASH_DATE, CRASH_TIME, REQUIRED_COLUMNS};
use crate::error::{CollisionError, Result};
use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use log::{info, warn};
use mvc_utils::dates::merge_crash_timestamp;

/// One data row as fetched, with the date and time already merged.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub timestamp: NaiveDateTime,
    /// Values aligned with [`RawTable::headers`].
    pub fields: Vec<String>,
}

/// Rows as fetched, before any cleaning or renaming.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    /// Source name of the merged timestamp column (`CRASH DATE_CRASH TIME`).
    pub timestamp_column: String,
    /// Source names of every other column, in source order.
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
    /// Rows read but discarded because their date or time did not parse.
    pub skipped: usize,
}

/// Parse CSV text into a [`RawTable`] holding at most `n_rows` rows.
///
/// Fails with [`CollisionError::SchemaMismatch`] naming the first required
/// column absent from the header.
pub fn parse_raw_table(csv_text: &str, n_rows: usize) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    let header = rdr.headers()?.clone();

    for required in REQUIRED_COLUMNS {
        if columns::find_column(header.iter(), required).is_none() {
            return Err(CollisionError::SchemaMismatch {
                column: required.to_string(),
            });
        }
    }
    let date_idx = columns::find_column(header.iter(), CRASH_DATE).unwrap_or_default();
    let time_idx = columns::find_column(header.iter(), CRASH_TIME).unwrap_or_default();

    let kept: Vec<usize> = (0..header.len())
        .filter(|i| *i != date_idx && *i != time_idx)
        .collect();
    let headers: Vec<String> = kept
        .iter()
        .map(|&i| header.get(i).unwrap_or("").trim().to_string())
        .collect();
    let timestamp_column = columns::merged_timestamp_column(
        header.get(date_idx).unwrap_or(CRASH_DATE),
        header.get(time_idx).unwrap_or(CRASH_TIME),
    );

    let mut rows: Vec<RawRow> = Vec::with_capacity(n_rows.min(100_000));
    let mut skipped = 0usize;
    for result in rdr.records().take(n_rows) {
        let record = result?;
        let date = record.get(date_idx).unwrap_or("");
        let time = record.get(time_idx).unwrap_or("");
        match merge_crash_timestamp(date, time) {
            Ok(timestamp) => {
                let fields = kept
                    .iter()
                    .map(|&i| record.get(i).unwrap_or("").to_string())
                    .collect();
                rows.push(RawRow { timestamp, fields });
            }
            Err(e) => {
                if skipped == 0 {
                    warn!("loader: skipping row with unparsable timestamp: {}", e);
                }
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("loader: skipped {} rows with unparsable timestamps", skipped);
    }
    info!(
        "loader: parsed {} rows (limit {}) with {} columns",
        rows.len(),
        n_rows,
        headers.len() + 1
    );
    Ok(RawTable {
        timestamp_column,
        headers,
        rows,
        skipped,
    })
}
