//! Save a bounded sample of the dataset for the web dashboard.

use crate::SourceArgs;
use anyhow::Context;
use log::info;
use mvc_source::http::HttpSource;
use mvc_source::CollisionSource;

/// Fetch the header and the first `source.rows` rows and write them to
/// `output` unchanged. The result is what `fixtures/collisions.csv` holds.
pub async fn run_snapshot(source: &SourceArgs, output: &str) -> anyhow::Result<()> {
    let http = HttpSource::with_url(&source.source_url);
    info!("Fetching {} rows from {}", source.rows, http.describe());

    let csv = http.fetch_csv(source.rows).await?;
    // parse once so a broken sample never lands in fixtures/
    let raw = mvc_source::loader::parse_raw_table(&csv, source.rows)
        .with_context(|| format!("{} did not return a collisions CSV", http.describe()))?;

    std::fs::write(output, &csv).with_context(|| format!("Failed to write {}", output))?;
    info!(
        "Snapshot complete: {} rows ({} skipped) written to {}",
        raw.rows.len(),
        raw.skipped,
        output
    );
    Ok(())
}
