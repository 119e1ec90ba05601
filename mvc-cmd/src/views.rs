//! One-shot rendering of the dashboard views.

use crate::{FilterArgs, SourceArgs};
use log::info;
use mvc_cache::DatasetCache;
use mvc_source::http::HttpSource;
use mvc_views::build_views;

/// Load the dataset, build every view for the given controls and print them
/// as pretty JSON on stdout.
pub async fn run_views(source: &SourceArgs, filter: &FilterArgs) -> anyhow::Result<()> {
    let filter = filter.to_filter()?;
    let cache = DatasetCache::new(HttpSource::with_url(&source.source_url));

    info!("Loading {} rows from {}", source.rows, source.source_url);
    let dataset = cache.load(source.rows).await?;
    let views = build_views(&dataset, &filter);

    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}
