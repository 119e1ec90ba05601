//! Interactive terminal session over the dashboard pipeline.
//!
//! Each line on stdin changes one control, after which the whole pipeline
//! reruns against the cached dataset and a summary of every view is printed.

use crate::{FilterArgs, SourceArgs};
use anyhow::{anyhow, bail};
use log::{error, info};
use mvc_cache::DatasetCache;
use mvc_data::{FilterError, FilterState};
use mvc_source::http::HttpSource;
use mvc_source::{AffectedType, Dataset};
use mvc_views::{build_views, DashboardViews};
use std::fmt::Write as _;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "commands: injured N | hour N | affected pedestrians|cyclists|motorists | \
raw on|off | rows N | show | help | quit";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExploreCommand {
    Injured(u8),
    Hour(u8),
    Affected(AffectedType),
    Raw(bool),
    Rows(usize),
    Show,
    Help,
    Quit,
}

impl FromStr for ExploreCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or("").to_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            bail!("too many arguments in `{}`", line.trim());
        }
        let required = || arg.ok_or_else(|| anyhow!("`{}` needs a value", name));

        let command = match name.as_str() {
            "injured" => ExploreCommand::Injured(required()?.parse()?),
            "hour" => ExploreCommand::Hour(required()?.parse()?),
            "affected" => ExploreCommand::Affected(required()?.parse()?),
            "raw" => match required()?.to_lowercase().as_str() {
                "on" | "true" | "yes" => ExploreCommand::Raw(true),
                "off" | "false" | "no" => ExploreCommand::Raw(false),
                other => bail!("raw expects on or off, got `{}`", other),
            },
            "rows" => ExploreCommand::Rows(required()?.parse()?),
            "show" => ExploreCommand::Show,
            "help" | "?" => ExploreCommand::Help,
            "quit" | "exit" | "q" => ExploreCommand::Quit,
            _ => bail!("unknown command `{}`", name),
        };
        if arg.is_some()
            && matches!(
                command,
                ExploreCommand::Show | ExploreCommand::Help | ExploreCommand::Quit
            )
        {
            bail!("`{}` takes no value", name);
        }
        Ok(command)
    }
}

/// Controls of the running session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub filter: FilterState,
    pub rows: usize,
}

impl Session {
    pub fn new(filter: FilterState, rows: usize) -> Self {
        Session { filter, rows }
    }

    /// Apply a control change. Out-of-range values leave the session as is.
    pub fn apply(&mut self, command: ExploreCommand) -> Result<(), FilterError> {
        let f = self.filter;
        self.filter = match command {
            ExploreCommand::Injured(n) => FilterState::new(n, f.hour(), f.affected(), f.show_raw())?,
            ExploreCommand::Hour(h) => {
                FilterState::new(f.min_injured(), h, f.affected(), f.show_raw())?
            }
            ExploreCommand::Affected(a) => {
                FilterState::new(f.min_injured(), f.hour(), a, f.show_raw())?
            }
            ExploreCommand::Raw(on) => FilterState::new(f.min_injured(), f.hour(), f.affected(), on)?,
            ExploreCommand::Rows(n) => {
                self.rows = n;
                f
            }
            ExploreCommand::Show | ExploreCommand::Help | ExploreCommand::Quit => f,
        };
        Ok(())
    }
}

/// Human-readable digest of every view.
pub fn summarize(dataset: &Dataset, views: &DashboardViews) -> String {
    let labels = &views.labels;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} ({} rows loaded, {} dropped)",
        labels.title,
        dataset.len(),
        dataset.dropped()
    );
    let _ = writeln!(
        out,
        "{} {} points with at least {} persons injured",
        labels.map_header,
        views.map.len(),
        views.filter.min_injured()
    );

    let view = &views.deck.initial_view_state;
    if views.deck.centered {
        let _ = writeln!(
            out,
            "{}: {} collisions, view centered at ({:.4}, {:.4})",
            labels.hour_window,
            views.deck.hexagon.data.len(),
            view.latitude,
            view.longitude
        );
    } else {
        let _ = writeln!(
            out,
            "{}: no collisions, default view at ({:.4}, {:.4})",
            labels.hour_window, view.latitude, view.longitude
        );
    }

    match views.histogram.iter().max_by_key(|b| b.crashes) {
        Some(busiest) if busiest.crashes > 0 => {
            let _ = writeln!(
                out,
                "{}: busiest minute {:02} with {} crashes",
                labels.minute_breakdown, busiest.minute, busiest.crashes
            );
        }
        _ => {
            let _ = writeln!(out, "{}: no crashes", labels.minute_breakdown);
        }
    }

    let _ = writeln!(
        out,
        "{} ({}):",
        labels.ranking_header, views.ranking.affected
    );
    if views.ranking.rows.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (rank, row) in views.ranking.rows.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({})", rank + 1, row.street, row.count);
    }

    if let Some(count) = &labels.raw_count {
        let _ = writeln!(out, "{}: {}", labels.raw_header, count);
    }
    out
}

async fn show(cache: &DatasetCache<HttpSource>, session: &Session) {
    match cache.load(session.rows).await {
        Ok(dataset) => {
            let views = build_views(&dataset, &session.filter);
            print!("{}", summarize(&dataset, &views));
        }
        Err(e) => {
            error!("Failed to load {} rows: {}", session.rows, e);
            eprintln!("error: {}", e);
        }
    }
}

/// Run the stdin loop until `quit` or end of input.
pub async fn run_explore(source: &SourceArgs, filter: &FilterArgs) -> anyhow::Result<()> {
    let mut session = Session::new(filter.to_filter()?, source.rows);
    let cache = DatasetCache::new(HttpSource::with_url(&source.source_url));
    info!("Exploring {} rows from {}", session.rows, source.source_url);

    println!("{}", HELP);
    show(&cache, &session).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ExploreCommand>() {
            Ok(ExploreCommand::Quit) => break,
            Ok(ExploreCommand::Help) => println!("{}", HELP),
            Ok(command) => match session.apply(command) {
                Ok(()) => show(&cache, &session).await,
                Err(e) => eprintln!("error: {}", e),
            },
            Err(e) => eprintln!("error: {}", e),
        }
    }

    let stats = cache.stats();
    info!(
        "Explore finished: {} cache hits, {} misses",
        stats.hits, stats.misses
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use mvc_source::CollisionRecord;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "injured 3".parse::<ExploreCommand>().unwrap(),
            ExploreCommand::Injured(3)
        );
        assert_eq!(
            "  HOUR 17 ".parse::<ExploreCommand>().unwrap(),
            ExploreCommand::Hour(17)
        );
        assert_eq!(
            "affected cyclist".parse::<ExploreCommand>().unwrap(),
            ExploreCommand::Affected(AffectedType::Cyclists)
        );
        assert_eq!(
            "raw on".parse::<ExploreCommand>().unwrap(),
            ExploreCommand::Raw(true)
        );
        assert_eq!(
            "rows 2500".parse::<ExploreCommand>().unwrap(),
            ExploreCommand::Rows(2500)
        );
        assert_eq!("q".parse::<ExploreCommand>().unwrap(), ExploreCommand::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("hour".parse::<ExploreCommand>().is_err());
        assert!("hour nine".parse::<ExploreCommand>().is_err());
        assert!("raw maybe".parse::<ExploreCommand>().is_err());
        assert!("show 3".parse::<ExploreCommand>().is_err());
        assert!("injured 1 2".parse::<ExploreCommand>().is_err());
        assert!("zoom 4".parse::<ExploreCommand>().is_err());
    }

    #[test]
    fn test_session_apply() {
        let mut session = Session::new(FilterState::default(), 100);
        session.apply(ExploreCommand::Hour(9)).unwrap();
        session.apply(ExploreCommand::Affected(AffectedType::Motorists)).unwrap();
        session.apply(ExploreCommand::Rows(50)).unwrap();
        assert_eq!(session.filter.hour(), 9);
        assert_eq!(session.filter.affected(), AffectedType::Motorists);
        assert_eq!(session.rows, 50);

        let before = session;
        assert_eq!(
            session.apply(ExploreCommand::Injured(20)),
            Err(FilterError::InjuredOutOfRange(20))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_summarize_empty_hour() {
        let ts: NaiveDateTime = "2022-04-01T14:30:00".parse().unwrap();
        let dataset: Dataset = vec![CollisionRecord::new(ts, 40.7, -73.9)
            .with_street("BROADWAY")
            .with_injured(AffectedType::Pedestrians, 1)]
        .into_iter()
        .collect();
        let filter = FilterState::new(0, 9, AffectedType::Pedestrians, true).unwrap();
        let summary = summarize(&dataset, &build_views(&dataset, &filter));

        assert!(summary.starts_with("Motor Vehicle Collisions (1 rows loaded, 0 dropped)"));
        assert!(summary.contains("Vehicle Collisions between 9:00 and 10:00: no collisions"));
        assert!(summary.contains("Breakdown by minute between 9:00 and 10:00: no crashes"));
        assert!(summary.contains("  1. BROADWAY (1)"));
        assert!(summary.contains("Number of queried data showed = 0"));
    }
}
