//! Command implementations for the collisions CLI.
//!
//! Provides subcommands that load the NYC collisions dataset, run the
//! dashboard pipeline and print the resulting views.

use clap::{Args, Subcommand};
use mvc_data::{FilterError, FilterState};
use mvc_source::{AffectedType, DATA_URL, DEFAULT_ROWS};

pub mod explore;
pub mod snapshot;
pub mod views;

/// Where the collisions come from and how many rows to read.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Number of data rows to fetch
    #[arg(short = 'n', long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// CSV endpoint of the collisions dataset
    #[arg(long, default_value = DATA_URL)]
    pub source_url: String,
}

/// Initial values of the dashboard controls.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Minimum number of persons injured (0-19)
    #[arg(short = 'i', long, default_value_t = 0)]
    pub injured: u8,

    /// Hour of day to look at (0-23)
    #[arg(short = 'H', long, default_value_t = 0)]
    pub hour: u8,

    /// Affected type for the dangerous-streets ranking
    #[arg(short = 'a', long, default_value = "pedestrians")]
    pub affected: AffectedType,

    /// Include the raw rows of the selected hour
    #[arg(long)]
    pub raw: bool,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Result<FilterState, FilterError> {
        FilterState::new(self.injured, self.hour, self.affected, self.raw)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute every dashboard view once and print it as JSON
    Views {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Fetch the first rows of the dataset and save them as CSV
    Snapshot {
        #[command(flatten)]
        source: SourceArgs,

        /// Output path for the CSV sample
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Interactive session: change controls on stdin and see the views update
    Explore {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Views { source, filter } => views::run_views(&source, &filter).await,
        Command::Snapshot { source, output } => snapshot::run_snapshot(&source, &output).await,
        Command::Explore { source, filter } => explore::run_explore(&source, &filter).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_views_defaults() {
        let cli = TestCli::try_parse_from(["mvc-cli", "views"]).unwrap();
        match cli.command {
            Command::Views { source, filter } => {
                assert_eq!(source.rows, DEFAULT_ROWS);
                assert_eq!(source.source_url, DATA_URL);
                assert_eq!(filter.to_filter().unwrap(), FilterState::default());
            }
            _ => panic!("expected views"),
        }
    }

    #[test]
    fn test_filter_flags() {
        let cli = TestCli::try_parse_from([
            "mvc-cli", "explore", "--injured", "4", "--hour", "17", "--affected", "cyclists",
            "--raw", "--rows", "500",
        ])
        .unwrap();
        match cli.command {
            Command::Explore { source, filter } => {
                assert_eq!(source.rows, 500);
                let state = filter.to_filter().unwrap();
                assert_eq!(state.min_injured(), 4);
                assert_eq!(state.hour(), 17);
                assert_eq!(state.affected(), AffectedType::Cyclists);
                assert!(state.show_raw());
            }
            _ => panic!("expected explore"),
        }
    }

    #[test]
    fn test_out_of_range_hour_is_rejected() {
        let cli = TestCli::try_parse_from(["mvc-cli", "views", "--hour", "24"]).unwrap();
        match cli.command {
            Command::Views { filter, .. } => {
                assert_eq!(filter.to_filter(), Err(FilterError::HourOutOfRange(24)));
            }
            _ => panic!("expected views"),
        }
        assert!(TestCli::try_parse_from(["mvc-cli", "views", "--affected", "horses"]).is_err());
    }
}
