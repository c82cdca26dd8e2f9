//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{builder::RangedU64ValueParser, ArgAction, Args, Parser, Subcommand};
use types::{Position, RatingRange, ReportKind, SortKey};

/// Search filters for the `find` command
#[derive(Debug, Args)]
pub struct FindFilters {
    /// Filter by player name (accent-insensitive substring) - repeatable: `-n messi -n mbappe`.
    #[clap(long = "name", short = 'n')]
    pub names: Vec<String>,

    /// Filter by club name (substring).
    #[clap(long)]
    pub club: Option<String>,

    /// Filter by league name (substring).
    #[clap(long)]
    pub league: Option<String>,

    /// Filter by nationality (substring).
    #[clap(long)]
    pub country: Option<String>,

    /// Filter by position (repeatable): `-p ST -p CF`.
    #[clap(short = 'p', long = "position")]
    pub positions: Vec<Position>,

    /// Age range, e.g. `18-21` (15..=60).
    #[clap(long)]
    pub age: Option<RatingRange>,

    /// Potential range, e.g. `85-99` (0..=100).
    #[clap(long)]
    pub potential: Option<RatingRange>,

    /// Overall range, e.g. `80-90` (0..=100).
    #[clap(long)]
    pub overall: Option<RatingRange>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive menu search (the default).
    Search,

    /// Search with filters given on the command line.
    Find {
        #[clap(flatten)]
        filters: FindFilters,

        /// Stat to sort by, descending.
        #[clap(long, value_enum, default_value_t = SortKey::Overall)]
        sort: SortKey,

        /// Number of players to show (at least 1).
        #[clap(long, short, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Print a "top N" report and export it to CSV.
    Top {
        /// Which report to run.
        #[clap(value_enum)]
        report: ReportKind,

        /// Number of players in the report (at least 1).
        #[clap(
            long,
            short,
            default_value_t = 10,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..)
        )]
        limit: usize,

        /// Export path (default: `top_<N>_<report>.csv`).
        #[clap(long, short)]
        out: Option<PathBuf>,

        /// Skip the CSV export.
        #[clap(long)]
        no_export: bool,

        /// Output rows as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "fifa-scout",
    about = "Search, filter and rank players from a FIFA player dataset"
)]
pub struct Scout {
    /// Path to the players CSV (or set `FIFA_SCOUT_DATA`).
    #[clap(long, global = true)]
    pub data: Option<PathBuf>,

    /// Print names with accents folded to plain letters.
    #[clap(long, global = true)]
    pub ascii: bool,

    /// Log more (-v info, -vv debug). `RUST_LOG` is used when absent.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_find() {
        let app = Scout::parse_from([
            "fifa-scout", "find", "-n", "messi", "-n", "mbappé", "-p", "st", "--age", "20-30",
            "--sort", "potential", "--json",
        ]);
        match app.command {
            Some(Commands::Find {
                filters,
                sort,
                json,
                limit,
            }) => {
                assert_eq!(filters.names, vec!["messi", "mbappé"]);
                assert_eq!(filters.positions, vec![Position::ST]);
                assert_eq!(filters.age, Some(RatingRange::new(20, 30)));
                assert_eq!(sort, SortKey::Potential);
                assert!(json);
                assert_eq!(limit, None);
            }
            other => panic!("Expected Find, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_top_with_globals() {
        let app = Scout::parse_from([
            "fifa-scout", "top", "potential-u20", "--data", "players.csv", "--ascii", "-vv",
            "--no-export",
        ]);
        assert_eq!(app.data, Some(PathBuf::from("players.csv")));
        assert!(app.ascii);
        assert_eq!(app.verbose, 2);
        match app.command {
            Some(Commands::Top {
                report,
                limit,
                no_export,
                ..
            }) => {
                assert_eq!(report, ReportKind::PotentialU20);
                assert_eq!(limit, 10);
                assert!(no_export);
            }
            other => panic!("Expected Top, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let app = Scout::parse_from(["fifa-scout"]);
        assert!(app.command.is_none());
    }

    #[test]
    fn test_invalid_position_rejected() {
        let result = Scout::try_parse_from(["fifa-scout", "find", "-p", "QB"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Scout::command().debug_assert();
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(Scout::try_parse_from(["fifa-scout", "top", "potential", "--limit", "0"]).is_err());
        assert!(Scout::try_parse_from(["fifa-scout", "find", "--limit", "0"]).is_err());

        let app = Scout::parse_from(["fifa-scout", "top", "passers", "-l", "3"]);
        match app.command {
            Some(Commands::Top { limit, .. }) => assert_eq!(limit, 3),
            other => panic!("Expected Top, got {:?}", other),
        }
    }
}
