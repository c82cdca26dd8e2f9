//! FIFA Player Scout Library
//!
//! Search, filter and rank players from a FIFA player dataset (a CSV export
//! with one row per player), with accent-insensitive name matching.
//!
//! ## Features
//!
//! - **Dataset Loading**: CSV with UTF-8 or Latin-1 text, malformed rows skipped
//! - **Accent-insensitive Search**: `"mbappe"` finds `"Kylian Mbappé Lottin"`
//! - **Filters**: club, league, country, position, and age/potential/overall ranges
//! - **Interactive Menus**: step-by-step search with progressive refinement
//! - **Reports**: top-N passers and potential rankings, exported to CSV
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fifa_scout::{commands::find::{find_players, FindParams}, Dataset, Position};
//!
//! # fn example() -> fifa_scout::Result<()> {
//! let dataset = Dataset::load("csv_files/fifa_players.csv".as_ref())?;
//! let params = FindParams {
//!     names: vec!["mbappe".to_string()],
//!     positions: vec![Position::ST],
//!     ..FindParams::default()
//! };
//! for i in find_players(&dataset, &params)? {
//!     println!("{}", dataset.player(i).long_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a dataset to avoid passing `--data` every time:
//! ```bash
//! export FIFA_SCOUT_DATA=/path/to/fifa_players.csv
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod dataset;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use cli::types::{Position, RatingRange, ReportKind, SortKey};
pub use dataset::{Dataset, Player};
pub use error::{Result, ScoutError};

pub const DATA_PATH_ENV_VAR: &str = "FIFA_SCOUT_DATA";
