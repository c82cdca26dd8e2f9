//! Player record as read from the dataset CSV.

use crate::{cli::types::Position, core::normalize::fold};
use serde::{Deserialize, Serialize};

/// Columns that must be present in the CSV header.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "long_name",
    "age",
    "overall",
    "potential",
    "player_positions",
    "club_name",
    "nationality_name",
];

/// One row of the dataset. Extra CSV columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub long_name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    pub age: u8,
    pub overall: u8,
    pub potential: u8,
    pub player_positions: String,
    /// Empty for free agents.
    pub club_name: Option<String>,
    #[serde(default)]
    pub league_name: Option<String>,
    pub nationality_name: String,
    /// Empty for goalkeepers.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub passing: Option<u8>,
}

impl Player {
    /// Short name when the dataset has one, else the long name.
    pub fn display_name(&self) -> &str {
        self.short_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.long_name)
    }

    pub fn club(&self) -> &str {
        self.club_name.as_deref().unwrap_or("")
    }

    pub fn league(&self) -> &str {
        self.league_name.as_deref().unwrap_or("")
    }

    /// Room to grow: potential minus overall.
    pub fn gap(&self) -> i16 {
        i16::from(self.potential) - i16::from(self.overall)
    }

    pub fn stat(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Age => self.age,
            Stat::Overall => self.overall,
            Stat::Potential => self.potential,
        }
    }
}

/// Integer stats every record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Age,
    Overall,
    Potential,
}

/// Pre-folded matching keys for one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchKeys {
    pub name: String,
    pub club: String,
    pub league: String,
    pub country: String,
    pub positions: Vec<Position>,
}

impl SearchKeys {
    /// Build keys for `player`; also returns position codes that did not parse.
    pub fn from_player(player: &Player) -> (Self, Vec<String>) {
        let (positions, unknown) = Position::parse_list(&player.player_positions);
        let keys = SearchKeys {
            name: fold(&player.long_name),
            club: fold(player.club()),
            league: fold(player.league()),
            country: fold(&player.nationality_name),
            positions,
        };
        (keys, unknown)
    }
}
