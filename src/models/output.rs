//! Output models used for printing, JSON serialization and CSV export.

use crate::{
    cli::types::{Position, SortKey},
    core::filters::sort_value,
    dataset::{Player, SearchKeys},
};
use serde::Serialize;

/// One player in a search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    /// 1-based position in the ranked result.
    pub rank: usize,
    pub name: String,
    pub age: u8,
    /// Recognised position codes, in dataset order.
    pub positions: Vec<Position>,
    pub overall: u8,
    pub potential: u8,
    /// `None` for free agents.
    pub club: Option<String>,
    pub country: String,
}

impl PlayerSummary {
    pub fn new(rank: usize, player: &Player, keys: &SearchKeys) -> Self {
        Self {
            rank,
            name: player.long_name.clone(),
            age: player.age,
            positions: keys.positions.clone(),
            overall: player.overall,
            potential: player.potential,
            club: player.club_name.clone(),
            country: player.nationality_name.clone(),
        }
    }
}

/// One line of a "top N" report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub rank: usize,
    pub short_name: String,
    pub club_name: String,
    pub nationality_name: String,
    /// Value of the stat the report ranks by.
    pub value: i16,
    pub overall: u8,
    pub potential: u8,
    pub age: u8,
    /// Potential minus overall.
    pub gap: i16,
}

impl ReportRow {
    /// Build a row; `None` when the player has no value for `metric`.
    pub fn new(rank: usize, player: &Player, metric: SortKey) -> Option<Self> {
        Some(Self {
            rank,
            short_name: player.display_name().to_string(),
            club_name: player.club().to_string(),
            nationality_name: player.nationality_name.clone(),
            value: sort_value(player, metric)?,
            overall: player.overall,
            potential: player.potential,
            age: player.age,
            gap: player.gap(),
        })
    }

    /// Fields in export order, after a header of
    /// `short_name, club_name, nationality_name, <metric>, overall, age`.
    pub fn export_record(&self) -> [String; 6] {
        [
            self.short_name.clone(),
            self.club_name.clone(),
            self.nationality_name.clone(),
            self.value.to_string(),
            self.overall.to_string(),
            self.age.to_string(),
        ]
    }
}
