//! In-memory player table.
//!
//! The dataset is loaded once and never mutated. Queries refer to records by
//! their row index, which is also the original order used to break ties:
//! - `models`: the `Player` record and its folded `SearchKeys`
//! - `loader`: file decoding and CSV parsing

pub mod loader;
pub mod models;


use crate::cli::types::Position;
use std::collections::BTreeSet;

pub use loader::decode_field;
pub use models::{Player, SearchKeys, Stat, REQUIRED_COLUMNS};

/// Loaded players plus their matching keys, index-aligned.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    players: Vec<Player>,
    keys: Vec<SearchKeys>,
    columns: Vec<String>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    pub fn keys(&self, index: usize) -> &SearchKeys {
        &self.keys[index]
    }

    /// Whether the CSV header had `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Every row index, in original order.
    pub fn all(&self) -> Vec<usize> {
        (0..self.players.len()).collect()
    }

    /// Distinct league names within `selection`, sorted.
    pub fn leagues(&self, selection: &[usize]) -> Vec<String> {
        self.distinct(selection, |p| p.league())
    }

    /// Distinct clubs within `selection`, sorted.
    pub fn clubs(&self, selection: &[usize]) -> Vec<String> {
        self.distinct(selection, |p| p.club())
    }

    /// Distinct clubs of `league` within `selection`, sorted.
    pub fn clubs_in_league(&self, selection: &[usize], league: &str) -> Vec<String> {
        let in_league: Vec<usize> = selection
            .iter()
            .copied()
            .filter(|&i| self.players[i].league() == league)
            .collect();
        self.distinct(&in_league, |p| p.club())
    }

    /// Distinct nationalities within `selection`, sorted.
    pub fn nationalities(&self, selection: &[usize]) -> Vec<String> {
        self.distinct(selection, |p| p.nationality_name.as_str())
    }

    /// Distinct positions played within `selection`, in code order.
    pub fn positions(&self, selection: &[usize]) -> Vec<Position> {
        selection
            .iter()
            .flat_map(|&i| self.keys[i].positions.iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Lowest and highest `stat` within `selection`.
    pub fn bounds(&self, selection: &[usize], stat: Stat) -> Option<(u8, u8)> {
        let values = selection.iter().map(|&i| self.players[i].stat(stat));
        let min = values.clone().min()?;
        let max = values.max()?;
        Some((min, max))
    }

    fn distinct<'a, F>(&'a self, selection: &[usize], field: F) -> Vec<String>
    where
        F: Fn(&'a Player) -> &'a str,
    {
        selection
            .iter()
            .map(|&i| field(&self.players[i]))
            .filter(|s| !s.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
