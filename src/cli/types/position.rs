//! Football position codes as they appear in the dataset.

use crate::error::ScoutError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// On-pitch positions listed in `player_positions`.
///
/// Variants are declared in alphabetical order of their codes so that the
/// derived `Ord` sorts menus the same way the codes read.
///
/// # Examples
///
/// ```rust
/// use fifa_scout::Position;
///
/// let st: Position = "st".parse().unwrap();
/// assert_eq!(st, Position::ST);
/// assert_eq!(Position::LWB.to_string(), "LWB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    CAM,
    CB,
    CDM,
    CF,
    CM,
    GK,
    LB,
    LM,
    LW,
    LWB,
    RB,
    RM,
    RW,
    RWB,
    ST,
}

impl Position {
    pub const ALL: [Position; 15] = [
        Position::CAM,
        Position::CB,
        Position::CDM,
        Position::CF,
        Position::CM,
        Position::GK,
        Position::LB,
        Position::LM,
        Position::LW,
        Position::LWB,
        Position::RB,
        Position::RM,
        Position::RW,
        Position::RWB,
        Position::ST,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::CAM => "CAM",
            Position::CB => "CB",
            Position::CDM => "CDM",
            Position::CF => "CF",
            Position::CM => "CM",
            Position::GK => "GK",
            Position::LB => "LB",
            Position::LM => "LM",
            Position::LW => "LW",
            Position::LWB => "LWB",
            Position::RB => "RB",
            Position::RM => "RM",
            Position::RW => "RW",
            Position::RWB => "RWB",
            Position::ST => "ST",
        }
    }

    /// Parse a `player_positions` cell such as `"ST, LW"`.
    ///
    /// Unknown codes are returned separately so the caller can decide how
    /// loudly to complain about them.
    pub fn parse_list(raw: &str) -> (Vec<Position>, Vec<String>) {
        let mut known = Vec::new();
        let mut unknown = Vec::new();
        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.parse::<Position>() {
                Ok(pos) if !known.contains(&pos) => known.push(pos),
                Ok(_) => {}
                Err(_) => unknown.push(token.to_string()),
            }
        }
        (known, unknown)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == upper)
            .ok_or_else(|| ScoutError::InvalidPosition {
                position: s.trim().to_string(),
            })
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
