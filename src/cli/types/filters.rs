//! Enum options shared by CLI commands and the search core.

use std::fmt;

/// Stat used to order a selection, always descending.
///
/// Ties keep the original row order of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    /// Overall rating
    #[default]
    Overall,
    /// Potential rating
    Potential,
    /// Passing attribute (players without one are left out)
    Passing,
    /// Age, oldest first
    Age,
    /// Potential minus overall
    Gap,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Overall => "Overall",
            SortKey::Potential => "Potential",
            SortKey::Passing => "Passing",
            SortKey::Age => "Age",
            SortKey::Gap => "Gap",
        };
        write!(f, "{}", s)
    }
}

/// The canned "top N" reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportKind {
    /// Highest passing attribute
    Passers,
    /// Highest potential rating
    Potential,
    /// Highest potential among players younger than 20
    #[value(name = "potential-u20")]
    PotentialU20,
}

impl ReportKind {
    /// Stat the report ranks by.
    pub fn metric(&self) -> SortKey {
        match self {
            ReportKind::Passers => SortKey::Passing,
            ReportKind::Potential | ReportKind::PotentialU20 => SortKey::Potential,
        }
    }

    /// Suffix used in the default export file name.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ReportKind::Passers => "passers",
            ReportKind::Potential => "potential",
            ReportKind::PotentialU20 => "potential_u20",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportKind::Passers => "Passing",
            ReportKind::Potential => "Potential",
            ReportKind::PotentialU20 => "Potential (Under 20)",
        };
        write!(f, "{}", s)
    }
}
