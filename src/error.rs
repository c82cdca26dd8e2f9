//! Error types for the FIFA scout CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ScoutError>;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Player dataset not found (set {env_var} or pass --data). Searched: {searched}")]
    DatasetNotFound { env_var: String, searched: String },

    #[error("Column '{column}' not found in dataset")]
    MissingColumn { column: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid range '{spec}': expected N or LO-HI")]
    InvalidRangeSpec { spec: String },

    #[error("Invalid {field} range {lo}-{hi}: make sure {min} <= minimum <= maximum <= {max}")]
    InvalidRange {
        field: String,
        lo: i64,
        hi: i64,
        min: u8,
        max: u8,
    },

    #[error("Dataset contains no players")]
    EmptyDataset,
}
