//! Command implementations for the FIFA scout CLI

pub mod common;
pub mod find;
pub mod search;
pub mod top;


use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{dataset::Dataset, error::ScoutError, Result, DATA_PATH_ENV_VAR};

/// File name looked for in the default locations.
pub const DATASET_FILE_NAME: &str = "fifa_players.csv";

/// Paths tried when no `--data` flag is given, in order.
pub fn default_data_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(from_env) = std::env::var(DATA_PATH_ENV_VAR) {
        if !from_env.trim().is_empty() {
            paths.push(PathBuf::from(from_env));
        }
    }
    paths.push(PathBuf::from("csv_files").join(DATASET_FILE_NAME));
    paths.push(PathBuf::from(DATASET_FILE_NAME));
    if let Some(data_dir) = dirs::data_dir() {
        paths.push(data_dir.join("fifa-scout").join(DATASET_FILE_NAME));
    }
    paths
}

/// Pick the dataset file: the explicit path if given, otherwise the first
/// existing default location.
pub fn resolve_data_path(data: Option<PathBuf>) -> Result<PathBuf> {
    let candidates = match data {
        Some(path) => vec![path],
        None => default_data_paths(),
    };

    for path in &candidates {
        debug!(path = %path.display(), "looking for dataset");
        if path.is_file() {
            return Ok(path.clone());
        }
    }

    Err(ScoutError::DatasetNotFound {
        env_var: DATA_PATH_ENV_VAR.to_string(),
        searched: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Load the dataset, refusing one without players.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let dataset = Dataset::load(path)?;
    if dataset.is_empty() {
        return Err(ScoutError::EmptyDataset);
    }
    Ok(dataset)
}
