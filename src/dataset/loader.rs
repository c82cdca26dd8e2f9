//! Reading the dataset file into memory.

use super::{models::REQUIRED_COLUMNS, Dataset, Player, SearchKeys};
use crate::error::{Result, ScoutError};
use csv::{ByteRecord, StringRecord};
use rayon::prelude::*;
use std::{collections::BTreeSet, fs, io::Read, path::Path, time::Instant};
use tracing::{debug, info, warn};

/// Decode one CSV field as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback never fails. Each field is decoded on its own, so a file mixing
/// both encodings keeps its UTF-8 names intact.
pub fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().copied().map(char::from).collect(),
    }
}

fn decode_record(record: &ByteRecord, latin1_fields: &mut usize) -> StringRecord {
    let fields: Vec<String> = record
        .iter()
        .map(|field| {
            if std::str::from_utf8(field).is_err() {
                *latin1_fields += 1;
            }
            decode_field(field)
        })
        .collect();
    StringRecord::from(fields)
}

impl Dataset {
    /// Load and index the CSV at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let started = Instant::now();
        let bytes = fs::read(path)?;
        let dataset = Self::from_reader(bytes.as_slice())?;
        info!(
            path = %path.display(),
            players = dataset.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "loaded player dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV bytes. Required columns are checked before any row is read;
    /// rows that do not deserialize are skipped with a warning.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(rdr);
        let mut latin1_fields = 0;
        let mut columns: Vec<String> = decode_record(reader.byte_headers()?, &mut latin1_fields)
            .iter()
            .map(str::to_string)
            .collect();
        if let Some(first) = columns.first_mut() {
            if first.starts_with('\u{feff}') {
                first.remove(0);
            }
        }
        let headers = StringRecord::from(columns.clone());

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|required| !columns.iter().any(|c| c == *required))
        {
            return Err(ScoutError::MissingColumn {
                column: missing.to_string(),
            });
        }

        let mut players = Vec::new();
        for (row, result) in reader.byte_records().enumerate() {
            // +2: one for the header, one for 1-based line numbers
            let line = row + 2;
            let record = match result {
                Ok(record) => decode_record(&record, &mut latin1_fields),
                Err(e) => {
                    warn!(line, "skipping unreadable player row: {}", e);
                    continue;
                }
            };
            match record.deserialize::<Player>(Some(&headers)) {
                Ok(player) => players.push(player),
                Err(e) => warn!(line, "skipping malformed player row: {}", e),
            }
        }
        if latin1_fields > 0 {
            debug!(fields = latin1_fields, "decoded non-UTF-8 fields as Latin-1");
        }

        let (keys, unknown): (Vec<SearchKeys>, Vec<Vec<String>>) =
            players.par_iter().map(SearchKeys::from_player).unzip();

        let unknown: BTreeSet<String> = unknown.into_iter().flatten().collect();
        if !unknown.is_empty() {
            warn!(codes = ?unknown, "ignoring unknown position codes");
        }

        Ok(Self {
            players,
            keys,
            columns,
        })
    }
}
