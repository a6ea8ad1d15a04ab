// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Roster loading, validation and persistence

use crate::types::{RosterRecord, RosterTable};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while reading or writing a roster table
#[derive(Debug, Error)]
pub enum RosterError {
    /// The file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The file extension is not a supported table format
    #[error("Unsupported roster format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),
    /// JSON (de)serialization failed
    #[error("Invalid JSON roster: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML parsing failed
    #[error("Invalid TOML roster: {0}")]
    TomlDe(#[from] toml::de::Error),
    /// TOML rendering failed
    #[error("Failed to render TOML roster: {0}")]
    TomlSer(#[from] toml::ser::Error),
    /// A record is missing a required field
    #[error("Record {index} has an empty {field}")]
    Malformed {
        /// Zero-based record position
        index: usize,
        /// Name of the empty field
        field: &'static str,
    },
}

/// A source of roster records
pub trait RosterProvider {
    /// Produce validated records
    fn records(&self) -> Result<Vec<RosterRecord>, RosterError>;
}

/// Supported roster table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    /// JSON array of records or `{ "records": [...] }`
    Json,
    /// TOML with `[[records]]` tables
    Toml,
}

impl RosterFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, RosterError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(RosterError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Roster table stored in a file
#[derive(Debug, Clone)]
pub struct FileRoster {
    path: PathBuf,
}

impl FileRoster {
    /// Roster backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterProvider for FileRoster {
    fn records(&self) -> Result<Vec<RosterRecord>, RosterError> {
        let table = load_roster(&self.path)?;
        Ok(table.records)
    }
}

/// JSON accepts either a bare array or a wrapped table
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonRoster {
    Bare(Vec<RosterRecord>),
    Table(RosterTable),
}

/// Load and validate a roster table
pub fn load_roster(path: &Path) -> Result<RosterTable, RosterError> {
    let format = RosterFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = match format {
        RosterFormat::Json => match serde_json::from_str::<JsonRoster>(&content)? {
            JsonRoster::Bare(records) => RosterTable { records },
            JsonRoster::Table(table) => table,
        },
        RosterFormat::Toml => toml::from_str(&content)?,
    };

    validate(&table.records)?;
    debug!("Loaded {} roster records from {}", table.records.len(), path.display());
    Ok(table)
}

/// Write a roster table in the format implied by `path`
pub fn save_roster(path: &Path, table: &RosterTable) -> Result<(), RosterError> {
    let content = match RosterFormat::from_path(path)? {
        RosterFormat::Json => serde_json::to_string_pretty(table)?,
        RosterFormat::Toml => toml::to_string_pretty(table)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RosterError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reject records with an empty season, team or player.
///
/// A year that disagrees with the season label is logged, not rejected.
pub fn validate(records: &[RosterRecord]) -> Result<(), RosterError> {
    for (index, record) in records.iter().enumerate() {
        for (field, value) in [
            ("season", &record.season),
            ("team", &record.team),
            ("player", &record.player),
        ] {
            if value.trim().is_empty() {
                return Err(RosterError::Malformed { index, field });
            }
        }

        if let Some(end) = season_end_year(&record.season) {
            if end != record.year {
                warn!(
                    "Record {} ({} {}) has year {} but season ends in {}",
                    index, record.season, record.team, record.year, end
                );
            }
        }
    }
    Ok(())
}

/// Ending year of a season label like "1999-00" (2000) or "2022-23" (2023).
///
/// Two-digit endings below 50 are 20xx, the rest 19xx. Labels not shaped
/// like `X-NN` give `None`.
#[must_use]
pub fn season_end_year(season: &str) -> Option<i32> {
    let (_, end) = season.split_once('-')?;
    if end.contains('-') {
        return None;
    }
    let end: i32 = end.trim().parse().ok()?;
    if !(0..100).contains(&end) {
        return None;
    }
    Some(if end < 50 { 2000 + end } else { 1900 + end })
}
