// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Layers, lowest first: built-in defaults, a TOML config file, then
//! `RINGMATES_*` environment variables. Command-line flags are applied on
//! top by the caller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default group size
pub const DEFAULT_LENGTH: usize = 5;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target group size
    pub length: usize,
    /// Only consider groups containing this player
    pub player: Option<String>,
    /// Roster table file (defaults to `<data_dir>/rosters.json`)
    pub roster: Option<PathBuf>,
    /// Directory for persistent data
    pub data_dir: PathBuf,
    /// How many entries to list in rankings
    pub top: usize,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            player: None,
            roster: None,
            data_dir: project_dirs()
                .map(|d| d.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".ringmates")),
            top: 10,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// The roster file to read
    #[must_use]
    pub fn roster_path(&self) -> PathBuf {
        self.roster
            .clone()
            .unwrap_or_else(|| self.data_dir.join("rosters.json"))
    }

    /// Look up a single key for display
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "length" => Some(self.length.to_string()),
            "player" => Some(self.player.clone().unwrap_or_default()),
            "roster" => Some(self.roster_path().display().to_string()),
            "data_dir" => Some(self.data_dir.display().to_string()),
            "top" => Some(self.top.to_string()),
            "log_level" => Some(self.log_level.clone()),
            _ => None,
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("org", "hyperpolymath", "ringmates")
}

/// Default config file location
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("ringmates.toml"))
}

/// Load configuration from disk and environment, or use defaults.
///
/// An explicitly given `path` must exist; the default location is optional.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let defaults = Config::default();
    let mut builder = config::Config::builder()
        .set_default("length", defaults.length as u64)?
        .set_default("data_dir", defaults.data_dir.display().to_string())?
        .set_default("top", defaults.top as u64)?
        .set_default("log_level", defaults.log_level.clone())?;

    match path {
        Some(path) => {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        None => {
            if let Some(default_path) = default_config_path() {
                builder = builder.add_source(config::File::from(default_path).required(false));
            }
        }
    }

    let settings = builder
        .add_source(config::Environment::with_prefix("RINGMATES").try_parsing(true))
        .build()
        .context("Failed to read configuration")?;

    settings
        .try_deserialize()
        .context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.length, 5);
        assert_eq!(config.top, 10);
        assert!(config.player.is_none());
        assert_eq!(config.roster_path(), config.data_dir.join("rosters.json"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ringmates.toml");
        fs::write(
            &path,
            "length = 3\nplayer = \"Tim Duncan\"\nroster = \"/data/spurs.json\"\n",
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();

        assert_eq!(config.length, 3);
        assert_eq!(config.player.as_deref(), Some("Tim Duncan"));
        assert_eq!(config.roster_path(), PathBuf::from("/data/spurs.json"));
        assert_eq!(config.top, 10);
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_get_keys() {
        let config = Config {
            length: 4,
            ..Config::default()
        };

        assert_eq!(config.get("length").as_deref(), Some("4"));
        assert_eq!(config.get("player").as_deref(), Some(""));
        assert!(config.get("nonsense").is_none());
    }
}
