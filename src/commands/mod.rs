// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod best;
pub mod completions;
pub mod config;
pub mod convert;
pub mod groups;
pub mod score;
pub mod stats;

use crate::config::Config;
use crate::graph::TeammateGraph;
use crate::roster::{FileRoster, RosterProvider};
use crate::types::RosterRecord;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::info;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Session {
    /// Effective configuration
    pub config: Config,
    /// Print JSON instead of text
    pub json: bool,
    /// Use colors in text output
    pub color: bool,
}

impl Session {
    /// Read the configured roster file
    pub fn load_records(&self) -> Result<Vec<RosterRecord>> {
        let roster = FileRoster::new(self.config.roster_path());
        let records = roster
            .records()
            .with_context(|| format!("Failed to load roster from {}", roster.path().display()))?;
        info!("Loaded {} roster records", records.len());
        Ok(records)
    }

    /// Read the roster and build the teammate graph
    pub fn load_graph(&self) -> Result<TeammateGraph> {
        let records = self.load_records()?;
        let graph = TeammateGraph::build(&records);
        if graph.is_empty() {
            eprintln!("Warning: Roster is empty. Nothing to analyze.");
        }
        Ok(graph)
    }

    /// Highlight a player or group name
    #[must_use]
    pub fn name(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Highlight a number
    #[must_use]
    pub fn number(&self, value: impl std::fmt::Display) -> String {
        if self.color {
            value.green().to_string()
        } else {
            value.to_string()
        }
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: serde::Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{json}");
        Ok(())
    }
}
