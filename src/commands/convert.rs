// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Convert command - rewrite the roster table in another format

use super::Session;
use crate::roster::save_roster;
use crate::types::RosterTable;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Load the configured roster and write it to `output` (.json or .toml)
pub fn run(session: &Session, output: &Path) -> Result<()> {
    let records = session.load_records()?;
    info!("Converting {} records to {}", records.len(), output.display());

    let count = records.len();
    save_roster(output, &RosterTable { records })
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Wrote {} records to {}", count, output.display());
    Ok(())
}
