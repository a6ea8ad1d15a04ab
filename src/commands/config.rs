// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

use super::Session;
use anyhow::{Context, Result};

/// Show the effective configuration, or a single key
pub fn run(session: &Session, key: Option<&str>) -> Result<()> {
    let config = &session.config;

    match key {
        Some(key) => {
            let value = config
                .get(key)
                .ok_or_else(|| anyhow::anyhow!("Unknown config key: {}. Valid: length, player, roster, data_dir, top, log_level", key))?;
            println!("{value}");
        }
        None if session.json => session.print_json(config)?,
        None => {
            let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
            print!("{rendered}");
        }
    }

    Ok(())
}
