// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Groups command - every group a player belongs to

use super::Session;
use crate::paths::enumerate_unique_groups;
use crate::scoring::score_group;
use crate::types::ScoredGroup;
use anyhow::Result;

/// List every `length`-player group containing `player`, in discovery order
pub fn run(session: &Session, player: &str, length: usize) -> Result<()> {
    let graph = session.load_graph()?;
    let library = enumerate_unique_groups(&graph, length);

    let groups: Vec<ScoredGroup> = library
        .containing(player)
        .into_iter()
        .map(|g| ScoredGroup {
            group: g.clone(),
            score: score_group(&graph, g),
        })
        .collect();

    if session.json {
        return session.print_json(&groups);
    }

    if groups.is_empty() {
        println!("No {}-player groups include {}", length, session.name(player));
        return Ok(());
    }

    println!("Groups that include {} ({}):", session.name(player), groups.len());
    for scored in &groups {
        println!("  {}  {}  score {}", scored.group.id(), scored.group, session.number(scored.score));
    }

    Ok(())
}
