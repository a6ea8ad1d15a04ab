// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Score command - score an arbitrary group of players

use super::Session;
use crate::scoring::score_group;
use crate::types::{Group, ScoredGroup};
use anyhow::Result;
use tracing::warn;

/// Score the given players and show the breakdown
pub fn run(session: &Session, players: Vec<String>) -> Result<()> {
    let graph = session.load_graph()?;

    for p in &players {
        if graph.championships(p).is_none() {
            warn!("{} does not appear in any roster; counts as 0", p);
        }
    }

    let group = Group::new(players);
    let score = score_group(&graph, &group);

    if session.json {
        return session.print_json(&ScoredGroup { group, score });
    }

    println!("Group {} ({})", group, group.id());
    for p in &group.players {
        let titles = graph.championships(p).unwrap_or(0);
        println!("  {:<28} {}", session.name(p), session.number(titles));
    }
    for (i, a) in group.players.iter().enumerate() {
        for b in &group.players[i + 1..] {
            let shared = graph.co_championships(a, b);
            if shared > 0 {
                println!("  {} + {}: {}", a, b, session.number(shared));
            }
        }
    }
    println!("Score: {}", session.number(score));

    Ok(())
}
