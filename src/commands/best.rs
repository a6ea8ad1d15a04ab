// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Best command - the highest-scoring group of a fixed size

use super::Session;
use crate::paths::enumerate_unique_groups;
use crate::scoring::{find_best_group, rank_groups};
use crate::types::{Group, ScoredGroup};
use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Serialize)]
struct BestReport<'a> {
    length: usize,
    player: Option<&'a str>,
    candidates: usize,
    groups: Vec<ScoredGroup>,
}

/// Run the best command.
///
/// With `top` set, prints the `top` best groups instead of only the winner.
pub fn run(session: &Session, length: usize, player: Option<&str>, top: Option<usize>) -> Result<()> {
    let graph = session.load_graph()?;

    if let Some(p) = player {
        if graph.championships(p).is_none() {
            warn!("{} does not appear in any roster", p);
        }
    }

    let library = enumerate_unique_groups(&graph, length);
    let candidates: Vec<&Group> = match player {
        Some(p) => library.containing(p),
        None => library.iter().collect(),
    };
    info!("{} candidate groups", candidates.len());

    let count = candidates.len();
    let groups = match top {
        Some(n) => rank_groups(&graph, candidates, n),
        None => find_best_group(&graph, candidates).into_iter().collect(),
    };

    if session.json {
        return session.print_json(&BestReport {
            length,
            player,
            candidates: count,
            groups,
        });
    }

    let Some(best) = groups.first() else {
        println!("No qualifying group");
        return Ok(());
    };

    let scope = player.map(|p| format!(" with {}", session.name(p))).unwrap_or_default();
    if groups.len() == 1 {
        println!("Best {}-player group{}: {}", length, scope, best.group);
        println!("Score: {}", session.number(best.score));
    } else {
        println!("Top {} {}-player groups{} ({} candidates):", groups.len(), length, scope, count);
        for (rank, scored) in groups.iter().enumerate() {
            println!("  {:>3}. {:>5}  {}", rank + 1, session.number(scored.score), scored.group);
        }
    }

    Ok(())
}
