// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Stats command - summary of the teammate graph

use super::Session;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct PlayerStat<'a> {
    player: &'a str,
    championships: u32,
}

#[derive(Serialize)]
struct PairStat<'a> {
    players: [&'a str; 2],
    co_championships: u32,
}

#[derive(Serialize)]
struct Summary<'a> {
    players: usize,
    pairs: usize,
    top_players: Vec<PlayerStat<'a>>,
    top_pairs: Vec<PairStat<'a>>,
}

/// Print node/edge counts and the most decorated players and pairs
pub fn run(session: &Session, top: usize) -> Result<()> {
    let graph = session.load_graph()?;

    let summary = Summary {
        players: graph.node_count(),
        pairs: graph.edge_count(),
        top_players: graph
            .top_players(top)
            .into_iter()
            .map(|p| PlayerStat {
                player: &p.name,
                championships: p.championships,
            })
            .collect(),
        top_pairs: graph
            .top_pairs(top)
            .into_iter()
            .map(|(a, b, w)| PairStat {
                players: [a, b],
                co_championships: w,
            })
            .collect(),
    };

    if session.json {
        return session.print_json(&summary);
    }

    println!("Players: {}", session.number(summary.players));
    println!("Teammate pairs: {}", session.number(summary.pairs));

    if !summary.top_players.is_empty() {
        println!();
        println!("Most championships:");
        for stat in &summary.top_players {
            println!("  {:<28} {}", session.name(stat.player), session.number(stat.championships));
        }
    }

    if !summary.top_pairs.is_empty() {
        println!();
        println!("Most shared championships:");
        for stat in &summary.top_pairs {
            println!(
                "  {} - {}: {}",
                stat.players[0],
                stat.players[1],
                session.number(stat.co_championships)
            );
        }
    }

    Ok(())
}
