// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Group queries and scoring

use crate::graph::TeammateGraph;
use crate::types::{Group, ScoredGroup};

/// Every group that includes `player`, in stored order
pub fn query_groups_containing<'a, I>(groups: I, player: &str) -> Vec<&'a Group>
where
    I: IntoIterator<Item = &'a Group>,
{
    groups.into_iter().filter(|g| g.contains(player)).collect()
}

/// Score a group: the sum of its players' championships plus the shared
/// championships of every pair in the group, adjacent on the path or not.
///
/// Players unknown to the graph contribute nothing.
#[must_use]
pub fn score_group(graph: &TeammateGraph, group: &Group) -> u64 {
    let nodes: Vec<_> = group
        .players
        .iter()
        .filter_map(|p| graph.index_of(p))
        .collect();

    let node_sum: u64 = nodes.iter().map(|n| u64::from(graph.node_weight(*n))).sum();

    let mut edge_sum = 0u64;
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            edge_sum += u64::from(graph.pair_weight(*a, *b));
        }
    }

    node_sum + edge_sum
}

/// The highest-scoring group; the first one seen wins a tie.
///
/// Returns `None` when `groups` is empty.
pub fn find_best_group<'a, I>(graph: &TeammateGraph, groups: I) -> Option<ScoredGroup>
where
    I: IntoIterator<Item = &'a Group>,
{
    let mut best: Option<(&Group, u64)> = None;
    for group in groups {
        let score = score_group(graph, group);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((group, score));
        }
    }
    best.map(|(group, score)| ScoredGroup {
        group: group.clone(),
        score,
    })
}

/// The `n` highest-scoring groups, best first. Equal scores keep input order.
pub fn rank_groups<'a, I>(graph: &TeammateGraph, groups: I, n: usize) -> Vec<ScoredGroup>
where
    I: IntoIterator<Item = &'a Group>,
{
    let mut scored: Vec<(&Group, u64)> = groups
        .into_iter()
        .map(|g| (g, score_group(graph, g)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(n)
        .map(|(group, score)| ScoredGroup {
            group: group.clone(),
            score,
        })
        .collect()
}
