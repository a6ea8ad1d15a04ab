// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Teammate co-occurrence graph built from championship rosters

use crate::types::RosterRecord;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// A player node and their championship count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Player name
    pub name: String,
    /// Number of roster groups the player appears in
    pub championships: u32,
}

/// Unordered node pair, lower index first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey(NodeIndex, NodeIndex);

impl PairKey {
    /// Canonical key for the pair `{a, b}`
    #[must_use]
    pub fn new(a: NodeIndex, b: NodeIndex) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// Weighted undirected graph of players and shared championships.
///
/// Built once from a roster table and read-only afterwards. The petgraph
/// graph only carries topology; weights live in the player nodes and in
/// `co_championships`.
#[derive(Debug, Clone, Default)]
pub struct TeammateGraph {
    /// Adjacency for traversal
    graph: UnGraph<Player, ()>,
    /// Map from player name to node index
    node_indices: HashMap<String, NodeIndex>,
    /// Edge weights keyed by canonical pair
    co_championships: BTreeMap<PairKey, u32>,
    /// Neighbors per node, sorted by index (and so by name)
    adjacency: Vec<Vec<NodeIndex>>,
}

/// Build a graph from roster records
#[must_use]
pub fn build_graph(records: &[RosterRecord]) -> TeammateGraph {
    TeammateGraph::build(records)
}

impl TeammateGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph in one pass over the records.
    ///
    /// Records are grouped by (season, team). Node weight counts records per
    /// player, so duplicate records inflate it. Every pair of distinct names
    /// within a roster adds 1 to that pair's edge weight.
    #[must_use]
    pub fn build(records: &[RosterRecord]) -> Self {
        let mut rosters: BTreeMap<(&str, &str), Vec<&str>> = BTreeMap::new();
        for record in records {
            rosters
                .entry(record.roster_key())
                .or_default()
                .push(record.player.as_str());
        }

        let mut championships: BTreeMap<&str, u32> = BTreeMap::new();
        for players in rosters.values() {
            for player in players {
                *championships.entry(*player).or_insert(0) += 1;
            }
        }

        // Nodes go in sorted name order so index order matches name order
        let mut graph = UnGraph::with_capacity(championships.len(), 0);
        let mut node_indices = HashMap::with_capacity(championships.len());
        for (name, count) in &championships {
            let idx = graph.add_node(Player {
                name: (*name).to_string(),
                championships: *count,
            });
            node_indices.insert((*name).to_string(), idx);
        }

        let mut co_championships: BTreeMap<PairKey, u32> = BTreeMap::new();
        for players in rosters.values_mut() {
            players.sort_unstable();
            for (i, a) in players.iter().enumerate() {
                for b in &players[i + 1..] {
                    if a == b {
                        continue;
                    }
                    let key = PairKey::new(node_indices[*a], node_indices[*b]);
                    *co_championships.entry(key).or_insert(0) += 1;
                }
            }
        }

        let mut adjacency = vec![Vec::new(); graph.node_count()];
        for PairKey(a, b) in co_championships.keys() {
            graph.add_edge(*a, *b, ());
            adjacency[a.index()].push(*b);
            adjacency[b.index()].push(*a);
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
        }

        debug!(
            rosters = rosters.len(),
            players = graph.node_count(),
            pairs = graph.edge_count(),
            "Built teammate graph"
        );

        Self {
            graph,
            node_indices,
            co_championships,
            adjacency,
        }
    }

    /// Championship count for a player, if present
    #[must_use]
    pub fn championships(&self, player: &str) -> Option<u32> {
        self.index_of(player).map(|idx| self.graph[idx].championships)
    }

    /// Shared championships for two players; 0 when they never co-appeared
    #[must_use]
    pub fn co_championships(&self, a: &str, b: &str) -> u32 {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a), Some(b)) => self.pair_weight(a, b),
            _ => 0,
        }
    }

    /// Whether an edge joins the two players
    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.co_championships(a, b) > 0
    }

    /// Teammates of `player`, sorted by name
    #[must_use]
    pub fn neighbors(&self, player: &str) -> Vec<&str> {
        self.index_of(player)
            .map(|idx| {
                self.adjacency[idx.index()]
                    .iter()
                    .map(|n| self.name(*n))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All players, sorted by name
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.graph.node_weights()
    }

    /// Every edge as (a, b, weight) with `a < b`
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.co_championships
            .iter()
            .map(|(PairKey(a, b), w)| (self.name(*a), self.name(*b), *w))
    }

    /// Players with the most championships, ties broken by name
    #[must_use]
    pub fn top_players(&self, n: usize) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players().collect();
        players.sort_by(|a, b| {
            b.championships
                .cmp(&a.championships)
                .then_with(|| a.name.cmp(&b.name))
        });
        players.truncate(n);
        players
    }

    /// Pairs with the most shared championships, ties broken by names
    #[must_use]
    pub fn top_pairs(&self, n: usize) -> Vec<(&str, &str, u32)> {
        let mut pairs: Vec<_> = self.pairs().collect();
        // pairs() is already in name order, so a stable sort keeps ties by name
        pairs.sort_by(|a, b| b.2.cmp(&a.2));
        pairs.truncate(n);
        pairs
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if the graph is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub(crate) fn index_of(&self, player: &str) -> Option<NodeIndex> {
        self.node_indices.get(player).copied()
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    pub(crate) fn sorted_neighbors(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.adjacency[idx.index()]
    }

    pub(crate) fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].name
    }

    pub(crate) fn node_weight(&self, idx: NodeIndex) -> u32 {
        self.graph[idx].championships
    }

    pub(crate) fn pair_weight(&self, a: NodeIndex, b: NodeIndex) -> u32 {
        self.co_championships
            .get(&PairKey::new(a, b))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(season: &str, team: &str, player: &str) -> RosterRecord {
        RosterRecord::new(season, team, 0, player)
    }

    fn bulls_and_lakers() -> Vec<RosterRecord> {
        vec![
            rec("1995-96", "Chicago Bulls", "Michael Jordan"),
            rec("1995-96", "Chicago Bulls", "Scottie Pippen"),
            rec("1995-96", "Chicago Bulls", "Dennis Rodman"),
            rec("1996-97", "Chicago Bulls", "Michael Jordan"),
            rec("1996-97", "Chicago Bulls", "Scottie Pippen"),
            rec("1996-97", "Chicago Bulls", "Dennis Rodman"),
            rec("1999-00", "Los Angeles Lakers", "Shaquille O'Neal"),
            rec("1999-00", "Los Angeles Lakers", "Kobe Bryant"),
            rec("1999-00", "Los Angeles Lakers", "Ron Harper"),
            rec("1995-96", "Chicago Bulls", "Ron Harper"),
        ]
    }

    #[test]
    fn test_empty_records() {
        let graph = TeammateGraph::build(&[]);

        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_node_weights() {
        let graph = build_graph(&bulls_and_lakers());

        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.championships("Michael Jordan"), Some(2));
        assert_eq!(graph.championships("Ron Harper"), Some(2));
        assert_eq!(graph.championships("Kobe Bryant"), Some(1));
        assert_eq!(graph.championships("Larry Bird"), None);
    }

    #[test]
    fn test_edge_weights() {
        let graph = build_graph(&bulls_and_lakers());

        assert_eq!(graph.co_championships("Michael Jordan", "Scottie Pippen"), 2);
        assert_eq!(graph.co_championships("Scottie Pippen", "Michael Jordan"), 2);
        assert_eq!(graph.co_championships("Ron Harper", "Michael Jordan"), 1);
        assert_eq!(graph.co_championships("Ron Harper", "Kobe Bryant"), 1);
        assert_eq!(graph.co_championships("Michael Jordan", "Kobe Bryant"), 0);
        assert!(!graph.has_edge("Michael Jordan", "Kobe Bryant"));
        // 4 Bulls in 95-96 -> 6 pairs, 96-97 adds none new, Lakers add 3
        assert_eq!(graph.edge_count(), 9);
    }

    #[test]
    fn test_same_team_different_season_is_separate_roster() {
        let records = vec![
            rec("1990-91", "Chicago Bulls", "A"),
            rec("1991-92", "Chicago Bulls", "B"),
        ];
        let graph = build_graph(&records);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_duplicate_records_inflate_node_weight_without_self_loop() {
        let records = vec![
            rec("2013-14", "San Antonio Spurs", "Tim Duncan"),
            rec("2013-14", "San Antonio Spurs", "Tim Duncan"),
            rec("2013-14", "San Antonio Spurs", "Tony Parker"),
        ];
        let graph = build_graph(&records);

        assert_eq!(graph.championships("Tim Duncan"), Some(2));
        assert_eq!(graph.co_championships("Tim Duncan", "Tim Duncan"), 0);
        assert_eq!(graph.co_championships("Tim Duncan", "Tony Parker"), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_neighbors_sorted() {
        let graph = build_graph(&bulls_and_lakers());

        assert_eq!(
            graph.neighbors("Ron Harper"),
            vec!["Dennis Rodman", "Kobe Bryant", "Michael Jordan", "Scottie Pippen", "Shaquille O'Neal"]
        );
        assert!(graph.neighbors("Nobody").is_empty());
    }

    #[test]
    fn test_top_players_and_pairs() {
        let graph = build_graph(&bulls_and_lakers());

        let top: Vec<&str> = graph.top_players(3).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(top, vec!["Dennis Rodman", "Michael Jordan", "Ron Harper"]);

        let pairs = graph.top_pairs(1);
        assert_eq!(pairs, vec![("Dennis Rodman", "Michael Jordan", 2)]);
    }

    #[test]
    fn test_pair_key_is_order_independent() {
        let a = NodeIndex::new(3);
        let b = NodeIndex::new(7);
        assert_eq!(PairKey::new(a, b), PairKey::new(b, a));
    }
}
