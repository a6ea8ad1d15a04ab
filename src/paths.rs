// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path enumeration - every distinct node-set reachable as a simple path
//!
//! The search is exhaustive: every node is a search origin and every simple
//! path of the target length is visited. Paths covering a node-set that was
//! already recorded are dropped, so the library keeps the first ordering
//! discovered for each set. Cost grows exponentially with degree and length.

use crate::graph::TeammateGraph;
use crate::types::Group;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info};

/// Deduplicated groups of one fixed size, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathLibrary {
    length: usize,
    groups: Vec<Group>,
}

impl PathLibrary {
    /// Group size this library was built for
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// All groups
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Iterate groups in discovery order
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Groups that include `player`
    #[must_use]
    pub fn containing(&self, player: &str) -> Vec<&Group> {
        crate::scoring::query_groups_containing(&self.groups, player)
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no group was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a PathLibrary {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Enumerate every distinct group of `length` players joined by a simple path.
///
/// A `length` of 0 yields an empty library. A `length` larger than any simple
/// path in the graph also yields an empty library.
#[must_use]
pub fn enumerate_unique_groups(graph: &TeammateGraph, length: usize) -> PathLibrary {
    let started = Instant::now();
    let mut search = Search::new(graph, length);

    if length > 0 && length <= graph.node_count() {
        for origin in graph.node_indices() {
            search.run_from(origin);
        }
    }

    debug!(
        origins = graph.node_count(),
        visited = search.visited,
        "Path search finished"
    );
    info!(
        "Found {} unique {}-player groups in {:.2?}",
        search.groups.len(),
        length,
        started.elapsed()
    );

    PathLibrary {
        length,
        groups: search.groups,
    }
}

/// State for one enumeration call
struct Search<'g> {
    graph: &'g TeammateGraph,
    length: usize,
    /// Current path, origin first
    path: Vec<NodeIndex>,
    on_path: Vec<bool>,
    /// Sorted node-sets already recorded
    seen: HashSet<Vec<NodeIndex>>,
    groups: Vec<Group>,
    /// Full-length paths reached, including rejected duplicates
    visited: u64,
}

impl<'g> Search<'g> {
    fn new(graph: &'g TeammateGraph, length: usize) -> Self {
        Self {
            graph,
            length,
            path: Vec::with_capacity(length.min(graph.node_count())),
            on_path: vec![false; graph.node_count()],
            seen: HashSet::new(),
            groups: Vec::new(),
            visited: 0,
        }
    }

    /// Depth-first search from `origin` with an explicit frame stack.
    ///
    /// `frames[k]` holds the untried neighbors of `path[k]`; a frame is only
    /// pushed while the path is shorter than the target length.
    fn run_from(&mut self, origin: NodeIndex) {
        let graph = self.graph;
        self.push(origin);
        if self.path.len() == self.length {
            self.record();
            self.pop();
            return;
        }

        let mut frames: Vec<std::slice::Iter<'g, NodeIndex>> =
            vec![graph.sorted_neighbors(origin).iter()];

        while let Some(frame) = frames.last_mut() {
            match frame.next() {
                Some(&next) if !self.on_path[next.index()] => {
                    self.push(next);
                    if self.path.len() == self.length {
                        self.record();
                        self.pop();
                    } else {
                        frames.push(graph.sorted_neighbors(next).iter());
                    }
                }
                Some(_) => {}
                None => {
                    frames.pop();
                    self.pop();
                }
            }
        }
    }

    fn push(&mut self, node: NodeIndex) {
        self.on_path[node.index()] = true;
        self.path.push(node);
    }

    fn pop(&mut self) {
        if let Some(node) = self.path.pop() {
            self.on_path[node.index()] = false;
        }
    }

    fn record(&mut self) {
        self.visited += 1;
        let mut key = self.path.clone();
        key.sort_unstable();
        if self.seen.insert(key) {
            let players = self
                .path
                .iter()
                .map(|idx| self.graph.name(*idx).to_string())
                .collect();
            self.groups.push(Group::new(players));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::types::RosterRecord;

    fn roster(season: &str, players: &[&str]) -> Vec<RosterRecord> {
        players
            .iter()
            .map(|p| RosterRecord::new(season, "Team", 0, p))
            .collect()
    }

    /// A(3) B(2) C(1), A-B(2), A-C(1)
    fn star() -> TeammateGraph {
        let mut records = roster("s1", &["A", "B"]);
        records.extend(roster("s2", &["A", "B"]));
        records.extend(roster("s3", &["A", "C"]));
        build_graph(&records)
    }

    /// Path graph A-B-C-D
    fn chain() -> TeammateGraph {
        let mut records = roster("s1", &["A", "B"]);
        records.extend(roster("s2", &["B", "C"]));
        records.extend(roster("s3", &["C", "D"]));
        build_graph(&records)
    }

    fn names(group: &Group) -> Vec<&str> {
        group.players.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_star_yields_single_group() {
        let library = enumerate_unique_groups(&star(), 3);

        assert_eq!(library.len(), 1);
        assert_eq!(library.length(), 3);
        assert_eq!(names(&library.groups()[0]), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_chain_keeps_first_ordering() {
        let library = enumerate_unique_groups(&chain(), 4);

        assert_eq!(library.len(), 1);
        assert_eq!(names(&library.groups()[0]), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_chain_pairs_and_triples() {
        let graph = chain();

        let pairs = enumerate_unique_groups(&graph, 2);
        let keys: Vec<Vec<&str>> = pairs.iter().map(Group::key).collect();
        assert_eq!(keys, vec![vec!["A", "B"], vec!["B", "C"], vec!["C", "D"]]);

        let triples = enumerate_unique_groups(&graph, 3);
        assert_eq!(triples.len(), 2);
    }

    #[test]
    fn test_length_one_lists_every_player() {
        let library = enumerate_unique_groups(&chain(), 1);

        assert_eq!(library.len(), 4);
        assert!(library.iter().all(|g| g.len() == 1));
    }

    #[test]
    fn test_degenerate_lengths_are_empty() {
        let graph = chain();

        assert!(enumerate_unique_groups(&graph, 0).is_empty());
        assert!(enumerate_unique_groups(&graph, 5).is_empty());
        assert!(enumerate_unique_groups(&star(), 4).is_empty());
    }

    #[test]
    fn test_huge_length_is_empty() {
        let library = enumerate_unique_groups(&star(), usize::MAX);

        assert!(library.is_empty());
        assert_eq!(library.length(), usize::MAX);
        assert!(enumerate_unique_groups(&build_graph(&[]), usize::MAX).is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let graph = build_graph(&[]);
        let library = enumerate_unique_groups(&graph, 5);

        assert!(library.is_empty());
    }

    #[test]
    fn test_isolated_player_only_at_length_one() {
        let mut records = roster("s1", &["A", "B"]);
        records.extend(roster("s2", &["Loner"]));
        let graph = build_graph(&records);

        assert_eq!(enumerate_unique_groups(&graph, 1).len(), 3);
        let pairs = enumerate_unique_groups(&graph, 2);
        assert_eq!(pairs.len(), 1);
        assert!(pairs.containing("Loner").is_empty());
    }

    #[test]
    fn test_triangle_collapses_orderings() {
        let graph = build_graph(&roster("s1", &["A", "B", "C"]));
        let library = enumerate_unique_groups(&graph, 3);

        assert_eq!(library.len(), 1);
        assert_eq!(names(&library.groups()[0]), vec!["A", "B", "C"]);
    }
}
