// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Ringmates library - the most decorated groups of championship teammates
//!
//! This crate turns championship rosters into a weighted co-occurrence graph
//! (players as nodes, shared titles as edge weights) and searches it for the
//! highest-scoring group of a fixed size.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod graph;
pub mod paths;
pub mod roster;
pub mod scoring;

/// Core data types shared by the builder, enumerator and scoring engine
pub mod types {
    use serde::{Deserialize, Serialize};
    use sha2::{Digest, Sha256};

    // =========================================================================
    // Roster Records
    // =========================================================================

    /// One (season-team, player) pairing from a championship roster
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct RosterRecord {
        /// Season label, e.g. "1997-98"
        #[serde(alias = "Season")]
        pub season: String,
        /// Team name, e.g. "Chicago Bulls"
        #[serde(alias = "Team")]
        pub team: String,
        /// Year the season ended
        #[serde(alias = "Year")]
        pub year: i32,
        /// Player name
        #[serde(alias = "Player")]
        pub player: String,
    }

    impl RosterRecord {
        /// Convenience constructor
        #[must_use]
        pub fn new(season: &str, team: &str, year: i32, player: &str) -> Self {
            Self {
                season: season.into(),
                team: team.into(),
                year,
                player: player.into(),
            }
        }

        /// The (season, team) key identifying the roster group this record belongs to
        #[must_use]
        pub fn roster_key(&self) -> (&str, &str) {
            (&self.season, &self.team)
        }
    }

    /// The persisted roster table
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RosterTable {
        /// All records, in file order
        #[serde(default)]
        pub records: Vec<RosterRecord>,
    }

    // =========================================================================
    // Groups
    // =========================================================================

    /// A fixed-size set of players connected by a simple path in the graph.
    ///
    /// `players` holds the ordering the path was discovered in. Identity is the
    /// unordered set, see [`Group::key`].
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Group {
        /// Players in discovered path order
        pub players: Vec<String>,
    }

    impl Group {
        /// Create a group from an ordered list of players
        #[must_use]
        pub fn new(players: Vec<String>) -> Self {
            Self { players }
        }

        /// Sorted player names; two orderings of one node-set share a key
        #[must_use]
        pub fn key(&self) -> Vec<&str> {
            let mut key: Vec<&str> = self.players.iter().map(String::as_str).collect();
            key.sort_unstable();
            key
        }

        /// Deterministic ID derived from the node-set: group:<hash>
        #[must_use]
        pub fn id(&self) -> String {
            let mut hasher = Sha256::new();
            hasher.update(self.key().join("\n").as_bytes());
            let hash = hex::encode(hasher.finalize());
            format!("group:{}", &hash[..12])
        }

        /// Whether the group includes `player`
        #[must_use]
        pub fn contains(&self, player: &str) -> bool {
            self.players.iter().any(|p| p == player)
        }

        /// Number of players
        #[must_use]
        pub fn len(&self) -> usize {
            self.players.len()
        }

        /// True for a group with no players
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.players.is_empty()
        }
    }

    impl std::fmt::Display for Group {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "[{}]", self.players.join(", "))
        }
    }

    /// A group paired with its score
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ScoredGroup {
        /// The group
        pub group: Group,
        /// Node weights plus all pairwise edge weights
        pub score: u64,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::graph::{build_graph, TeammateGraph};
    pub use crate::paths::{enumerate_unique_groups, PathLibrary};
    pub use crate::scoring::{find_best_group, query_groups_containing, rank_groups, score_group};
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
