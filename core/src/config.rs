use serde::{Deserialize, Serialize};

/// How repeated records for the same unordered artist pair are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep every relationship, duplicates included.
    KeepAll,
    /// Keep one relationship per pair: the one with the most mentions.
    /// A stronger duplicate replaces the stored relationship in place, so the
    /// pair keeps the adjacency position of its first record.
    #[default]
    Strongest,
}

/// Configuration for graph construction
#[derive(Debug, Clone, Default)]
pub struct GraphConfig {
    pub duplicate_policy: DuplicatePolicy,
}

impl GraphConfig {
    pub fn new(duplicate_policy: DuplicatePolicy) -> Self {
        Self { duplicate_policy }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Fewest hops
    #[default]
    Bfs,
    /// Lowest summed `1/mentions`
    Dijkstra,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl From<&str> for Algorithm {
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case("dijkstra") {
            Algorithm::Dijkstra
        } else {
            Algorithm::Bfs
        }
    }
}

impl From<String> for Algorithm {
    fn from(value: String) -> Self {
        Algorithm::from(value.as_str())
    }
}
