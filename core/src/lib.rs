pub mod config;
pub mod error;
pub mod graph;
pub mod parsing;
pub mod pathfinding;
pub mod registry;
pub mod string_normalization;

// Re-export commonly used items
pub use config::{Algorithm, DuplicatePolicy, GraphConfig};
pub use error::{GraphError, LoadError, RecordError, Result};
pub use graph::{ArtistGraph, BuildReport, GraphBuilder, MentionRecord, Relationship};
pub use parsing::{Loaded, SkippedRecord, load_graph, load_mentions, load_roster, split_record};
pub use pathfinding::{PathResult, PathStep, bfs_find_path, dijkstra_find_path, shortest_path, strongest_path};
pub use registry::{Artist, ArtistId, ArtistIndex, EntityRegistry};
