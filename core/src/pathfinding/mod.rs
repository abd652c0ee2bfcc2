pub mod bfs;
pub mod dijkstra;
pub mod utils;

pub use bfs::{bfs_find_path, shortest_path};
pub use dijkstra::{dijkstra_find_path, strongest_path};
pub use utils::{FoundPath, PathResult, PathStep, SearchOutcome};

use crate::config::Algorithm;
use crate::error::Result;
use crate::graph::ArtistGraph;

impl ArtistGraph {
    pub fn shortest_path(&self, from_name: &str, to_name: &str) -> Result<PathResult> {
        shortest_path(self, from_name, to_name)
    }

    pub fn strongest_path(&self, from_name: &str, to_name: &str) -> Result<PathResult> {
        strongest_path(self, from_name, to_name)
    }

    pub fn find_path(&self, algorithm: Algorithm, from_name: &str, to_name: &str) -> Result<PathResult> {
        match algorithm {
            Algorithm::Bfs => shortest_path(self, from_name, to_name),
            Algorithm::Dijkstra => strongest_path(self, from_name, to_name),
        }
    }
}
