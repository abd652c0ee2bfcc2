use super::utils::{
    ParentMap, PathResult, SearchOutcome, no_path, path_cost, reconstruct_path, resolve_endpoints,
};
use crate::error::Result;
use crate::graph::{ArtistGraph, Relationship};
use crate::registry::ArtistIndex;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{collections::VecDeque, time::Instant};

struct BfsState<'g> {
    queue: VecDeque<ArtistIndex>,
    visited: FxHashSet<ArtistIndex>,
    parent_map: ParentMap<'g>,
}

impl<'g> BfsState<'g> {
    fn new(start: ArtistIndex) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    fn visit_neighbor(
        &mut self,
        neighbor: ArtistIndex,
        current: ArtistIndex,
        relationship: &'g Relationship,
    ) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, (current, relationship));
            self.queue.push_back(neighbor);
        }
    }
}

/// Breadth-first search over artist indices.
///
/// Neighbors are discovered in adjacency insertion order and the search
/// stops when `target` is dequeued, so the returned path is the first
/// hop-minimal path in that order.
pub fn bfs_find_path(graph: &ArtistGraph, start: ArtistIndex, target: ArtistIndex) -> SearchOutcome {
    let search_timer = Instant::now();
    let mut bfs_state = BfsState::new(start);

    while let Some(current_artist) = bfs_state.queue.pop_front() {
        if current_artist == target {
            let path = reconstruct_path(&bfs_state.parent_map, start, target);
            let cost = path_cost(&path);
            let elapsed_time = search_timer.elapsed().as_secs_f64();
            return (Some((path, cost)), bfs_state.visited.len(), elapsed_time);
        }

        for (neighbor_artist, relationship) in graph.neighbors(current_artist) {
            bfs_state.visit_neighbor(neighbor_artist, current_artist, relationship);
        }
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    (None, bfs_state.visited.len(), elapsed_time)
}

/// Fewest-hops path between two artists by name.
///
/// The reported cost is the summed weight of that path, which is not
/// necessarily the cheapest path (see [`super::strongest_path`]).
pub fn shortest_path(graph: &ArtistGraph, from_name: &str, to_name: &str) -> Result<PathResult> {
    let (start, target) = resolve_endpoints(graph, from_name, to_name)?;
    let (path, artists_visited, search_duration) = bfs_find_path(graph, start, target);

    tracing::debug!(from = from_name, to = to_name, artists_visited, "bfs finished");

    let (steps, total_cost) = path.ok_or_else(|| no_path(graph, start, target))?;
    Ok(PathResult {
        hop_count: steps.len() - 1,
        total_cost,
        steps,
        artists_visited,
        search_duration,
    })
}
