use super::utils::{
    ParentMap, PathResult, SearchOutcome, no_path, reconstruct_path, resolve_endpoints,
};
use crate::error::Result;
use crate::graph::{ArtistGraph, Relationship};
use crate::registry::ArtistIndex;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};

#[derive(Clone)]
struct DijkstraNode {
    cost: f64,
    sequence: usize,
    artist: ArtistIndex,
}

impl PartialEq for DijkstraNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraNode {}

impl PartialOrd for DijkstraNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal costs pop in push order
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

struct DijkstraState<'g> {
    heap: BinaryHeap<DijkstraNode>,
    distances: FxHashMap<ArtistIndex, f64>,
    parent_map: ParentMap<'g>,
    settled: FxHashSet<ArtistIndex>,
    pushed: usize,
}

impl<'g> DijkstraState<'g> {
    fn new(start: ArtistIndex) -> Self {
        let mut state = Self {
            heap: BinaryHeap::new(),
            distances: FxHashMap::default(),
            parent_map: FxHashMap::default(),
            settled: FxHashSet::default(),
            pushed: 0,
        };
        state.distances.insert(start, 0.0);
        state.push(start, 0.0);
        state
    }

    fn push(&mut self, artist: ArtistIndex, cost: f64) {
        self.heap.push(DijkstraNode {
            cost,
            sequence: self.pushed,
            artist,
        });
        self.pushed += 1;
    }

    fn distance(&self, artist: ArtistIndex) -> f64 {
        self.distances.get(&artist).copied().unwrap_or(f64::INFINITY)
    }

    /// Only a strictly cheaper candidate replaces the recorded predecessor.
    fn visit_neighbor(
        &mut self,
        neighbor: ArtistIndex,
        current: ArtistIndex,
        relationship: &'g Relationship,
        current_cost: f64,
    ) {
        let new_cost = current_cost + relationship.weight;
        if new_cost >= self.distance(neighbor) {
            return;
        }

        self.distances.insert(neighbor, new_cost);
        self.parent_map.insert(neighbor, (current, relationship));
        self.push(neighbor, new_cost);
    }
}

/// Minimum-cost search where each relationship costs `1 / mentions`.
///
/// Ties: frontier entries of equal cost are expanded in the order they were
/// pushed, and a predecessor is only replaced by a strictly cheaper one, so
/// among equal-cost paths the first discovered in adjacency order wins.
pub fn dijkstra_find_path(
    graph: &ArtistGraph,
    start: ArtistIndex,
    target: ArtistIndex,
) -> SearchOutcome {
    let search_timer = Instant::now();
    let mut dijkstra_state = DijkstraState::new(start);

    while let Some(DijkstraNode {
        cost,
        artist: current_artist,
        ..
    }) = dijkstra_state.heap.pop()
    {
        if dijkstra_state.settled.contains(&current_artist) {
            continue;
        }
        dijkstra_state.settled.insert(current_artist);

        if current_artist == target {
            let path = reconstruct_path(&dijkstra_state.parent_map, start, target);
            let elapsed_time = search_timer.elapsed().as_secs_f64();
            return (Some((path, cost)), dijkstra_state.settled.len(), elapsed_time);
        }

        for (neighbor_artist, relationship) in graph.neighbors(current_artist) {
            if !dijkstra_state.settled.contains(&neighbor_artist) {
                dijkstra_state.visit_neighbor(neighbor_artist, current_artist, relationship, cost);
            }
        }
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    (None, dijkstra_state.settled.len(), elapsed_time)
}

/// Path maximizing accumulated mention strength between two artists by name.
pub fn strongest_path(graph: &ArtistGraph, from_name: &str, to_name: &str) -> Result<PathResult> {
    let (start, target) = resolve_endpoints(graph, from_name, to_name)?;
    let (path, artists_visited, search_duration) = dijkstra_find_path(graph, start, target);

    tracing::debug!(from = from_name, to = to_name, artists_visited, "dijkstra finished");

    let (steps, total_cost) = path.ok_or_else(|| no_path(graph, start, target))?;
    Ok(PathResult {
        hop_count: steps.len() - 1,
        total_cost,
        steps,
        artists_visited,
        search_duration,
    })
}
