use crate::error::{GraphError, Result};
use crate::graph::{ArtistGraph, Relationship};
use crate::registry::{ArtistIndex, EntityRegistry};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// One artist on a path, with the relationship used to reach it
/// (`None` for the start artist).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStep {
    pub artist: ArtistIndex,
    pub mentions: Option<u32>,
    pub weight: Option<f64>,
}

impl PathStep {
    fn start(artist: ArtistIndex) -> Self {
        Self {
            artist,
            mentions: None,
            weight: None,
        }
    }

    fn via(artist: ArtistIndex, relationship: &Relationship) -> Self {
        Self {
            artist,
            mentions: Some(relationship.mentions),
            weight: Some(relationship.weight),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub steps: Vec<PathStep>,
    pub hop_count: usize,
    pub total_cost: f64,
    pub artists_visited: usize,
    pub search_duration: f64,
}

impl PathResult {
    pub fn artists(&self) -> impl Iterator<Item = ArtistIndex> + '_ {
        self.steps.iter().map(|step| step.artist)
    }

    pub fn artist_names<'r>(&self, registry: &'r EntityRegistry) -> Vec<&'r str> {
        self.artists()
            .map(|artist| registry.artist(artist).name.as_str())
            .collect()
    }
}

/// A found path and its total cost as computed by the search.
pub type FoundPath = (Vec<PathStep>, f64);

/// Raw search output: the path if found, artists visited, elapsed seconds.
pub type SearchOutcome = (Option<FoundPath>, usize, f64);

/// Artist -> (parent artist, relationship that discovered it).
pub type ParentMap<'g> = FxHashMap<ArtistIndex, (ArtistIndex, &'g Relationship)>;

pub fn reconstruct_path(parent_map: &ParentMap, start: ArtistIndex, target: ArtistIndex) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut current_node = target;

    while current_node != start {
        let (parent_node, relationship) = parent_map[&current_node];
        path.push(PathStep::via(current_node, relationship));
        current_node = parent_node;
    }

    path.push(PathStep::start(start));
    path.reverse();
    path
}

/// Sum of step weights, accumulated from the start artist forward.
pub fn path_cost(steps: &[PathStep]) -> f64 {
    steps
        .iter()
        .filter_map(|step| step.weight)
        .fold(0.0, |total, weight| total + weight)
}

pub(crate) fn resolve_endpoints(
    graph: &ArtistGraph,
    from_name: &str,
    to_name: &str,
) -> Result<(ArtistIndex, ArtistIndex)> {
    let registry = graph.registry();
    Ok((registry.lookup_by_name(from_name)?, registry.lookup_by_name(to_name)?))
}

pub(crate) fn no_path(graph: &ArtistGraph, start: ArtistIndex, target: ArtistIndex) -> GraphError {
    let registry = graph.registry();
    GraphError::NoPath {
        from: registry.artist(start).name.clone(),
        to: registry.artist(target).name.clone(),
    }
}
