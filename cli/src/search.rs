use artistgraph_core::{Algorithm, ArtistGraph, GraphError, PathResult};

use crate::args::Args;

pub struct SearchRequest {
    pub from_name: String,
    pub to_name: String,
    pub algorithms: Vec<Algorithm>,
    pub search_args: Args,
}

pub struct SearchResult {
    pub algorithm: Algorithm,
    pub outcome: Result<PathResult, GraphError>,
}

/// Resolves both artist names up front so the request carries their
/// display names.
pub fn create_search_request(args: Args, graph: &ArtistGraph) -> Result<SearchRequest, GraphError> {
    let registry = graph.registry();
    let from_index = registry.lookup_by_name(&args.artist1)?;
    let to_index = registry.lookup_by_name(&args.artist2)?;

    let algorithms = match &args.algorithm {
        Some(name) => vec![Algorithm::from(name.as_str())],
        None => vec![Algorithm::Bfs, Algorithm::Dijkstra],
    };

    Ok(SearchRequest {
        from_name: registry.artist(from_index).name.clone(),
        to_name: registry.artist(to_index).name.clone(),
        algorithms,
        search_args: args,
    })
}

pub fn execute_searches(request: &SearchRequest, graph: &ArtistGraph) -> Vec<SearchResult> {
    request
        .algorithms
        .iter()
        .map(|&algorithm| {
            let outcome = graph.find_path(algorithm, &request.from_name, &request.to_name);
            match &outcome {
                Ok(path) => tracing::info!(
                    algorithm = algorithm.as_str(),
                    hops = path.hop_count,
                    cost = path.total_cost,
                    visited = path.artists_visited,
                    "path found"
                ),
                Err(error) => tracing::info!(
                    algorithm = algorithm.as_str(),
                    from = %request.from_name,
                    to = %request.to_name,
                    %error,
                    "query failed"
                ),
            }
            SearchResult { algorithm, outcome }
        })
        .collect()
}
