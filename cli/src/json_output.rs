use artistgraph_core::{Algorithm, ArtistGraph, DuplicatePolicy};
use serde::{Deserialize, Serialize};

use crate::search::{SearchRequest, SearchResult};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub results: Vec<JsonResult>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub duplicate_policy: DuplicatePolicy,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub algorithm: Algorithm,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonArtist>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hop_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<JsonStats>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonArtist {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions_from_previous: Option<u32>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub nodes_explored: usize,
}

pub fn create_json_output(
    request: &SearchRequest,
    results: &[SearchResult],
    graph: &ArtistGraph,
) -> JsonOutput {
    let registry = graph.registry();

    let json_results = results
        .iter()
        .map(|result| match &result.outcome {
            Ok(path) => JsonResult {
                algorithm: result.algorithm,
                found: true,
                path: Some(
                    path.steps
                        .iter()
                        .map(|step| {
                            let artist = registry.artist(step.artist);
                            JsonArtist {
                                id: artist.id,
                                name: artist.name.clone(),
                                description: artist.description.clone(),
                                mentions_from_previous: step.mentions,
                            }
                        })
                        .collect(),
                ),
                hop_count: Some(path.hop_count),
                total_cost: Some(path.total_cost),
                error: None,
                stats: Some(JsonStats {
                    search_time_ms: (path.search_duration * 1000.0) as u64,
                    nodes_explored: path.artists_visited,
                }),
            },
            Err(error) => JsonResult {
                algorithm: result.algorithm,
                found: false,
                path: None,
                hop_count: None,
                total_cost: None,
                error: Some(error.to_string()),
                stats: None,
            },
        })
        .collect();

    JsonOutput {
        query: JsonQuery {
            from: request.from_name.clone(),
            to: request.to_name.clone(),
            options: JsonOptions {
                duplicate_policy: graph.config().duplicate_policy,
            },
        },
        results: json_results,
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
