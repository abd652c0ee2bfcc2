use super::{TestData, write_file};
use artistgraph::{ArtistGraphApp, create_search_request, execute_searches};
use artistgraph_core::{Algorithm, DuplicatePolicy, GraphError};

#[test]
fn test_app_resolves_paths_against_data_dir() {
    let data = TestData::create();
    let args = data.args("The Beatles", "Kendji Girac");

    let app = ArtistGraphApp::new(&args).unwrap();

    assert_eq!(app.artists_path, data.dir.path().join("artists.txt"));
    assert_eq!(app.config.duplicate_policy, DuplicatePolicy::Strongest);
}

#[test]
fn test_app_missing_data_dir() {
    let data = TestData::create();
    let mut args = data.args("The Beatles", "Kendji Girac");
    args.data_dir = Some("/nonexistent/artistgraph".into());

    let error = ArtistGraphApp::new(&args).err().unwrap();
    assert!(error.to_string().contains("does not exist"));
}

#[test]
fn test_app_missing_file() {
    let data = TestData::create();
    let mut args = data.args("The Beatles", "Kendji Girac");
    args.mentions = "missing.txt".into();

    let error = ArtistGraphApp::new(&args).err().unwrap();
    assert!(error.to_string().contains("not found"));
}

#[test]
fn test_keep_duplicates_flag_selects_policy() {
    let data = TestData::create();
    let mut args = data.args("The Beatles", "Kendji Girac");
    args.keep_duplicates = true;

    let graph = data.graph(&args);

    assert_eq!(graph.config().duplicate_policy, DuplicatePolicy::KeepAll);
    assert_eq!(graph.relationship_count(), 4);
}

#[test]
fn test_strongest_policy_merges_reversed_duplicate() {
    let data = TestData::create();
    let args = data.args("The Beatles", "Kendji Girac");

    let graph = data.graph(&args);

    assert_eq!(graph.relationship_count(), 3);
    assert_eq!(graph.report().duplicates_merged, 1);
}

#[test]
fn test_runs_both_algorithms_by_default() {
    let data = TestData::create();
    let args = data.args("the beatles", "KENDJI GIRAC");
    let graph = data.graph(&args);

    let request = create_search_request(args, &graph).unwrap();
    assert_eq!(request.from_name, "The Beatles");
    assert_eq!(request.to_name, "Kendji Girac");

    let results = execute_searches(&request, &graph);
    assert_eq!(results.len(), 2);

    let shortest = results[0].outcome.as_ref().unwrap();
    let strongest = results[1].outcome.as_ref().unwrap();
    assert_eq!(results[0].algorithm, Algorithm::Bfs);
    assert_eq!(shortest.hop_count, 1);
    assert_eq!(results[1].algorithm, Algorithm::Dijkstra);
    assert_eq!(strongest.hop_count, 2);
    assert!(strongest.total_cost < shortest.total_cost);
}

#[test]
fn test_single_algorithm() {
    let data = TestData::create();
    let mut args = data.args("The Beatles", "Kendji Girac");
    args.algorithm = Some("dijkstra".to_string());
    let graph = data.graph(&args);

    let request = create_search_request(args, &graph).unwrap();

    assert_eq!(request.algorithms, vec![Algorithm::Dijkstra]);
}

#[test]
fn test_unknown_artist_rejected_before_search() {
    let data = TestData::create();
    let args = data.args("The Beatles", "Nobody");
    let graph = data.graph(&args);

    let error = create_search_request(args, &graph).err().unwrap();

    assert_eq!(error, GraphError::EntityNotFound("Nobody".to_string()));
}

#[test]
fn test_no_path_reported_per_algorithm() {
    let data = TestData::create();
    let args = data.args("The Beatles", "Loner");
    let graph = data.graph(&args);

    let request = create_search_request(args, &graph).unwrap();
    let results = execute_searches(&request, &graph);

    assert!(results.iter().all(|result| matches!(
        result.outcome,
        Err(GraphError::NoPath { .. })
    )));
}

#[test]
fn test_load_counts_mentions_of_unknown_artists() {
    let data = TestData::create();
    write_file(
        &data.dir.path().join("mentions.txt"),
        "1,2,1\n\
         1,99,4\n",
    );
    let args = data.args("The Beatles", "Kendji Girac");

    let graph = data.graph(&args);

    assert_eq!(graph.relationship_count(), 1);
    assert_eq!(graph.report().records_skipped, 1);
}
