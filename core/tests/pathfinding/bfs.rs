use super::{assert_close, build_graph, diamond_graph};
use artistgraph_core::{DuplicatePolicy, GraphError, bfs_find_path};

#[test]
fn test_bfs_finds_fewest_hops() {
    let graph = diamond_graph();

    let result = graph.shortest_path("Alice", "Dave").unwrap();

    assert_eq!(
        result.artist_names(graph.registry()),
        vec!["Alice", "Bob", "Dave"]
    );
    assert_eq!(result.hop_count, 2);
    assert_close(result.total_cost, 2.0);
}

#[test]
fn test_bfs_direct_connection() {
    let graph = build_graph(&["Alice", "Bob"], &[(1, 2, 5)], DuplicatePolicy::Strongest);

    let result = graph.shortest_path("Alice", "Bob").unwrap();

    assert_eq!(result.hop_count, 1);
    assert_close(result.total_cost, 0.2);
    assert_eq!(result.steps[0].mentions, None);
    assert_eq!(result.steps[1].mentions, Some(5));
}

#[test]
fn test_bfs_traverses_against_recorded_direction() {
    // Only recorded as Bob -> Alice
    let graph = build_graph(&["Alice", "Bob"], &[(2, 1, 3)], DuplicatePolicy::Strongest);

    let result = graph.shortest_path("Alice", "Bob").unwrap();

    assert_eq!(result.hop_count, 1);
    assert_close(result.total_cost, 1.0 / 3.0);
}

#[test]
fn test_bfs_same_artist() {
    let graph = diamond_graph();

    let result = graph.shortest_path("Carol", "Carol").unwrap();

    assert_eq!(result.artist_names(graph.registry()), vec!["Carol"]);
    assert_eq!(result.hop_count, 0);
    assert_eq!(result.total_cost, 0.0);
}

#[test]
fn test_bfs_follows_insertion_order() {
    let names = ["Alice", "Bob", "Carol", "Dave"];

    let via_bob = build_graph(
        &names,
        &[(1, 2, 2), (1, 3, 2), (2, 4, 2), (3, 4, 2)],
        DuplicatePolicy::Strongest,
    );
    let via_carol = build_graph(
        &names,
        &[(1, 3, 2), (1, 2, 2), (2, 4, 2), (3, 4, 2)],
        DuplicatePolicy::Strongest,
    );

    let first = via_bob.shortest_path("Alice", "Dave").unwrap();
    let second = via_carol.shortest_path("Alice", "Dave").unwrap();

    assert_eq!(first.artist_names(via_bob.registry())[1], "Bob");
    assert_eq!(second.artist_names(via_carol.registry())[1], "Carol");
}

#[test]
fn test_bfs_no_path() {
    let graph = diamond_graph();

    let error = graph.shortest_path("Alice", "Eve").unwrap_err();

    assert_eq!(
        error,
        GraphError::NoPath {
            from: "Alice".to_string(),
            to: "Eve".to_string(),
        }
    );
}

#[test]
fn test_bfs_unknown_artist() {
    let graph = diamond_graph();

    assert_eq!(
        graph.shortest_path("Nobody", "Alice").unwrap_err(),
        GraphError::EntityNotFound("Nobody".to_string())
    );
    assert_eq!(
        graph.shortest_path("Alice", "Nobody").unwrap_err(),
        GraphError::EntityNotFound("Nobody".to_string())
    );
}

#[test]
fn test_bfs_stops_when_target_dequeued() {
    let graph = diamond_graph();
    let registry = graph.registry();
    let alice = registry.lookup_by_name("Alice").unwrap();
    let eve = registry.lookup_by_name("Eve").unwrap();
    let dave = registry.lookup_by_name("Dave").unwrap();

    let (path, visited_count, _) = bfs_find_path(&graph, alice, dave);
    assert!(path.is_some());
    assert_eq!(visited_count, 4);

    let (path, visited_count, _) = bfs_find_path(&graph, alice, eve);
    assert!(path.is_none());
    assert_eq!(visited_count, 4); // Whole component, Eve excluded
}

#[test]
fn test_bfs_expands_queued_artists_before_reaching_target() {
    // Dave is discovered from Alice but only dequeued after Bob, whose
    // neighbor Xavier gets visited in between
    let graph = build_graph(
        &["Alice", "Bob", "Dave", "Xavier"],
        &[(1, 2, 1), (1, 3, 1), (2, 4, 1)],
        DuplicatePolicy::Strongest,
    );
    let registry = graph.registry();
    let alice = registry.lookup_by_name("Alice").unwrap();
    let dave = registry.lookup_by_name("Dave").unwrap();

    let (path, visited_count, _) = bfs_find_path(&graph, alice, dave);
    let (steps, cost) = path.unwrap();

    assert_eq!(visited_count, 4);
    assert_eq!(
        steps.iter().map(|step| step.artist).collect::<Vec<_>>(),
        vec![alice, dave]
    );
    assert_close(cost, 1.0);
}
