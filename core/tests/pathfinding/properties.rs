use super::{assert_close, build_graph, diamond_graph};
use artistgraph_core::{Algorithm, DuplicatePolicy};

#[test]
fn test_strongest_never_costs_more_than_shortest() {
    let graph = build_graph(
        &["A", "B", "C", "D", "E", "F"],
        &[
            (1, 2, 1),
            (2, 6, 1),
            (1, 3, 7),
            (3, 4, 3),
            (4, 5, 9),
            (5, 6, 4),
            (2, 4, 2),
            (3, 5, 1),
        ],
        DuplicatePolicy::Strongest,
    );

    let names = ["A", "B", "C", "D", "E", "F"];
    for from in names {
        for to in names {
            let shortest = graph.shortest_path(from, to).unwrap();
            let strongest = graph.strongest_path(from, to).unwrap();
            assert!(
                strongest.total_cost <= shortest.total_cost,
                "{from} -> {to}: {} > {}",
                strongest.total_cost,
                shortest.total_cost
            );
            assert!(strongest.hop_count >= shortest.hop_count);
        }
    }
}

#[test]
fn test_strongest_edge_policy_keeps_one_relationship() {
    let graph = build_graph(
        &["Alice", "Bob"],
        &[(1, 2, 2), (2, 1, 10)],
        DuplicatePolicy::Strongest,
    );

    let between: Vec<_> = graph.relationships_between(0, 1).collect();
    assert_eq!(between.len(), 1);
    assert_close(between[0].weight, 0.1);
    assert_eq!(graph.report().duplicates_merged, 1);
}

#[test]
fn test_weaker_duplicate_is_dropped() {
    let graph = build_graph(
        &["Alice", "Bob"],
        &[(1, 2, 10), (1, 2, 2)],
        DuplicatePolicy::Strongest,
    );

    assert_eq!(graph.relationship_count(), 1);
    assert_eq!(graph.relationship(0).mentions, 10);
}

#[test]
fn test_keep_all_policy_retains_duplicates() {
    let graph = build_graph(
        &["Alice", "Bob"],
        &[(1, 2, 2), (2, 1, 10)],
        DuplicatePolicy::KeepAll,
    );

    assert_eq!(graph.relationships_between(0, 1).count(), 2);
    assert_eq!(graph.relationships_between(1, 0).count(), 2);
}

#[test]
fn test_unknown_ids_are_skipped() {
    let graph = build_graph(
        &["Alice", "Bob"],
        &[(1, 2, 3), (1, 99, 3), (42, 2, 3)],
        DuplicatePolicy::Strongest,
    );

    assert_eq!(graph.relationship_count(), 1);
    assert_eq!(graph.report().records_skipped, 2);
}

#[test]
fn test_find_path_dispatches_on_algorithm() {
    let graph = diamond_graph();

    let bfs = graph.find_path(Algorithm::Bfs, "Alice", "Dave").unwrap();
    let dijkstra = graph.find_path(Algorithm::Dijkstra, "Alice", "Dave").unwrap();

    assert_close(bfs.total_cost, 2.0);
    assert_close(dijkstra.total_cost, 0.2);
}

#[test]
fn test_lookup_uses_normalized_names() {
    let graph = build_graph(&["Björk", "The Beatles"], &[(1, 2, 4)], DuplicatePolicy::Strongest);

    let result = graph.shortest_path("BJORK", "  the   beatles ").unwrap();

    assert_eq!(
        result.artist_names(graph.registry()),
        vec!["Björk", "The Beatles"]
    );
}
