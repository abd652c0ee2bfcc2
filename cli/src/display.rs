use artistgraph_core::{Algorithm, ArtistGraph, GraphError, PathResult, PathStep};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    if request.search_args.quiet {
        return;
    }

    println!(
        "🎵 Finding paths from {} to {}",
        colors.artist_name(&format!("\"{}\"", request.from_name)),
        colors.artist_name(&format!("\"{}\"", request.to_name))
    );

    if request.search_args.keep_duplicates {
        println!("⚙️  Keeping every duplicate relationship");
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(
    results: &[SearchResult],
    request: &SearchRequest,
    graph: &ArtistGraph,
    colors: &ColorScheme,
) {
    for (index, result) in results.iter().enumerate() {
        if index > 0 || !request.search_args.quiet {
            println!("\n---\n");
        }

        println!("{}", colors.heading(algorithm_heading(result.algorithm)));

        match &result.outcome {
            Ok(path) => display_successful_path(path, &request.search_args, graph, colors),
            Err(GraphError::NoPath { from, to }) => println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.artist_name(&format!("\"{}\"", from)),
                colors.artist_name(&format!("\"{}\"", to))
            ),
            Err(error) => println!("{} {}", colors.error("❌ Error:"), error),
        }
    }
}

pub fn algorithm_heading(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bfs => "🔗 Shortest path (fewest hops, BFS)",
        Algorithm::Dijkstra => "💪 Strongest path (most mentions, Dijkstra)",
    }
}

fn display_successful_path(
    path: &PathResult,
    display_options: &Args,
    graph: &ArtistGraph,
    colors: &ColorScheme,
) {
    println!("{}", format_path_flow(path, graph, colors));

    if !display_options.quiet {
        println!();
        for (step_index, step) in path.steps.iter().enumerate() {
            println!(
                "{}",
                format_path_step(step_index, step, graph, display_options, colors)
            );
        }
        println!();
    }

    println!("{}", format_path_summary(path, colors));

    if display_options.verbose {
        display_search_statistics(path.artists_visited, path.search_duration, colors);
    }
}

pub fn format_path_flow(path: &PathResult, graph: &ArtistGraph, colors: &ColorScheme) -> String {
    path.artist_names(graph.registry())
        .into_iter()
        .map(|name| colors.artist_name(&format!("\"{}\"", name)).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn format_path_step(
    step_index: usize,
    step: &PathStep,
    graph: &ArtistGraph,
    display_options: &Args,
    colors: &ColorScheme,
) -> String {
    let artist = graph.registry().artist(step.artist);
    let step_number = format!("{}.", step_index + 1);

    let mut formatted_line = format!(
        "{:2} {}",
        colors.step_number(&step_number),
        colors.artist_name(&format!("\"{}\"", artist.name))
    );

    if display_options.show_mentions {
        if let Some(mentions) = step.mentions {
            formatted_line.push_str(&format!(
                " {}{}{}",
                colors.mentions("["),
                colors.number(&format!("{} mentions", mentions)),
                colors.mentions("]")
            ));
        }
    }

    if let Some(description) = &artist.description {
        formatted_line.push_str(&format!(" - {}", colors.description(description)));
    }

    formatted_line
}

pub fn format_path_summary(path: &PathResult, colors: &ColorScheme) -> String {
    format!(
        "{} Length: {}, total cost: {}",
        colors.success("✅"),
        colors.number(&path.hop_count.to_string()),
        colors.number(&format!("{:.4}", path.total_cost))
    )
}

fn display_search_statistics(artists_visited: usize, search_duration: f64, colors: &ColorScheme) {
    println!(
        "{} Explored {} artists in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(artists_visited)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
