use artistgraph::display::{display_search_info, display_search_results};
use artistgraph::json_output::{create_json_output, print_json_output};
use artistgraph::logging::init_logging;
use artistgraph::*;
use clap::Parser;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let colors = ColorScheme::new(!args.no_color && !args.json);
    let json_mode = args.json;

    let app = match ArtistGraphApp::new(&args) {
        Ok(app) => app,
        Err(error_message) => exit_with_error(&colors, &error_message.to_string()),
    };

    let graph = match app.load_graph() {
        Ok(graph) => graph,
        Err(error) => exit_with_error(&colors, &error.to_string()),
    };

    let search_request = match create_search_request(args, &graph) {
        Ok(request) => request,
        Err(error) => exit_with_error(&colors, &error.to_string()),
    };

    if !json_mode {
        display_search_info(&search_request, &colors);
    }

    let search_results = execute_searches(&search_request, &graph);

    if json_mode {
        print_json_output(&create_json_output(&search_request, &search_results, &graph));
    } else {
        display_search_results(&search_results, &search_request, &graph, &colors);
    }

    if search_results.iter().any(|result| result.outcome.is_err()) {
        std::process::exit(1);
    }
}

fn exit_with_error(colors: &ColorScheme, message: &str) -> ! {
    tracing::debug!(message, "exiting with error");
    eprintln!("{} {}", colors.error("❌ Error:"), message);
    std::process::exit(1);
}
