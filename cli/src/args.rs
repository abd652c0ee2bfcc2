use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "artistgraph")]
#[command(about = "Find the shortest and the strongest mention path between two artists")]
pub struct Args {
    /// First artist name
    #[arg(default_value = "The Beatles")]
    pub artist1: String,

    /// Second artist name
    #[arg(default_value = "Kendji Girac")]
    pub artist2: String,

    /// Artist roster file (identifier, name, description)
    #[arg(long, value_name = "PATH", default_value = "artists.txt")]
    pub artists: PathBuf,

    /// Mention counts file (source, destination, mentions)
    #[arg(long, value_name = "PATH", default_value = "mentions.txt")]
    pub mentions: PathBuf,

    /// Directory the data files are resolved against
    #[arg(short = 'd', long, value_name = "DIR", env = "ARTISTGRAPH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Run a single algorithm instead of both
    #[arg(short, long, value_name = "ALGORITHM", value_parser = ["bfs", "dijkstra"])]
    pub algorithm: Option<String>,

    /// Keep every duplicate relationship instead of only the strongest one
    #[arg(short = 'k', long)]
    pub keep_duplicates: bool,

    /// Show mention counts between connected artists
    #[arg(short, long)]
    pub show_mentions: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search statistics and load summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}
