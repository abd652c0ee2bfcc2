mod requests;

use artistgraph::{Args, ArtistGraphApp};
use artistgraph_core::ArtistGraph;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

pub struct TestData {
    pub dir: TempDir,
}

impl TestData {
    /// The Beatles reach Kendji Girac directly with 1 mention, or through
    /// Bridge with 20 mentions per hop. Loner has no relationships.
    pub fn create() -> Self {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir.path().join("artists.txt"),
            "1,The Beatles,rock band\n\
             2,Kendji Girac,pop singer\n\
             3,\"Bridge, \"\"The\"\"\",connector\n\
             4,Loner,\n",
        );
        write_file(
            &dir.path().join("mentions.txt"),
            "1,2,1\n\
             1,3,20\n\
             2,3,20\n\
             3,1,5\n",
        );
        Self { dir }
    }

    pub fn args(&self, from: &str, to: &str) -> Args {
        Args {
            artist1: from.to_string(),
            artist2: to.to_string(),
            artists: "artists.txt".into(),
            mentions: "mentions.txt".into(),
            data_dir: Some(self.dir.path().to_path_buf()),
            algorithm: None,
            keep_duplicates: false,
            show_mentions: false,
            json: false,
            no_color: true,
            verbose: false,
            quiet: false,
        }
    }

    pub fn graph(&self, args: &Args) -> ArtistGraph {
        ArtistGraphApp::new(args).unwrap().load_graph().unwrap()
    }
}

fn write_file(path: &Path, contents: &str) {
    let mut file = std::fs::File::create(path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
}
