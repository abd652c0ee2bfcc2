use artistgraph_core::{ArtistGraph, DuplicatePolicy, GraphConfig, LoadError, load_graph};
use std::{error::Error, path::PathBuf};

use crate::args::Args;

pub struct ArtistGraphApp {
    pub artists_path: PathBuf,
    pub mentions_path: PathBuf,
    pub config: GraphConfig,
}

impl ArtistGraphApp {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        let (artists_path, mentions_path) = match &args.data_dir {
            Some(data_dir) => {
                if !data_dir.exists() {
                    return Err(format!("Data path does not exist: {:?}", data_dir).into());
                }
                (data_dir.join(&args.artists), data_dir.join(&args.mentions))
            }
            None => (args.artists.clone(), args.mentions.clone()),
        };

        for path in [&artists_path, &mentions_path] {
            if !path.exists() {
                return Err(format!("Data file not found: {:?}", path).into());
            }
        }

        let duplicate_policy = if args.keep_duplicates {
            DuplicatePolicy::KeepAll
        } else {
            DuplicatePolicy::Strongest
        };

        Ok(Self {
            artists_path,
            mentions_path,
            config: GraphConfig::new(duplicate_policy),
        })
    }

    pub fn load_graph(&self) -> Result<ArtistGraph, LoadError> {
        tracing::debug!(
            artists = %self.artists_path.display(),
            mentions = %self.mentions_path.display(),
            policy = ?self.config.duplicate_policy,
            "loading data files"
        );
        let graph = load_graph(&self.artists_path, &self.mentions_path, self.config.clone())?;

        let report = graph.report();
        if report.records_skipped > 0 {
            tracing::warn!(
                skipped = report.records_skipped,
                "mention records referenced unknown artists"
            );
        }
        Ok(graph)
    }
}
