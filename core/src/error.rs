use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Query-time failures. Never accompanied by a partial path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Artist '{0}' not found in database")]
    EntityNotFound(String),

    #[error("No path found between '{from}' and '{to}'")]
    NoPath { from: String, to: String },
}

/// A single input record that was rejected. Loading continues past it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: &'static str, found: usize },

    #[error("invalid number in field '{field}': '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("artist name is empty")]
    EmptyName,

    #[error("mention count must be positive")]
    ZeroMentions,

    #[error("unknown artist id {0}")]
    UnknownArtist(u64),

    #[error("duplicate artist id {0}")]
    DuplicateId(u64),

    #[error("duplicate artist name '{0}'")]
    DuplicateName(String),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
