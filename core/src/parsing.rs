use crate::config::GraphConfig;
use crate::error::{LoadError, RecordError};
use crate::graph::{ArtistGraph, MentionRecord};
use crate::registry::{Artist, ArtistId, EntityRegistry};
use memmap2::Mmap;
use std::{fs::File, path::Path, str::FromStr};

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// A line that could not be turned into a record.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub line: usize,
    pub error: RecordError,
}

/// Records parsed from one input, plus the lines that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRecord>,
}

/// Splits one delimited line into trimmed fields.
///
/// Double quotes group a field so it may contain the delimiter; inside a
/// quoted field `""` stands for a literal quote.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                field.push(QUOTE);
                chars.next();
            }
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());

    fields
}

/// `identifier, displayName, category|description`; extra fields are ignored.
pub fn parse_artist_record(line: &str) -> Result<Artist, RecordError> {
    let fields = split_record(line);
    if fields.len() < 3 {
        return Err(RecordError::FieldCount {
            expected: "at least 3",
            found: fields.len(),
        });
    }

    let id = parse_id(&fields[0], "identifier")?;
    let name = fields[1].clone();
    if name.is_empty() {
        return Err(RecordError::EmptyName);
    }
    let description = Some(fields[2].clone()).filter(|d| !d.is_empty());

    Ok(Artist::new(id, name, description))
}

/// `sourceIdentifier, destinationIdentifier, mentionCount`.
pub fn parse_relationship_record(line: &str) -> Result<MentionRecord, RecordError> {
    let fields = split_record(line);
    if fields.len() != 3 {
        return Err(RecordError::FieldCount {
            expected: "exactly 3",
            found: fields.len(),
        });
    }

    let source = parse_id(&fields[0], "source")?;
    let destination = parse_id(&fields[1], "destination")?;
    let mentions: u32 = parse_number(&fields[2], "mentions")?;
    if mentions == 0 {
        return Err(RecordError::ZeroMentions);
    }

    Ok(MentionRecord::new(source, destination, mentions))
}

fn parse_id(value: &str, field: &'static str) -> Result<ArtistId, RecordError> {
    parse_number(value, field)
}

/// Plain decimal digits only: `str::parse` would also take a leading `+`.
fn parse_number<T: FromStr>(value: &str, field: &'static str) -> Result<T, RecordError> {
    let invalid = || RecordError::InvalidNumber {
        field,
        value: value.to_string(),
    };
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

pub fn parse_roster_str(text: &str) -> Loaded<Artist> {
    parse_lines(text, "roster", parse_artist_record)
}

pub fn parse_mentions_str(text: &str) -> Loaded<MentionRecord> {
    parse_lines(text, "mentions", parse_relationship_record)
}

fn parse_lines<T>(
    text: &str,
    source_name: &str,
    parse_record: impl Fn(&str) -> Result<T, RecordError>,
) -> Loaded<T> {
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line) {
            Ok(record) => records.push(record),
            Err(error) => {
                let line = line_index + 1;
                tracing::warn!(source = source_name, line, %error, "skipping malformed record");
                skipped.push(SkippedRecord { line, error });
            }
        }
    }

    Loaded { records, skipped }
}

pub fn open_memory_mapped_file(file_path: &Path) -> Result<Option<Mmap>, std::io::Error> {
    let file = File::open(file_path)?;
    if file.metadata()?.len() == 0 {
        return Ok(None);
    }
    unsafe { Mmap::map(&file) }.map(Some)
}

fn read_text_file<T>(
    file_path: &Path,
    parse: impl Fn(&str) -> Loaded<T>,
) -> Result<Loaded<T>, LoadError> {
    let mapped = open_memory_mapped_file(file_path).map_err(|source| LoadError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;

    let loaded = match mapped {
        Some(data) => parse(&String::from_utf8_lossy(&data)),
        None => parse(""),
    };
    Ok(loaded)
}

pub fn load_roster(roster_path: &Path) -> Result<Loaded<Artist>, LoadError> {
    read_text_file(roster_path, parse_roster_str)
}

pub fn load_mentions(mentions_path: &Path) -> Result<Loaded<MentionRecord>, LoadError> {
    read_text_file(mentions_path, parse_mentions_str)
}

/// Loads both inputs and builds the graph. Only I/O failures are fatal;
/// malformed records are skipped with a warning.
pub fn load_graph(
    roster_path: &Path,
    mentions_path: &Path,
    config: GraphConfig,
) -> Result<ArtistGraph, LoadError> {
    let roster = load_roster(roster_path)?;
    let mentions = load_mentions(mentions_path)?;

    let registry = EntityRegistry::from_artists(roster.records);
    let graph = ArtistGraph::build(registry, mentions.records, config);

    tracing::info!(
        artists = graph.artist_count(),
        relationships = graph.relationship_count(),
        skipped_lines = roster.skipped.len() + mentions.skipped.len(),
        unresolved = graph.report().records_skipped,
        "graph loaded"
    );

    Ok(graph)
}
