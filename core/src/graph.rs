use crate::config::{DuplicatePolicy, GraphConfig};
use crate::error::RecordError;
use crate::registry::{ArtistId, ArtistIndex, EntityRegistry};
use rustc_hash::FxHashMap;
use serde::Serialize;

pub type RelationshipIndex = usize;

/// A weighted mention link between two registered artists.
///
/// `source`/`destination` keep the order of the input record but carry no
/// direction: the graph registers every relationship under both endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationship {
    pub source: ArtistIndex,
    pub destination: ArtistIndex,
    pub mentions: u32,
    /// `1 / mentions`: more mentions, cheaper traversal.
    pub weight: f64,
}

impl Relationship {
    pub fn new(source: ArtistIndex, destination: ArtistIndex, mentions: u32) -> Self {
        debug_assert!(mentions > 0, "mention count must be positive");
        Self {
            source,
            destination,
            mentions,
            weight: 1.0 / f64::from(mentions),
        }
    }

    pub fn other_end(&self, artist: ArtistIndex) -> ArtistIndex {
        if artist == self.source {
            self.destination
        } else {
            self.source
        }
    }

    fn pair_key(&self) -> (ArtistIndex, ArtistIndex) {
        (
            self.source.min(self.destination),
            self.source.max(self.destination),
        )
    }
}

/// A raw mention record as produced by the loader, still keyed by artist id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionRecord {
    pub source: ArtistId,
    pub destination: ArtistId,
    pub mentions: u32,
}

impl MentionRecord {
    pub fn new(source: ArtistId, destination: ArtistId, mentions: u32) -> Self {
        Self {
            source,
            destination,
            mentions,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub relationships_added: usize,
    pub duplicates_merged: usize,
    pub records_skipped: usize,
}

/// Immutable artist graph: registry, relationships and symmetric adjacency.
///
/// Each artist's adjacency list is kept in relationship insertion order.
/// Both searches walk neighbors in that order, which makes their results
/// reproducible for a given input order.
#[derive(Debug)]
pub struct ArtistGraph {
    registry: EntityRegistry,
    relationships: Vec<Relationship>,
    adjacency: Vec<Vec<RelationshipIndex>>,
    config: GraphConfig,
    report: BuildReport,
}

impl ArtistGraph {
    pub fn build<I>(registry: EntityRegistry, records: I, config: GraphConfig) -> Self
    where
        I: IntoIterator<Item = MentionRecord>,
    {
        let mut builder = GraphBuilder::new(registry, config);
        for record in records {
            if let Err(error) = builder.add_relationship(record) {
                tracing::warn!(
                    %error,
                    source = record.source,
                    destination = record.destination,
                    "skipping mention record"
                );
            }
        }
        builder.build()
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Panics if `index` is out of range; use [`Self::get_relationship`]
    /// for indices of unknown origin.
    pub fn relationship(&self, index: RelationshipIndex) -> &Relationship {
        &self.relationships[index]
    }

    pub fn get_relationship(&self, index: RelationshipIndex) -> Option<&Relationship> {
        self.relationships.get(index)
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn artist_count(&self) -> usize {
        self.registry.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Relationship indices incident to `artist`, in insertion order.
    pub fn incident(&self, artist: ArtistIndex) -> &[RelationshipIndex] {
        self.adjacency
            .get(artist)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Neighbors of `artist` together with the relationship leading to them.
    pub fn neighbors(
        &self,
        artist: ArtistIndex,
    ) -> impl Iterator<Item = (ArtistIndex, &Relationship)> + '_ {
        self.incident(artist).iter().map(move |&index| {
            let relationship = &self.relationships[index];
            (relationship.other_end(artist), relationship)
        })
    }

    pub fn relationships_between(
        &self,
        a: ArtistIndex,
        b: ArtistIndex,
    ) -> impl Iterator<Item = &Relationship> + '_ {
        self.neighbors(a)
            .filter(move |(neighbor, _)| *neighbor == b)
            .map(|(_, relationship)| relationship)
    }
}

pub struct GraphBuilder {
    registry: EntityRegistry,
    relationships: Vec<Relationship>,
    adjacency: Vec<Vec<RelationshipIndex>>,
    pair_index: FxHashMap<(ArtistIndex, ArtistIndex), RelationshipIndex>,
    config: GraphConfig,
    report: BuildReport,
}

impl GraphBuilder {
    pub fn new(registry: EntityRegistry, config: GraphConfig) -> Self {
        let adjacency = vec![Vec::new(); registry.len()];
        Self {
            registry,
            relationships: Vec::new(),
            adjacency,
            pair_index: FxHashMap::default(),
            config,
            report: BuildReport::default(),
        }
    }

    /// Resolves and inserts one record. A rejected record leaves the graph
    /// untouched and is counted as skipped.
    pub fn add_relationship(&mut self, record: MentionRecord) -> Result<(), RecordError> {
        let result = self.resolve(record);
        match result {
            Ok(relationship) => {
                self.insert(relationship);
                Ok(())
            }
            Err(error) => {
                self.report.records_skipped += 1;
                Err(error)
            }
        }
    }

    pub fn build(self) -> ArtistGraph {
        tracing::debug!(
            relationships = self.relationships.len(),
            merged = self.report.duplicates_merged,
            skipped = self.report.records_skipped,
            "graph built"
        );
        ArtistGraph {
            registry: self.registry,
            relationships: self.relationships,
            adjacency: self.adjacency,
            config: self.config,
            report: self.report,
        }
    }

    fn resolve(&self, record: MentionRecord) -> Result<Relationship, RecordError> {
        let source = self
            .registry
            .lookup_by_id(record.source)
            .ok_or(RecordError::UnknownArtist(record.source))?;
        let destination = self
            .registry
            .lookup_by_id(record.destination)
            .ok_or(RecordError::UnknownArtist(record.destination))?;

        if record.mentions == 0 {
            return Err(RecordError::ZeroMentions);
        }

        Ok(Relationship::new(source, destination, record.mentions))
    }

    fn insert(&mut self, relationship: Relationship) {
        if self.config.duplicate_policy == DuplicatePolicy::Strongest {
            if let Some(&existing) = self.pair_index.get(&relationship.pair_key()) {
                self.report.duplicates_merged += 1;
                if relationship.mentions > self.relationships[existing].mentions {
                    self.relationships[existing] = relationship;
                }
                return;
            }
        }

        let index = self.relationships.len();
        let (a, b) = (relationship.source, relationship.destination);
        self.pair_index.entry(relationship.pair_key()).or_insert(index);
        self.relationships.push(relationship);
        self.report.relationships_added += 1;

        self.adjacency[a].push(index);
        if a != b {
            self.adjacency[b].push(index);
        }
    }
}
