use crate::error::{GraphError, RecordError};
use crate::string_normalization::clean_str;
use rustc_hash::FxHashMap;
use serde::Serialize;

pub type ArtistId = u64;
/// Dense position of an artist inside an [`EntityRegistry`].
pub type ArtistIndex = usize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub description: Option<String>,
}

impl Artist {
    pub fn new(id: ArtistId, name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description,
        }
    }
}

/// All known artists, addressable by index, identifier and display name.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    artists: Vec<Artist>,
    by_id: FxHashMap<ArtistId, ArtistIndex>,
    by_name: FxHashMap<String, ArtistIndex>,
    by_clean_name: FxHashMap<String, Vec<ArtistIndex>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry, skipping (with a warning) artists whose id or name
    /// is already taken.
    pub fn from_artists<I>(artists: I) -> Self
    where
        I: IntoIterator<Item = Artist>,
    {
        let mut registry = Self::new();
        for artist in artists {
            if let Err(error) = registry.insert(artist) {
                tracing::warn!(%error, "skipping roster record");
            }
        }
        registry
    }

    pub fn insert(&mut self, artist: Artist) -> Result<ArtistIndex, RecordError> {
        if artist.name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        if self.by_id.contains_key(&artist.id) {
            return Err(RecordError::DuplicateId(artist.id));
        }
        if self.by_name.contains_key(&artist.name) {
            return Err(RecordError::DuplicateName(artist.name));
        }

        let index = self.artists.len();
        self.by_id.insert(artist.id, index);
        self.by_name.insert(artist.name.clone(), index);
        // Names that normalize to nothing (emoji, symbols) are exact-match only
        let clean_name = clean_str(&artist.name);
        if !clean_name.is_empty() {
            self.by_clean_name.entry(clean_name).or_default().push(index);
        }
        self.artists.push(artist);

        Ok(index)
    }

    /// Exact display-name match, falling back to the normalized name. When
    /// several artists share a normalized name the first registered wins.
    pub fn lookup_by_name(&self, name: &str) -> Result<ArtistIndex, GraphError> {
        if let Some(&index) = self.by_name.get(name) {
            return Ok(index);
        }

        let clean_name = clean_str(name);
        if clean_name.is_empty() {
            return Err(GraphError::EntityNotFound(name.to_string()));
        }

        self.by_clean_name
            .get(&clean_name)
            .and_then(|indices| indices.first().copied())
            .ok_or_else(|| GraphError::EntityNotFound(name.to_string()))
    }

    pub fn lookup_by_id(&self, id: ArtistId) -> Option<ArtistIndex> {
        self.by_id.get(&id).copied()
    }

    /// Panics if `index` did not come from this registry; use [`Self::get`]
    /// for indices of unknown origin.
    pub fn artist(&self, index: ArtistIndex) -> &Artist {
        &self.artists[index]
    }

    pub fn get(&self, index: ArtistIndex) -> Option<&Artist> {
        self.artists.get(index)
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArtistIndex, &Artist)> {
        self.artists.iter().enumerate()
    }
}
