//! The immutable index store.

use std::{fs, path::PathBuf, slice};

use tracing::debug;

use crate::{
    IndexEntry, SymbolKind,
    artifact::parse_artifact,
    error::{IndexError, MalformedIndexError},
};

/// The in-memory collection of searchable entries, in generation order.
///
/// A store is built once from one or more artifacts and never changes afterwards, so it can be
/// shared freely (for example behind an `Arc`) by any number of concurrent searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStore {
    /// Entries in original order.
    entries: Vec<IndexEntry>,
}

impl IndexStore {
    /// Parses and validates a raw artifact.
    ///
    /// Fails with [`MalformedIndexError`] if the artifact is not well-formed or any record lacks
    /// a key or has zero locations. No store is produced on failure.
    pub fn load(raw: &str) -> Result<Self, MalformedIndexError> {
        let (entries, format) = parse_artifact(raw)?;
        debug!(entries = entries.len(), ?format, "loaded artifact");
        Ok(Self { entries })
    }

    /// Loads several raw artifacts into one store, preserving their order.
    ///
    /// Errors name the artifact by its position (`artifact #0`, `artifact #1`, ...).
    pub fn load_all<'a, I>(raws: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries = Vec::new();
        for (index, raw) in raws.into_iter().enumerate() {
            let store =
                Self::load(raw).map_err(|e| IndexError::malformed(format!("artifact #{index}"), e))?;
            entries.extend(store.entries);
        }
        Ok(Self { entries })
    }

    /// Reads and loads artifact files into one store, preserving their order.
    pub fn load_files(paths: &[PathBuf]) -> Result<Self, IndexError> {
        let mut entries = Vec::new();
        for path in paths {
            let raw = fs::read_to_string(path).map_err(|source| IndexError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let store = Self::load(&raw)
                .map_err(|e| IndexError::malformed(path.display().to_string(), e))?;
            debug!(path = %path.display(), entries = store.len(), "loaded artifact file");
            entries.extend(store.entries);
        }
        Ok(Self { entries })
    }

    /// Builds a store from already-constructed entries, validating every invariant.
    pub fn from_entries(entries: Vec<IndexEntry>) -> Result<Self, MalformedIndexError> {
        for (record, entry) in entries.iter().enumerate() {
            validate_entry(record, entry)?;
        }
        Ok(Self { entries })
    }

    /// Returns every entry in original order.
    ///
    /// The iterator is lazy and cheap to clone, so a scan can be restarted at will.
    pub fn all(&self) -> slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&IndexEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts entries per kind, in [`SymbolKind::ALL`] order. Kinds without entries are omitted.
    pub fn kind_counts(&self) -> Vec<(SymbolKind, usize)> {
        SymbolKind::ALL
            .into_iter()
            .map(|kind| (kind, self.entries.iter().filter(|e| e.kind == kind).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl<'a> IntoIterator for &'a IndexStore {
    type Item = &'a IndexEntry;
    type IntoIter = slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}

/// Checks the invariants a loaded entry is guaranteed to satisfy.
fn validate_entry(record: usize, entry: &IndexEntry) -> Result<(), MalformedIndexError> {
    if entry.key.is_empty() {
        return Err(MalformedIndexError::MissingKey { record });
    }
    if entry.key != entry.key.trim().to_lowercase() {
        return Err(MalformedIndexError::UnnormalizedKey {
            record,
            key: entry.key.clone(),
        });
    }
    if entry.display_name.trim().is_empty() {
        return Err(MalformedIndexError::MissingDisplayName {
            record,
            key: entry.key.clone(),
        });
    }
    if entry.locations.is_empty() {
        return Err(MalformedIndexError::NoLocations {
            record,
            key: entry.key.clone(),
        });
    }
    if let Some(location) = entry.locations.iter().position(|l| l.url.trim().is_empty()) {
        return Err(MalformedIndexError::EmptyUrl {
            record,
            key: entry.key.clone(),
            location,
        });
    }
    Ok(())
}
