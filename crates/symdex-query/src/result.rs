//! Data structures returned by search.

use serde::Serialize;
use symdex_index::{IndexEntry, Location, SymbolKind};

/// One navigable target of a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultLocation {
    /// Target URL, possibly with an anchor.
    pub url: String,
    /// Disambiguating scope. `None` for page-level targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Kind of the target.
    pub kind: SymbolKind,
    /// Whether the target opens outside the documentation frame.
    pub external: bool,
}

impl From<&Location> for ResultLocation {
    fn from(location: &Location) -> Self {
        Self {
            url: location.url.clone(),
            context: location.context.clone(),
            kind: location.kind,
            external: location.external,
        }
    }
}

/// A grouped search result: every matching entry that shares one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// The shared search key.
    pub key: String,
    /// Label of the first contributing entry.
    pub display_name: String,
    /// Kind of the first contributing entry.
    pub kind: SymbolKind,
    /// Whether the key equals the normalized query.
    pub exact: bool,
    /// Locations of all contributing entries, in original order.
    pub locations: Vec<ResultLocation>,
}

impl SearchResult {
    /// Starts a group from its first matching entry.
    pub(crate) fn from_entry(entry: &IndexEntry, query: &str) -> Self {
        Self {
            key: entry.key.clone(),
            display_name: entry.display_name.clone(),
            kind: entry.kind,
            exact: entry.key == query,
            locations: entry.locations.iter().map(ResultLocation::from).collect(),
        }
    }

    /// Appends the locations of a further entry with the same key.
    pub(crate) fn absorb(&mut self, entry: &IndexEntry) {
        self.locations
            .extend(entry.locations.iter().map(ResultLocation::from));
    }

    /// Returns true if more than one target shares this result.
    pub fn is_ambiguous(&self) -> bool {
        self.locations.len() > 1
    }
}
