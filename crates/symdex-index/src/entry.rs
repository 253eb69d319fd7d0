//! Index entries and their locations.

use serde::Serialize;

use crate::SymbolKind;

/// One navigable target of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Relative or absolute URL of the target page, possibly with an anchor.
    pub url: String,
    /// Scope that disambiguates overloads and members (e.g. `tson::Terrain`).
    ///
    /// `None` marks a page-level result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Kind inferred for this target.
    pub kind: SymbolKind,
    /// Whether the target lives in external documentation and opens in a new window.
    pub external: bool,
}

impl Location {
    /// Creates an in-frame location, inferring its kind.
    pub fn new(url: impl Into<String>, context: Option<String>) -> Self {
        let url = url.into();
        let context = context.filter(|c| !c.is_empty());
        let kind = SymbolKind::infer(&url, context.as_deref());
        Self {
            url,
            context,
            kind,
            external: false,
        }
    }

    /// Marks the location as pointing into external documentation.
    pub fn with_external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    /// Returns the URL without its anchor.
    pub fn page(&self) -> &str {
        self.url.split_once('#').map_or(&self.url, |(page, _)| page)
    }

    /// Returns the anchor, if the URL has a non-empty one.
    pub fn anchor(&self) -> Option<&str> {
        self.url
            .split_once('#')
            .map(|(_, anchor)| anchor)
            .filter(|a| !a.is_empty())
    }

    /// Returns true for page-level results (no disambiguating scope).
    pub fn is_page_level(&self) -> bool {
        self.context.is_none()
    }
}

/// One result a query can surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Normalized, lowercase search key. Not unique across entries.
    pub key: String,
    /// Human-readable label.
    pub display_name: String,
    /// Kind of the primary (first) location.
    pub kind: SymbolKind,
    /// Targets in generation order. Never empty in a loaded store.
    pub locations: Vec<Location>,
}

impl IndexEntry {
    /// Creates an entry whose kind is taken from its first location.
    ///
    /// An entry without locations gets [`SymbolKind::Other`]; such entries are rejected when a
    /// store is built.
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        locations: Vec<Location>,
    ) -> Self {
        let kind = locations.first().map_or(SymbolKind::Other, |l| l.kind);
        Self {
            key: key.into(),
            display_name: display_name.into(),
            kind,
            locations,
        }
    }
}
