//! Symbol kinds and their inference from generator page naming.

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

/// The kind of symbol a location points at.
///
/// The generator does not tag entries with a kind, so kinds are inferred from the target URL
/// and its scope text (see [`SymbolKind::infer`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// A class, struct, union or interface page.
    Type,
    /// A data member, enum value, typedef or other anchored non-callable member.
    Member,
    /// A source file page.
    File,
    /// A namespace page.
    Namespace,
    /// A function, method or constructor.
    Function,
    /// Anything else: directory listings, related pages, groups.
    Other,
}

/// Page-name prefixes used for type documentation pages.
const TYPE_PAGE_PREFIXES: &[&str] = &["class", "struct", "union", "interface"];

/// Marker the generator uses in file page names (`Tile_8cpp.html` for `Tile.cpp`).
const FILE_PAGE_MARKER: &str = "_8";

impl SymbolKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Type,
        Self::Member,
        Self::File,
        Self::Namespace,
        Self::Function,
        Self::Other,
    ];

    /// Returns the lowercase name used in configuration and output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Member => "member",
            Self::File => "file",
            Self::Namespace => "namespace",
            Self::Function => "function",
            Self::Other => "other",
        }
    }

    /// Infers the kind of a location from its URL and scope.
    ///
    /// Anchored targets are members of a page: callables when the scope carries an argument
    /// list, plain members otherwise. Unanchored targets are whole pages, classified by their
    /// page name.
    pub fn infer(url: &str, context: Option<&str>) -> Self {
        let (page, anchor) = match url.split_once('#') {
            Some((page, anchor)) => (page, Some(anchor)),
            None => (url, None),
        };

        if anchor.is_some_and(|a| !a.is_empty()) {
            return if context.is_some_and(|c| c.contains('(')) {
                Self::Function
            } else {
                Self::Member
            };
        }

        let name = page.rsplit('/').next().unwrap_or(page);
        let name = name.strip_suffix(".html").unwrap_or(name);

        if name.starts_with("namespace") {
            Self::Namespace
        } else if TYPE_PAGE_PREFIXES.iter().any(|p| name.starts_with(p)) {
            Self::Type
        } else if name.contains(FILE_PAGE_MARKER) {
            Self::File
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing an unknown kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown symbol kind '{0}' (expected one of: type, member, file, namespace, function, other)")]
pub struct ParseKindError(pub String);

impl FromStr for SymbolKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}
