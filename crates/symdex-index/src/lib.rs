//! Immutable symbol index for client-side documentation search.
//!
//! This crate loads the search data that documentation generators emit alongside HTML
//! reference pages and exposes it as an [`IndexStore`]: an ordered, read-only sequence of
//! [`IndexEntry`] values, each mapping a lowercase search key to the pages where the symbol is
//! defined or referenced. It handles:
//! - Tokenizing the generator's script artifacts (`var searchData = [...]`) and plain JSON
//! - Validating records and failing closed on malformed data
//! - Reversing the generator's key escaping and HTML entities
//! - Inferring a [`SymbolKind`] for every location
//! - Discovering artifact files from configuration
//!
//! # Example
//!
//! ```
//! use symdex_index::{IndexStore, SymbolKind};
//!
//! let store = IndexStore::load(
//!     "var searchData=[['tile',['Tile',['../classtson_1_1Tile.html',1,'tson::Tile']]]];",
//! )
//! .unwrap();
//!
//! let entry = store.all().next().unwrap();
//! assert_eq!(entry.key, "tile");
//! assert_eq!(entry.kind, SymbolKind::Type);
//! ```

#![warn(missing_docs)]

mod artifact;
mod discovery;
mod entry;
mod error;
mod escape;
mod kind;
mod store;

pub use artifact::ArtifactFormat;
pub use discovery::discover_artifacts;
pub use entry::{IndexEntry, Location};
pub use error::{IndexError, MalformedIndexError, SyntaxError};
pub use kind::{ParseKindError, SymbolKind};
pub use store::IndexStore;
