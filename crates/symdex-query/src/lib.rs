//! Prefix search over a symdex symbol index.
//!
//! Queries are matched against the lowercase keys of an [`IndexStore`]:
//!
//! - **Normalization**: the query is trimmed and lowercased; a blank query matches nothing
//! - **Matching**: an entry matches when its key starts with the query
//! - **Grouping**: matches sharing a key merge into one [`SearchResult`]
//! - **Ranking**: exact matches first, then shorter keys, then original order
//! - **Limiting**: only the best `limit` groups are returned
//!
//! Every search is a pure function of its inputs, so a single store can serve any number of
//! concurrent searches. Hosts that search on every keystroke use a [`Searcher`], which tags
//! results with a [`QuerySequencer`] ticket so superseded results can be dropped.
//!
//! # Example
//!
//! ```
//! use symdex_index::IndexStore;
//! use symdex_query::search;
//!
//! let store = IndexStore::load(
//!     r#"[["tile", ["Tile", "classTile.html", null]],
//!         ["tileset", ["Tileset", "classTileset.html", null]]]"#,
//! )
//! .unwrap();
//!
//! let results = search("Tile", &store, 20).unwrap();
//! assert_eq!(results[0].display_name, "Tile");
//! assert!(results[0].exact);
//! ```

#![warn(missing_docs)]

mod error;
mod params;
mod result;
mod search;
mod searcher;
mod sequence;

pub use error::QueryError;
pub use params::{DEFAULT_LIMIT, SearchParams};
pub use result::{ResultLocation, SearchResult};
pub use search::{normalize, search, search_with};
pub use searcher::{PendingSearch, Searcher};
pub use sequence::{QuerySequencer, Sequenced};
pub use symdex_index::{IndexStore, SymbolKind};
