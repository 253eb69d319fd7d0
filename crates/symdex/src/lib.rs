//! symdex: type-ahead symbol search for generated documentation.
//!
//! Documentation generators ship a search box backed by per-letter data files
//! (`search/all_*.js`) that map lowercase symbol keys to the pages documenting them. symdex
//! loads those files into an immutable index and answers prefix queries against it the way
//! the search box does: exact matches first, shorter keys next, overloads grouped under a
//! single result.
//!
//! The binary is a thin host around the library crates:
//! - `symdex-config` discovers and merges `.symdex.toml` files
//! - `symdex-index` loads and validates artifacts
//! - `symdex-query` runs searches and sequences keystrokes
//! - `symdex-highlight` styles terminal output

#![warn(missing_docs)]

pub mod cli;
