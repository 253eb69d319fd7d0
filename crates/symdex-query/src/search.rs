//! Prefix matching, grouping and ranking.

use std::collections::HashMap;

use symdex_index::IndexStore;
use tracing::debug;

use crate::{QueryError, SearchParams, SearchResult};

/// Normalizes query text the same way keys are normalized at load time.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Searches `store` for entries whose key starts with `query`.
///
/// Equivalent to [`search_with`] with the given limit and no kind filter.
pub fn search(query: &str, store: &IndexStore, limit: usize) -> Result<Vec<SearchResult>, QueryError> {
    search_with(query, store, &SearchParams::default().with_limit(limit))
}

/// Searches `store` with explicit parameters.
///
/// Results are grouped by key and ranked by:
/// 1. exact key match before prefix-only match,
/// 2. shorter key before longer key,
/// 3. original index order.
///
/// At most `params.limit` groups are returned; a limit of zero is an error. A blank query
/// returns no results.
pub fn search_with(
    query: &str,
    store: &IndexStore,
    params: &SearchParams,
) -> Result<Vec<SearchResult>, QueryError> {
    if params.limit == 0 {
        return Err(QueryError::zero_limit());
    }

    let needle = normalize(query);
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    let mut groups: Vec<SearchResult> = Vec::new();
    let mut group_index: HashMap<&str, usize> = HashMap::new();

    for entry in store
        .all()
        .filter(|e| e.key.starts_with(&needle) && params.admits(e.kind))
    {
        match group_index.get(entry.key.as_str()) {
            Some(&index) => groups[index].absorb(entry),
            None => {
                group_index.insert(entry.key.as_str(), groups.len());
                groups.push(SearchResult::from_entry(entry, &needle));
            }
        }
    }

    let total = groups.len();
    // Stable: equal ranks keep first-occurrence order.
    groups.sort_by_key(|g| (!g.exact, g.key.chars().count()));
    groups.truncate(params.limit);

    debug!(query = %needle, total, returned = groups.len(), "search");
    Ok(groups)
}
