//! Parameter types for search execution.

use symdex_index::SymbolKind;

/// Default maximum number of grouped results per query.
pub const DEFAULT_LIMIT: usize = 20;

/// Parameters controlling a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum number of grouped results. Must be at least 1.
    pub limit: usize,
    /// Kinds to keep. Entries of other kinds are dropped before grouping.
    /// If empty, every kind is kept.
    pub kinds: Vec<SymbolKind>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            kinds: Vec::new(),
        }
    }
}

impl SearchParams {
    /// Sets the grouped result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the kind filter.
    pub fn with_kinds(mut self, kinds: Vec<SymbolKind>) -> Self {
        self.kinds = kinds;
        self
    }

    /// Returns true if entries of `kind` pass the kind filter.
    pub fn admits(&self, kind: SymbolKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_admits_everything() {
        let params = SearchParams::default();
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert!(SymbolKind::ALL.into_iter().all(|k| params.admits(k)));
    }

    #[test]
    fn kind_filter() {
        let params = SearchParams::default().with_kinds(vec![SymbolKind::Type, SymbolKind::File]);
        assert!(params.admits(SymbolKind::File));
        assert!(!params.admits(SymbolKind::Function));
    }
}
