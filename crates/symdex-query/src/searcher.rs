//! Host-facing search handle.

use std::sync::Arc;

use symdex_index::IndexStore;

use crate::{QueryError, QuerySequencer, SearchParams, SearchResult, Sequenced, search_with};

/// A loaded index together with default parameters and a keystroke sequencer.
///
/// `Searcher` is `Send + Sync`; searches never block each other.
#[derive(Debug)]
pub struct Searcher {
    /// The shared, immutable index.
    store: Arc<IndexStore>,
    /// Parameters applied to every search.
    params: SearchParams,
    /// Tickets for issued searches.
    sequencer: QuerySequencer,
}

impl Searcher {
    /// Creates a searcher with default parameters.
    pub fn new(store: Arc<IndexStore>) -> Self {
        Self {
            store,
            params: SearchParams::default(),
            sequencer: QuerySequencer::new(),
        }
    }

    /// Creates a searcher with explicit parameters, rejecting a zero limit up front.
    pub fn with_params(store: Arc<IndexStore>, params: SearchParams) -> Result<Self, QueryError> {
        if params.limit == 0 {
            return Err(QueryError::zero_limit());
        }
        Ok(Self {
            store,
            params,
            sequencer: QuerySequencer::new(),
        })
    }

    /// Runs a search and tags its results with a fresh ticket.
    ///
    /// Issuing the ticket supersedes every earlier search on this searcher, even if the
    /// earlier one has not finished yet.
    pub fn search(&self, text: &str) -> Result<Sequenced<Vec<SearchResult>>, QueryError> {
        self.begin(text).run()
    }

    /// Issues a ticket for `text` now and defers the search itself.
    ///
    /// Tickets follow the order of `begin` calls, not the order in which the returned
    /// searches run, so a host can hand keystrokes to worker threads and still tell which
    /// result is current.
    pub fn begin<'a>(&'a self, text: &'a str) -> PendingSearch<'a> {
        PendingSearch {
            searcher: self,
            seq: self.sequencer.issue(),
            text,
        }
    }

    /// The sequencer used to tag searches.
    pub fn sequencer(&self) -> &QuerySequencer {
        &self.sequencer
    }

    /// The parameters applied to every search.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// The underlying index.
    pub fn store(&self) -> &Arc<IndexStore> {
        &self.store
    }
}

/// A search whose ticket has been issued but which has not run yet.
#[derive(Debug)]
pub struct PendingSearch<'a> {
    /// The searcher that issued the ticket.
    searcher: &'a Searcher,
    /// The issued ticket.
    seq: u64,
    /// Query text as typed.
    text: &'a str,
}

impl PendingSearch<'_> {
    /// The ticket issued for this search.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The query text.
    pub fn text(&self) -> &str {
        self.text
    }

    /// Runs the search.
    pub fn run(self) -> Result<Sequenced<Vec<SearchResult>>, QueryError> {
        let value = search_with(self.text, &self.searcher.store, &self.searcher.params)?;
        Ok(Sequenced {
            seq: self.seq,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::SymbolKind;

    /// Builds a searcher over a two-entry index.
    fn searcher(params: SearchParams) -> Searcher {
        let store = IndexStore::load(
            r#"[["tile", ["Tile", "classTile.html", null]],
                ["tile.h", ["Tile.h", "Tile_8h.html", null]]]"#,
        )
        .unwrap();
        Searcher::with_params(Arc::new(store), params).unwrap()
    }

    #[test]
    fn later_search_supersedes_earlier() {
        let searcher = searcher(SearchParams::default());
        let first = searcher.search("t").unwrap();
        let second = searcher.search("tile.").unwrap();

        assert!(!first.is_current(searcher.sequencer()));
        let results = second.into_current(searcher.sequencer()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_name, "Tile.h");
    }

    #[test]
    fn tickets_follow_begin_order() {
        let searcher = searcher(SearchParams::default());
        let early = searcher.begin("t");
        let late = searcher.begin("tile.");

        let late = late.run().unwrap();
        let early = early.run().unwrap();
        assert!(early.into_current(searcher.sequencer()).is_none());
        assert!(late.is_current(searcher.sequencer()));
    }

    #[test]
    fn applies_default_params() {
        let searcher = searcher(SearchParams::default().with_kinds(vec![SymbolKind::File]));
        let results = searcher.search("tile").unwrap().value;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, SymbolKind::File);
    }

    #[test]
    fn rejects_zero_limit() {
        let store = Arc::new(IndexStore::default());
        let err = Searcher::with_params(store, SearchParams::default().with_limit(0)).unwrap_err();
        assert!(matches!(err, QueryError::InvalidArgument { .. }));
    }

    #[test]
    fn shared_across_threads() {
        let searcher = Arc::new(searcher(SearchParams::default()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let searcher = Arc::clone(&searcher);
                thread::spawn(move || searcher.search("tile").unwrap().value.len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
        assert_eq!(searcher.sequencer().latest(), 4);
    }
}
