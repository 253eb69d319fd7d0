//! Implementation of `symdex typeahead`.
//!
//! Each stdin line is replayed as keystrokes: one search per prefix of the line. A small pool
//! of workers runs the searches concurrently, and only the result for the last keystroke is
//! printed. Results for earlier keystrokes are superseded and dropped, as a search box would
//! drop them.

use std::{
    io::{self, BufRead},
    iter,
    num::NonZeroUsize,
    process::ExitCode,
    sync::{Mutex, PoisonError, mpsc},
    thread,
};

use symdex_highlight::Highlighter;
use symdex_query::{PendingSearch, QueryError, SearchResult, Searcher, Sequenced};
use tracing::debug;

use crate::cli::{
    args::TypeaheadCommand,
    context::CommandContext,
    output::{print_results, subheader},
};

/// Upper bound on search workers per line.
const MAX_WORKERS: usize = 8;

/// Replays stdin lines as keystrokes and prints current results.
pub fn run(ctx: &mut CommandContext, cmd: &TypeaheadCommand) -> ExitCode {
    let params = match ctx.search_params(&cmd.params) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let store = match ctx.store(&cmd.artifacts) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let searcher = match Searcher::with_params(store, params) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let highlighter = Highlighter::new();
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error: failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        };

        match replay(&searcher, &line, worker_count()) {
            Ok(Some(results)) => {
                println!("{}", subheader(&format!("> {line}")));
                print_results(&results, &highlighter);
            }
            Ok(None) => debug!("last keystroke was superseded"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Returns the text of the search box after each keystroke of `line`.
fn keystrokes(line: &str) -> impl Iterator<Item = &str> + Send {
    line.char_indices()
        .skip(1)
        .map(|(end, _)| &line[..end])
        .chain(iter::once(line))
}

/// Number of search workers to run.
fn worker_count() -> usize {
    thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(MAX_WORKERS)
}

/// Searches every keystroke of `line` on `workers` threads.
///
/// Workers pull keystrokes from a shared queue and issue each ticket as they take it, so
/// tickets follow keystroke order. Only the newest result received is kept; it is returned if
/// it is still current once every keystroke has been searched.
fn replay(
    searcher: &Searcher,
    line: &str,
    workers: usize,
) -> Result<Option<Vec<SearchResult>>, QueryError> {
    let queue = Mutex::new(keystrokes(line));
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        for _ in 0..workers.max(1) {
            let tx = tx.clone();
            let queue = &queue;
            scope.spawn(move || {
                while let Some(pending) = next_pending(queue, searcher) {
                    if tx.send(pending.run()).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);

        let mut newest: Option<Sequenced<Vec<SearchResult>>> = None;
        for finished in rx {
            let finished = finished?;
            let keep_newest = newest.as_ref().is_some_and(|n| n.seq > finished.seq);
            let superseded = if keep_newest {
                Some(finished)
            } else {
                newest.replace(finished)
            };
            if let Some(old) = superseded {
                debug!(seq = old.seq, "dropped superseded results");
            }
        }

        Ok(newest.and_then(|n| n.into_current(searcher.sequencer())))
    })
}

/// Takes the next keystroke off the queue and issues its ticket.
fn next_pending<'a, I>(queue: &Mutex<I>, searcher: &'a Searcher) -> Option<PendingSearch<'a>>
where
    I: Iterator<Item = &'a str>,
{
    let mut keystrokes = queue.lock().unwrap_or_else(PoisonError::into_inner);
    keystrokes.next().map(|text| searcher.begin(text))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use symdex_query::IndexStore;

    use super::*;

    /// Builds a searcher over a small index.
    fn searcher() -> Searcher {
        let store = IndexStore::load(
            r#"[["tile", ["Tile", "classTile.html", null]],
                ["tileset", ["Tileset", "classTileset.html", null]],
                ["tile.h", ["Tile.h", "Tile_8h.html", null]]]"#,
        )
        .unwrap();
        Searcher::new(Arc::new(store))
    }

    #[test]
    fn keystrokes_are_prefixes() {
        assert_eq!(
            keystrokes("tile").collect::<Vec<_>>(),
            vec!["t", "ti", "til", "tile"]
        );
        assert_eq!(keystrokes("").collect::<Vec<_>>(), vec![""]);
        assert_eq!(
            keystrokes("\u{e9}a").collect::<Vec<_>>(),
            vec!["\u{e9}", "\u{e9}a"]
        );
    }

    #[test]
    fn replay_returns_last_keystroke() {
        let searcher = searcher();
        for workers in [1, 3, MAX_WORKERS] {
            let results = replay(&searcher, "tile.", workers).unwrap().unwrap();
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].display_name, "Tile.h");
        }
    }

    #[test]
    fn replay_issues_one_ticket_per_keystroke() {
        let searcher = searcher();
        replay(&searcher, "tiles", 4).unwrap();
        assert_eq!(searcher.sequencer().latest(), 5);
    }

    #[test]
    fn replay_handles_long_lines() {
        let searcher = searcher();
        let line = "t".repeat(5_000);
        let results = replay(&searcher, &line, MAX_WORKERS).unwrap().unwrap();
        assert!(results.is_empty());
        assert_eq!(searcher.sequencer().latest(), 5_000);
    }
}
