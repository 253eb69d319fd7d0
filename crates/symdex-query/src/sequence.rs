//! Keystroke sequencing.
//!
//! Type-ahead hosts fire a search on every keystroke and may receive results out of order.
//! Each search is tagged with a ticket from a [`QuerySequencer`]; only results carrying the
//! most recently issued ticket are current; everything else has been superseded and is
//! dropped by the caller.

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues monotonically increasing query tickets.
#[derive(Debug, Default)]
pub struct QuerySequencer {
    /// The most recently issued ticket. Zero before the first issue.
    latest: AtomicU64,
}

impl QuerySequencer {
    /// Creates a sequencer that has issued no tickets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket, superseding every earlier one.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Returns the most recently issued ticket, or 0 if none has been issued.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }

    /// Returns true if `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket != 0 && ticket == self.latest()
    }
}

/// A value tagged with the ticket of the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequenced<T> {
    /// Ticket issued for the query.
    pub seq: u64,
    /// The query's result.
    pub value: T,
}

impl<T> Sequenced<T> {
    /// Returns true if no later query has been issued on `sequencer`.
    pub fn is_current(&self, sequencer: &QuerySequencer) -> bool {
        sequencer.is_current(self.seq)
    }

    /// Returns the value if it is still current, or `None` if it has been superseded.
    pub fn into_current(self, sequencer: &QuerySequencer) -> Option<T> {
        self.is_current(sequencer).then_some(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let sequencer = QuerySequencer::new();
        assert!(!sequencer.is_current(0));

        let first = sequencer.issue();
        assert!(sequencer.is_current(first));

        let second = sequencer.issue();
        assert!(second > first);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
        assert_eq!(sequencer.latest(), second);
    }

    #[test]
    fn superseded_values_are_dropped() {
        let sequencer = QuerySequencer::new();
        let stale = Sequenced {
            seq: sequencer.issue(),
            value: "t",
        };
        let fresh = Sequenced {
            seq: sequencer.issue(),
            value: "ti",
        };

        assert!(!stale.is_current(&sequencer));
        assert_eq!(stale.into_current(&sequencer), None);
        assert_eq!(fresh.into_current(&sequencer), Some("ti"));
    }
}
