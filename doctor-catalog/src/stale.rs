//! Superseded-result discard for callers that fire overlapping searches.
//!
//! The pipeline has no cancellation. A caller issues a ticket per search and
//! passes each completion through [`SearchSequencer::accept`]; only the result
//! for the most recently issued ticket survives.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Identifies one outstanding search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: AtomicU64,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search; every earlier ticket becomes stale.
    pub fn issue(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Keep `value` only if `ticket` is still the latest.
    pub fn accept<T>(&self, ticket: SearchTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            debug!(
                target: "doctor_catalog::stale",
                ticket = ticket.0,
                latest = self.latest.load(Ordering::SeqCst),
                "discarding stale response"
            );
            None
        }
    }
}
