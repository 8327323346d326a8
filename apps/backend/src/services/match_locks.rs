//! Per-match write serialization.
//!
//! Every `record_delivery` call for a given match holds this lock across
//! the whole pipeline transaction; the sequencer and the batting-order
//! sets are read-then-write and interleaved writers would corrupt them.
//! Calls for different matches run in parallel.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct MatchLocks {
    locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
}

impl MatchLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock for one match, created on first use.
    pub fn for_match(&self, match_id: i64) -> Arc<Mutex<()>> {
        self.locks
            .entry(match_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop the registry entry after an administrative purge.
    ///
    /// The entry stays put while any task still holds a handle to it:
    /// removing it then would let the next `for_match` mint a second
    /// mutex for the same id, and two writers could hold "the" match
    /// lock at once. The shard lock taken by `remove_if` keeps the
    /// count check and the removal atomic against `for_match`.
    pub fn forget(&self, match_id: i64) {
        self.locks
            .remove_if(&match_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
