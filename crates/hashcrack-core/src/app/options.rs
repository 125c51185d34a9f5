//! Engine configuration

use crate::constants::{
    CHUNKS_PER_WORKER, COORDINATOR_POLL_INTERVAL, FLUSH_INTERVAL, WORKER_JOIN_GRACE,
};
use std::time::Duration;

/// Tunables for the search engine
///
/// These control coordination overhead, not search semantics; `SearchSpec`
/// holds the per-search parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    /// Local attempts between shared-counter flushes (and budget/cancel checks)
    pub flush_interval: u64,
    /// Target chunks per worker for each length
    pub chunks_per_worker: u64,
    /// Longest single wait of the coordinator for a worker message
    pub poll_interval: Duration,
    /// Time allowed for workers to exit before they are detached
    pub join_grace: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            flush_interval: FLUSH_INTERVAL,
            chunks_per_worker: CHUNKS_PER_WORKER,
            poll_interval: COORDINATOR_POLL_INTERVAL,
            join_grace: WORKER_JOIN_GRACE,
        }
    }
}

impl EngineOptions {
    /// Set the flush cadence (clamped to at least 1)
    pub fn with_flush_interval(mut self, flush_interval: u64) -> Self {
        self.flush_interval = flush_interval.max(1);
        self
    }

    /// Set the chunks-per-worker heuristic (clamped to at least 1)
    pub fn with_chunks_per_worker(mut self, chunks_per_worker: u64) -> Self {
        self.chunks_per_worker = chunks_per_worker.max(1);
        self
    }

    /// Set the coordinator poll interval
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Set the worker join grace period
    pub fn with_join_grace(mut self, join_grace: Duration) -> Self {
        self.join_grace = join_grace;
        self
    }
}
