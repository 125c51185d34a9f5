//! Parallel search: worker pool and coordinator
//!
//! The keyspace is cut into chunks and dealt round-robin to a fixed set of
//! worker threads. Workers share exactly two pieces of mutable state, the
//! attempt counter and the cancellation flag, both held in `SearchProgress`.
//! Results travel back to the coordinator over a channel.
//!
//! Unlike the sequential scan, there is no cross-worker ordering: if several
//! candidates verify, whichever worker reaches one first wins.

use crate::app::options::EngineOptions;
use crate::domain::alphabet::Alphabet;
use crate::domain::codec::CandidateCursor;
use crate::domain::keyspace::{Chunk, assign_round_robin, plan_chunks};
use crate::domain::result::{CrackResult, decode_candidate};
use crate::domain::spec::SearchSpec;
use crate::domain::verifier::Verifier;
use crate::error::{CodecError, Result, SearchError};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Sleep between liveness checks while joining workers
const JOIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

// =============================================================================
// Shared state
// =============================================================================

/// Mutable state shared by the coordinator and every worker
#[derive(Debug, Default)]
pub struct SearchProgress {
    attempts: AtomicU64,
    cancelled: AtomicBool,
}

impl SearchProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add flushed attempts and return the global total including them
    ///
    /// Increment and read are a single atomic operation, so the returned total
    /// is never stale with respect to this flush.
    #[inline]
    pub fn add_attempts(&self, count: u64) -> u64 {
        self.attempts.fetch_add(count, Ordering::AcqRel) + count
    }

    /// Attempts flushed so far
    #[inline]
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Acquire)
    }

    /// Ask every worker to stop; there is no way to clear the flag
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

// =============================================================================
// Worker
// =============================================================================

/// Terminal state of a worker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerState {
    /// Verified a match
    Found,
    /// Observed an exhausted attempt or time budget
    BudgetExceeded,
    /// Stopped because the shared flag was set by someone else
    Cancelled,
    /// Checked every assigned chunk without a match
    Exhausted,
}

/// Message from a worker to the coordinator
#[derive(Debug)]
pub enum WorkerMessage {
    Found { worker: usize, password: String },
    Done { worker: usize, state: WorkerState },
}

enum WorkerExit {
    Found(String),
    Stopped(WorkerState),
}

struct Worker<V> {
    id: usize,
    verifier: V,
    alphabet: Arc<Alphabet>,
    chunks: Vec<Chunk>,
    progress: Arc<SearchProgress>,
    started: Instant,
    time_limit: Option<Duration>,
    max_attempts: Option<u64>,
    flush_interval: u64,
    tx: Sender<WorkerMessage>,
}

impl<V: Verifier> Worker<V> {
    fn run(self) {
        let mut pending = 0u64;
        let exit = self.scan(&mut pending);

        // Every exit path flushes, so the shared counter ends up exact
        if pending > 0 {
            self.progress.add_attempts(pending);
        }

        let message = match exit {
            Ok(WorkerExit::Found(password)) => {
                self.progress.cancel();
                debug!(worker = self.id, state = ?WorkerState::Found, "worker stopped");
                WorkerMessage::Found {
                    worker: self.id,
                    password,
                }
            }
            Ok(WorkerExit::Stopped(state)) => {
                debug!(worker = self.id, ?state, "worker stopped");
                WorkerMessage::Done {
                    worker: self.id,
                    state,
                }
            }
            Err(e) => {
                // No report: the coordinator treats a silent exit as a crash
                error!(worker = self.id, error = %e, "worker failed to decode its chunks");
                return;
            }
        };

        // The coordinator may already have returned; nobody is left to tell
        let _ = self.tx.send(message);
    }

    fn scan(&self, pending: &mut u64) -> std::result::Result<WorkerExit, CodecError> {
        for chunk in &self.chunks {
            if self.progress.is_cancelled() {
                return Ok(WorkerExit::Stopped(WorkerState::Cancelled));
            }

            let mut cursor =
                CandidateCursor::new(&self.alphabet, chunk.length, chunk.start, chunk.end)?;

            while let Some(candidate) = cursor.advance() {
                let matched = self.verifier.verify(candidate);
                *pending += 1;

                if matched {
                    return Ok(WorkerExit::Found(decode_candidate(candidate)));
                }

                if *pending >= self.flush_interval {
                    let total = self.progress.add_attempts(std::mem::take(pending));
                    if let Some(max_attempts) = self.max_attempts
                        && total >= max_attempts
                    {
                        self.progress.cancel();
                        return Ok(WorkerExit::Stopped(WorkerState::BudgetExceeded));
                    }
                    if self.progress.is_cancelled() {
                        return Ok(WorkerExit::Stopped(WorkerState::Cancelled));
                    }
                }

                if let Some(limit) = self.time_limit
                    && self.started.elapsed() >= limit
                {
                    self.progress.cancel();
                    return Ok(WorkerExit::Stopped(WorkerState::BudgetExceeded));
                }
            }
        }

        Ok(WorkerExit::Stopped(WorkerState::Exhausted))
    }
}

// =============================================================================
// Coordinator
// =============================================================================

/// How the coordinator decided to stop waiting
#[derive(Debug, PartialEq, Eq)]
enum Termination {
    Found(String),
    Exhausted,
    BudgetExceeded,
    Crashed(usize),
}

struct Coordinator<'a> {
    progress: &'a SearchProgress,
    started: Instant,
    time_limit: Option<Duration>,
    max_attempts: Option<u64>,
    poll_interval: Duration,
    worker_count: usize,
}

impl Coordinator<'_> {
    /// Receive worker messages until a match, a budget, or every worker is done
    fn wait(&self, rx: &Receiver<WorkerMessage>) -> Termination {
        let mut reported = vec![false; self.worker_count];
        let mut done = 0;
        let mut budget_hit = false;

        while done < self.worker_count {
            match rx.recv_timeout(self.poll_interval) {
                Ok(WorkerMessage::Found { worker, password }) => {
                    debug!(worker, "match reported");
                    self.progress.cancel();
                    return Termination::Found(password);
                }
                Ok(WorkerMessage::Done { worker, state }) => {
                    if let Some(seen) = reported.get_mut(worker)
                        && !*seen
                    {
                        *seen = true;
                        done += 1;
                        budget_hit |= state == WorkerState::BudgetExceeded;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    if self.budget_exhausted() {
                        self.progress.cancel();
                        return Termination::BudgetExceeded;
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    // Every sender is gone and the queue is drained: anyone
                    // who has not reported exited without a word.
                    if let Some(worker) = reported.iter().position(|seen| !seen) {
                        return Termination::Crashed(worker);
                    }
                    break;
                }
            }
        }

        if budget_hit {
            Termination::BudgetExceeded
        } else {
            Termination::Exhausted
        }
    }

    fn budget_exhausted(&self) -> bool {
        let out_of_time = self
            .time_limit
            .is_some_and(|limit| self.started.elapsed() >= limit);
        let out_of_attempts = self
            .max_attempts
            .is_some_and(|max| self.progress.attempts() >= max);
        out_of_time || out_of_attempts
    }
}

/// Join workers, giving them `grace` to exit before detaching the stragglers
///
/// Threads cannot be killed safely, so a worker that is still running after
/// the grace period is left detached; it stops at its next cancellation check.
fn join_workers(handles: Vec<(usize, JoinHandle<()>)>, grace: Duration) {
    let deadline = Instant::now() + grace;
    let mut pending = handles;

    loop {
        let (finished, running): (Vec<_>, Vec<_>) =
            pending.into_iter().partition(|(_, h)| h.is_finished());

        for (worker, handle) in finished {
            if handle.join().is_err() {
                warn!(worker, "search worker panicked");
            }
        }

        if running.is_empty() {
            return;
        }
        if Instant::now() >= deadline {
            for (worker, _) in &running {
                warn!(worker = *worker, "search worker did not stop in time; detaching");
            }
            return;
        }

        pending = running;
        thread::sleep(JOIN_POLL_INTERVAL);
    }
}

/// Multi-worker scan
///
/// Spawns `spec.workers` threads over disjoint chunk sets. The coordinator
/// sets the cancellation flag on every exit path, then joins the workers with
/// a bounded grace period. `attempts` is read from the shared counter after
/// the join.
pub fn scan_parallel<V: Verifier>(
    spec: &SearchSpec,
    verifier: V,
    options: &EngineOptions,
) -> Result<CrackResult> {
    spec.validate()?;

    let started = Instant::now();
    let worker_count = spec.workers;
    let chunks = plan_chunks(
        spec.alphabet.len(),
        spec.min_length,
        spec.max_length,
        worker_count,
        options.chunks_per_worker,
    );
    let assignments = assign_round_robin(&chunks, worker_count);

    debug!(
        algorithm = verifier.algorithm_name(),
        workers = worker_count,
        chunks = chunks.len(),
        candidates = spec.total_candidates(),
        "starting parallel search"
    );

    let progress = Arc::new(SearchProgress::new());
    let alphabet = Arc::new(spec.alphabet.clone());
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut handles = Vec::with_capacity(worker_count);

    for (id, chunks) in assignments.into_iter().enumerate() {
        let worker = Worker {
            id,
            verifier: verifier.clone(),
            alphabet: Arc::clone(&alphabet),
            chunks,
            progress: Arc::clone(&progress),
            started,
            time_limit: spec.time_limit(),
            max_attempts: spec.max_attempts,
            flush_interval: options.flush_interval.max(1),
            tx: tx.clone(),
        };

        let spawned = thread::Builder::new()
            .name(format!("hashcrack-worker-{}", id))
            .spawn(move || worker.run());

        match spawned {
            Ok(handle) => handles.push((id, handle)),
            Err(e) => {
                progress.cancel();
                join_workers(handles, options.join_grace);
                return Err(SearchError::WorkerSpawn(e));
            }
        }
    }
    // Only workers hold senders now, so disconnection means all have exited
    drop(tx);

    let coordinator = Coordinator {
        progress: &progress,
        started,
        time_limit: spec.time_limit(),
        max_attempts: spec.max_attempts,
        poll_interval: options.poll_interval,
        worker_count,
    };
    let termination = coordinator.wait(&rx);

    progress.cancel();
    join_workers(handles, options.join_grace);

    let attempts = progress.attempts();
    let seconds = started.elapsed().as_secs_f64();

    match termination {
        Termination::Found(password) => {
            info!(attempts, seconds, "match found");
            Ok(CrackResult::found(password, attempts, seconds))
        }
        Termination::BudgetExceeded => {
            warn!(attempts, seconds, "search budget exhausted");
            Ok(CrackResult::not_found(attempts, seconds))
        }
        Termination::Exhausted => {
            info!(attempts, seconds, "keyspace exhausted without a match");
            Ok(CrackResult::not_found(attempts, seconds))
        }
        Termination::Crashed(worker) => {
            warn!(worker, attempts, "search worker exited without reporting");
            Err(SearchError::WorkerCrashed { worker })
        }
    }
}
