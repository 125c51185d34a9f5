//! Keyspace partitioning
//!
//! Splits the keyspace of every candidate length into contiguous index ranges
//! (chunks) and deals them out to workers.

use crate::domain::codec::keyspace_size;

/// Half-open index range `[start, end)` within the keyspace of one length
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub length: usize,
    pub start: u64,
    pub end: u64,
}

impl Chunk {
    /// Number of candidates covered by the chunk
    #[inline]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Plan the chunk sequence for lengths `min_length..=max_length`
///
/// Each length is cut into about `worker_count * chunks_per_worker` chunks of
/// `ceil(total / chunk_count)` indices. Chunks come out ordered by length, then
/// by start index. Lengths with an empty keyspace produce no chunks, and a
/// keyspace that overflows `u64` is treated as empty (validated specs never
/// reach that case).
pub fn plan_chunks(
    alphabet_size: usize,
    min_length: usize,
    max_length: usize,
    worker_count: usize,
    chunks_per_worker: u64,
) -> Vec<Chunk> {
    let workers = worker_count.max(1) as u64;
    let chunk_count = workers.saturating_mul(chunks_per_worker).max(workers);
    let mut chunks = Vec::new();

    for length in min_length..=max_length {
        let total = keyspace_size(alphabet_size, length).unwrap_or(0);
        if total == 0 {
            continue;
        }

        let chunk_size = total.div_ceil(chunk_count).max(1);
        let mut start = 0u64;
        while start < total {
            let end = start.saturating_add(chunk_size).min(total);
            chunks.push(Chunk { length, start, end });
            start = end;
        }
    }

    chunks
}

/// Deal chunks round-robin: worker `i` receives positions `i, i + n, i + 2n, ...`
pub fn assign_round_robin(chunks: &[Chunk], worker_count: usize) -> Vec<Vec<Chunk>> {
    let workers = worker_count.max(1);
    let mut per_worker: Vec<Vec<Chunk>> = vec![Vec::new(); workers];
    for (idx, chunk) in chunks.iter().enumerate() {
        per_worker[idx % workers].push(*chunk);
    }
    per_worker
}
