//! Search workflow implementation
//!
//! `search` is the unified entry point: one worker runs the sequential scan in
//! the calling thread, more workers go through the parallel coordinator.

use crate::app::options::EngineOptions;
use crate::app::parallel::scan_parallel;
use crate::domain::codec::{CandidateCursor, keyspace_size};
use crate::domain::result::{CrackResult, decode_candidate};
use crate::domain::spec::SearchSpec;
use crate::domain::verifier::Verifier;
use crate::error::Result;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Search the keyspace described by `spec` for a candidate accepted by `verifier`
///
/// # Arguments
/// * `spec` - Search request; validated before any candidate is checked
/// * `verifier` - Verifier bound to the target; cloned once per worker
/// * `options` - Coordination tunables (only used by the parallel path)
///
/// # Returns
/// The search outcome. Budget exhaustion is a normal `found == false` result.
pub fn search<V: Verifier>(
    spec: &SearchSpec,
    verifier: V,
    options: &EngineOptions,
) -> Result<CrackResult> {
    if spec.workers <= 1 {
        scan(spec, &verifier)
    } else {
        scan_parallel(spec, verifier, options)
    }
}

/// Sequential scan in the calling thread
///
/// Lengths are walked in increasing order and indices within a length in
/// increasing order, so if several candidates verify, the shortest one with
/// the lowest index wins. Both budgets are checked after every verification.
pub fn scan<V: Verifier>(spec: &SearchSpec, verifier: &V) -> Result<CrackResult> {
    spec.validate()?;

    let started = Instant::now();
    let time_limit = spec.time_limit();
    let mut attempts = 0u64;

    debug!(
        algorithm = verifier.algorithm_name(),
        alphabet = spec.alphabet.len(),
        min_length = spec.min_length,
        max_length = spec.max_length,
        candidates = spec.total_candidates(),
        "starting sequential search"
    );

    for length in spec.min_length..=spec.max_length {
        let total = keyspace_size(spec.alphabet.len(), length).unwrap_or(0);
        let mut cursor = CandidateCursor::new(&spec.alphabet, length, 0, total)?;

        while let Some(candidate) = cursor.advance() {
            attempts += 1;

            if verifier.verify(candidate) {
                let password = decode_candidate(candidate);
                let seconds = started.elapsed().as_secs_f64();
                info!(attempts, seconds, length, "match found");
                return Ok(CrackResult::found(password, attempts, seconds));
            }

            if let Some(max_attempts) = spec.max_attempts
                && attempts >= max_attempts
            {
                warn!(attempts, "attempt budget exhausted");
                return Ok(CrackResult::not_found(attempts, started.elapsed().as_secs_f64()));
            }

            if let Some(limit) = time_limit
                && started.elapsed() >= limit
            {
                warn!(attempts, "time budget exhausted");
                return Ok(CrackResult::not_found(attempts, started.elapsed().as_secs_f64()));
            }
        }
    }

    let seconds = started.elapsed().as_secs_f64();
    info!(attempts, seconds, "keyspace exhausted without a match");
    Ok(CrackResult::not_found(attempts, seconds))
}
