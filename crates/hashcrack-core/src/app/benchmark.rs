//! Verifier throughput benchmark
//!
//! A benchmark is a search with a fixed candidate length and a mandatory
//! attempt budget. The target is normally unreachable, so the run measures
//! how many verifications fit in the elapsed time.

use crate::app::options::EngineOptions;
use crate::app::searcher::search;
use crate::domain::result::CrackResult;
use crate::domain::spec::SearchSpec;
use crate::domain::verifier::HashAlgorithm;
use crate::error::{Result, SpecError};
use crate::infra::hashing::HashVerifier;

/// Parameters of one benchmark run
#[derive(Clone, Debug)]
pub struct BenchmarkCommand {
    pub algorithm: HashAlgorithm,
    /// Target hash; the algorithm's placeholder when `None`
    pub target: Option<String>,
    /// Literal charset (names already resolved)
    pub charset: String,
    /// Candidate length
    pub length: usize,
    /// Number of verifications to run
    pub attempts: u64,
    pub workers: usize,
}

impl BenchmarkCommand {
    /// Target hash used for the run
    pub fn target(&self) -> &str {
        self.target
            .as_deref()
            .unwrap_or_else(|| self.algorithm.placeholder_target())
    }

    /// Search request equivalent to this benchmark
    pub fn to_spec(&self) -> SearchSpec {
        SearchSpec::new(self.target(), &self.charset, self.length, self.length)
            .with_workers(self.workers)
            .with_max_attempts(self.attempts)
    }
}

/// Run a benchmark and return the raw search outcome
pub fn run_benchmark(command: &BenchmarkCommand, options: &EngineOptions) -> Result<CrackResult> {
    if command.length == 0 {
        return Err(SpecError::InvalidLength {
            min_length: command.length,
            max_length: command.length,
        }
        .into());
    }
    if command.attempts == 0 {
        return Err(SpecError::InvalidAttemptLimit.into());
    }

    let spec = command.to_spec();
    let verifier = HashVerifier::new(command.algorithm, &spec.target)?;
    spec.validate()?;
    search(&spec, verifier, options)
}
