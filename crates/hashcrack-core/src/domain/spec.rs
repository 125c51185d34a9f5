//! Search request parameters

use crate::domain::alphabet::Alphabet;
use crate::domain::codec::keyspace_size;
use crate::error::SpecError;
use std::time::Duration;

/// One search request
#[derive(Clone, Debug)]
pub struct SearchSpec {
    /// Target hash representation, interpreted by the verifier
    pub target: String,
    /// Candidate symbols
    pub alphabet: Alphabet,
    /// Shortest candidate length (inclusive)
    pub min_length: usize,
    /// Longest candidate length (inclusive)
    pub max_length: usize,
    /// Wall-time budget in seconds (None = unlimited)
    pub time_limit_seconds: Option<f64>,
    /// Verification-call budget (None = unlimited)
    pub max_attempts: Option<u64>,
    /// Number of workers; 1 selects the single-threaded path
    pub workers: usize,
}

impl SearchSpec {
    /// Create a single-worker request with no budgets
    ///
    /// `charset` is the literal symbol string; resolve names first with
    /// `resolve_charset`.
    pub fn new(
        target: impl Into<String>,
        charset: &str,
        min_length: usize,
        max_length: usize,
    ) -> Self {
        Self {
            target: target.into(),
            alphabet: Alphabet::from_charset(charset),
            min_length,
            max_length,
            time_limit_seconds: None,
            max_attempts: None,
            workers: 1,
        }
    }

    /// Set the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the wall-time budget in seconds
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit_seconds = Some(seconds);
        self
    }

    /// Set the verification-call budget
    pub fn with_max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Reject configurations that cannot describe a finite, well-formed search
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.alphabet.is_empty() {
            return Err(SpecError::EmptyAlphabet);
        }
        if self.min_length == 0 || self.max_length == 0 {
            return Err(SpecError::InvalidLength {
                min_length: self.min_length,
                max_length: self.max_length,
            });
        }
        if self.min_length > self.max_length {
            return Err(SpecError::LengthOrder {
                min_length: self.min_length,
                max_length: self.max_length,
            });
        }
        if self.workers == 0 {
            return Err(SpecError::NoWorkers);
        }
        if let Some(seconds) = self.time_limit_seconds
            && !(seconds.is_finite() && seconds > 0.0)
        {
            return Err(SpecError::InvalidTimeLimit(seconds));
        }
        if self.max_attempts == Some(0) {
            return Err(SpecError::InvalidAttemptLimit);
        }
        if keyspace_size(self.alphabet.len(), self.max_length).is_none() {
            return Err(SpecError::KeyspaceTooLarge {
                alphabet_size: self.alphabet.len(),
                length: self.max_length,
            });
        }
        Ok(())
    }

    /// Time budget as a `Duration`
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_seconds.map(Duration::from_secs_f64)
    }

    /// Total number of candidates over all lengths (saturating)
    pub fn total_candidates(&self) -> u64 {
        (self.min_length..=self.max_length)
            .map(|length| keyspace_size(self.alphabet.len(), length).unwrap_or(u64::MAX))
            .fold(0u64, u64::saturating_add)
    }
}
