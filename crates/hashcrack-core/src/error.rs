//! Error types shared across the search engine

use thiserror::Error;

/// Failures of the index-to-candidate mapping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("alphabet must be non-empty")]
    InvalidAlphabet,

    #[error("candidate length must be > 0")]
    InvalidLength,
}

/// Configuration errors, reported before any candidate is checked
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("charset must be non-empty")]
    EmptyAlphabet,

    #[error("min_length/max_length must be > 0 (got {min_length}..={max_length})")]
    InvalidLength {
        min_length: usize,
        max_length: usize,
    },

    #[error("min_length must be <= max_length (got {min_length} > {max_length})")]
    LengthOrder {
        min_length: usize,
        max_length: usize,
    },

    #[error("worker count must be >= 1")]
    NoWorkers,

    #[error("time limit must be a positive number of seconds (got {0})")]
    InvalidTimeLimit(f64),

    #[error("attempt limit must be > 0")]
    InvalidAttemptLimit,

    #[error("keyspace for length {length} over {alphabet_size} symbols exceeds 2^64 candidates")]
    KeyspaceTooLarge { alphabet_size: usize, length: usize },
}

/// Errors raised while building a verifier for a target hash
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("invalid {algorithm} hex digest: {reason}")]
    InvalidDigest {
        algorithm: &'static str,
        reason: String,
    },

    #[error("invalid {algorithm} hash format: {reason}")]
    InvalidHashFormat {
        algorithm: &'static str,
        reason: String,
    },
}

/// Top-level search failure
///
/// Running out of budget or exhausting the keyspace is not an error; those
/// come back as a `CrackResult` with `found == false`.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Verifier(#[from] VerifierError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("failed to spawn search worker: {0}")]
    WorkerSpawn(#[from] std::io::Error),

    #[error("search worker {worker} stopped without reporting")]
    WorkerCrashed { worker: usize },
}

pub type Result<T> = std::result::Result<T, SearchError>;
