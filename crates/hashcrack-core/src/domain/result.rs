//! Search outcome

/// Final outcome of one search
#[derive(Clone, Debug, PartialEq)]
pub struct CrackResult {
    /// Whether a matching candidate was recovered
    pub found: bool,
    /// Recovered candidate text (present iff `found`)
    pub password: Option<String>,
    /// Verification calls issued across all workers
    pub attempts: u64,
    /// Wall time from search start to return
    pub seconds: f64,
}

impl CrackResult {
    /// A successful outcome
    pub fn found(password: String, attempts: u64, seconds: f64) -> Self {
        Self {
            found: true,
            password: Some(password),
            attempts,
            seconds,
        }
    }

    /// A budget-exhausted or keyspace-exhausted outcome
    pub fn not_found(attempts: u64, seconds: f64) -> Self {
        Self {
            found: false,
            password: None,
            attempts,
            seconds,
        }
    }

    /// Verification throughput (0 when no time elapsed)
    pub fn rate_per_second(&self) -> f64 {
        if self.seconds <= 0.0 {
            return 0.0;
        }
        self.attempts as f64 / self.seconds
    }
}

/// Decode recovered candidate bytes for the caller
///
/// Candidates are synthesized from alphabet bytes and may split a multi-byte
/// character; invalid sequences become U+FFFD instead of failing the search.
pub fn decode_candidate(candidate: &[u8]) -> String {
    String::from_utf8_lossy(candidate).into_owned()
}
