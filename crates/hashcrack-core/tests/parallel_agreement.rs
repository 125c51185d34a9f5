//! The sequential and parallel paths must agree on exhaustively searchable keyspaces

use hashcrack_core::{EngineOptions, SearchSpec, Verifier, scan, scan_parallel, search};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Accepts one candidate and counts every call across all clones
#[derive(Clone)]
struct CountingVerifier {
    target: Vec<u8>,
    calls: Arc<AtomicU64>,
}

impl CountingVerifier {
    fn new(target: &[u8]) -> Self {
        Self {
            target: target.to_vec(),
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Verifier for CountingVerifier {
    fn algorithm_name(&self) -> &'static str {
        "counting"
    }

    fn verify(&self, candidate: &[u8]) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        candidate == self.target.as_slice()
    }
}

// "abcd" over lengths 1..=5
const KEYSPACE: u64 = 4 + 16 + 64 + 256 + 1024;

#[test]
fn test_agree_on_found_password() {
    for target in [&b"d"[..], b"ca", b"dcab", b"abcda", b"ddddd"] {
        let spec = SearchSpec::new("", "abcd", 1, 5);
        let single = scan(&spec, &CountingVerifier::new(target)).unwrap();

        let parallel_spec = spec.clone().with_workers(4);
        let parallel =
            scan_parallel(&parallel_spec, CountingVerifier::new(target), &EngineOptions::default())
                .unwrap();

        assert!(single.found);
        assert!(parallel.found);
        assert_eq!(single.password, parallel.password);
        assert_eq!(single.password.as_deref().map(str::as_bytes), Some(target));
    }
}

#[test]
fn test_agree_on_not_found_with_full_keyspace_attempts() {
    let spec = SearchSpec::new("", "abcd", 1, 5);
    let single = scan(&spec, &CountingVerifier::new(b"zzz")).unwrap();

    let verifier = CountingVerifier::new(b"zzz");
    let parallel = scan_parallel(
        &spec.clone().with_workers(4),
        verifier.clone(),
        &EngineOptions::default(),
    )
    .unwrap();

    assert!(!single.found);
    assert!(!parallel.found);
    assert_eq!(single.attempts, KEYSPACE);
    assert_eq!(parallel.attempts, KEYSPACE);
    assert_eq!(verifier.calls(), KEYSPACE);
}

#[test]
fn test_parallel_attempts_match_verification_calls() {
    // Small flush cadence exercises many concurrent flushes
    let options = EngineOptions::default().with_flush_interval(3);
    let verifier = CountingVerifier::new(b"zzz");
    let spec = SearchSpec::new("", "abcdef", 1, 5).with_workers(3);
    let result = scan_parallel(&spec, verifier.clone(), &options).unwrap();

    assert!(!result.found);
    assert_eq!(result.attempts, spec.total_candidates());
    assert_eq!(result.attempts, verifier.calls());
}

#[test]
fn test_parallel_found_attempts_are_counted() {
    let verifier = CountingVerifier::new(b"fff");
    let spec = SearchSpec::new("", "abcdef", 1, 5).with_workers(3);
    let result = scan_parallel(&spec, verifier.clone(), &EngineOptions::default()).unwrap();

    assert!(result.found);
    assert_eq!(result.password.as_deref(), Some("fff"));
    assert!(result.attempts >= 1);
    assert!(result.attempts <= verifier.calls());
}

#[test]
fn test_more_workers_than_chunks() {
    let spec = SearchSpec::new("", "ab", 1, 1).with_workers(8);
    let result = search(&spec, CountingVerifier::new(b"b"), &EngineOptions::default()).unwrap();
    assert!(result.found);
    assert_eq!(result.password.as_deref(), Some("b"));
}

#[test]
fn test_duplicate_alphabet_behaves_like_deduplicated() {
    let repeated = SearchSpec::new("", "aab", 1, 4);
    let deduplicated = SearchSpec::new("", "ab", 1, 4);
    assert_eq!(repeated.total_candidates(), deduplicated.total_candidates());

    let a = scan(&repeated, &CountingVerifier::new(b"bab")).unwrap();
    let b = scan(&deduplicated, &CountingVerifier::new(b"bab")).unwrap();
    assert_eq!(a.found, b.found);
    assert_eq!(a.password, b.password);
    assert_eq!(a.attempts, b.attempts);

    let parallel = search(
        &repeated.with_workers(3),
        CountingVerifier::new(b"zz"),
        &EngineOptions::default(),
    )
    .unwrap();
    assert!(!parallel.found);
    assert_eq!(parallel.attempts, deduplicated.total_candidates());
}
