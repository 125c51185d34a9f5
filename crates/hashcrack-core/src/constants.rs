//! Search engine tunables and named charsets
//!
//! Note: per-search parameters live in `SearchSpec`; the values here are the
//! defaults picked up by `EngineOptions`.

use std::time::Duration;

// =============================================================================
// Parallel search parameters
// =============================================================================

/// Local attempts a worker accumulates before flushing into the shared counter
///
/// The same cadence drives the attempt-budget and cancellation checks.
pub const FLUSH_INTERVAL: u64 = 2048;

/// Target number of chunks per worker for each candidate length
pub const CHUNKS_PER_WORKER: u64 = 64;

/// Upper bound on a single coordinator wait for a worker message
pub const COORDINATOR_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Time the coordinator waits for workers to exit before detaching them
pub const WORKER_JOIN_GRACE: Duration = Duration::from_secs(2);

// =============================================================================
// Named charsets
// =============================================================================

/// Decimal digits
pub const CHARSET_DIGITS: &str = "0123456789";

/// ASCII lowercase letters
pub const CHARSET_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// ASCII uppercase letters
pub const CHARSET_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII letters (lowercase first)
pub const CHARSET_ALPHA: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII letters followed by digits
pub const CHARSET_ALNUM: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Lowercase hexadecimal digits
pub const CHARSET_HEX: &str = "0123456789abcdef";

/// Printable ASCII without whitespace other than the space character
pub const CHARSET_PRINTABLE: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " "
);

/// Supported charset names with their symbol strings
pub const NAMED_CHARSETS: [(&str, &str); 7] = [
    ("digits", CHARSET_DIGITS),
    ("lower", CHARSET_LOWER),
    ("upper", CHARSET_UPPER),
    ("alpha", CHARSET_ALPHA),
    ("alnum", CHARSET_ALNUM),
    ("hex", CHARSET_HEX),
    ("printable", CHARSET_PRINTABLE),
];
