//! Verification capability
//!
//! A verifier decides whether a candidate matches the target hash it was built
//! for. The target is parsed once when the verifier is constructed, so a
//! malformed target fails before the search starts.

use crate::error::VerifierError;
use std::fmt;
use std::str::FromStr;

/// Checks candidates against a bound target hash
///
/// Every worker receives its own clone; implementations must not rely on
/// state shared between clones for correctness.
pub trait Verifier: Clone + Send + 'static {
    /// Short algorithm name for logs and reports
    fn algorithm_name(&self) -> &'static str;

    /// True if `candidate` hashes to the bound target
    fn verify(&self, candidate: &[u8]) -> bool;
}

/// Supported hash algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Bcrypt,
    Argon2id,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [Self::Md5, Self::Sha1, Self::Bcrypt, Self::Argon2id];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Bcrypt => "bcrypt",
            Self::Argon2id => "argon2id",
        }
    }

    /// Format-valid target that no short candidate is expected to match
    ///
    /// Used by benchmarks when the caller does not supply a target.
    pub fn placeholder_target(&self) -> &'static str {
        match self {
            Self::Md5 => "00000000000000000000000000000000",
            Self::Sha1 => "0000000000000000000000000000000000000000",
            Self::Bcrypt => "$2a$10$z4u9ZkvopUiiytaNX7wfGedy9Lu2ywUxwYpbsAR5YBrAuUs3YGXdi",
            Self::Argon2id => {
                "$argon2id$v=19$m=65536,t=3,p=2$c2FsdHNhbHQ$PUF5UxxoUY++mMekkQwFurL0ZsTtB7lelO23zcyZQ0c"
            }
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = VerifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "bcrypt" => Ok(Self::Bcrypt),
            "argon2" | "argon2id" => Ok(Self::Argon2id),
            _ => Err(VerifierError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
