//! Hash recovery workflow
//!
//! Resolves the verifier for the requested algorithm and runs the engine.

use crate::app::options::EngineOptions;
use crate::app::searcher::search;
use crate::domain::result::CrackResult;
use crate::domain::spec::SearchSpec;
use crate::domain::verifier::HashAlgorithm;
use crate::error::Result;
use crate::infra::hashing::HashVerifier;

/// Recover the password behind `spec.target`
///
/// The target is parsed before the keyspace is searched, so a malformed hash is
/// reported as `SearchError::Verifier` instead of a misleading "not found".
pub fn crack_hash(
    algorithm: HashAlgorithm,
    spec: &SearchSpec,
    options: &EngineOptions,
) -> Result<CrackResult> {
    let verifier = HashVerifier::new(algorithm, &spec.target)?;
    spec.validate()?;
    search(spec, verifier, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SearchError, VerifierError};

    #[test]
    fn test_crack_md5_short() {
        // md5("ab")
        let spec = SearchSpec::new("187ef4436122d1cc2f40dc2b92f0eba0", "abc", 1, 3);
        let result = crack_hash(HashAlgorithm::Md5, &spec, &EngineOptions::default()).unwrap();
        assert!(result.found);
        assert_eq!(result.password.as_deref(), Some("ab"));
        assert_eq!(result.attempts, 3 + 2);
    }

    #[test]
    fn test_crack_malformed_target_fails_fast() {
        let spec = SearchSpec::new("zz", "abc", 1, 3);
        let result = crack_hash(HashAlgorithm::Md5, &spec, &EngineOptions::default());
        assert!(matches!(
            result,
            Err(SearchError::Verifier(VerifierError::InvalidDigest { .. }))
        ));
    }
}
