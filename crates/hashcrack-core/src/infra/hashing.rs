//! Hash verifier implementations
//!
//! One variant per supported algorithm. The target representation is parsed
//! when the verifier is built:
//! - MD5 / SHA-1: hex digest, compared against the raw digest of the candidate
//! - bcrypt: modular crypt string (`$2a$`, `$2b$`, ...)
//! - Argon2id: PHC string; salt and cost parameters come from the string

use crate::domain::verifier::{HashAlgorithm, Verifier};
use crate::error::VerifierError;
use md5::Md5;
use sha1::{Digest, Sha1};

#[cfg(feature = "argon2")]
use argon2::{Argon2, PasswordHash, PasswordVerifier};

/// Verifier bound to a single target hash
#[derive(Clone, Debug)]
pub enum HashVerifier {
    Md5([u8; 16]),
    Sha1([u8; 20]),
    #[cfg(feature = "bcrypt")]
    Bcrypt(String),
    #[cfg(feature = "argon2")]
    Argon2id(String),
}

impl HashVerifier {
    /// Build a verifier for `target`, failing fast on a malformed representation
    pub fn new(algorithm: HashAlgorithm, target: &str) -> Result<Self, VerifierError> {
        let target = target.trim();
        match algorithm {
            HashAlgorithm::Md5 => Ok(Self::Md5(parse_hex_digest(target, "md5")?)),
            HashAlgorithm::Sha1 => Ok(Self::Sha1(parse_hex_digest(target, "sha1")?)),
            #[cfg(feature = "bcrypt")]
            HashAlgorithm::Bcrypt => {
                target
                    .parse::<bcrypt::HashParts>()
                    .map_err(|e| VerifierError::InvalidHashFormat {
                        algorithm: "bcrypt",
                        reason: e.to_string(),
                    })?;
                Ok(Self::Bcrypt(target.to_string()))
            }
            #[cfg(feature = "argon2")]
            HashAlgorithm::Argon2id => {
                let parsed =
                    PasswordHash::new(target).map_err(|e| VerifierError::InvalidHashFormat {
                        algorithm: "argon2id",
                        reason: e.to_string(),
                    })?;
                if !parsed.algorithm.as_str().starts_with("argon2") {
                    return Err(VerifierError::InvalidHashFormat {
                        algorithm: "argon2id",
                        reason: format!("not an Argon2 hash: {}", parsed.algorithm),
                    });
                }
                Ok(Self::Argon2id(target.to_string()))
            }
            #[allow(unreachable_patterns)]
            other => Err(VerifierError::UnsupportedAlgorithm(format!(
                "{} (support not compiled in)",
                other
            ))),
        }
    }
}

impl Verifier for HashVerifier {
    fn algorithm_name(&self) -> &'static str {
        match self {
            Self::Md5(_) => "md5",
            Self::Sha1(_) => "sha1",
            #[cfg(feature = "bcrypt")]
            Self::Bcrypt(_) => "bcrypt",
            #[cfg(feature = "argon2")]
            Self::Argon2id(_) => "argon2id",
        }
    }

    #[inline]
    fn verify(&self, candidate: &[u8]) -> bool {
        match self {
            Self::Md5(target) => Md5::digest(candidate).as_slice() == target,
            Self::Sha1(target) => Sha1::digest(candidate).as_slice() == target,
            #[cfg(feature = "bcrypt")]
            Self::Bcrypt(hash) => bcrypt::verify(candidate, hash).unwrap_or(false),
            #[cfg(feature = "argon2")]
            Self::Argon2id(hash) => match PasswordHash::new(hash) {
                Ok(parsed) => Argon2::default().verify_password(candidate, &parsed).is_ok(),
                Err(_) => false,
            },
        }
    }
}

fn parse_hex_digest<const N: usize>(
    target: &str,
    algorithm: &'static str,
) -> Result<[u8; N], VerifierError> {
    let mut digest = [0u8; N];
    hex::decode_to_slice(target, &mut digest).map_err(|e| VerifierError::InvalidDigest {
        algorithm,
        reason: e.to_string(),
    })?;
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MD5_123456: &str = "e10adc3949ba59abbe56e057f20f883e";
    const SHA1_123456: &str = "7c4a8d09ca3762af61e59520943dc26494f8941b";

    #[test]
    fn test_md5_verify() {
        let verifier = HashVerifier::new(HashAlgorithm::Md5, MD5_123456).unwrap();
        assert!(verifier.verify(b"123456"));
        assert!(!verifier.verify(b"123457"));
        assert_eq!(verifier.algorithm_name(), "md5");
    }

    #[test]
    fn test_md5_accepts_uppercase_and_whitespace() {
        let target = format!("  {}\n", MD5_123456.to_uppercase());
        let verifier = HashVerifier::new(HashAlgorithm::Md5, &target).unwrap();
        assert!(verifier.verify(b"123456"));
    }

    #[test]
    fn test_sha1_verify() {
        let verifier = HashVerifier::new(HashAlgorithm::Sha1, SHA1_123456).unwrap();
        assert!(verifier.verify(b"123456"));
        assert!(!verifier.verify(b"654321"));
    }

    #[test]
    fn test_invalid_hex_digest() {
        let result = HashVerifier::new(HashAlgorithm::Md5, "not-a-digest");
        assert!(matches!(
            result,
            Err(VerifierError::InvalidDigest { algorithm: "md5", .. })
        ));
    }

    #[test]
    fn test_wrong_digest_width() {
        // An MD5 digest is not a valid SHA-1 target
        let result = HashVerifier::new(HashAlgorithm::Sha1, MD5_123456);
        assert!(matches!(result, Err(VerifierError::InvalidDigest { .. })));
    }

    #[test]
    fn test_placeholder_targets_parse() {
        for algorithm in [HashAlgorithm::Md5, HashAlgorithm::Sha1] {
            let verifier = HashVerifier::new(algorithm, algorithm.placeholder_target()).unwrap();
            assert!(!verifier.verify(b"a"));
        }
    }

    #[cfg(feature = "bcrypt")]
    #[test]
    fn test_bcrypt_verify() {
        let hash = bcrypt::hash("ab", 4).unwrap();
        let verifier = HashVerifier::new(HashAlgorithm::Bcrypt, &hash).unwrap();
        assert!(verifier.verify(b"ab"));
        assert!(!verifier.verify(b"ba"));
    }

    #[cfg(feature = "bcrypt")]
    #[test]
    fn test_bcrypt_invalid_format() {
        let result = HashVerifier::new(HashAlgorithm::Bcrypt, "$2a$nonsense");
        assert!(matches!(
            result,
            Err(VerifierError::InvalidHashFormat { algorithm: "bcrypt", .. })
        ));
    }

    #[cfg(feature = "argon2")]
    #[test]
    fn test_argon2_verify() {
        use argon2::password_hash::{PasswordHasher, SaltString};
        use argon2::{Algorithm, Params, Version};

        let params = Params::new(8, 1, 1, None).unwrap();
        let hasher = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::from_b64("c2FsdHNhbHQ").unwrap();
        let hash = hasher.hash_password(b"7", &salt).unwrap().to_string();

        let verifier = HashVerifier::new(HashAlgorithm::Argon2id, &hash).unwrap();
        assert!(verifier.verify(b"7"));
        assert!(!verifier.verify(b"8"));
    }

    #[cfg(feature = "argon2")]
    #[test]
    fn test_argon2_invalid_format() {
        let result = HashVerifier::new(HashAlgorithm::Argon2id, "argon2id-but-not-phc");
        assert!(matches!(result, Err(VerifierError::InvalidHashFormat { .. })));

        let result = HashVerifier::new(
            HashAlgorithm::Argon2id,
            "$pbkdf2-sha256$i=1000$c2FsdA$aGFzaA",
        );
        assert!(matches!(result, Err(VerifierError::InvalidHashFormat { .. })));
    }
}
