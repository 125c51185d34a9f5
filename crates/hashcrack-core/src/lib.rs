//! hashcrack-core - Indexed brute-force search for credential hashes
//!
//! This crate provides functionality to:
//! - Map integer indices to fixed-length candidates over an alphabet (and back to ranges)
//! - Partition a multi-length keyspace into chunks for parallel workers
//! - Search the keyspace sequentially or with a coordinated worker pool,
//!   under optional time and attempt budgets
//! - Verify candidates against MD5, SHA-1, bcrypt and Argon2id targets

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod infra;

// Re-export commonly used types
pub use app::benchmark::{BenchmarkCommand, run_benchmark};
pub use app::crack::crack_hash;
pub use app::options::EngineOptions;
pub use app::searcher::{scan, search};
pub use app::parallel::scan_parallel;
pub use domain::alphabet::{Alphabet, resolve_charset};
pub use domain::codec::{encode_index, keyspace_size};
pub use domain::keyspace::{Chunk, assign_round_robin, plan_chunks};
pub use domain::result::CrackResult;
pub use domain::spec::SearchSpec;
pub use domain::verifier::{HashAlgorithm, Verifier};
pub use error::{SearchError, SpecError, VerifierError};
pub use infra::hashing::HashVerifier;
