//! Infrastructure layer - External dependencies
//!
//! This module wraps the hash implementations behind the verifier capability.

pub mod hashing;
