//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and types without threads or I/O.

pub mod alphabet;
pub mod codec;
pub mod keyspace;
pub mod result;
pub mod spec;
pub mod verifier;
