//! Application layer - Use case implementations
//!
//! This module coordinates domain and infrastructure layers to implement use cases.

pub mod benchmark;
pub mod crack;
pub mod options;
pub mod parallel;
pub mod searcher;
