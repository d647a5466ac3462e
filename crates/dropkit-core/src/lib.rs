//! Dropkit Core
//!
//! Shared building blocks for the dropkit crates: math types, rectangle
//! geometry, logging setup, profiling hooks and hash sets.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
