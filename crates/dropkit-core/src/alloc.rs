//! Hash collections used across dropkit.
//!
//! Re-exports of the AHash-backed collections so every crate hashes the same way.

pub use ahash::AHashSet as HashSet;
