//! Vector math re-exported from [`glam`].
//!
//! Pointer positions, drag offsets and scroll deltas are all [`Vec2`] in
//! client space (origin at the top-left of the viewport, y growing down).
//!
//! ```
//! use dropkit_core::math::Vec2;
//!
//! let start = Vec2::new(10.0, 10.0);
//! let now = Vec2::new(60.0, 35.0);
//! assert_eq!(now - start, Vec2::new(50.0, 25.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};
