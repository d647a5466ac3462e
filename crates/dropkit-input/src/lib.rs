//! Pointer input for dropkit.
//!
//! The drag engines consume [`PointerEvent`]s: a pointer id, a client-space
//! position, a button and one of four kinds (down, move, up, cancel). Hosts
//! either build these directly or, with the `winit` feature, translate window
//! events through [`winit_input::PointerTracker`].

pub mod event;
pub mod queue;
#[cfg(feature = "winit")]
pub mod winit_input;

pub use event::{HandleStatus, PointerButton, PointerEvent, PointerEventKind, PointerId};
pub use queue::{EventBatch, EventQueue, EventStats};
