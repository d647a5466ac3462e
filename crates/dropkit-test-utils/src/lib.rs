//! Test utilities for dropkit.
//!
//! Recording doubles for the seams a drag touches:
//!
//! - [`RecordingHelper`] - a [`DragHelper`](dropkit_dnd::DragHelper) that logs every call
//! - [`MockViewport`] - a [`Viewport`](dropkit_dnd::Viewport) that logs scroll requests
//! - [`EventRecorder`] - collects events passed to subscription handlers
//! - [`SharedBounds`] - element bounds the test can move after handing them out
//!
//! Every double is `Clone`; clones share the same log, so a test keeps one
//! copy for assertions and hands the other to the engine.
//!
//! # Example
//!
//! ```rust
//! use dropkit_core::geometry::Rect;
//! use dropkit_dnd::DragContext;
//! use dropkit_input::{PointerEvent, PointerId};
//! use dropkit_test_utils::{HelperCall, RecordingHelper};
//!
//! let ctx = DragContext::new();
//! let helper = RecordingHelper::new();
//! let mut card = ctx
//!     .draggable(Rect::new(0.0, 0.0, 20.0, 20.0))
//!     .helper(helper.clone())
//!     .build()
//!     .unwrap();
//!
//! card.handle_event(&PointerEvent::down(PointerId::MOUSE, 5.0, 5.0));
//! assert!(matches!(helper.calls()[0], HelperCall::Start { .. }));
//! ```

mod bounds;
mod helper;
mod recorder;
mod viewport;

pub use bounds::SharedBounds;
pub use helper::{HelperCall, RecordingHelper};
pub use recorder::EventRecorder;
pub use viewport::MockViewport;
