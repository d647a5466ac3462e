//! Drag and drop coordination.
//!
//! This crate tracks pointer-driven drag operations and broadcasts their
//! lifecycle to dropzones:
//! - **DragEngine**: one per draggable; turns pointer events into
//!   start/move/end, with abort-and-resume across instance teardown
//! - **DropRegistry**: scoped broadcast hub; dropzones own child scopes
//! - **DropzoneEngine**: hit-tests broadcast moves and raises
//!   enter/leave/drop/remove
//!
//! Everything is single-threaded and synchronous: handlers run to completion,
//! in subscription order, before the next pointer event is processed.
//!
//! # Quick Start
//!
//! ```
//! use dropkit_core::geometry::Rect;
//! use dropkit_dnd::DragContext;
//! use dropkit_input::{PointerEvent, PointerId};
//!
//! let ctx = DragContext::new();
//! let zone = ctx.dropzone(Rect::new(50.0, 50.0, 100.0, 100.0)).unwrap();
//! zone.on_drop(|event| println!("dropped at {:?}", event.position())).detach();
//!
//! let mut card = ctx.draggable(Rect::new(0.0, 0.0, 20.0, 20.0)).build().unwrap();
//! let mouse = PointerId::MOUSE;
//! card.handle_event(&PointerEvent::down(mouse, 10.0, 10.0));
//! card.handle_event(&PointerEvent::move_to(mouse, 60.0, 60.0));
//! assert!(zone.is_entered());
//! card.handle_event(&PointerEvent::up(mouse, 60.0, 60.0));
//! assert!(!zone.is_activated());
//! ```

pub mod abort;
pub mod bounds;
pub mod config;
pub mod context;
pub mod drag;
pub mod dropzone;
pub mod emitter;
pub mod error;
pub mod helper;
pub mod operation;
pub mod registry;
pub mod scroll;

// Re-export main types
pub use abort::AbortSlot;
pub use bounds::Bounds;
pub use config::{DEFAULT_SCROLL_MARGIN, DEFAULT_SCROLL_STEP, DragConfig};
pub use context::DragContext;
pub use drag::{DragEngine, DragEngineBuilder};
pub use dropzone::{DropzoneEngine, DropzoneEventKind, DropzoneState};
pub use emitter::{EventEmitter, Subscription};
pub use error::DndError;
pub use helper::DragHelper;
pub use operation::{DragData, DragOperation, DropEvent};
pub use registry::{DropRegistry, ScopeId, WeakDropRegistry};
pub use scroll::{ScrollAssist, ScrollEdge, Viewport};
