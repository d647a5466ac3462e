//! dropkit - drag and drop coordination
//!
//! dropkit tracks pointer-driven drags and tells dropzones about them:
//!
//! - **Drag engines**: one per draggable, fed raw pointer events
//! - **Drop registries**: scoped broadcast of drag start/move/end
//! - **Dropzones**: enter/leave/drop/remove from an inclusive hit test
//! - **Helpers and scroll assist**: drag visuals and edge auto-scroll
//! - **Input**: a pointer event model with an optional `winit` adapter
//!
//! # Quick Start
//!
//! ```
//! use dropkit::prelude::*;
//!
//! dropkit::logging::init();
//!
//! let ctx = DragContext::new();
//! let zone = ctx.dropzone(Rect::new(50.0, 50.0, 100.0, 100.0)).unwrap();
//! let _on_drop = zone.on_drop(|event| {
//!     tracing::info!(at = ?event.position(), "dropped");
//! });
//!
//! let mut card = ctx.draggable(Rect::new(0.0, 0.0, 20.0, 20.0)).build().unwrap();
//!
//! let mut queue = EventQueue::new();
//! queue.push(PointerEvent::down(PointerId::MOUSE, 10.0, 10.0));
//! queue.push(PointerEvent::move_to(PointerId::MOUSE, 60.0, 60.0));
//! queue.push(PointerEvent::up(PointerId::MOUSE, 60.0, 60.0));
//!
//! // Once per host frame
//! dropkit::profiling::new_frame();
//! let mut batch = queue.drain();
//! batch.dispatch(|event| card.handle_event(event));
//! ```
//!
//! # Features
//!
//! - `profiling` (default) - puffin scopes around registry broadcasts
//! - `winit` - `PointerTracker` translating `winit` window events

// Re-export core types
pub use dropkit_core as core;
pub use dropkit_core::{geometry, logging, math, profiling};

pub use dropkit_dnd as dnd;
pub use dropkit_input as input;

#[cfg(feature = "winit")]
pub use dropkit_input::winit_input::PointerTracker;

pub use dropkit_dnd::{
    AbortSlot, Bounds, DndError, DragConfig, DragContext, DragData, DragEngine, DragEngineBuilder,
    DragHelper, DragOperation, DropEvent, DropRegistry, DropzoneEngine, DropzoneEventKind,
    DropzoneState, ScopeId, ScrollAssist, ScrollEdge, Subscription, Viewport,
};
pub use dropkit_input::{
    EventBatch, EventQueue, HandleStatus, PointerButton, PointerEvent, PointerEventKind, PointerId,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use dropkit_core::geometry::{Rect, Size};
    pub use dropkit_core::math::{Vec2, vec2};

    pub use dropkit_dnd::{
        Bounds, DndError, DragConfig, DragContext, DragData, DragEngine, DragHelper,
        DragOperation, DropEvent, DropRegistry, DropzoneEngine, DropzoneState, Subscription,
        Viewport,
    };
    pub use dropkit_input::{
        EventBatch, EventQueue, HandleStatus, PointerButton, PointerEvent, PointerEventKind,
        PointerId,
    };

    #[cfg(feature = "winit")]
    pub use dropkit_input::winit_input::PointerTracker;
}
