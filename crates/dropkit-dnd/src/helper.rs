//! Drag visuals.

use dropkit_core::geometry::Rect;

use crate::operation::DragOperation;

/// Renders feedback for a drag (a ghost image, a placeholder, ...).
///
/// Called synchronously from the owning [`DragEngine`](crate::DragEngine)'s
/// transitions. Helpers only ever see the operation by shared reference, so
/// they cannot disturb coordination state; they must not panic.
pub trait DragHelper {
    /// The drag began, or was resumed on a new draggable instance.
    fn on_drag_start(&mut self, operation: &DragOperation);

    fn on_drag_move(&mut self, operation: &DragOperation);

    /// The drag ended; `final_rect` is the element's box after the gesture,
    /// not the rect captured at start.
    fn on_drag_end(&mut self, final_rect: Rect);
}
