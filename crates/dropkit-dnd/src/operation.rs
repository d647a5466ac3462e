//! The record of one in-progress drag gesture.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use dropkit_core::geometry::Rect;
use dropkit_core::math::Vec2;
use dropkit_input::{PointerEvent, PointerId};

/// Tracks a single drag from pointer-down to release.
///
/// `start_event` and `offset` are fixed for the whole gesture, including
/// across an abort-and-resume handoff; only `last_event` advances.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOperation {
    start_event: PointerEvent,
    last_event: PointerEvent,
    offset: Vec2,
    origin_rect: Rect,
}

impl DragOperation {
    /// Start an operation from the pointer-down that grabbed an element
    /// whose box is `origin_rect`.
    pub fn begin(event: PointerEvent, origin_rect: Rect) -> Self {
        Self {
            start_event: event,
            last_event: event,
            offset: event.position - origin_rect.origin(),
            origin_rect,
        }
    }

    pub fn pointer_id(&self) -> PointerId {
        self.start_event.pointer_id
    }

    pub fn start_event(&self) -> &PointerEvent {
        &self.start_event
    }

    pub fn last_event(&self) -> &PointerEvent {
        &self.last_event
    }

    pub fn start_point(&self) -> Vec2 {
        self.start_event.position
    }

    pub fn last_point(&self) -> Vec2 {
        self.last_event.position
    }

    /// Vector from the element's origin to the grab point.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Element box captured at pointer-down.
    pub fn origin_rect(&self) -> Rect {
        self.origin_rect
    }

    /// Pointer travel since the start of the gesture.
    pub fn delta(&self) -> Vec2 {
        self.last_point() - self.start_point()
    }

    /// Where the dragged element's origin should be drawn so the grab point
    /// stays under the pointer.
    pub fn element_position(&self) -> Vec2 {
        self.last_point() - self.offset
    }

    pub(crate) fn advance(&mut self, event: PointerEvent) {
        self.last_event = event;
    }
}

/// Application payload attached to a draggable and carried by every
/// [`DropEvent`] it broadcasts.
#[derive(Clone)]
pub struct DragData(Rc<dyn Any>);

impl DragData {
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for DragData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DragData(..)")
    }
}

/// Snapshot broadcast through a [`DropRegistry`](crate::DropRegistry) and
/// handed to dropzone listeners.
#[derive(Debug, Clone)]
pub struct DropEvent {
    /// The operation as it stood when the signal was sent.
    pub operation: DragOperation,
    /// The raw pointer event behind the signal.
    pub pointer: PointerEvent,
    data: Option<DragData>,
}

impl DropEvent {
    pub fn new(operation: DragOperation, pointer: PointerEvent) -> Self {
        Self {
            operation,
            pointer,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Option<DragData>) -> Self {
        self.data = data;
        self
    }

    /// Pointer position of the underlying event.
    pub fn position(&self) -> Vec2 {
        self.pointer.position
    }

    /// The draggable's payload, if it carries one of type `T`.
    pub fn data<T: Any>(&self) -> Option<&T> {
        self.data.as_ref().and_then(|data| data.downcast_ref::<T>())
    }

    pub fn raw_data(&self) -> Option<&DragData> {
        self.data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_origin() {
        let op = DragOperation::begin(
            PointerEvent::down(PointerId::MOUSE, 10.0, 10.0),
            Rect::new(0.0, 0.0, 20.0, 20.0),
        );

        assert_eq!(op.offset(), Vec2::new(10.0, 10.0));
        assert_eq!(op.start_point(), op.last_point());
        assert_eq!(op.delta(), Vec2::ZERO);
    }

    #[test]
    fn test_advance_keeps_start() {
        let mut op = DragOperation::begin(
            PointerEvent::down(PointerId(4), 12.0, 8.0),
            Rect::new(10.0, 5.0, 20.0, 20.0),
        );
        op.advance(PointerEvent::move_to(PointerId(4), 52.0, 28.0));

        assert_eq!(op.start_point(), Vec2::new(12.0, 8.0));
        assert_eq!(op.last_point(), Vec2::new(52.0, 28.0));
        assert_eq!(op.delta(), Vec2::new(40.0, 20.0));
        assert_eq!(op.element_position(), Vec2::new(50.0, 25.0));
        assert_eq!(op.pointer_id(), PointerId(4));
    }

    #[test]
    fn test_drop_event_data() {
        let op = DragOperation::begin(PointerEvent::down(PointerId::MOUSE, 0.0, 0.0), Rect::ZERO);
        let event = DropEvent::new(op, PointerEvent::up(PointerId::MOUSE, 3.0, 4.0))
            .with_data(Some(DragData::new(String::from("card-7"))));

        assert_eq!(event.data::<String>().map(String::as_str), Some("card-7"));
        assert!(event.data::<u32>().is_none());
        assert_eq!(event.position(), Vec2::new(3.0, 4.0));
    }
}
