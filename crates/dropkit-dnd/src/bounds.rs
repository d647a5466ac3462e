//! Layout queries for draggables and dropzones.

use std::cell::Cell;
use std::rc::Rc;

use dropkit_core::geometry::Rect;

/// Source of an element's current bounding box in client space.
///
/// Queried at drag start (origin rect), at drag end (final rect handed to the
/// helper) and on every move a dropzone hit-tests against. Implementations
/// should report live layout, not a cached value.
pub trait Bounds {
    fn bounding_rect(&self) -> Rect;
}

/// A fixed rect.
impl Bounds for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

/// A rect the host updates in place as layout changes.
impl Bounds for Rc<Cell<Rect>> {
    fn bounding_rect(&self) -> Rect {
        self.get()
    }
}

/// Bounds computed by a closure, see [`from_fn`].
pub struct FnBounds<F>(F);

impl<F: Fn() -> Rect> Bounds for FnBounds<F> {
    fn bounding_rect(&self) -> Rect {
        (self.0)()
    }
}

/// Wrap a layout query closure.
///
/// ```
/// use dropkit_core::geometry::Rect;
/// use dropkit_dnd::bounds::{self, Bounds};
///
/// let bounds = bounds::from_fn(|| Rect::new(0.0, 0.0, 20.0, 20.0));
/// assert_eq!(bounds.bounding_rect().width, 20.0);
/// ```
pub fn from_fn<F: Fn() -> Rect>(f: F) -> FnBounds<F> {
    FnBounds(f)
}
