use std::cell::Cell;
use std::rc::Rc;

use dropkit_core::geometry::Rect;
use dropkit_core::math::Vec2;
use dropkit_dnd::Bounds;

/// Mutable element bounds; clones observe each other's updates.
///
/// Stands in for an element that moves or resizes while an engine holds its
/// bounds, such as a list item being reordered.
#[derive(Debug, Clone, Default)]
pub struct SharedBounds {
    rect: Rc<Cell<Rect>>,
}

impl SharedBounds {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Rc::new(Cell::new(rect)),
        }
    }

    pub fn get(&self) -> Rect {
        self.rect.get()
    }

    pub fn set(&self, rect: Rect) {
        self.rect.set(rect);
    }

    pub fn translate(&self, dx: f32, dy: f32) {
        self.rect.set(self.rect.get().translate(Vec2::new(dx, dy)));
    }
}

impl Bounds for SharedBounds {
    fn bounding_rect(&self) -> Rect {
        self.rect.get()
    }
}
