use std::sync::Arc;

use dropkit_core::geometry::Size;
use dropkit_core::math::Vec2;
use dropkit_dnd::Viewport;
use parking_lot::Mutex;

/// Viewport of a fixed size that records scroll requests.
#[derive(Debug, Clone)]
pub struct MockViewport {
    size: Arc<Mutex<Size<f32>>>,
    scrolls: Arc<Mutex<Vec<Vec2>>>,
}

impl MockViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Arc::new(Mutex::new(Size::new(width, height))),
            scrolls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Resize, e.g. to simulate a window resize mid-drag.
    pub fn resize(&self, width: f32, height: f32) {
        *self.size.lock() = Size::new(width, height);
    }

    pub fn scrolls(&self) -> Vec<Vec2> {
        self.scrolls.lock().clone()
    }

    /// Sum of every scroll request so far.
    pub fn total_scroll(&self) -> Vec2 {
        self.scrolls.lock().iter().copied().sum()
    }

    pub fn clear(&self) {
        self.scrolls.lock().clear();
    }
}

impl Viewport for MockViewport {
    fn viewport_size(&self) -> Size<f32> {
        *self.size.lock()
    }

    fn scroll_by(&mut self, delta: Vec2) {
        self.scrolls.lock().push(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_scrolls() {
        let viewport = MockViewport::new(100.0, 100.0);
        let mut handed_out = viewport.clone();

        handed_out.scroll_by(Vec2::new(0.0, -10.0));
        handed_out.scroll_by(Vec2::new(0.0, -10.0));

        assert_eq!(viewport.scrolls().len(), 2);
        assert_eq!(viewport.total_scroll(), Vec2::new(0.0, -20.0));

        viewport.resize(50.0, 40.0);
        assert_eq!(handed_out.viewport_size(), Size::new(50.0, 40.0));
    }
}
