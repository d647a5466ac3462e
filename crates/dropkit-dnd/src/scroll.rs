//! Scroll assist while dragging near the viewport edges.

use dropkit_core::geometry::Size;
use dropkit_core::math::Vec2;

/// The scrollable viewport a draggable lives in.
pub trait Viewport {
    /// Visible size in client units.
    fn viewport_size(&self) -> Size<f32>;

    /// Scroll the content by `delta` (positive y scrolls down).
    fn scroll_by(&mut self, delta: Vec2);
}

/// Viewport edge the pointer is close to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEdge {
    Top,
    Bottom,
    Right,
    Left,
}

impl ScrollEdge {
    /// Scroll vector for this edge at `step` units per event.
    pub fn delta(&self, step: f32) -> Vec2 {
        match self {
            ScrollEdge::Top => Vec2::new(0.0, -step),
            ScrollEdge::Bottom => Vec2::new(0.0, step),
            ScrollEdge::Right => Vec2::new(step, 0.0),
            ScrollEdge::Left => Vec2::new(-step, 0.0),
        }
    }
}

/// Decides whether a drag move should scroll the viewport.
///
/// At most one edge fires per move, checked as top, bottom, right, left; near
/// a corner only the first match scrolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAssist {
    /// Distance from an edge that counts as "near".
    pub margin: f32,
    /// Scroll distance per move event.
    pub step: f32,
}

impl ScrollAssist {
    pub fn new(margin: f32, step: f32) -> Self {
        Self { margin, step }
    }

    pub fn edge_at(&self, point: Vec2, viewport: Size<f32>) -> Option<ScrollEdge> {
        if point.y <= self.margin {
            Some(ScrollEdge::Top)
        } else if point.y >= viewport.height - self.margin {
            Some(ScrollEdge::Bottom)
        } else if point.x >= viewport.width - self.margin {
            Some(ScrollEdge::Right)
        } else if point.x <= self.margin {
            Some(ScrollEdge::Left)
        } else {
            None
        }
    }

    pub fn scroll_delta(&self, point: Vec2, viewport: Size<f32>) -> Option<Vec2> {
        self.edge_at(point, viewport).map(|edge| edge.delta(self.step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assist() -> ScrollAssist {
        ScrollAssist::new(10.0, 10.0)
    }

    #[test]
    fn test_middle_does_not_scroll() {
        assert_eq!(assist().scroll_delta(Vec2::new(400.0, 300.0), Size::new(800.0, 600.0)), None);
    }

    #[test]
    fn test_each_edge() {
        let viewport = Size::new(800.0, 600.0);
        let a = assist();

        assert_eq!(a.edge_at(Vec2::new(400.0, 10.0), viewport), Some(ScrollEdge::Top));
        assert_eq!(a.edge_at(Vec2::new(400.0, 590.0), viewport), Some(ScrollEdge::Bottom));
        assert_eq!(a.edge_at(Vec2::new(790.0, 300.0), viewport), Some(ScrollEdge::Right));
        assert_eq!(a.edge_at(Vec2::new(10.0, 300.0), viewport), Some(ScrollEdge::Left));
        assert_eq!(a.edge_at(Vec2::new(11.0, 300.0), viewport), None);

        assert_eq!(a.scroll_delta(Vec2::new(400.0, 595.0), viewport), Some(Vec2::new(0.0, 10.0)));
        assert_eq!(a.scroll_delta(Vec2::new(2.0, 300.0), viewport), Some(Vec2::new(-10.0, 0.0)));
    }

    #[test]
    fn test_corner_priority() {
        let viewport = Size::new(800.0, 600.0);
        let a = assist();

        // top-left corner: top wins over left
        assert_eq!(a.edge_at(Vec2::new(0.0, 0.0), viewport), Some(ScrollEdge::Top));
        // bottom-right corner: bottom wins over right
        assert_eq!(a.edge_at(Vec2::new(800.0, 600.0), viewport), Some(ScrollEdge::Bottom));
        // tiny viewport where top and bottom overlap
        assert_eq!(a.edge_at(Vec2::new(50.0, 8.0), Size::new(100.0, 15.0)), Some(ScrollEdge::Top));
    }
}
