use crate::math::Vec2;

/// Axis-aligned bounding box in client space.
///
/// Stored as origin plus extent, the way layout engines report element boxes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect from its four edges.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn from_origin_size(origin: Vec2, size: Size<f32>) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<f32> {
        Size::new(self.width, self.height)
    }

    /// Inclusive on all four edges: a point lying exactly on the right or
    /// bottom edge is inside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Same rect moved by `delta`.
    pub fn translate(&self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let rect = Rect::from_edges(0.0, 0.0, 100.0, 100.0);

        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(100.0, 100.0)));
        assert!(rect.contains(Vec2::new(50.0, 100.0)));
        assert!(!rect.contains(Vec2::new(101.0, 50.0)));
        assert!(!rect.contains(Vec2::new(50.0, -0.5)));
    }

    #[test]
    fn test_edges() {
        let rect = Rect::new(50.0, 40.0, 100.0, 20.0);
        assert_eq!(rect.left(), 50.0);
        assert_eq!(rect.top(), 40.0);
        assert_eq!(rect.right(), 150.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect, Rect::from_edges(50.0, 40.0, 150.0, 60.0));
    }

    #[test]
    fn test_translate_keeps_size() {
        let rect = Rect::new(0.0, 0.0, 20.0, 20.0).translate(Vec2::new(5.0, -5.0));
        assert_eq!(rect.origin(), Vec2::new(5.0, -5.0));
        assert_eq!(rect.size(), Size::new(20.0, 20.0));
    }
}
