//! Translation from `winit` window events to [`PointerEvent`]s.

use ::winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};

use dropkit_core::math::Vec2;

use crate::event::{PointerButton, PointerEvent, PointerEventKind, PointerId};

/// Tracks cursor position and scale factor so mouse button events, which
/// carry no position in winit, can be turned into positioned pointer events.
///
/// Positions are reported in logical coordinates.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    scale_factor: f64,
    cursor: Vec2,
}

impl PointerTracker {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            cursor: Vec2::ZERO,
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Last known mouse position in logical coordinates.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.to_logical(position.x, position.y);
                Some(PointerEvent::new(
                    PointerEventKind::Move,
                    PointerId::MOUSE,
                    self.cursor,
                    PointerButton::Primary,
                ))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let kind = match state {
                    ElementState::Pressed => PointerEventKind::Down,
                    ElementState::Released => PointerEventKind::Up,
                };
                Some(PointerEvent::new(
                    kind,
                    PointerId::MOUSE,
                    self.cursor,
                    map_button(*button),
                ))
            }
            WindowEvent::Touch(touch) => Some(self.translate_touch(touch)),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                None
            }
            // Leaving the window does not end a drag; the host decides.
            WindowEvent::CursorLeft { .. } => {
                tracing::trace!("cursor left window");
                None
            }
            _ => None,
        }
    }

    fn translate_touch(&self, touch: &Touch) -> PointerEvent {
        let kind = match touch.phase {
            TouchPhase::Started => PointerEventKind::Down,
            TouchPhase::Moved => PointerEventKind::Move,
            TouchPhase::Ended => PointerEventKind::Up,
            TouchPhase::Cancelled => PointerEventKind::Cancel,
        };
        // Id 0 is reserved for the mouse.
        PointerEvent::new(
            kind,
            PointerId(touch.id.saturating_add(1)),
            self.to_logical(touch.location.x, touch.location.y),
            PointerButton::Primary,
        )
    }

    fn to_logical(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(
            (x / self.scale_factor) as f32,
            (y / self.scale_factor) as f32,
        )
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn map_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Auxiliary,
        MouseButton::Back => PointerButton::Back,
        MouseButton::Forward => PointerButton::Forward,
        MouseButton::Other(code) => PointerButton::Other(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_button() {
        assert_eq!(map_button(MouseButton::Left), PointerButton::Primary);
        assert_eq!(map_button(MouseButton::Right), PointerButton::Secondary);
        assert_eq!(map_button(MouseButton::Other(7)), PointerButton::Other(7));
    }

    #[test]
    fn test_logical_conversion() {
        let tracker = PointerTracker::new(2.0);
        assert_eq!(tracker.to_logical(100.0, 50.0), Vec2::new(50.0, 25.0));
    }
}
