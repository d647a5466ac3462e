use std::sync::Arc;

use dropkit_core::geometry::Rect;
use dropkit_core::math::Vec2;
use dropkit_dnd::{DragHelper, DragOperation};
use parking_lot::Mutex;

/// One recorded [`DragHelper`] callback.
#[derive(Debug, Clone, PartialEq)]
pub enum HelperCall {
    Start { point: Vec2 },
    Move { point: Vec2 },
    End { final_rect: Rect },
}

/// Helper that records its calls instead of drawing anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingHelper {
    calls: Arc<Mutex<Vec<HelperCall>>>,
}

impl RecordingHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HelperCall> {
        self.calls.lock().clone()
    }

    pub fn count_starts(&self) -> usize {
        self.count(|call| matches!(call, HelperCall::Start { .. }))
    }

    pub fn count_moves(&self) -> usize {
        self.count(|call| matches!(call, HelperCall::Move { .. }))
    }

    pub fn count_ends(&self) -> usize {
        self.count(|call| matches!(call, HelperCall::End { .. }))
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn count(&self, predicate: impl Fn(&HelperCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }
}

impl DragHelper for RecordingHelper {
    fn on_drag_start(&mut self, operation: &DragOperation) {
        self.calls.lock().push(HelperCall::Start {
            point: operation.last_point(),
        });
    }

    fn on_drag_move(&mut self, operation: &DragOperation) {
        self.calls.lock().push(HelperCall::Move {
            point: operation.last_point(),
        });
    }

    fn on_drag_end(&mut self, final_rect: Rect) {
        self.calls.lock().push(HelperCall::End { final_rect });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropkit_input::{PointerEvent, PointerId};

    #[test]
    fn test_clones_share_log() {
        let helper = RecordingHelper::new();
        let mut handed_out = helper.clone();

        let op = DragOperation::begin(PointerEvent::down(PointerId::MOUSE, 3.0, 4.0), Rect::ZERO);
        handed_out.on_drag_start(&op);
        handed_out.on_drag_end(Rect::new(1.0, 1.0, 2.0, 2.0));

        assert_eq!(helper.count_starts(), 1);
        assert_eq!(helper.count_ends(), 1);
        assert_eq!(
            helper.calls()[0],
            HelperCall::Start {
                point: Vec2::new(3.0, 4.0)
            }
        );

        helper.clear();
        assert!(handed_out.calls().is_empty());
    }
}
