use std::collections::VecDeque;

use crate::event::{HandleStatus, PointerEvent};

/// FIFO buffer between the host's event loop and the drag engines.
///
/// Events are never reordered or merged: the drag protocol depends on each
/// pointer's down, move and up arriving in order.
pub struct EventQueue {
    pending: VecDeque<PointerEvent>,
    stats: EventStats,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(64),
            stats: EventStats::default(),
        }
    }

    /// Push event to queue (called from the host's input handler)
    pub fn push(&mut self, event: PointerEvent) {
        self.stats.events_received += 1;
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued so far, in arrival order.
    pub fn drain(&mut self) -> EventBatch {
        let events: Vec<_> = self.pending.drain(..).collect();
        self.stats.events_processed += events.len();
        EventBatch { events }
    }

    pub fn stats(&self) -> &EventStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = EventStats::default();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub struct EventBatch {
    events: Vec<PointerEvent>,
}

impl EventBatch {
    pub fn iter(&self) -> impl Iterator<Item = &PointerEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Run `handler` over every event; consumed events are removed from the
    /// batch so later handlers do not see them.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&PointerEvent) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

impl From<Vec<PointerEvent>> for EventBatch {
    fn from(events: Vec<PointerEvent>) -> Self {
        Self { events }
    }
}

#[derive(Default, Debug, Clone)]
pub struct EventStats {
    pub events_received: usize,
    pub events_processed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{PointerEventKind, PointerId};

    #[test]
    fn test_drain_preserves_order() {
        let mut queue = EventQueue::new();
        queue.push(PointerEvent::down(PointerId::MOUSE, 0.0, 0.0));
        queue.push(PointerEvent::move_to(PointerId::MOUSE, 1.0, 0.0));
        queue.push(PointerEvent::move_to(PointerId::MOUSE, 2.0, 0.0));
        queue.push(PointerEvent::up(PointerId::MOUSE, 2.0, 0.0));

        let batch = queue.drain();
        let kinds: Vec<_> = batch.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PointerEventKind::Down,
                PointerEventKind::Move,
                PointerEventKind::Move,
                PointerEventKind::Up,
            ]
        );
        assert!(queue.is_empty());
        assert_eq!(queue.stats().events_received, 4);
        assert_eq!(queue.stats().events_processed, 4);
    }

    #[test]
    fn test_dispatch_removes_consumed() {
        let mut batch = EventBatch::from(vec![
            PointerEvent::down(PointerId::MOUSE, 0.0, 0.0),
            PointerEvent::move_to(PointerId::MOUSE, 5.0, 5.0),
        ]);

        batch.dispatch(|event| match event.kind {
            PointerEventKind::Down => HandleStatus::consumed(),
            _ => HandleStatus::handled(),
        });

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.iter().next().map(|e| e.kind), Some(PointerEventKind::Move));
    }
}
