//! Hand-off slot for drags whose draggable was torn down mid-gesture.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use dropkit_core::alloc::HashSet;
use dropkit_input::{PointerEvent, PointerEventKind};

use crate::operation::{DragData, DragOperation, DropEvent};
use crate::registry::{DropRegistry, ScopeId, WeakDropRegistry};

/// An operation whose draggable was torn down, with the scopes that have
/// already been told it started.
pub(crate) struct AbortedDrag {
    pub(crate) operation: DragOperation,
    pub(crate) announced: Vec<WeakDropRegistry>,
    pub(crate) data: Option<DragData>,
}

impl AbortedDrag {
    /// End the operation with a synthesized cancel at its last position,
    /// skipping scopes in `spared`.
    pub(crate) fn cancel(&self, spared: &HashSet<ScopeId>) {
        let last = *self.operation.last_event();
        let cancel = PointerEvent::new(PointerEventKind::Cancel, last.pointer_id, last.position, last.button);
        let signal = DropEvent::new(self.operation.clone(), cancel).with_data(self.data.clone());

        tracing::debug!(pointer = last.pointer_id.0, "cancelling aborted drag");
        broadcast_end(&self.announced, &signal, spared);
    }

    fn live_scopes(&self) -> HashSet<ScopeId> {
        self.announced
            .iter()
            .filter_map(WeakDropRegistry::upgrade)
            .map(|scope| scope.id())
            .collect()
    }
}

/// Deliver drag-end to every live announced scope once, deepest first, so a
/// dropzone's inner channel settles before its outer channel sees the end.
pub(crate) fn broadcast_end(announced: &[WeakDropRegistry], signal: &DropEvent, spared: &HashSet<ScopeId>) {
    let mut seen = spared.clone();
    let mut scopes: Vec<DropRegistry> = announced
        .iter()
        .filter_map(WeakDropRegistry::upgrade)
        .filter(|scope| seen.insert(scope.id()))
        .collect();
    scopes.sort_by(|a, b| b.depth().cmp(&a.depth()));

    for scope in scopes {
        scope.emit_drag_end_local(signal);
    }
}

/// Single-occupant register shared by every draggable of one
/// [`DragContext`](crate::DragContext).
///
/// A draggable destroyed while dragging parks its operation here; the next
/// draggable built from the same context adopts it. Last writer wins: two
/// aborts before any adoption keep only the second.
///
/// A parked operation that is thrown away, by [`clear`](Self::clear) or by
/// being overwritten, is cancelled so the dropzones it activated return to
/// idle. Scopes the overwriting operation also reached are left alone; its
/// own end resets them.
#[derive(Clone, Default)]
pub struct AbortSlot {
    slot: Rc<RefCell<Option<AbortedDrag>>>,
}

impl AbortSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Copy of the parked operation, if any.
    pub fn operation(&self) -> Option<DragOperation> {
        self.slot
            .borrow()
            .as_ref()
            .map(|aborted| aborted.operation.clone())
    }

    /// Cancel the parked operation instead of resuming it.
    pub fn clear(&self) {
        let discarded = self.slot.borrow_mut().take();
        if let Some(discarded) = discarded {
            discarded.cancel(&HashSet::new());
        }
    }

    pub(crate) fn stash(&self, aborted: AbortedDrag) {
        let spared = aborted.live_scopes();
        let previous = self.slot.borrow_mut().replace(aborted);
        if let Some(previous) = previous {
            tracing::warn!(
                pointer = previous.operation.pointer_id().0,
                "overwriting an unclaimed aborted drag"
            );
            previous.cancel(&spared);
        }
    }

    pub(crate) fn take(&self) -> Option<AbortedDrag> {
        self.slot.borrow_mut().take()
    }
}

impl fmt::Debug for AbortSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbortSlot")
            .field("operation", &self.operation())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropkit_core::geometry::Rect;
    use dropkit_input::{PointerEvent, PointerId};

    fn parked(id: u64) -> AbortedDrag {
        AbortedDrag {
            operation: DragOperation::begin(PointerEvent::down(PointerId(id), 0.0, 0.0), Rect::ZERO),
            announced: Vec::new(),
            data: None,
        }
    }

    #[test]
    fn test_take_empties() {
        let slot = AbortSlot::new();
        assert!(!slot.is_occupied());

        slot.stash(parked(1));
        assert!(slot.is_occupied());
        assert!(slot.take().is_some());
        assert!(!slot.is_occupied());
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_last_writer_wins() {
        let slot = AbortSlot::new();
        slot.stash(parked(1));
        slot.stash(parked(2));

        assert_eq!(slot.operation().map(|op| op.pointer_id()), Some(PointerId(2)));
    }

    #[test]
    fn test_clones_share_slot() {
        let slot = AbortSlot::new();
        let other = slot.clone();
        slot.stash(parked(3));
        assert!(other.is_occupied());
        other.clear();
        assert!(!slot.is_occupied());
    }
}
