//! Dropzone engine: enter/leave/drop/remove from broadcast drag signals.
//!
//! Each dropzone runs two machines over one pair of flags:
//!
//! - the **outer** machine listens on the ambient (parent) scope and
//!   hit-tests every move against the dropzone's live bounds, raising
//!   `enter`, `leave` and, on release while entered, `drop`;
//! - the **inner** machine listens on the dropzone's own child scope, which
//!   only its draggable descendants publish into. Their drags start
//!   "entered"; if the pointer has left when they end, `remove` fires.
//!
//! Because publishing bubbles, the outer machine also sees the moves of the
//! dropzone's own items, which is what clears `entered` when one leaves.

use std::cell::RefCell;
use std::rc::Rc;

use dropkit_core::geometry::Rect;

use crate::bounds::Bounds;
use crate::emitter::{EventEmitter, Subscription};
use crate::error::DndError;
use crate::operation::DropEvent;
use crate::registry::{DropRegistry, ScopeId};

/// Flags a dropzone exposes for styling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DropzoneState {
    /// A drag this dropzone may receive is in progress.
    pub activated: bool,
    /// The pointer is over the dropzone (and it is activated).
    pub entered: bool,
    /// Bounds captured on the latest move of the current gesture; `None`
    /// between gestures.
    pub scope_rect: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropzoneEventKind {
    Enter,
    Leave,
    Drop,
    Remove,
}

struct DropzoneShared {
    scope_id: ScopeId,
    state: RefCell<DropzoneState>,
    bounds: Box<dyn Bounds>,
    enter: EventEmitter<DropEvent>,
    leave: EventEmitter<DropEvent>,
    drop: EventEmitter<DropEvent>,
    remove: EventEmitter<DropEvent>,
}

impl DropzoneShared {
    fn emit(&self, kind: DropzoneEventKind, event: &DropEvent) {
        tracing::debug!(
            dropzone = %self.scope_id,
            pointer = event.pointer.pointer_id.0,
            x = event.position().x,
            y = event.position().y,
            "{:?}",
            kind
        );
        match kind {
            DropzoneEventKind::Enter => self.enter.emit(event),
            DropzoneEventKind::Leave => self.leave.emit(event),
            DropzoneEventKind::Drop => self.drop.emit(event),
            DropzoneEventKind::Remove => self.remove.emit(event),
        }
    }

    fn on_outer_start(&self) {
        self.state.borrow_mut().activated = true;
    }

    fn on_outer_move(&self, event: &DropEvent) {
        if !self.state.borrow().activated {
            return;
        }
        // Layout may have changed since the last move
        let rect = self.bounds.bounding_rect();
        let transition = {
            let mut state = self.state.borrow_mut();
            state.scope_rect = Some(rect);
            match (rect.contains(event.position()), state.entered) {
                (true, false) => {
                    state.entered = true;
                    Some(DropzoneEventKind::Enter)
                }
                (false, true) => {
                    state.entered = false;
                    Some(DropzoneEventKind::Leave)
                }
                _ => None,
            }
        };

        if let Some(kind) = transition {
            self.emit(kind, event);
        }
    }

    fn on_outer_end(&self, event: &DropEvent) {
        let dropped = {
            let mut state = self.state.borrow_mut();
            let dropped = state.activated && state.entered;
            *state = DropzoneState::default();
            dropped
        };

        if dropped {
            self.emit(DropzoneEventKind::Drop, event);
        }
    }

    fn on_inner_start(&self) {
        let mut state = self.state.borrow_mut();
        state.activated = true;
        state.entered = true;
    }

    fn on_inner_end(&self, event: &DropEvent) {
        let removed = {
            let mut state = self.state.borrow_mut();
            let removed = state.activated && !state.entered;
            *state = DropzoneState::default();
            removed
        };

        if removed {
            self.emit(DropzoneEventKind::Remove, event);
        }
    }
}

/// A region reacting to drags broadcast in its ambient scope.
///
/// Dropping the engine unsubscribes it and detaches its child scope.
pub struct DropzoneEngine {
    shared: Rc<DropzoneShared>,
    scope: DropRegistry,
    subscriptions: Vec<Subscription>,
}

impl DropzoneEngine {
    /// Listen on `ambient` and provide a fresh child scope for descendants.
    pub fn new(ambient: &DropRegistry, bounds: impl Bounds + 'static) -> Result<Self, DndError> {
        let scope = ambient.child()?;
        let shared = Rc::new(DropzoneShared {
            scope_id: scope.id(),
            state: RefCell::new(DropzoneState::default()),
            bounds: Box::new(bounds),
            enter: EventEmitter::new(),
            leave: EventEmitter::new(),
            drop: EventEmitter::new(),
            remove: EventEmitter::new(),
        });

        let subscriptions = vec![
            ambient.on_drag_start({
                let shared = shared.clone();
                move |_| shared.on_outer_start()
            }),
            ambient.on_drag_move({
                let shared = shared.clone();
                move |event| shared.on_outer_move(event)
            }),
            ambient.on_drag_end({
                let shared = shared.clone();
                move |event| shared.on_outer_end(event)
            }),
            scope.on_drag_start({
                let shared = shared.clone();
                move |_| shared.on_inner_start()
            }),
            scope.on_drag_end({
                let shared = shared.clone();
                move |event| shared.on_inner_end(event)
            }),
        ];

        tracing::debug!(dropzone = %scope.id(), ambient = %ambient.id(), "dropzone registered");

        Ok(Self {
            shared,
            scope,
            subscriptions,
        })
    }

    /// Scope that draggables inside this dropzone should publish into.
    pub fn scope(&self) -> &DropRegistry {
        &self.scope
    }

    pub fn state(&self) -> DropzoneState {
        *self.shared.state.borrow()
    }

    pub fn is_activated(&self) -> bool {
        self.shared.state.borrow().activated
    }

    pub fn is_entered(&self) -> bool {
        self.shared.state.borrow().entered
    }

    pub fn scope_rect(&self) -> Option<Rect> {
        self.shared.state.borrow().scope_rect
    }

    pub fn on_enter<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&DropEvent) + 'static,
    {
        self.shared.enter.subscribe(handler)
    }

    pub fn on_leave<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&DropEvent) + 'static,
    {
        self.shared.leave.subscribe(handler)
    }

    pub fn on_drop<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&DropEvent) + 'static,
    {
        self.shared.drop.subscribe(handler)
    }

    pub fn on_remove<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&DropEvent) + 'static,
    {
        self.shared.remove.subscribe(handler)
    }
}

impl Drop for DropzoneEngine {
    fn drop(&mut self) {
        self.subscriptions.clear();
        self.scope.detach();
        tracing::debug!(dropzone = %self.shared.scope_id, "dropzone removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::DragOperation;
    use dropkit_input::{PointerEvent, PointerId};

    const MOUSE: PointerId = PointerId::MOUSE;

    fn signal(pointer: PointerEvent) -> DropEvent {
        let down = PointerEvent::down(MOUSE, 0.0, 0.0);
        DropEvent::new(DragOperation::begin(down, Rect::ZERO), pointer)
    }

    fn count(counter: &Rc<RefCell<Vec<DropzoneEventKind>>>, kind: DropzoneEventKind) -> impl FnMut(&DropEvent) + 'static {
        let counter = counter.clone();
        move |_: &DropEvent| counter.borrow_mut().push(kind)
    }

    struct Fixture {
        root: DropRegistry,
        zone: DropzoneEngine,
        log: Rc<RefCell<Vec<DropzoneEventKind>>>,
        _subs: Vec<Subscription>,
    }

    fn fixture() -> Fixture {
        let root = DropRegistry::root();
        let zone = DropzoneEngine::new(&root, Rect::from_edges(0.0, 0.0, 100.0, 100.0)).unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let subs = vec![
            zone.on_enter(count(&log, DropzoneEventKind::Enter)),
            zone.on_leave(count(&log, DropzoneEventKind::Leave)),
            zone.on_drop(count(&log, DropzoneEventKind::Drop)),
            zone.on_remove(count(&log, DropzoneEventKind::Remove)),
        ];
        Fixture {
            root,
            zone,
            log,
            _subs: subs,
        }
    }

    #[test]
    fn test_hit_test_edges_inclusive() {
        let f = fixture();
        f.root.publish_drag_start(&signal(PointerEvent::down(MOUSE, 300.0, 300.0)));

        f.root.publish_drag_move(&signal(PointerEvent::move_to(MOUSE, 100.0, 100.0)));
        assert!(f.zone.is_entered());

        f.root.publish_drag_move(&signal(PointerEvent::move_to(MOUSE, 101.0, 50.0)));
        assert!(!f.zone.is_entered());
        assert_eq!(*f.log.borrow(), vec![DropzoneEventKind::Enter, DropzoneEventKind::Leave]);
    }

    #[test]
    fn test_drop_only_when_entered() {
        let f = fixture();
        let start = signal(PointerEvent::down(MOUSE, 300.0, 300.0));

        f.root.publish_drag_start(&start);
        f.root.publish_drag_end(&signal(PointerEvent::up(MOUSE, 300.0, 300.0)));
        assert!(f.log.borrow().is_empty());

        f.root.publish_drag_start(&start);
        f.root.publish_drag_move(&signal(PointerEvent::move_to(MOUSE, 50.0, 50.0)));
        f.root.publish_drag_end(&signal(PointerEvent::up(MOUSE, 50.0, 50.0)));
        assert_eq!(*f.log.borrow(), vec![DropzoneEventKind::Enter, DropzoneEventKind::Drop]);
        assert_eq!(f.zone.state(), DropzoneState::default());
    }

    #[test]
    fn test_stray_move_after_end_is_noop() {
        let f = fixture();
        f.root.publish_drag_start(&signal(PointerEvent::down(MOUSE, 300.0, 300.0)));
        f.root.publish_drag_end(&signal(PointerEvent::up(MOUSE, 300.0, 300.0)));

        f.root.publish_drag_move(&signal(PointerEvent::move_to(MOUSE, 50.0, 50.0)));
        assert!(f.log.borrow().is_empty());
        assert!(!f.zone.is_entered());
        assert!(f.zone.scope_rect().is_none());
    }

    #[test]
    fn test_no_rect_before_first_move() {
        let f = fixture();
        f.root.publish_drag_start(&signal(PointerEvent::down(MOUSE, 50.0, 50.0)));
        assert!(f.zone.is_activated());
        assert!(f.zone.scope_rect().is_none());
        assert!(!f.zone.is_entered());
    }

    #[test]
    fn test_inner_remove_after_leave() {
        let f = fixture();
        let item = signal(PointerEvent::down(MOUSE, 50.0, 50.0));

        f.zone.scope().publish_drag_start(&item);
        assert!(f.zone.is_entered());
        f.zone.scope().publish_drag_move(&signal(PointerEvent::move_to(MOUSE, 150.0, 50.0)));
        f.zone.scope().publish_drag_end(&signal(PointerEvent::up(MOUSE, 150.0, 50.0)));

        assert_eq!(*f.log.borrow(), vec![DropzoneEventKind::Leave, DropzoneEventKind::Remove]);
        assert_eq!(f.zone.state(), DropzoneState::default());
    }

    #[test]
    fn test_inner_no_remove_after_reenter() {
        let f = fixture();
        f.zone.scope().publish_drag_start(&signal(PointerEvent::down(MOUSE, 50.0, 50.0)));
        f.zone.scope().publish_drag_move(&signal(PointerEvent::move_to(MOUSE, 150.0, 50.0)));
        f.zone.scope().publish_drag_move(&signal(PointerEvent::move_to(MOUSE, 60.0, 50.0)));
        f.zone.scope().publish_drag_end(&signal(PointerEvent::up(MOUSE, 60.0, 50.0)));

        assert_eq!(
            *f.log.borrow(),
            vec![DropzoneEventKind::Leave, DropzoneEventKind::Enter]
        );
        assert!(!f.zone.is_activated());
    }

    #[test]
    fn test_drop_detaches_scope() {
        let f = fixture();
        let scope = f.zone.scope().clone();
        assert_eq!(f.root.child_count(), 1);

        drop(f.zone);
        assert_eq!(f.root.child_count(), 0);
        assert!(scope.is_detached());
    }
}
