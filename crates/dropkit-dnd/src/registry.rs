//! Drop registries: the broadcast hub between draggables and dropzones.
//!
//! Registries form a tree. The root belongs to the [`DragContext`](crate::DragContext);
//! every dropzone owns a child registry that its own draggable descendants
//! publish into, while the dropzone itself listens on its parent.
//!
//! Publishing bubbles: a signal published into a scope is delivered to that
//! scope's subscribers, then its parent's, up to the root. Parents hold their
//! children strongly; children only keep a weak back-reference. A child is
//! unlinked once the last [`DropRegistry`] handle to it is dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use dropkit_core::profiling::profile_function;

use crate::emitter::{EventEmitter, Subscription};
use crate::error::DndError;
use crate::operation::DropEvent;

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies one registry in the scope tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl ScopeId {
    fn next() -> Self {
        Self(NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

struct RegistryInner {
    id: ScopeId,
    depth: usize,
    parent: Weak<RegistryInner>,
    children: RefCell<Vec<Rc<RegistryInner>>>,
    detached: Cell<bool>,
    drag_start: EventEmitter<DropEvent>,
    drag_move: EventEmitter<DropEvent>,
    drag_end: EventEmitter<DropEvent>,
}

impl RegistryInner {
    fn new(parent: Weak<RegistryInner>, depth: usize) -> Self {
        Self {
            id: ScopeId::next(),
            depth,
            parent,
            children: RefCell::new(Vec::new()),
            detached: Cell::new(false),
            drag_start: EventEmitter::new(),
            drag_move: EventEmitter::new(),
            drag_end: EventEmitter::new(),
        }
    }
}

/// Handle to one broadcast scope. Cloning shares the scope.
#[derive(Clone)]
pub struct DropRegistry {
    inner: Rc<RegistryInner>,
}

impl DropRegistry {
    /// Create a new root scope.
    pub fn root() -> Self {
        Self {
            inner: Rc::new(RegistryInner::new(Weak::new(), 0)),
        }
    }

    /// Create a scope nested in this one. The parent keeps it alive until it
    /// is [`detach`](Self::detach)ed or its last handle is dropped.
    pub fn child(&self) -> Result<Self, DndError> {
        if self.is_detached() {
            return Err(DndError::DetachedScope(self.id()));
        }

        let child = Rc::new(RegistryInner::new(
            Rc::downgrade(&self.inner),
            self.inner.depth + 1,
        ));
        self.inner.children.borrow_mut().push(child.clone());
        tracing::trace!(parent = %self.id(), child = %child.id, "created child scope");
        Ok(Self { inner: child })
    }

    /// Unlink this scope from its parent. Signals published here stop
    /// bubbling upward and no new children can be created.
    pub fn detach(&self) {
        if self.inner.detached.replace(true) {
            return;
        }
        if let Some(parent) = self.inner.parent.upgrade() {
            parent
                .children
                .borrow_mut()
                .retain(|child| !Rc::ptr_eq(child, &self.inner));
        }
        tracing::trace!(scope = %self.id(), "detached scope");
    }

    pub fn id(&self) -> ScopeId {
        self.inner.id
    }

    /// Distance from the root; the root is 0.
    pub fn depth(&self) -> usize {
        self.inner.depth
    }

    pub fn is_detached(&self) -> bool {
        self.inner.detached.get()
    }

    pub fn parent(&self) -> Option<Self> {
        if self.is_detached() {
            return None;
        }
        self.inner.parent.upgrade().map(|inner| Self { inner })
    }

    pub fn child_count(&self) -> usize {
        self.inner.children.borrow().len()
    }

    /// This scope followed by its attached ancestors, nearest first.
    pub fn chain(&self) -> Vec<DropRegistry> {
        let mut chain = vec![self.clone()];
        let mut current = self.parent();
        while let Some(scope) = current {
            current = scope.parent();
            chain.push(scope);
        }
        chain
    }

    pub fn downgrade(&self) -> WeakDropRegistry {
        WeakDropRegistry {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn ptr_eq(&self, other: &DropRegistry) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn on_drag_start<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&DropEvent) + 'static,
    {
        self.inner.drag_start.subscribe(handler)
    }

    pub fn on_drag_move<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&DropEvent) + 'static,
    {
        self.inner.drag_move.subscribe(handler)
    }

    pub fn on_drag_end<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&DropEvent) + 'static,
    {
        self.inner.drag_end.subscribe(handler)
    }

    pub fn publish_drag_start(&self, event: &DropEvent) {
        profile_function!();
        for scope in self.chain() {
            scope.emit_drag_start_local(event);
        }
    }

    pub fn publish_drag_move(&self, event: &DropEvent) {
        profile_function!();
        for scope in self.chain() {
            scope.inner.drag_move.emit(event);
        }
    }

    pub fn publish_drag_end(&self, event: &DropEvent) {
        profile_function!();
        for scope in self.chain() {
            scope.emit_drag_end_local(event);
        }
    }

    /// Deliver to this scope's subscribers only, without bubbling.
    pub(crate) fn emit_drag_start_local(&self, event: &DropEvent) {
        self.inner.drag_start.emit(event);
    }

    /// Deliver to this scope's subscribers only, without bubbling.
    pub(crate) fn emit_drag_end_local(&self, event: &DropEvent) {
        self.inner.drag_end.emit(event);
    }
}

impl Drop for DropRegistry {
    fn drop(&mut self) {
        // The parent's entry plus this handle: nothing else can reach the scope.
        if !self.is_detached()
            && Rc::strong_count(&self.inner) == 2
            && self.inner.parent.strong_count() > 0
        {
            self.detach();
        }
    }
}

impl fmt::Debug for DropRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropRegistry")
            .field("id", &self.inner.id)
            .field("depth", &self.inner.depth)
            .field("children", &self.child_count())
            .field("detached", &self.is_detached())
            .finish()
    }
}

/// Non-owning handle to a [`DropRegistry`].
#[derive(Clone)]
pub struct WeakDropRegistry {
    inner: Weak<RegistryInner>,
}

impl WeakDropRegistry {
    pub fn upgrade(&self) -> Option<DropRegistry> {
        self.inner.upgrade().map(|inner| DropRegistry { inner })
    }
}

impl fmt::Debug for WeakDropRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(scope) => write!(f, "WeakDropRegistry({})", scope.id()),
            None => f.write_str("WeakDropRegistry(<dropped>)"),
        }
    }
}
