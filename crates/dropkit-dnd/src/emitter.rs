//! Synchronous, ordered event fan-out.

use std::cell::RefCell;
use std::rc::Rc;

type Handler<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Slots<E> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E>)>,
}

/// Ordered list of handlers invoked synchronously, in subscription order.
///
/// Handlers may subscribe or unsubscribe while an emission is running: a
/// handler added mid-emission first runs on the next emission, and one
/// removed mid-emission is not called again.
pub struct EventEmitter<E> {
    slots: Rc<RefCell<Slots<E>>>,
}

impl<E: 'static> EventEmitter<E> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&E) + 'static,
    {
        let handler: Handler<E> = Rc::new(RefCell::new(handler));
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.handlers.push((id, handler));
            id
        };

        let slots = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.borrow_mut().handlers.retain(|(other, _)| *other != id);
            }
        })
    }

    pub fn emit(&self, event: &E) {
        let snapshot: Vec<(u64, Handler<E>)> = self.slots.borrow().handlers.clone();

        for (id, handler) in snapshot {
            if !self.is_subscribed(id) {
                continue;
            }
            match handler.try_borrow_mut() {
                Ok(mut handler) => (&mut *handler)(event),
                Err(_) => tracing::warn!(id, "skipping re-entrant emission to a busy handler"),
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slots.borrow().handlers.len()
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.slots.borrow().handlers.iter().any(|(other, _)| *other == id)
    }
}

impl<E: 'static> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps a handler registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes its handler"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Leave the handler registered for as long as the emitter lives.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }

    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
