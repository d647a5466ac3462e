use std::sync::Arc;

use parking_lot::Mutex;

/// Collects clones of every event passed to the handlers it creates.
///
/// ```rust
/// use dropkit_test_utils::EventRecorder;
///
/// let recorder = EventRecorder::<u32>::new();
/// let mut handler = recorder.handler();
/// handler(&7);
/// assert_eq!(recorder.events(), vec![7]);
/// ```
#[derive(Debug)]
pub struct EventRecorder<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone + 'static> EventRecorder<E> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A handler suitable for any `on_*` subscription method.
    pub fn handler(&self) -> impl FnMut(&E) + 'static {
        let events = self.events.clone();
        move |event: &E| events.lock().push(event.clone())
    }

    pub fn events(&self) -> Vec<E> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn last(&self) -> Option<E> {
        self.events.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl<E: Clone + 'static> Default for EventRecorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EventRecorder<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}
