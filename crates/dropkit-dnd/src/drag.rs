//! Draggable engine: turns a pointer stream into a drag lifecycle.

use dropkit_core::alloc::HashSet;
use dropkit_core::math::Vec2;
use dropkit_core::profiling::profile_function;
use dropkit_input::{HandleStatus, PointerEvent, PointerEventKind};

use crate::abort::{AbortSlot, AbortedDrag, broadcast_end};
use crate::bounds::Bounds;
use crate::config::DragConfig;
use crate::emitter::{EventEmitter, Subscription};
use crate::error::DndError;
use crate::helper::DragHelper;
use crate::operation::{DragData, DragOperation, DropEvent};
use crate::registry::{DropRegistry, WeakDropRegistry};
use crate::scroll::{ScrollAssist, Viewport};

/// The live operation plus every scope its start was announced to.
struct ActiveDrag {
    operation: DragOperation,
    announced: Vec<WeakDropRegistry>,
}

/// Drag state machine for one draggable element.
///
/// Idle until a primary-button pointer-down lands on the element (or its
/// handle), then dragging until the same pointer is released or cancelled.
/// Every transition is published into the engine's [`DropRegistry`] scope
/// and emitted to the application.
///
/// Dropping an engine mid-drag parks a moved operation in the context's
/// [`AbortSlot`] so the next engine built from that context can resume it.
pub struct DragEngine {
    bounds: Box<dyn Bounds>,
    handle: Option<Box<dyn Bounds>>,
    scope: DropRegistry,
    helper: Option<Box<dyn DragHelper>>,
    viewport: Option<Box<dyn Viewport>>,
    scroll: Option<ScrollAssist>,
    aborted: AbortSlot,
    data: Option<DragData>,
    active: Option<ActiveDrag>,
    moved: bool,
    drag_start: EventEmitter<PointerEvent>,
    drag_move: EventEmitter<PointerEvent>,
    drag_end: EventEmitter<PointerEvent>,
}

impl DragEngine {
    /// Whether an operation has started and the pointer has moved since.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some() && self.moved
    }

    /// Whether a pointer is captured, moved or not.
    pub fn has_operation(&self) -> bool {
        self.active.is_some()
    }

    pub fn operation(&self) -> Option<&DragOperation> {
        self.active.as_ref().map(|active| &active.operation)
    }

    pub fn scope(&self) -> &DropRegistry {
        &self.scope
    }

    pub fn data(&self) -> Option<&DragData> {
        self.data.as_ref()
    }

    pub fn on_drag_start<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&PointerEvent) + 'static,
    {
        self.drag_start.subscribe(handler)
    }

    pub fn on_drag_move<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&PointerEvent) + 'static,
    {
        self.drag_move.subscribe(handler)
    }

    pub fn on_drag_end<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&PointerEvent) + 'static,
    {
        self.drag_end.subscribe(handler)
    }

    /// Route any pointer event. Pointer-down only starts a drag when it lands
    /// inside the handle, or the element when no handle is set.
    pub fn handle_event(&mut self, event: &PointerEvent) -> HandleStatus {
        match event.kind {
            PointerEventKind::Down => {
                let target = self.handle.as_deref().unwrap_or(self.bounds.as_ref());
                if !target.bounding_rect().contains(event.position) {
                    return HandleStatus::ignored();
                }
                self.pointer_down(event)
            }
            PointerEventKind::Move => self.pointer_move(event),
            PointerEventKind::Up | PointerEventKind::Cancel => self.pointer_up(event),
        }
    }

    /// Start a drag; the caller has already decided the pointer hit this element.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> HandleStatus {
        profile_function!();
        if !event.button.is_primary() {
            tracing::trace!(button = ?event.button, "ignoring non-primary pointer-down");
            return HandleStatus::ignored();
        }
        if self.active.is_some() {
            tracing::trace!(pointer = event.pointer_id.0, "ignoring pointer-down during a drag");
            return HandleStatus::ignored();
        }

        let operation = DragOperation::begin(*event, self.bounds.bounding_rect());
        let chain = self.scope.chain();
        let signal = self.signal(&operation, event);

        self.active = Some(ActiveDrag {
            operation: operation.clone(),
            announced: chain.iter().map(DropRegistry::downgrade).collect(),
        });
        self.moved = false;

        tracing::debug!(
            pointer = event.pointer_id.0,
            x = event.position.x,
            y = event.position.y,
            scope = %self.scope.id(),
            "drag start"
        );

        for scope in &chain {
            scope.emit_drag_start_local(&signal);
        }
        self.drag_start.emit(event);
        if let Some(helper) = self.helper.as_mut() {
            helper.on_drag_start(&operation);
        }

        HandleStatus::consumed()
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> HandleStatus {
        profile_function!();
        let Some(active) = self.active.as_mut() else {
            return HandleStatus::ignored();
        };
        if active.operation.pointer_id() != event.pointer_id {
            return HandleStatus::ignored();
        }

        active.operation.advance(*event);
        let operation = active.operation.clone();
        self.moved = true;

        tracing::trace!(x = event.position.x, y = event.position.y, "drag move");

        self.assist_scroll(event.position);
        self.scope.publish_drag_move(&self.signal(&operation, event));
        self.drag_move.emit(event);
        if let Some(helper) = self.helper.as_mut() {
            helper.on_drag_move(&operation);
        }

        HandleStatus::handled()
    }

    /// End the drag on pointer-up or pointer-cancel of the captured pointer.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> HandleStatus {
        profile_function!();
        let matches = self
            .active
            .as_ref()
            .is_some_and(|active| active.operation.last_event().pointer_id == event.pointer_id);
        if !matches {
            return HandleStatus::ignored();
        }
        let Some(active) = self.active.take() else {
            return HandleStatus::ignored();
        };
        self.moved = false;

        tracing::debug!(
            pointer = event.pointer_id.0,
            kind = ?event.kind,
            x = event.position.x,
            y = event.position.y,
            "drag end"
        );

        let signal = self.signal(&active.operation, event);
        broadcast_end(&active.announced, &signal, &HashSet::new());
        self.drag_end.emit(event);
        if let Some(helper) = self.helper.as_mut() {
            helper.on_drag_end(self.bounds.bounding_rect());
        }

        HandleStatus::handled()
    }

    fn signal(&self, operation: &DragOperation, event: &PointerEvent) -> DropEvent {
        DropEvent::new(operation.clone(), *event).with_data(self.data.clone())
    }

    fn assist_scroll(&mut self, point: Vec2) {
        let (Some(scroll), Some(viewport)) = (self.scroll, self.viewport.as_mut()) else {
            return;
        };
        if let Some(delta) = scroll.scroll_delta(point, viewport.viewport_size()) {
            tracing::trace!(dx = delta.x, dy = delta.y, "scroll assist");
            viewport.scroll_by(delta);
        }
    }

    /// Adopt an operation parked by a destroyed draggable.
    fn resume_aborted(&mut self) {
        let Some(AbortedDrag {
            operation,
            mut announced,
            ..
        }) = self.aborted.take()
        else {
            return;
        };

        let known: HashSet<_> = announced
            .iter()
            .filter_map(WeakDropRegistry::upgrade)
            .map(|scope| scope.id())
            .collect();
        let fresh: Vec<DropRegistry> = self
            .scope
            .chain()
            .into_iter()
            .filter(|scope| !known.contains(&scope.id()))
            .collect();

        tracing::debug!(
            pointer = operation.pointer_id().0,
            scope = %self.scope.id(),
            new_scopes = fresh.len(),
            "resuming aborted drag"
        );

        let signal = self.signal(&operation, operation.last_event());
        for scope in &fresh {
            scope.emit_drag_start_local(&signal);
        }
        announced.extend(fresh.iter().map(DropRegistry::downgrade));

        self.active = Some(ActiveDrag {
            operation: operation.clone(),
            announced,
        });
        // Only moved operations are ever parked.
        self.moved = true;

        if let Some(helper) = self.helper.as_mut() {
            helper.on_drag_start(&operation);
            helper.on_drag_move(&operation);
        }
    }
}

impl Drop for DragEngine {
    fn drop(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let aborted = AbortedDrag {
            operation: active.operation,
            announced: active.announced,
            data: self.data.clone(),
        };
        if self.moved {
            tracing::debug!(pointer = aborted.operation.pointer_id().0, "parking aborted drag");
            self.aborted.stash(aborted);
        } else {
            // Not worth resuming; still release the scopes it activated.
            tracing::debug!(pointer = aborted.operation.pointer_id().0, "discarding unmoved drag");
            aborted.cancel(&HashSet::new());
        }
    }
}

/// Builds a [`DragEngine`]; obtained from [`DragContext::draggable`](crate::DragContext::draggable).
pub struct DragEngineBuilder {
    bounds: Box<dyn Bounds>,
    handle: Option<Box<dyn Bounds>>,
    scope: DropRegistry,
    helper: Option<Box<dyn DragHelper>>,
    viewport: Option<Box<dyn Viewport>>,
    config: DragConfig,
    aborted: AbortSlot,
    data: Option<DragData>,
}

impl DragEngineBuilder {
    pub(crate) fn new(
        bounds: Box<dyn Bounds>,
        scope: DropRegistry,
        config: DragConfig,
        aborted: AbortSlot,
    ) -> Self {
        Self {
            bounds,
            handle: None,
            scope,
            helper: None,
            viewport: None,
            config,
            aborted,
            data: None,
        }
    }

    /// Publish into `scope` instead of the context root, typically the scope
    /// of the dropzone this draggable lives in.
    pub fn scope(mut self, scope: &DropRegistry) -> Self {
        self.scope = scope.clone();
        self
    }

    /// Only start drags from inside this region.
    pub fn handle(mut self, handle: impl Bounds + 'static) -> Self {
        self.handle = Some(Box::new(handle));
        self
    }

    pub fn helper(mut self, helper: impl DragHelper + 'static) -> Self {
        self.helper = Some(Box::new(helper));
        self
    }

    pub fn viewport(mut self, viewport: impl Viewport + 'static) -> Self {
        self.viewport = Some(Box::new(viewport));
        self
    }

    pub fn data<T: 'static>(mut self, data: T) -> Self {
        self.data = Some(DragData::new(data));
        self
    }

    pub fn scroll_margin(mut self, margin: f32) -> Self {
        self.config.scroll_margin = margin;
        self
    }

    pub fn scroll_step(mut self, step: f32) -> Self {
        self.config.scroll_step = step;
        self
    }

    pub fn auto_scroll(mut self, enabled: bool) -> Self {
        self.config.auto_scroll = enabled;
        self
    }

    /// Build the engine, adopting a parked drag from the context if present.
    pub fn build(self) -> Result<DragEngine, DndError> {
        self.config.validate()?;

        let mut engine = DragEngine {
            bounds: self.bounds,
            handle: self.handle,
            scope: self.scope,
            helper: self.helper,
            viewport: self.viewport,
            scroll: self.config.scroll_assist(),
            aborted: self.aborted,
            data: self.data,
            active: None,
            moved: false,
            drag_start: EventEmitter::new(),
            drag_move: EventEmitter::new(),
            drag_end: EventEmitter::new(),
        };
        engine.resume_aborted();
        Ok(engine)
    }
}
