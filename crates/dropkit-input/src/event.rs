use dropkit_core::math::Vec2;

/// Identifies one pointer (mouse, pen or a single touch contact) for the
/// lifetime of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The system mouse.
    pub const MOUSE: Self = Self(0);
}

/// Button that triggered a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Left mouse button, pen tip or touch contact.
    #[default]
    Primary,
    /// Middle mouse button.
    Auxiliary,
    /// Right mouse button or pen barrel button.
    Secondary,
    Back,
    Forward,
    Other(u16),
}

impl PointerButton {
    /// Map a DOM-style button index (0 = primary, 1 = auxiliary, 2 = secondary).
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            3 => PointerButton::Back,
            4 => PointerButton::Forward,
            other => PointerButton::Other(other.unsigned_abs()),
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, PointerButton::Primary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pointer_id: PointerId,
    pub position: Vec2,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(
        kind: PointerEventKind,
        pointer_id: PointerId,
        position: Vec2,
        button: PointerButton,
    ) -> Self {
        Self {
            kind,
            pointer_id,
            position,
            button,
        }
    }

    /// Primary-button press for `pointer_id` at `(x, y)`.
    pub fn down(pointer_id: PointerId, x: f32, y: f32) -> Self {
        Self::new(
            PointerEventKind::Down,
            pointer_id,
            Vec2::new(x, y),
            PointerButton::Primary,
        )
    }

    pub fn move_to(pointer_id: PointerId, x: f32, y: f32) -> Self {
        Self::new(
            PointerEventKind::Move,
            pointer_id,
            Vec2::new(x, y),
            PointerButton::Primary,
        )
    }

    pub fn up(pointer_id: PointerId, x: f32, y: f32) -> Self {
        Self::new(
            PointerEventKind::Up,
            pointer_id,
            Vec2::new(x, y),
            PointerButton::Primary,
        )
    }

    pub fn cancel(pointer_id: PointerId, x: f32, y: f32) -> Self {
        Self::new(
            PointerEventKind::Cancel,
            pointer_id,
            Vec2::new(x, y),
            PointerButton::Primary,
        )
    }

    /// Replace the button, e.g. `PointerEvent::down(id, x, y).with_button(PointerButton::Secondary)`.
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// True for up and cancel, the two kinds that end a gesture.
    pub fn is_release(&self) -> bool {
        matches!(self.kind, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

bitflags::bitflags! {
    /// What a handler did with an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}
