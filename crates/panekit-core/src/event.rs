#![forbid(unsafe_code)]

//! Pointer event types.
//!
//! The host UI runtime translates its native pointer input into these
//! values and hands them to the layout layer. All events derive `Clone`,
//! `PartialEq`, and `Eq` for use in tests and pattern matching.
//!
//! Coordinates are absolute host pixels, 0-indexed, origin at top-left.
//! [`MouseEventKind::Exited`] is delivered when the pointer leaves the
//! surface that registered for events; it carries the last known position.

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// The type of pointer event.
    pub kind: MouseEventKind,

    /// X coordinate (0-indexed, leftmost pixel is 0).
    pub x: u16,

    /// Y coordinate (0-indexed, topmost pixel is 0).
    pub y: u16,
}

impl MouseEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Button pressed down.
    Down(MouseButton),

    /// Button released.
    Up(MouseButton),

    /// Pointer moved while a button is held.
    Drag(MouseButton),

    /// Pointer moved (no button pressed).
    Moved,

    /// Pointer left the surface.
    Exited,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left (primary) button.
    Left,

    /// Right (secondary) button.
    Right,

    /// Middle button (scroll wheel click).
    Middle,
}
