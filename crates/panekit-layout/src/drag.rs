//! Pointer-drag lifecycle for the divider.
//!
//! ```text
//! Idle --begin--> Dragging --track--> Dragging
//!   ^                |
//!   +------end-------+   (pointer up, pointer exit, divider hidden)
//! ```
//!
//! The controller only knows offsets along the split axis, measured from the
//! container's leading edge. Turning an accepted offset into sizes is the
//! geometry engine's job.

use serde::{Deserialize, Serialize};

use crate::axis::{CursorHint, SplitAxis};

/// Lifecycle state of the drag controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Offset where the session started.
        origin: i32,
        /// Last offset accepted by [`DragController::track`].
        current: i32,
    },
}

/// Why a drag session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragEndReason {
    PointerUp,
    PointerExited,
    /// Visibility left `Both`, so there is no divider to drag.
    DividerHidden,
}

/// Explicit diagnostics for pointer input that is safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    IdleWithoutActiveDrag,
    DragAlreadyInProgress,
    DividerHidden,
    OutsideDivider,
    /// Pointer is within half a gutter of a container edge.
    OutsideBand,
    UnhandledButton,
}

/// Effect of one pointer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    Started { offset: i32 },
    Moved { offset: u16 },
    Ended { reason: DragEndReason },
    Noop { reason: DragNoopReason },
}

impl DragEffect {
    #[must_use]
    pub const fn is_noop(self) -> bool {
        matches!(self, Self::Noop { .. })
    }
}

/// Drag session tracker for one divider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragController {
    state: DragState,
    gutter_extent: u16,
}

impl DragController {
    #[must_use]
    pub const fn new(gutter_extent: u16) -> Self {
        Self {
            state: DragState::Idle,
            gutter_extent,
        }
    }

    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    #[must_use]
    pub const fn gutter_extent(&self) -> u16 {
        self.gutter_extent
    }

    /// Cursor to show for the current state.
    #[must_use]
    pub const fn cursor(&self, axis: SplitAxis) -> CursorHint {
        if self.is_dragging() {
            axis.resize_cursor()
        } else {
            CursorHint::Default
        }
    }

    /// Whether `offset` lies in `[gutter/2, extent - gutter/2]`.
    #[must_use]
    pub fn in_band(&self, offset: i32, container_extent: u16) -> bool {
        let gutter = i64::from(self.gutter_extent);
        let offset = i64::from(offset);
        let extent = i64::from(container_extent);
        offset * 2 >= gutter && (extent - offset) * 2 >= gutter
    }

    /// Start a session at `offset` (pointer pressed on the divider).
    pub fn begin(&mut self, offset: i32) -> DragEffect {
        if self.is_dragging() {
            return DragEffect::Noop {
                reason: DragNoopReason::DragAlreadyInProgress,
            };
        }
        self.state = DragState::Dragging {
            origin: offset,
            current: offset,
        };
        tracing::debug!(target: "panekit.drag", offset, "drag started");
        DragEffect::Started { offset }
    }

    /// Feed a pointer offset; returns `Moved` when it should drive a resize.
    pub fn track(&mut self, offset: i32, container_extent: u16) -> DragEffect {
        let DragState::Dragging { origin, .. } = self.state else {
            return DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            };
        };
        if !self.in_band(offset, container_extent) {
            return DragEffect::Noop {
                reason: DragNoopReason::OutsideBand,
            };
        }
        self.state = DragState::Dragging {
            origin,
            current: offset,
        };
        // In band implies 0 <= offset <= extent.
        let offset = u16::try_from(offset).unwrap_or(container_extent);
        DragEffect::Moved { offset }
    }

    /// End the session regardless of pointer position.
    pub fn end(&mut self, reason: DragEndReason) -> DragEffect {
        let DragState::Dragging { origin, current } = self.state else {
            return DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            };
        };
        self.state = DragState::Idle;
        tracing::debug!(
            target: "panekit.drag",
            origin,
            current,
            reason = ?reason,
            "drag ended"
        );
        DragEffect::Ended { reason }
    }
}
