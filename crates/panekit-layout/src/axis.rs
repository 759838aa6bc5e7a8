//! Split axis and the per-axis quantities derived from it.
//!
//! A split panel is described once and parametrized by [`SplitAxis`]. The
//! axis decides which dimension is the "extent", which coordinate is the
//! "leading edge", how sub-rectangles are carved out of the container, and
//! which resize cursor the host should show while dragging.

use panekit_core::geometry::Rect;
use serde::{Deserialize, Serialize};

use crate::visibility::PanelSlot;

/// Orientation of a split.
///
/// `Horizontal` places the regions side by side (left/right) and measures
/// widths; `Vertical` stacks them (top/bottom) and measures heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitAxis {
    Horizontal,
    Vertical,
}

/// Cursor the host should display over the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorHint {
    #[default]
    Default,
    /// Resize along x.
    ColResize,
    /// Resize along y.
    RowResize,
}

impl SplitAxis {
    /// Extent of `area` along this axis.
    #[must_use]
    pub const fn extent(self, area: Rect) -> u16 {
        match self {
            Self::Horizontal => area.width,
            Self::Vertical => area.height,
        }
    }

    /// Leading edge of `area` along this axis.
    #[must_use]
    pub const fn leading_edge(self, area: Rect) -> u16 {
        match self {
            Self::Horizontal => area.x,
            Self::Vertical => area.y,
        }
    }

    /// The component of a pointer position that lies along this axis.
    #[must_use]
    pub const fn coordinate(self, x: u16, y: u16) -> u16 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }

    /// Signed distance of a pointer position from the leading edge of `area`.
    #[must_use]
    pub fn offset_in(self, area: Rect, x: u16, y: u16) -> i32 {
        i32::from(self.coordinate(x, y)) - i32::from(self.leading_edge(area))
    }

    /// Carve the band `[offset, offset + len)` along this axis out of `area`.
    ///
    /// The cross-axis dimension is inherited from `area` unchanged.
    #[must_use]
    pub fn band(self, area: Rect, offset: u16, len: u16) -> Rect {
        match self {
            Self::Horizontal => Rect {
                x: area.x.saturating_add(offset),
                ..area
            }
            .with_width(len),
            Self::Vertical => Rect {
                y: area.y.saturating_add(offset),
                ..area
            }
            .with_height(len),
        }
    }

    /// Cursor shown while the divider is being dragged.
    #[must_use]
    pub const fn resize_cursor(self) -> CursorHint {
        match self {
            Self::Horizontal => CursorHint::ColResize,
            Self::Vertical => CursorHint::RowResize,
        }
    }

    /// Human name of a slot on this axis.
    #[must_use]
    pub const fn slot_name(self, slot: PanelSlot) -> &'static str {
        match (self, slot) {
            (Self::Horizontal, PanelSlot::First) => "left",
            (Self::Horizontal, PanelSlot::Second) => "right",
            (Self::Vertical, PanelSlot::First) => "top",
            (Self::Vertical, PanelSlot::Second) => "bottom",
        }
    }
}
