//! Authoritative sizes of the two regions along the split axis.
//!
//! [`PanelGeometry`] owns the measured extents and keeps them consistent
//! with the container under two triggers:
//!
//! - the container extent changes ([`set_container_extent`]), which runs
//!   [`reconcile_sizes`];
//! - the drag controller asks for a new first extent ([`resize`]), which
//!   applies the snap threshold.
//!
//! Before any size has been measured, callers get sizes resolved from the
//! configured [`SizeSpec`] pair instead.
//!
//! # Invariants
//!
//! 1. Measured sizes always satisfy `first + second == container_extent`
//!    after either trigger.
//! 2. A side that has been collapsed to exactly 0 stays at 0 across
//!    container resizes.
//! 3. Sizes are unsigned; no arithmetic path can underflow them.
//!
//! [`set_container_extent`]: PanelGeometry::set_container_extent
//! [`resize`]: PanelGeometry::resize

use serde::{Deserialize, Serialize};

use crate::visibility::PanelSlot;

/// Size of one region before anything has been measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeSpec {
    /// Percentage of the container extent (0.0 to 100.0).
    Percentage(f32),
    /// Absolute extent in pixels.
    Fixed(u16),
}

impl Default for SizeSpec {
    fn default() -> Self {
        Self::Percentage(50.0)
    }
}

impl SizeSpec {
    /// Resolve against a container extent, clamped to `[0, extent]`.
    #[must_use]
    pub fn resolve(self, extent: u16) -> u16 {
        match self {
            Self::Percentage(p) => {
                let size = (f32::from(extent) * p / 100.0).round();
                // NaN and negatives fall to 0 through the saturating cast.
                (size as u16).min(extent)
            }
            Self::Fixed(size) => size.min(extent),
        }
    }
}

/// Extents of the two regions along the split axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PanelSizes {
    pub first: u16,
    pub second: u16,
}

impl PanelSizes {
    #[must_use]
    pub const fn new(first: u16, second: u16) -> Self {
        Self { first, second }
    }

    /// Extent of one slot.
    #[must_use]
    pub const fn get(self, slot: PanelSlot) -> u16 {
        match slot {
            PanelSlot::First => self.first,
            PanelSlot::Second => self.second,
        }
    }

    /// Sum of both extents, widened so it cannot overflow.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.first as u32 + self.second as u32
    }

    /// The slot shrunk to exactly 0, if any.
    ///
    /// When both are 0 the first slot is reported.
    #[must_use]
    pub const fn collapsed(self) -> Option<PanelSlot> {
        if self.first == 0 {
            Some(PanelSlot::First)
        } else if self.second == 0 {
            Some(PanelSlot::Second)
        } else {
            None
        }
    }
}

/// Fit measured sizes to a new container extent.
///
/// A collapsed side stays collapsed and the other side takes the whole
/// extent. Otherwise `fixed` keeps its size when it fits, the other side
/// absorbs the difference, and when the container is smaller than the
/// fixed side, the fixed side is clamped and the other side drops to 0.
#[must_use]
pub fn reconcile_sizes(sizes: PanelSizes, extent: u16, fixed: PanelSlot) -> PanelSizes {
    if u32::from(extent) == sizes.total() {
        return sizes;
    }
    match sizes.collapsed() {
        Some(PanelSlot::First) => return PanelSizes::new(0, extent),
        Some(PanelSlot::Second) => return PanelSizes::new(extent, 0),
        None => {}
    }

    let fixed_size = sizes.get(fixed);
    let other = extent.saturating_sub(fixed_size);
    let fixed_size = fixed_size.min(extent - other);
    match fixed {
        PanelSlot::First => PanelSizes::new(fixed_size, other),
        PanelSlot::Second => PanelSizes::new(other, fixed_size),
    }
}

/// Sizes for a candidate first extent during a drag.
///
/// Candidates within `snap_threshold` of either edge snap to that edge.
#[must_use]
pub fn snap_sizes(candidate_first: u16, extent: u16, snap_threshold: u16) -> PanelSizes {
    let first = if candidate_first <= snap_threshold {
        0
    } else if extent.saturating_sub(candidate_first) <= snap_threshold {
        extent
    } else {
        candidate_first.min(extent)
    };
    PanelSizes::new(first, extent - first)
}

/// Geometry state of one split container.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGeometry {
    container_extent: u16,
    measured: Option<PanelSizes>,
    fixed_panel: PanelSlot,
    initial_sizes: [SizeSpec; 2],
    snap_threshold: u16,
}

impl PanelGeometry {
    /// Create an unmeasured geometry.
    #[must_use]
    pub fn new(fixed_panel: PanelSlot, initial_sizes: [SizeSpec; 2], snap_threshold: u16) -> Self {
        Self {
            container_extent: 0,
            measured: None,
            fixed_panel,
            initial_sizes,
            snap_threshold,
        }
    }

    /// Latest container extent reported by the host.
    #[must_use]
    pub const fn container_extent(&self) -> u16 {
        self.container_extent
    }

    /// Measured sizes, or `None` before the first measurement.
    #[must_use]
    pub const fn measured(&self) -> Option<PanelSizes> {
        self.measured
    }

    #[must_use]
    pub const fn fixed_panel(&self) -> PanelSlot {
        self.fixed_panel
    }

    #[must_use]
    pub const fn snap_threshold(&self) -> u16 {
        self.snap_threshold
    }

    /// Sizes to lay out with right now.
    ///
    /// Falls back to the initial size specs while nothing is measured: the
    /// fixed side resolves its own spec and the other side takes the rest,
    /// so the sum still equals the container extent.
    #[must_use]
    pub fn resolved(&self) -> PanelSizes {
        if let Some(sizes) = self.measured {
            return sizes;
        }
        let extent = self.container_extent;
        let spec = match self.fixed_panel {
            PanelSlot::First => self.initial_sizes[0],
            PanelSlot::Second => self.initial_sizes[1],
        };
        let fixed = spec.resolve(extent);
        match self.fixed_panel {
            PanelSlot::First => PanelSizes::new(fixed, extent - fixed),
            PanelSlot::Second => PanelSizes::new(extent - fixed, fixed),
        }
    }

    /// Record a new container extent and reconcile measured sizes.
    ///
    /// Returns `true` when the extent or the sizes changed.
    pub fn set_container_extent(&mut self, extent: u16) -> bool {
        let extent_changed = self.container_extent != extent;
        self.container_extent = extent;
        let sizes_changed = self.reconcile();
        extent_changed || sizes_changed
    }

    /// Re-fit measured sizes to the current container extent.
    ///
    /// Returns `true` when the sizes changed. Unmeasured geometry is left
    /// alone.
    pub fn reconcile(&mut self) -> bool {
        let Some(sizes) = self.measured else {
            return false;
        };
        let next = reconcile_sizes(sizes, self.container_extent, self.fixed_panel);
        if next == sizes {
            return false;
        }
        tracing::trace!(
            target: "panekit.geometry",
            extent = self.container_extent,
            from_first = sizes.first,
            from_second = sizes.second,
            first = next.first,
            second = next.second,
            "sizes reconciled"
        );
        self.measured = Some(next);
        true
    }

    /// Apply a drag candidate for the first extent, snapping near the edges.
    ///
    /// This is the first real measurement when nothing was measured yet.
    pub fn resize(&mut self, candidate_first: u16) -> PanelSizes {
        let sizes = snap_sizes(candidate_first, self.container_extent, self.snap_threshold);
        self.measured = Some(sizes);
        sizes
    }
}
