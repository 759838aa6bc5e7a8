//! Caller-supplied configuration for a split panel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::SizeSpec;
use crate::visibility::{PanelSlot, PanelVisibility};

/// Default divider thickness in pixels.
pub const DEFAULT_GUTTER_EXTENT: u16 = 20;

/// Default distance from an edge within which a drag collapses a region.
pub const DEFAULT_SNAP_THRESHOLD: u16 = 40;

/// Construction-time settings for [`SplitPanel`](crate::SplitPanel).
///
/// Deserializes with defaults for every missing field, so `{}` is a valid
/// config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitPanelConfig {
    pub initial_visibility: PanelVisibility,
    /// Region whose size survives container resizes verbatim.
    pub fixed_panel: PanelSlot,
    /// Sizes used until the first measurement.
    pub initial_sizes: [SizeSpec; 2],
    pub gutter_extent: u16,
    pub snap_threshold: u16,
}

impl Default for SplitPanelConfig {
    fn default() -> Self {
        Self {
            initial_visibility: PanelVisibility::Both,
            fixed_panel: PanelSlot::First,
            initial_sizes: [SizeSpec::Percentage(50.0), SizeSpec::Percentage(50.0)],
            gutter_extent: DEFAULT_GUTTER_EXTENT,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

impl SplitPanelConfig {
    /// Set the visibility at mount.
    #[must_use]
    pub fn initial_visibility(mut self, visibility: PanelVisibility) -> Self {
        self.initial_visibility = visibility;
        self
    }

    /// Set the region that keeps its size on container resize.
    #[must_use]
    pub fn fixed_panel(mut self, slot: PanelSlot) -> Self {
        self.fixed_panel = slot;
        self
    }

    /// Set the pre-measurement sizes.
    #[must_use]
    pub fn initial_sizes(mut self, first: SizeSpec, second: SizeSpec) -> Self {
        self.initial_sizes = [first, second];
        self
    }

    /// Set the divider thickness.
    #[must_use]
    pub fn gutter_extent(mut self, extent: u16) -> Self {
        self.gutter_extent = extent;
        self
    }

    /// Set the snap distance.
    #[must_use]
    pub fn snap_threshold(mut self, threshold: u16) -> Self {
        self.snap_threshold = threshold;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SplitPanelConfigError> {
        if self.gutter_extent == 0 {
            return Err(SplitPanelConfigError::ZeroGutter);
        }
        for (slot, spec) in [PanelSlot::First, PanelSlot::Second]
            .into_iter()
            .zip(self.initial_sizes)
        {
            if let SizeSpec::Percentage(value) = spec
                && !(value.is_finite() && (0.0..=100.0).contains(&value))
            {
                return Err(SplitPanelConfigError::InvalidPercentage { slot, value });
            }
        }
        Ok(())
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitPanelConfigError {
    /// A zero-thickness divider cannot be grabbed.
    ZeroGutter,
    InvalidPercentage { slot: PanelSlot, value: f32 },
}

impl fmt::Display for SplitPanelConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGutter => f.write_str("gutter extent must be at least 1 pixel"),
            Self::InvalidPercentage { slot, value } => write!(
                f,
                "initial size for {slot:?} panel is {value}%, expected 0 to 100"
            ),
        }
    }
}

impl std::error::Error for SplitPanelConfigError {}
