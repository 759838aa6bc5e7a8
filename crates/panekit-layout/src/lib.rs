#![forbid(unsafe_code)]

//! Dual-pane split layout manager.
//!
//! One axis-generic engine backs both the side-by-side and the stacked split
//! views. A [`SplitPanel`] keeps two adjacent regions along a [`SplitAxis`],
//! tracks which of them are mounted, resizes them by dragging the divider
//! (collapsing a region when dragged within the snap threshold of an edge),
//! and keeps their sizes consistent when the host resizes the container.
//!
//! # Modules
//! - [`visibility`]: the four-state open/close machine.
//! - [`geometry`]: size reconciliation and snap resizing.
//! - [`drag`]: divider drag lifecycle.
//! - [`panel`]: the control interface tying them together.

pub mod axis;
pub mod config;
pub mod drag;
pub mod geometry;
pub mod panel;
pub mod visibility;

pub use axis::{CursorHint, SplitAxis};
pub use config::{
    DEFAULT_GUTTER_EXTENT, DEFAULT_SNAP_THRESHOLD, SplitPanelConfig, SplitPanelConfigError,
};
pub use drag::{DragController, DragEffect, DragEndReason, DragNoopReason, DragState};
pub use geometry::{PanelGeometry, PanelSizes, SizeSpec, reconcile_sizes, snap_sizes};
pub use panekit_core::geometry::Rect;
pub use panel::{
    ContentUpdate, DividerEmphasis, DividerLayout, PanelDiagnostic, PanelOperation, PanelOutcome,
    SplitLayout, SplitPanel,
};
pub use visibility::{PanelSlot, PanelTarget, PanelVisibility, RedundantTransition, UnknownTarget};
