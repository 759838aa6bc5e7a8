//! Which of the two regions are mounted.
//!
//! [`PanelVisibility`] is a four-state machine driven only by
//! [`opened`](PanelVisibility::opened) and [`closed`](PanelVisibility::closed).
//! Both transitions are pure; callers decide what to do with a refused
//! transition (the control interface reports it and keeps the old state).
//!
//! # Invariants
//!
//! 1. `None` is only reachable by closing everything that is open.
//! 2. `Both` is only reachable by opening the missing side (or `Both`).
//! 3. Opening an open side or closing a closed side is refused, never
//!    silently applied.
//!
//! The machine is identical for both axes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::axis::SplitAxis;

/// One of the two regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelSlot {
    First,
    Second,
}

impl PanelSlot {
    /// The slot on the other side of the divider.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Target of an open/close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelTarget {
    First,
    Second,
    Both,
}

impl From<PanelSlot> for PanelTarget {
    fn from(slot: PanelSlot) -> Self {
        match slot {
            PanelSlot::First => Self::First,
            PanelSlot::Second => Self::Second,
        }
    }
}

impl PanelTarget {
    /// The single slot this target names, if any.
    #[must_use]
    pub const fn slot(self) -> Option<PanelSlot> {
        match self {
            Self::First => Some(PanelSlot::First),
            Self::Second => Some(PanelSlot::Second),
            Self::Both => None,
        }
    }

    /// Parse a caller-supplied target name.
    ///
    /// Accepts `first`, `second`, `both` and the names of the slots on
    /// `axis` (`left`/`right` or `top`/`bottom`). Names belonging to the
    /// other axis are rejected.
    pub fn parse(axis: SplitAxis, name: &str) -> Result<Self, UnknownTarget> {
        let name = name.trim();
        let target = match name {
            "first" => Some(Self::First),
            "second" => Some(Self::Second),
            "both" => Some(Self::Both),
            _ if name == axis.slot_name(PanelSlot::First) => Some(Self::First),
            _ if name == axis.slot_name(PanelSlot::Second) => Some(Self::Second),
            _ => None,
        };
        target.ok_or_else(|| UnknownTarget {
            axis,
            name: name.to_owned(),
        })
    }

    /// Name used for this target in diagnostics on `axis`.
    #[must_use]
    pub const fn name(self, axis: SplitAxis) -> &'static str {
        match self.slot() {
            Some(slot) => axis.slot_name(slot),
            None => "both",
        }
    }
}

/// A target name that does not denote a panel on the given axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTarget {
    pub axis: SplitAxis,
    pub name: String,
}

impl fmt::Display for UnknownTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid panel target {:?}: expected {:?}, {:?} or \"both\"",
            self.name,
            self.axis.slot_name(PanelSlot::First),
            self.axis.slot_name(PanelSlot::Second),
        )
    }
}

impl std::error::Error for UnknownTarget {}

/// The visible subset of {first, second}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelVisibility {
    None,
    First,
    Second,
    #[default]
    Both,
}

/// Why a visibility transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedundantTransition {
    AlreadyOpen,
    AlreadyClosed,
}

impl fmt::Display for RedundantTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOpen => f.write_str("panel is already open"),
            Self::AlreadyClosed => f.write_str("panel is already closed"),
        }
    }
}

impl PanelVisibility {
    /// Whether `slot` is mounted.
    #[must_use]
    pub const fn shows(self, slot: PanelSlot) -> bool {
        matches!(
            (self, slot),
            (Self::Both, _) | (Self::First, PanelSlot::First) | (Self::Second, PanelSlot::Second)
        )
    }

    /// Whether the divider exists.
    #[must_use]
    pub const fn shows_divider(self) -> bool {
        matches!(self, Self::Both)
    }

    /// State after opening `target`.
    pub const fn opened(self, target: PanelTarget) -> Result<Self, RedundantTransition> {
        match (self, target) {
            (Self::Both, _)
            | (Self::First, PanelTarget::First)
            | (Self::Second, PanelTarget::Second) => Err(RedundantTransition::AlreadyOpen),
            (_, PanelTarget::Both)
            | (Self::First, PanelTarget::Second)
            | (Self::Second, PanelTarget::First) => Ok(Self::Both),
            (Self::None, PanelTarget::First) => Ok(Self::First),
            (Self::None, PanelTarget::Second) => Ok(Self::Second),
        }
    }

    /// State after closing `target`.
    pub const fn closed(self, target: PanelTarget) -> Result<Self, RedundantTransition> {
        match (self, target) {
            (Self::None, _)
            | (Self::First, PanelTarget::Second)
            | (Self::Second, PanelTarget::First) => Err(RedundantTransition::AlreadyClosed),
            (_, PanelTarget::Both)
            | (Self::First, PanelTarget::First)
            | (Self::Second, PanelTarget::Second) => Ok(Self::None),
            (Self::Both, PanelTarget::First) => Ok(Self::Second),
            (Self::Both, PanelTarget::Second) => Ok(Self::First),
        }
    }
}
