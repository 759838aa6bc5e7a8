//! The split panel manager.
//!
//! [`SplitPanel`] ties the visibility machine, the geometry engine, and the
//! drag controller together behind one control surface. It is the only way
//! owning code mutates panel content or visibility; the host feeds it
//! container measurements ([`observe_container`]) and pointer input
//! ([`handle_mouse`]), and reads back a [`SplitLayout`] to render.
//!
//! No operation fails at runtime. Invalid targets and redundant transitions
//! are logged under the `panekit.panel` target, returned as a
//! [`PanelDiagnostic`], and leave the state untouched.
//!
//! # Example
//!
//! ```
//! use panekit_core::geometry::Rect;
//! use panekit_layout::{PanelTarget, PanelVisibility, SplitPanel, SplitPanelConfig};
//!
//! let config = SplitPanelConfig::default().initial_visibility(PanelVisibility::First);
//! let mut panel = SplitPanel::vertical(config)
//!     .expect("default config is valid")
//!     .with_content(Some("editor"), None);
//! panel.observe_container(Rect::new(0, 0, 800, 600));
//!
//! panel.set_panel_content(PanelTarget::Second, "terminal");
//! panel.open_panel(PanelTarget::Second);
//! assert_eq!(panel.current_visibility(), PanelVisibility::Both);
//!
//! let layout = panel.layout();
//! assert_eq!(layout.first, Some(Rect::new(0, 0, 800, 300)));
//! assert!(layout.divider.is_some());
//! ```
//!
//! [`observe_container`]: SplitPanel::observe_container
//! [`handle_mouse`]: SplitPanel::handle_mouse

use std::fmt;

use panekit_core::event::{MouseButton, MouseEvent, MouseEventKind};
use panekit_core::geometry::Rect;
use serde::{Deserialize, Serialize};

use crate::axis::{CursorHint, SplitAxis};
use crate::config::{SplitPanelConfig, SplitPanelConfigError};
use crate::drag::{DragController, DragEffect, DragEndReason, DragNoopReason, DragState};
use crate::geometry::{PanelGeometry, PanelSizes};
use crate::visibility::{PanelSlot, PanelTarget, PanelVisibility, RedundantTransition};

/// Control-interface operation, as named in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelOperation {
    Open,
    Close,
    Toggle,
    SetContent,
}

impl fmt::Display for PanelOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Toggle => "toggle",
            Self::SetContent => "set_content",
        })
    }
}

/// Why a control-interface call did nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelDiagnostic {
    /// The target does not name an acceptable panel for the operation.
    InvalidTarget {
        operation: PanelOperation,
        target: String,
    },
    /// Opening an open side or closing a closed side.
    RedundantTransition {
        operation: PanelOperation,
        target: PanelTarget,
        visibility: PanelVisibility,
        reason: RedundantTransition,
    },
}

impl fmt::Display for PanelDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget { operation, target } => {
                write!(f, "{operation}: invalid target {target:?}")
            }
            Self::RedundantTransition {
                operation,
                target,
                visibility,
                reason,
            } => write!(
                f,
                "{operation} {target:?} while {visibility:?}: {reason}"
            ),
        }
    }
}

/// Result of an open/close/toggle call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOutcome {
    Applied {
        from: PanelVisibility,
        to: PanelVisibility,
    },
    Noop(PanelDiagnostic),
}

impl PanelOutcome {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    #[must_use]
    pub const fn diagnostic(&self) -> Option<&PanelDiagnostic> {
        match self {
            Self::Applied { .. } => None,
            Self::Noop(diagnostic) => Some(diagnostic),
        }
    }
}

/// Result of a content replacement.
///
/// Handles always go back to the caller: the one that was displaced, or the
/// one that was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentUpdate<C> {
    Replaced {
        slot: PanelSlot,
        previous: Option<C>,
    },
    Rejected {
        content: C,
        diagnostic: PanelDiagnostic,
    },
}

/// Visual state of the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerEmphasis {
    #[default]
    Rest,
    Hover,
    Active,
}

/// Divider placement for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerLayout {
    /// Gutter centered on the boundary, clipped to the container.
    pub rect: Rect,
    pub emphasis: DividerEmphasis,
}

/// Render surface: where each mounted piece goes.
///
/// Unmounted regions are `None`. A mounted region may be zero-sized when a
/// drag collapsed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitLayout {
    pub first: Option<Rect>,
    pub second: Option<Rect>,
    pub divider: Option<DividerLayout>,
}

impl SplitLayout {
    #[must_use]
    pub const fn rect(&self, slot: PanelSlot) -> Option<Rect> {
        match slot {
            PanelSlot::First => self.first,
            PanelSlot::Second => self.second,
        }
    }
}

/// Dual-region split container along one axis.
///
/// `C` is the caller's content handle (a widget id, an `Rc`, a key into a
/// view table). The panel stores handles but never inspects them.
#[derive(Debug, Clone)]
pub struct SplitPanel<C> {
    axis: SplitAxis,
    visibility: PanelVisibility,
    first_content: Option<C>,
    second_content: Option<C>,
    container: Rect,
    geometry: PanelGeometry,
    drag: DragController,
    divider_hovered: bool,
    revision: u64,
}

impl<C> SplitPanel<C> {
    /// Mount a panel on `axis`.
    pub fn new(axis: SplitAxis, config: SplitPanelConfig) -> Result<Self, SplitPanelConfigError> {
        config.validate()?;
        Ok(Self {
            axis,
            visibility: config.initial_visibility,
            first_content: None,
            second_content: None,
            container: Rect::default(),
            geometry: PanelGeometry::new(
                config.fixed_panel,
                config.initial_sizes,
                config.snap_threshold,
            ),
            drag: DragController::new(config.gutter_extent),
            divider_hovered: false,
            revision: 0,
        })
    }

    /// Mount a side-by-side (left/right) panel.
    pub fn horizontal(config: SplitPanelConfig) -> Result<Self, SplitPanelConfigError> {
        Self::new(SplitAxis::Horizontal, config)
    }

    /// Mount a stacked (top/bottom) panel.
    pub fn vertical(config: SplitPanelConfig) -> Result<Self, SplitPanelConfigError> {
        Self::new(SplitAxis::Vertical, config)
    }

    /// Supply the content mounted with the panel.
    #[must_use]
    pub fn with_content(mut self, first: Option<C>, second: Option<C>) -> Self {
        self.first_content = first;
        self.second_content = second;
        self
    }

    #[must_use]
    pub const fn axis(&self) -> SplitAxis {
        self.axis
    }

    /// Currently mounted subset. Pure read.
    #[must_use]
    pub const fn current_visibility(&self) -> PanelVisibility {
        self.visibility
    }

    /// Bumped on every observable mutation; re-render when it moves.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub const fn container(&self) -> Rect {
        self.container
    }

    #[must_use]
    pub const fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// Sizes along the axis: measured, or resolved from the initial specs.
    #[must_use]
    pub fn sizes(&self) -> PanelSizes {
        self.geometry.resolved()
    }

    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub const fn cursor_hint(&self) -> CursorHint {
        self.drag.cursor(self.axis)
    }

    /// Content stored for `slot`, mounted or not.
    #[must_use]
    pub const fn content(&self, slot: PanelSlot) -> Option<&C> {
        match slot {
            PanelSlot::First => self.first_content.as_ref(),
            PanelSlot::Second => self.second_content.as_ref(),
        }
    }

    // --- Control interface ------------------------------------------------

    /// Open `target`; see [`PanelVisibility::opened`].
    pub fn open_panel(&mut self, target: PanelTarget) -> PanelOutcome {
        let next = self.visibility.opened(target);
        self.transition(PanelOperation::Open, target, next)
    }

    /// Close `target`; see [`PanelVisibility::closed`].
    pub fn close_panel(&mut self, target: PanelTarget) -> PanelOutcome {
        let next = self.visibility.closed(target);
        self.transition(PanelOperation::Close, target, next)
    }

    /// [`open_panel`](Self::open_panel) with a caller-supplied target name.
    pub fn open_panel_named(&mut self, name: &str) -> PanelOutcome {
        match PanelTarget::parse(self.axis, name) {
            Ok(target) => self.open_panel(target),
            Err(_) => PanelOutcome::Noop(self.invalid_target(PanelOperation::Open, name)),
        }
    }

    /// [`close_panel`](Self::close_panel) with a caller-supplied target name.
    pub fn close_panel_named(&mut self, name: &str) -> PanelOutcome {
        match PanelTarget::parse(self.axis, name) {
            Ok(target) => self.close_panel(target),
            Err(_) => PanelOutcome::Noop(self.invalid_target(PanelOperation::Close, name)),
        }
    }

    /// Toolbar-style toggle of `slot`.
    ///
    /// With both regions open, closes `slot`. Otherwise stores `content` in
    /// `slot` (when given) and opens it. Returns the outcome plus whichever
    /// handle the panel no longer holds: the displaced one, or `content`
    /// itself when the toggle closed the slot.
    pub fn toggle_panel(
        &mut self,
        slot: PanelSlot,
        content: Option<C>,
    ) -> (PanelOutcome, Option<C>) {
        let target = PanelTarget::from(slot);
        if self.visibility == PanelVisibility::Both {
            let next = self.visibility.closed(target);
            return (self.transition(PanelOperation::Toggle, target, next), content);
        }
        let displaced = match content {
            Some(content) => self.replace_content(slot, Some(content)),
            None => None,
        };
        let next = self.visibility.opened(target);
        (self.transition(PanelOperation::Toggle, target, next), displaced)
    }

    /// Replace the content handle of one slot, whatever the visibility.
    ///
    /// `PanelTarget::Both` is an invalid target here.
    pub fn set_panel_content(&mut self, target: PanelTarget, content: C) -> ContentUpdate<C> {
        let Some(slot) = target.slot() else {
            let diagnostic =
                self.invalid_target(PanelOperation::SetContent, target.name(self.axis));
            return ContentUpdate::Rejected {
                content,
                diagnostic,
            };
        };
        let previous = self.replace_content(slot, Some(content));
        ContentUpdate::Replaced { slot, previous }
    }

    /// [`set_panel_content`](Self::set_panel_content) with a caller-supplied
    /// target name.
    pub fn set_panel_content_named(&mut self, name: &str, content: C) -> ContentUpdate<C> {
        match PanelTarget::parse(self.axis, name) {
            Ok(target) => self.set_panel_content(target, content),
            Err(_) => ContentUpdate::Rejected {
                content,
                diagnostic: self.invalid_target(PanelOperation::SetContent, name),
            },
        }
    }

    // --- Host notifications -----------------------------------------------

    /// Container-resize notification.
    ///
    /// Records the container box and re-fits measured sizes to its extent.
    /// Returns `true` when anything observable changed.
    pub fn observe_container(&mut self, area: Rect) -> bool {
        let moved = self.container != area;
        self.container = area;
        let resized = self.geometry.set_container_extent(self.axis.extent(area));
        let changed = moved || resized;
        if changed {
            self.touch();
        }
        changed
    }

    /// Route one pointer event.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> DragEffect {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.pointer_down(event.x, event.y),
            MouseEventKind::Down(_) => DragEffect::Noop {
                reason: DragNoopReason::UnhandledButton,
            },
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                self.pointer_move(event.x, event.y)
            }
            MouseEventKind::Up(_) => self.pointer_up(event.x, event.y),
            MouseEventKind::Exited => self.pointer_exit(),
        }
    }

    /// Pointer pressed: starts a drag when it lands on the divider.
    pub fn pointer_down(&mut self, x: u16, y: u16) -> DragEffect {
        if !self.visibility.shows_divider() {
            return DragEffect::Noop {
                reason: DragNoopReason::DividerHidden,
            };
        }
        if !self.divider_rect().is_some_and(|rect| rect.contains(x, y)) {
            return DragEffect::Noop {
                reason: DragNoopReason::OutsideDivider,
            };
        }
        let effect = self.drag.begin(self.axis.offset_in(self.container, x, y));
        if !effect.is_noop() {
            self.touch();
        }
        effect
    }

    /// Pointer moved: resizes while dragging, tracks divider hover otherwise.
    pub fn pointer_move(&mut self, x: u16, y: u16) -> DragEffect {
        if !self.drag.is_dragging() {
            self.refresh_hover(x, y);
            return DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            };
        }
        let offset = self.axis.offset_in(self.container, x, y);
        let effect = self.drag.track(offset, self.geometry.container_extent());
        if let DragEffect::Moved { offset } = effect {
            self.apply_resize(offset);
        }
        effect
    }

    /// Pointer released anywhere: ends any drag session.
    ///
    /// Hover is re-checked against where the divider ended up.
    pub fn pointer_up(&mut self, x: u16, y: u16) -> DragEffect {
        let effect = self.end_drag(DragEndReason::PointerUp);
        self.refresh_hover(x, y);
        effect
    }

    /// Pointer left the container: ends any drag session and drops hover.
    pub fn pointer_exit(&mut self) -> DragEffect {
        self.set_hovered(false);
        self.end_drag(DragEndReason::PointerExited)
    }

    /// Drag-resize routine: sets the first extent, snapping near the edges.
    ///
    /// Only effective during a drag session.
    pub fn drag_resize(&mut self, candidate_first: u16) -> DragEffect {
        if !self.drag.is_dragging() {
            return DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            };
        }
        self.apply_resize(candidate_first);
        DragEffect::Moved {
            offset: candidate_first,
        }
    }

    // --- Render surface ---------------------------------------------------

    /// Lay out the mounted regions and the divider inside the container.
    #[must_use]
    pub fn layout(&self) -> SplitLayout {
        let area = self.container;
        match self.visibility {
            PanelVisibility::None => SplitLayout::default(),
            PanelVisibility::First => SplitLayout {
                first: Some(area),
                ..SplitLayout::default()
            },
            PanelVisibility::Second => SplitLayout {
                second: Some(area),
                ..SplitLayout::default()
            },
            PanelVisibility::Both => {
                let sizes = self.sizes();
                let emphasis = if self.drag.is_dragging() {
                    DividerEmphasis::Active
                } else if self.divider_hovered {
                    DividerEmphasis::Hover
                } else {
                    DividerEmphasis::Rest
                };
                SplitLayout {
                    first: Some(self.axis.band(area, 0, sizes.first)),
                    second: Some(self.axis.band(area, sizes.first, sizes.second)),
                    divider: self
                        .divider_rect()
                        .map(|rect| DividerLayout { rect, emphasis }),
                }
            }
        }
    }

    /// Gutter centered on the boundary, clipped to the container.
    fn divider_rect(&self) -> Option<Rect> {
        if !self.visibility.shows_divider() {
            return None;
        }
        let extent = i32::from(self.geometry.container_extent());
        let gutter = i32::from(self.drag.gutter_extent());
        let start = i32::from(self.sizes().first) - gutter / 2;
        let end = (start + gutter).clamp(0, extent);
        let start = start.clamp(0, extent);
        // Both bounds are within [0, extent], which fits u16.
        let offset = u16::try_from(start).ok()?;
        let len = u16::try_from(end - start).ok()?;
        let rect = self.axis.band(self.container, offset, len);
        rect.intersection_opt(&self.container)
    }

    // --- Internals --------------------------------------------------------

    fn transition(
        &mut self,
        operation: PanelOperation,
        target: PanelTarget,
        next: Result<PanelVisibility, RedundantTransition>,
    ) -> PanelOutcome {
        let from = self.visibility;
        let to = match next {
            Ok(to) => to,
            Err(reason) => {
                tracing::debug!(
                    target: "panekit.panel",
                    axis = ?self.axis,
                    operation = %operation,
                    panel = target.name(self.axis),
                    visibility = ?from,
                    reason = %reason,
                    "redundant panel transition ignored"
                );
                return PanelOutcome::Noop(PanelDiagnostic::RedundantTransition {
                    operation,
                    target,
                    visibility: from,
                    reason,
                });
            }
        };
        self.visibility = to;
        if !to.shows_divider() {
            self.divider_hovered = false;
            self.drag.end(DragEndReason::DividerHidden);
        }
        tracing::debug!(
            target: "panekit.panel",
            axis = ?self.axis,
            operation = %operation,
            panel = target.name(self.axis),
            from = ?from,
            to = ?to,
            "panel visibility changed"
        );
        self.touch();
        PanelOutcome::Applied { from, to }
    }

    fn invalid_target(&self, operation: PanelOperation, target: &str) -> PanelDiagnostic {
        tracing::warn!(
            target: "panekit.panel",
            axis = ?self.axis,
            operation = %operation,
            panel = target,
            "invalid panel target ignored"
        );
        PanelDiagnostic::InvalidTarget {
            operation,
            target: target.to_owned(),
        }
    }

    fn replace_content(&mut self, slot: PanelSlot, content: Option<C>) -> Option<C> {
        let stored = match slot {
            PanelSlot::First => &mut self.first_content,
            PanelSlot::Second => &mut self.second_content,
        };
        let previous = std::mem::replace(stored, content);
        self.touch();
        previous
    }

    fn apply_resize(&mut self, candidate_first: u16) {
        let before = self.geometry.measured();
        let sizes = self.geometry.resize(candidate_first);
        if before != Some(sizes) {
            tracing::trace!(
                target: "panekit.drag",
                candidate = candidate_first,
                first = sizes.first,
                second = sizes.second,
                "drag resize"
            );
            self.touch();
        }
    }

    fn end_drag(&mut self, reason: DragEndReason) -> DragEffect {
        let effect = self.drag.end(reason);
        if !effect.is_noop() {
            self.touch();
        }
        effect
    }

    fn refresh_hover(&mut self, x: u16, y: u16) {
        let hovered = self.divider_rect().is_some_and(|rect| rect.contains(x, y));
        self.set_hovered(hovered);
    }

    fn set_hovered(&mut self, hovered: bool) {
        if self.divider_hovered != hovered {
            self.divider_hovered = hovered;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SizeSpec;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::registry::LookupSpan;

    // Tracing capture infrastructure
    #[derive(Debug, Clone)]
    struct CapturedEvent {
        level: tracing::Level,
        target: String,
        fields: HashMap<String, String>,
    }

    struct EventCapture {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    struct FieldVisitor(Vec<(String, String)>);

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.0
                .push((field.name().to_string(), format!("{value:?}")));
        }
        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            self.0.push((field.name().to_string(), value.to_string()));
        }
    }

    impl<S> tracing_subscriber::Layer<S> for EventCapture
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut visitor = FieldVisitor(Vec::new());
            event.record(&mut visitor);
            self.events.lock().unwrap().push(CapturedEvent {
                level: *event.metadata().level(),
                target: event.metadata().target().to_string(),
                fields: visitor.0.into_iter().collect(),
            });
        }
    }

    fn with_captured_tracing<F>(f: F) -> Vec<CapturedEvent>
    where
        F: FnOnce(),
    {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = EventCapture {
            events: events.clone(),
        };
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        events.lock().unwrap().clone()
    }

    fn panel(axis: SplitAxis, visibility: PanelVisibility) -> SplitPanel<&'static str> {
        let config = SplitPanelConfig::default().initial_visibility(visibility);
        let mut panel = SplitPanel::new(axis, config)
            .unwrap()
            .with_content(Some("one"), Some("two"));
        panel.observe_container(Rect::new(0, 0, 500, 300));
        panel
    }

    // =====================================================================
    // Control interface
    // =====================================================================

    #[test]
    fn open_then_open_reaches_both() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::None);
        assert!(panel.open_panel(PanelTarget::First).is_applied());
        assert_eq!(
            panel.open_panel(PanelTarget::Second),
            PanelOutcome::Applied {
                from: PanelVisibility::First,
                to: PanelVisibility::Both
            }
        );
    }

    #[test]
    fn second_close_is_reported_noop() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::First);
        assert!(panel.close_panel(PanelTarget::First).is_applied());
        let revision = panel.revision();
        let outcome = panel.close_panel(PanelTarget::First);
        assert_eq!(
            outcome.diagnostic(),
            Some(&PanelDiagnostic::RedundantTransition {
                operation: PanelOperation::Close,
                target: PanelTarget::First,
                visibility: PanelVisibility::None,
                reason: RedundantTransition::AlreadyClosed,
            })
        );
        assert_eq!(panel.current_visibility(), PanelVisibility::None);
        assert_eq!(panel.revision(), revision);
    }

    #[test]
    fn named_targets_follow_axis() {
        let mut panel = panel(SplitAxis::Vertical, PanelVisibility::Both);
        let outcome = panel.close_panel_named("left");
        assert!(matches!(
            outcome,
            PanelOutcome::Noop(PanelDiagnostic::InvalidTarget { .. })
        ));
        assert_eq!(panel.current_visibility(), PanelVisibility::Both);
        assert!(panel.close_panel_named("bottom").is_applied());
        assert_eq!(panel.current_visibility(), PanelVisibility::First);
        assert!(panel.open_panel_named("both").is_applied());
    }

    #[test]
    fn set_content_ignores_visibility() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::None);
        let update = panel.set_panel_content(PanelTarget::Second, "three");
        assert_eq!(
            update,
            ContentUpdate::Replaced {
                slot: PanelSlot::Second,
                previous: Some("two")
            }
        );
        assert_eq!(panel.content(PanelSlot::Second), Some(&"three"));
        assert_eq!(panel.current_visibility(), PanelVisibility::None);
    }

    #[test]
    fn set_content_on_both_hands_content_back() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
        let (content, diagnostic) = match panel.set_panel_content(PanelTarget::Both, "three") {
            ContentUpdate::Rejected {
                content,
                diagnostic,
            } => (content, diagnostic),
            other => panic!("expected rejection, got {other:?}"),
        };
        assert_eq!(content, "three");
        assert_eq!(
            diagnostic,
            PanelDiagnostic::InvalidTarget {
                operation: PanelOperation::SetContent,
                target: "both".to_owned()
            }
        );
        assert_eq!(panel.content(PanelSlot::First), Some(&"one"));

        let update = panel.set_panel_content_named("middle", "four");
        assert!(matches!(update, ContentUpdate::Rejected { content: "four", .. }));
        assert!(matches!(
            panel.set_panel_content_named("right", "five"),
            ContentUpdate::Replaced {
                slot: PanelSlot::Second,
                ..
            }
        ));
    }

    #[test]
    fn toggle_opens_with_content_then_closes() {
        let mut panel = panel(SplitAxis::Vertical, PanelVisibility::First);
        let (outcome, displaced) = panel.toggle_panel(PanelSlot::Second, Some("terminal"));
        assert!(outcome.is_applied());
        assert_eq!(displaced, Some("two"));
        assert_eq!(panel.current_visibility(), PanelVisibility::Both);
        assert_eq!(panel.content(PanelSlot::Second), Some(&"terminal"));

        let (outcome, handed_back) = panel.toggle_panel(PanelSlot::Second, Some("other"));
        assert_eq!(
            outcome,
            PanelOutcome::Applied {
                from: PanelVisibility::Both,
                to: PanelVisibility::First
            }
        );
        assert_eq!(handed_back, Some("other"));
        assert_eq!(panel.content(PanelSlot::Second), Some(&"terminal"));
    }

    #[test]
    fn toggle_open_side_is_redundant() {
        let mut panel = panel(SplitAxis::Vertical, PanelVisibility::Second);
        let (outcome, _) = panel.toggle_panel(PanelSlot::Second, None);
        assert!(matches!(
            outcome.diagnostic(),
            Some(PanelDiagnostic::RedundantTransition {
                operation: PanelOperation::Toggle,
                reason: RedundantTransition::AlreadyOpen,
                ..
            })
        ));
    }

    #[test]
    fn config_errors_surface_at_construction() {
        let config = SplitPanelConfig::default().gutter_extent(0);
        assert_eq!(
            SplitPanel::<()>::horizontal(config).unwrap_err(),
            SplitPanelConfigError::ZeroGutter
        );
    }

    // =====================================================================
    // Geometry and drag
    // =====================================================================

    #[test]
    fn layout_before_measurement_uses_initial_sizes() {
        let panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
        assert_eq!(panel.geometry().measured(), None);
        let layout = panel.layout();
        assert_eq!(layout.first, Some(Rect::new(0, 0, 250, 300)));
        assert_eq!(layout.second, Some(Rect::new(250, 0, 250, 300)));
        let divider = layout.divider.unwrap();
        assert_eq!(divider.rect, Rect::new(240, 0, 20, 300));
        assert_eq!(divider.emphasis, DividerEmphasis::Rest);
    }

    #[test]
    fn single_region_fills_container() {
        let panel = panel(SplitAxis::Vertical, PanelVisibility::Second);
        let layout = panel.layout();
        assert_eq!(layout.first, None);
        assert_eq!(layout.second, Some(Rect::new(0, 0, 500, 300)));
        assert_eq!(layout.divider, None);
    }

    #[test]
    fn nothing_mounted_lays_out_nothing() {
        let mut panel = panel(SplitAxis::Vertical, PanelVisibility::Both);
        assert!(panel.close_panel(PanelTarget::Both).is_applied());
        assert_eq!(panel.layout(), SplitLayout::default());
        assert!(panel.pointer_down(250, 150).is_noop());
    }

    #[test]
    fn drag_moves_divider_and_snaps() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
        assert_eq!(panel.pointer_down(250, 10), DragEffect::Started { offset: 250 });
        assert_eq!(panel.cursor_hint(), CursorHint::ColResize);
        assert_eq!(panel.pointer_move(300, 10), DragEffect::Moved { offset: 300 });
        assert_eq!(panel.sizes(), PanelSizes::new(300, 200));
        panel.pointer_move(30, 10);
        assert_eq!(panel.sizes(), PanelSizes::new(0, 500));
        assert_eq!(
            panel.layout().divider.unwrap().emphasis,
            DividerEmphasis::Active
        );
        assert!(matches!(panel.pointer_up(30, 10), DragEffect::Ended { .. }));
        assert_eq!(panel.cursor_hint(), CursorHint::Default);
        // Collapsed but still mounted.
        assert_eq!(panel.current_visibility(), PanelVisibility::Both);
        assert_eq!(panel.layout().first, Some(Rect::new(0, 0, 0, 300)));
    }

    #[test]
    fn vertical_drag_uses_y() {
        let mut panel = panel(SplitAxis::Vertical, PanelVisibility::Both);
        // Divider centered at y = 150.
        assert!(panel.pointer_down(400, 3).is_noop());
        assert!(matches!(
            panel.pointer_down(400, 150),
            DragEffect::Started { .. }
        ));
        assert_eq!(panel.cursor_hint(), CursorHint::RowResize);
        panel.pointer_move(0, 100);
        assert_eq!(panel.sizes(), PanelSizes::new(100, 200));
    }

    #[test]
    fn closing_a_side_ends_the_drag() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
        panel.pointer_down(250, 0);
        panel.close_panel(PanelTarget::Second);
        assert!(!panel.is_dragging());
        assert!(panel.pointer_move(100, 0).is_noop());
        assert!(panel.drag_resize(100).is_noop());
    }

    #[test]
    fn hover_tracks_divider() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
        panel.pointer_move(245, 5);
        assert_eq!(
            panel.layout().divider.unwrap().emphasis,
            DividerEmphasis::Hover
        );
        let revision = panel.revision();
        panel.pointer_move(246, 5);
        assert_eq!(panel.revision(), revision);
        panel.handle_mouse(&MouseEvent::new(MouseEventKind::Exited, 600, 5));
        assert_eq!(
            panel.layout().divider.unwrap().emphasis,
            DividerEmphasis::Rest
        );
    }

    #[test]
    fn release_away_from_moved_divider_drops_hover() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
        panel.pointer_move(245, 5);
        panel.pointer_down(250, 5);
        panel.pointer_move(100, 5);
        // Out of band: the divider stays at 100.
        assert!(panel.pointer_move(495, 5).is_noop());
        let revision = panel.revision();
        panel.handle_mouse(&MouseEvent::new(
            MouseEventKind::Up(MouseButton::Left),
            495,
            5,
        ));
        assert!(panel.revision() > revision);
        let divider = panel.layout().divider.unwrap();
        assert_eq!(divider.rect, Rect::new(90, 0, 20, 300));
        assert_eq!(divider.emphasis, DividerEmphasis::Rest);
    }

    #[test]
    fn release_over_moved_divider_keeps_hover() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
        panel.pointer_down(250, 5);
        panel.pointer_move(100, 5);
        panel.pointer_up(100, 5);
        assert_eq!(
            panel.layout().divider.unwrap().emphasis,
            DividerEmphasis::Hover
        );
    }

    #[test]
    fn right_button_does_not_start_drag() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
        let effect = panel.handle_mouse(&MouseEvent::new(
            MouseEventKind::Down(MouseButton::Right),
            250,
            0,
        ));
        assert_eq!(
            effect,
            DragEffect::Noop {
                reason: DragNoopReason::UnhandledButton
            }
        );
        assert!(!panel.is_dragging());
    }

    #[test]
    fn divider_clips_at_container_edges() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
        panel.pointer_down(250, 0);
        panel.drag_resize(0);
        panel.pointer_up(0, 0);
        assert_eq!(panel.layout().divider.unwrap().rect, Rect::new(0, 0, 10, 300));
    }

    #[test]
    fn container_offset_shifts_everything() {
        let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
        assert!(panel.observe_container(Rect::new(100, 40, 500, 300)));
        let layout = panel.layout();
        assert_eq!(layout.first, Some(Rect::new(100, 40, 250, 300)));
        assert_eq!(layout.second, Some(Rect::new(350, 40, 250, 300)));
        assert!(matches!(
            panel.pointer_down(350, 100),
            DragEffect::Started { offset: 250 }
        ));
        // Outside [gutter/2, extent - gutter/2] along x.
        assert!(panel.pointer_move(105, 100).is_noop());
        assert_eq!(panel.geometry().measured(), None);
    }

    #[test]
    fn fixed_second_reconciles_on_resize() {
        let config = SplitPanelConfig::default()
            .fixed_panel(PanelSlot::Second)
            .initial_sizes(SizeSpec::Percentage(70.0), SizeSpec::Percentage(30.0));
        let mut panel: SplitPanel<()> = SplitPanel::vertical(config).unwrap();
        panel.observe_container(Rect::from_size(100, 1000));
        assert_eq!(panel.sizes(), PanelSizes::new(700, 300));
        panel.pointer_down(50, 700);
        panel.pointer_move(50, 600);
        panel.pointer_up(50, 600);
        panel.observe_container(Rect::from_size(100, 800));
        assert_eq!(panel.sizes(), PanelSizes::new(400, 400));
    }

    // =====================================================================
    // Diagnostics
    // =====================================================================

    #[test]
    fn redundant_transition_is_logged() {
        let events = with_captured_tracing(|| {
            let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
            panel.open_panel(PanelTarget::First);
        });
        let redundant: Vec<_> = events
            .iter()
            .filter(|e| {
                e.target == "panekit.panel"
                    && e.fields
                        .get("message")
                        .is_some_and(|m| m.contains("redundant"))
            })
            .collect();
        assert_eq!(redundant.len(), 1);
        assert_eq!(redundant[0].level, tracing::Level::DEBUG);
        assert_eq!(redundant[0].fields.get("panel").unwrap(), "left");
        assert_eq!(redundant[0].fields.get("operation").unwrap(), "open");
    }

    #[test]
    fn invalid_target_is_warned() {
        let events = with_captured_tracing(|| {
            let mut panel = panel(SplitAxis::Horizontal, PanelVisibility::Both);
            panel.open_panel_named("top");
        });
        let warned: Vec<_> = events
            .iter()
            .filter(|e| e.level == tracing::Level::WARN && e.target == "panekit.panel")
            .collect();
        assert_eq!(warned.len(), 1);
        assert_eq!(warned[0].fields.get("panel").unwrap(), "top");
    }
}
