#![forbid(unsafe_code)]

//! Pointer tracking for the custom cursor.
//!
//! The host feeds raw pointer events (move, enter, leave) together with a
//! description of the element under the pointer. The tracker classifies the
//! target, drives two spring followers (a tight dot and a trailing ring),
//! and reports what each indicator should look like on the next frame.
//!
//! On touch devices the tracker is disabled: events are ignored and both
//! indicators report zero opacity.

use std::time::Duration;

use tracing::trace;

use crate::animation::spring::{SpringParams, SpringPoint};

/// Tag and ARIA role of one element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementInfo {
    pub tag: String,
    pub role: Option<String>,
}

impl ElementInfo {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            role: None,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    fn tag_is(&self, name: &str) -> bool {
        self.tag.eq_ignore_ascii_case(name)
    }

    fn is_interactive(&self) -> bool {
        self.tag_is("button")
            || self.tag_is("a")
            || self
                .role
                .as_deref()
                .is_some_and(|role| role.eq_ignore_ascii_case("button"))
    }
}

/// The element under the pointer, its computed `cursor` style, and its
/// ancestors from nearest to root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointerTarget {
    pub element: ElementInfo,
    pub cursor: String,
    pub ancestors: Vec<ElementInfo>,
}

impl PointerTarget {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            element: ElementInfo::new(tag),
            cursor: "auto".to_owned(),
            ancestors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.element.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }

    /// Append the next ancestor outward.
    #[must_use]
    pub fn with_ancestor(mut self, ancestor: ElementInfo) -> Self {
        self.ancestors.push(ancestor);
        self
    }

    /// The target or one of its ancestors is a button, a link, or has
    /// `role="button"`, or the computed cursor is `pointer`.
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.cursor == "pointer"
            || self.element.is_interactive()
            || self.ancestors.iter().any(ElementInfo::is_interactive)
    }

    /// The target is a text field, or the computed cursor is `text`.
    #[must_use]
    pub fn is_text_input(&self) -> bool {
        self.cursor == "text" || self.element.tag_is("input") || self.element.tag_is("textarea")
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        HoverState {
            clickable: self.is_clickable(),
            text_input: self.is_text_input(),
        }
    }
}

/// Classification of the last pointer target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    pub clickable: bool,
    pub text_input: bool,
}

/// Spring parameters for both followers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    pub dot: SpringParams,
    pub ring: SpringParams,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            dot: SpringParams::DOT,
            ring: SpringParams::RING,
        }
    }
}

/// Rendered state of one indicator for a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorStyle {
    /// Center, in viewport pixels.
    pub x: f64,
    pub y: f64,
    /// Diameter in pixels.
    pub size: f64,
    pub scale: f64,
    pub opacity: f64,
    /// Duration of the size/opacity transition.
    pub transition: Duration,
}

impl IndicatorStyle {
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Both indicators for a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    pub dot: IndicatorStyle,
    pub ring: IndicatorStyle,
}

const DOT_SIZE: f64 = 6.0;
const DOT_SIZE_CLICKABLE: f64 = 8.0;
const DOT_OPACITY: f64 = 1.0;
const DOT_TRANSITION: Duration = Duration::from_millis(150);

const RING_SIZE: f64 = 36.0;
const RING_SIZE_CLICKABLE: f64 = 50.0;
const RING_SCALE_CLICKABLE: f64 = 1.2;
const RING_OPACITY: f64 = 0.6;
const RING_TRANSITION: Duration = Duration::from_millis(200);

/// Pointer state plus the two spring followers.
///
/// Followers start at the viewport origin and chase the pointer from its
/// first reported position.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    enabled: bool,
    visible: bool,
    hover: HoverState,
    pointer: Option<(f64, f64)>,
    dot: SpringPoint,
    ring: SpringPoint,
}

impl PointerTracker {
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            enabled: true,
            visible: false,
            hover: HoverState::default(),
            pointer: None,
            dot: SpringPoint::new(0.0, 0.0, config.dot),
            ring: SpringPoint::new(0.0, 0.0, config.ring),
        }
    }

    /// Tracker for a device; touch devices get a permanently disabled one.
    #[must_use]
    pub fn for_device(config: TrackerConfig, is_touch: bool) -> Self {
        let mut tracker = Self::new(config);
        tracker.enabled = !is_touch;
        if is_touch {
            trace!("pointer tracker disabled on touch device");
        }
        tracker
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.enabled && self.visible
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn is_over_clickable(&self) -> bool {
        self.hover.clickable
    }

    #[must_use]
    pub fn is_over_text_input(&self) -> bool {
        self.hover.text_input
    }

    /// Last reported pointer position.
    #[must_use]
    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// Record a move sample. Shows the indicator and retargets both
    /// followers.
    pub fn on_move(&mut self, x: f64, y: f64, target: &PointerTarget) -> HoverState {
        if !self.enabled {
            return self.hover;
        }
        let hover = target.hover();
        if hover != self.hover {
            trace!(
                clickable = hover.clickable,
                text_input = hover.text_input,
                tag = %target.element.tag,
                "pointer hover changed"
            );
        }
        self.hover = hover;
        self.visible = true;
        self.pointer = Some((x, y));
        self.dot.set_target(x, y);
        self.ring.set_target(x, y);
        hover
    }

    pub fn on_enter(&mut self) {
        if self.enabled {
            self.visible = true;
        }
    }

    pub fn on_leave(&mut self) {
        self.visible = false;
    }

    /// Advance both followers by one frame.
    pub fn advance(&mut self, dt: Duration) {
        if !self.enabled {
            return;
        }
        self.dot.advance(dt);
        self.ring.advance(dt);
    }

    /// Both followers have settled on the pointer.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.dot.is_at_rest() && self.ring.is_at_rest()
    }

    #[must_use]
    pub fn frame(&self) -> CursorFrame {
        let shown = self.is_visible() && !self.hover.text_input;
        let clickable = self.hover.clickable;
        let (dot_x, dot_y) = self.dot.position();
        let (ring_x, ring_y) = self.ring.position();

        CursorFrame {
            dot: IndicatorStyle {
                x: dot_x,
                y: dot_y,
                size: if clickable { DOT_SIZE_CLICKABLE } else { DOT_SIZE },
                scale: 1.0,
                opacity: if shown { DOT_OPACITY } else { 0.0 },
                transition: DOT_TRANSITION,
            },
            ring: IndicatorStyle {
                x: ring_x,
                y: ring_y,
                size: if clickable { RING_SIZE_CLICKABLE } else { RING_SIZE },
                scale: if clickable { RING_SCALE_CLICKABLE } else { 1.0 },
                opacity: if shown { RING_OPACITY } else { 0.0 },
                transition: RING_TRANSITION,
            },
        }
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn plain_text_is_neither_clickable_nor_input() {
        let target = PointerTarget::new("P");
        assert_eq!(target.hover(), HoverState::default());
    }

    #[test]
    fn buttons_links_and_roles_are_clickable() {
        assert!(PointerTarget::new("BUTTON").is_clickable());
        assert!(PointerTarget::new("A").is_clickable());
        assert!(PointerTarget::new("div").with_role("button").is_clickable());
        assert!(PointerTarget::new("div").with_cursor("pointer").is_clickable());
    }

    #[test]
    fn clickable_ancestor_counts() {
        let target = PointerTarget::new("SPAN")
            .with_ancestor(ElementInfo::new("DIV"))
            .with_ancestor(ElementInfo::new("A"));
        assert!(target.is_clickable());

        let role_target =
            PointerTarget::new("SVG").with_ancestor(ElementInfo::new("DIV").with_role("button"));
        assert!(role_target.is_clickable());
    }

    #[test]
    fn text_fields_and_text_cursor_are_inputs() {
        assert!(PointerTarget::new("INPUT").is_text_input());
        assert!(PointerTarget::new("TEXTAREA").is_text_input());
        assert!(PointerTarget::new("P").with_cursor("text").is_text_input());
        assert!(!PointerTarget::new("SELECT").is_text_input());
    }

    #[test]
    fn hidden_until_first_move() {
        let mut tracker = PointerTracker::default();
        assert!(!tracker.is_visible());
        assert_eq!(tracker.frame().dot.opacity, 0.0);

        tracker.on_move(10.0, 20.0, &PointerTarget::new("MAIN"));
        assert!(tracker.is_visible());
        let frame = tracker.frame();
        assert_eq!(frame.dot.opacity, 1.0);
        assert_eq!(frame.ring.opacity, 0.6);
        assert_eq!(frame.dot.size, 6.0);
        assert_eq!(frame.ring.size, 36.0);
    }

    #[test]
    fn leave_and_enter_toggle_visibility() {
        let mut tracker = PointerTracker::default();
        tracker.on_move(1.0, 1.0, &PointerTarget::new("MAIN"));
        tracker.on_leave();
        assert!(!tracker.frame().ring.is_shown());
        tracker.on_enter();
        assert!(tracker.frame().ring.is_shown());
    }

    #[test]
    fn clickable_grows_indicators() {
        let mut tracker = PointerTracker::default();
        tracker.on_move(5.0, 5.0, &PointerTarget::new("BUTTON"));
        let frame = tracker.frame();
        assert_eq!(frame.dot.size, 8.0);
        assert_eq!(frame.ring.size, 50.0);
        assert_eq!(frame.ring.scale, 1.2);
        assert!(tracker.is_over_clickable());
    }

    #[test]
    fn text_input_hides_both_indicators() {
        let mut tracker = PointerTracker::default();
        tracker.on_move(5.0, 5.0, &PointerTarget::new("INPUT"));
        assert!(tracker.is_visible());
        assert!(tracker.is_over_text_input());
        let frame = tracker.frame();
        assert!(!frame.dot.is_shown());
        assert!(!frame.ring.is_shown());
    }

    #[test]
    fn touch_device_ignores_events() {
        let mut tracker = PointerTracker::for_device(TrackerConfig::default(), true);
        assert!(!tracker.is_enabled());
        tracker.on_move(50.0, 50.0, &PointerTarget::new("BUTTON"));
        tracker.on_enter();
        tracker.advance(FRAME);
        assert!(!tracker.is_visible());
        assert_eq!(tracker.pointer(), None);
        assert!(!tracker.is_over_clickable());
        assert_eq!(tracker.frame().dot.x, 0.0);
    }

    #[test]
    fn followers_converge_with_ring_lagging() {
        let mut tracker = PointerTracker::default();
        tracker.on_move(200.0, 100.0, &PointerTarget::new("MAIN"));
        tracker.advance(FRAME);
        tracker.advance(FRAME);
        let early = tracker.frame();
        assert!(early.dot.x > early.ring.x);

        for _ in 0..300 {
            tracker.advance(FRAME);
        }
        assert!(tracker.is_settled());
        let settled = tracker.frame();
        assert_eq!((settled.dot.x, settled.dot.y), (200.0, 100.0));
        assert_eq!((settled.ring.x, settled.ring.y), (200.0, 100.0));
    }

    #[test]
    fn transitions_match_indicator() {
        let frame = PointerTracker::default().frame();
        assert_eq!(frame.dot.transition, Duration::from_millis(150));
        assert_eq!(frame.ring.transition, Duration::from_millis(200));
    }
}
