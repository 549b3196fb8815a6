#![forbid(unsafe_code)]

//! Platform-neutral mapping from Folio state to CSS.
//!
//! Kept free of `web-sys` so it can be tested natively.

use folio_core::{CursorFrame, ElementInfo, IndicatorStyle, PointerTarget};
use folio_style::{ColorTriple, ThemeMode, ToneSlot};

/// Class toggled on `<html>` in dark mode.
pub const DARK_CLASS: &str = "dark";

/// Media query for the host's dark color-scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `(property, value)` pairs to set on the root element.
#[must_use]
pub fn tone_declarations(triple: &ColorTriple) -> Vec<(&'static str, String)> {
    triple
        .iter()
        .map(|(slot, hex)| (slot.css_property(), hex.to_owned()))
        .collect()
}

/// Properties removed on reset.
#[must_use]
pub fn tone_properties() -> [&'static str; 3] {
    ToneSlot::ALL.map(ToneSlot::css_property)
}

/// Whether the root element should carry [`DARK_CLASS`].
#[must_use]
pub fn wants_dark_class(mode: ThemeMode) -> bool {
    mode.is_dark()
}

/// Inline style for one cursor indicator, centered on its position.
#[must_use]
pub fn indicator_style(style: &IndicatorStyle) -> String {
    format!(
        "transform: translate({x:.2}px, {y:.2}px) translate(-50%, -50%) scale({scale}); \
         width: {size}px; height: {size}px; opacity: {opacity}; \
         transition: width {ms}ms, height {ms}ms, opacity {ms}ms;",
        x = style.x,
        y = style.y,
        scale = style.scale,
        size = style.size,
        opacity = style.opacity,
        ms = style.transition.as_millis(),
    )
}

/// Flatten a frame for a typed array:
/// `[dot x, y, size, scale, opacity, ring x, y, size, scale, opacity]`.
#[must_use]
pub fn frame_to_array(frame: &CursorFrame) -> [f64; 10] {
    let d = &frame.dot;
    let r = &frame.ring;
    [
        d.x, d.y, d.size, d.scale, d.opacity, r.x, r.y, r.size, r.scale, r.opacity,
    ]
}

/// Build a [`PointerTarget`] from what a DOM event handler can cheaply read.
///
/// `ancestor_roles` pairs with `ancestor_tags` by index; empty strings mean
/// no role.
#[must_use]
pub fn pointer_target(
    tag: &str,
    role: Option<&str>,
    cursor: &str,
    ancestor_tags: &[String],
    ancestor_roles: &[String],
) -> PointerTarget {
    let mut target = PointerTarget::new(tag).with_cursor(cursor);
    if let Some(role) = role.filter(|r| !r.is_empty()) {
        target = target.with_role(role);
    }
    for (idx, ancestor_tag) in ancestor_tags.iter().enumerate() {
        let mut info = ElementInfo::new(ancestor_tag.as_str());
        if let Some(role) = ancestor_roles.get(idx).filter(|r| !r.is_empty()) {
            info = info.with_role(role.as_str());
        }
        target = target.with_ancestor(info);
    }
    target
}
