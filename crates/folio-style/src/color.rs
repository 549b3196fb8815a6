#![forbid(unsafe_code)]

//! Hex color parsing and the channel arithmetic used to derive palettes.
//!
//! Two layers live here:
//!
//! - [`parse_hex`] and [`Rgb`] form the typed seam. Malformed input is
//!   reported as a [`HexError`] so callers can tell *why* a value was
//!   rejected.
//! - [`adjust_brightness`] and [`to_dark_variant`] operate on strings and
//!   never fail. Anything that does not parse as `#RRGGBB` comes back
//!   verbatim.
//!
//! # Rounding
//!
//! Channel offsets and scale factors round half up (`floor(x + 0.5)`), so
//! `-25.5` becomes `-25` and `76.5` becomes `77`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Channel units added per brightness percent (`255 / 100`).
pub const BRIGHTNESS_STEP: f64 = 2.55;

/// Fraction of each channel kept by [`to_dark_variant`].
pub const DARK_VARIANT_SCALE: f64 = 0.18;

/// Number of hex digits in a complete `#RRGGBB` value.
const HEX_DIGITS: usize = 6;

/// Why a string was rejected as a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("color value is empty")]
    Empty,
    #[error("color value must start with '#'")]
    MissingHash,
    #[error("expected 6 hex digits, found {0}")]
    BadLength(usize),
    #[error("invalid hex digit {0:?}")]
    BadDigit(char),
}

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Add `amount` to every channel, saturating at 0 and 255.
    #[must_use]
    pub fn offset(self, amount: i32) -> Self {
        let shift = |channel: u8| (i32::from(channel) + amount).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }

    /// Multiply every channel by `factor`, rounding half up and saturating.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        let scale = |channel: u8| round_half_up(f64::from(channel) * factor).clamp(0, 255) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Sum of the three channels. Used as a cheap darkness ordering.
    #[must_use]
    pub const fn channel_sum(self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

/// Parse a `#RRGGBB` color (digits are case-insensitive).
pub fn parse_hex(input: &str) -> Result<Rgb, HexError> {
    if input.is_empty() {
        return Err(HexError::Empty);
    }
    let digits = input.strip_prefix('#').ok_or(HexError::MissingHash)?;
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::BadDigit(bad));
    }
    if digits.len() != HEX_DIGITS {
        return Err(HexError::BadLength(digits.len()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| HexError::BadLength(digits.len()))
    };
    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Whether `input` is a complete, well-formed `#RRGGBB` color.
#[must_use]
pub fn is_valid_hex(input: &str) -> bool {
    parse_hex(input).is_ok()
}

/// Whether `input` is a color still being typed: `#` followed by up to six
/// hex digits. Complete colors are drafts too.
#[must_use]
pub fn is_hex_draft(input: &str) -> bool {
    input.strip_prefix('#').is_some_and(|digits| {
        digits.len() <= HEX_DIGITS && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

/// Channel offset for a brightness change of `percent`.
#[must_use]
pub fn brightness_amount(percent: i32) -> i32 {
    round_half_up(BRIGHTNESS_STEP * f64::from(percent))
}

/// Lighten (positive `percent`) or darken (negative) every channel by
/// `round(2.55 * percent)`. Malformed input is returned unchanged.
#[must_use]
pub fn adjust_brightness(hex: &str, percent: i32) -> String {
    match parse_hex(hex) {
        Ok(rgb) => rgb.offset(brightness_amount(percent)).to_hex(),
        Err(error) => {
            tracing::trace!(input = hex, %error, "brightness adjustment skipped");
            hex.to_string()
        }
    }
}

/// Low-luminance counterpart of a light tone: each channel scaled to 18%.
/// Malformed input is returned unchanged.
///
/// Not a fixed point: applying it to an already dark color darkens it
/// further, down to black.
#[must_use]
pub fn to_dark_variant(hex: &str) -> String {
    match parse_hex(hex) {
        Ok(rgb) => rgb.scale(DARK_VARIANT_SCALE).to_hex(),
        Err(error) => {
            tracing::trace!(input = hex, %error, "dark variant skipped");
            hex.to_string()
        }
    }
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
