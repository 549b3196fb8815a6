#![forbid(unsafe_code)]

//! Derive a full light/dark preset from one base color.
//!
//! Light mode puts tertiary one step above secondary and card one step below.
//! Dark mode inverts the direction with asymmetric offsets (-5 / +3), since
//! small steps read as larger contrast at low luminance.

use crate::color::{HexError, adjust_brightness, parse_hex, to_dark_variant};
use crate::palette::{CUSTOM_PRESET_NAME, ColorTriple, PalettePreset};

const LIGHT_TERTIARY_STEP: i32 = 5;
const LIGHT_CARD_STEP: i32 = -5;
const DARK_TERTIARY_STEP: i32 = -5;
const DARK_CARD_STEP: i32 = 3;

/// Build a `"Custom"` preset from `base`.
///
/// `base` is expected to be a valid `#RRGGBB` color; use [`try_generate`]
/// when it comes straight from user input. The light secondary tone keeps
/// `base` exactly as given.
#[must_use]
pub fn generate(base: &str) -> PalettePreset {
    let dark_base = to_dark_variant(base);
    PalettePreset::new(
        CUSTOM_PRESET_NAME,
        ColorTriple::new(
            base,
            adjust_brightness(base, LIGHT_TERTIARY_STEP),
            adjust_brightness(base, LIGHT_CARD_STEP),
        ),
        ColorTriple::new(
            dark_base.clone(),
            adjust_brightness(&dark_base, DARK_TERTIARY_STEP),
            adjust_brightness(&dark_base, DARK_CARD_STEP),
        ),
    )
}

/// Validate `base` before generating.
pub fn try_generate(base: &str) -> Result<PalettePreset, HexError> {
    parse_hex(base)?;
    Ok(generate(base))
}

/// Regenerate with a brightness offset applied to `base` first.
///
/// Always derived from the original base, so moving a slider from +10 to +20
/// yields `generate(adjust_brightness(base, 20))`, never a compounded value.
#[must_use]
pub fn generate_with_offset(base: &str, offset: i32) -> PalettePreset {
    generate(&adjust_brightness(base, offset))
}
