#![forbid(unsafe_code)]

//! Color and palette primitives for the Folio appearance engine.
//!
//! # Role in Folio
//! `folio-style` is the pure, stateless layer: hex parsing, brightness and
//! dark-variant arithmetic, the built-in preset catalog, and custom preset
//! generation. Nothing here touches storage or a rendering surface; the
//! stores in `folio-runtime` own those side effects.
//!
//! # This crate provides
//! - [`parse_hex`], [`adjust_brightness`], [`to_dark_variant`] color math.
//! - [`ColorTriple`], [`PalettePreset`], [`ToneSlot`], [`ThemeMode`].
//! - The preset catalog ([`catalog::presets`], [`PresetId`]).
//! - [`generate`] / [`generate_with_offset`] for custom presets.
//!
//! Enable the `serde` feature for (de)serialization of palette types.

/// Hex parsing and channel arithmetic.
pub mod color;
/// Built-in presets.
pub mod catalog;
/// Custom preset derivation.
pub mod generator;
/// Tone triples, presets, slots, and mode.
pub mod palette;

pub use catalog::{PresetId, default_preset};
pub use color::{
    BRIGHTNESS_STEP, DARK_VARIANT_SCALE, HexError, Rgb, adjust_brightness, is_hex_draft,
    is_valid_hex, parse_hex, to_dark_variant,
};
pub use generator::{generate, generate_with_offset, try_generate};
pub use palette::{
    CUSTOM_PRESET_NAME, ColorTriple, PalettePreset, ParseThemeModeError, ThemeMode, ToneSlot,
};
