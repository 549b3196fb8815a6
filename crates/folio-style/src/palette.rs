#![forbid(unsafe_code)]

//! Palette vocabulary: tone triples, presets, surface slots, and theme mode.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::is_valid_hex;

/// Name carried by every preset derived from a user-picked base color.
pub const CUSTOM_PRESET_NAME: &str = "Custom";

/// Light or dark rendering of the whole visual surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Persisted scalar form: `"light"` or `"dark"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored mode value that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode {0:?}")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

/// One of the three background roles composited across the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneSlot {
    Secondary,
    Tertiary,
    Card,
}

impl ToneSlot {
    pub const ALL: [ToneSlot; 3] = [ToneSlot::Secondary, ToneSlot::Tertiary, ToneSlot::Card];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Card => "card",
        }
    }

    /// CSS custom property that stylesheets read this slot from.
    #[must_use]
    pub const fn css_property(self) -> &'static str {
        match self {
            Self::Secondary => "--color-bg-secondary",
            Self::Tertiary => "--color-bg-tertiary",
            Self::Card => "--color-bg-card",
        }
    }
}

/// Three layered background tones for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTriple {
    pub secondary: String,
    pub tertiary: String,
    pub card: String,
}

impl ColorTriple {
    #[must_use]
    pub fn new(
        secondary: impl Into<String>,
        tertiary: impl Into<String>,
        card: impl Into<String>,
    ) -> Self {
        Self {
            secondary: secondary.into(),
            tertiary: tertiary.into(),
            card: card.into(),
        }
    }

    #[must_use]
    pub fn get(&self, slot: ToneSlot) -> &str {
        match slot {
            ToneSlot::Secondary => &self.secondary,
            ToneSlot::Tertiary => &self.tertiary,
            ToneSlot::Card => &self.card,
        }
    }

    /// Slots paired with their tones, in [`ToneSlot::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ToneSlot, &str)> {
        ToneSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// True when every tone is a complete `#RRGGBB` value.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.iter().all(|(_, tone)| is_valid_hex(tone))
    }
}

/// A named bundle of light and dark tone triples.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PalettePreset {
    pub name: String,
    pub light: ColorTriple,
    pub dark: ColorTriple,
}

impl PalettePreset {
    #[must_use]
    pub fn new(name: impl Into<String>, light: ColorTriple, dark: ColorTriple) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    /// The half of the preset visible in `mode`.
    #[must_use]
    pub fn triple(&self, mode: ThemeMode) -> &ColorTriple {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Whether this preset was derived from a user-picked base color.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.name == CUSTOM_PRESET_NAME
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.light.is_well_formed() && self.dark.is_well_formed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PalettePreset {
        PalettePreset::new(
            "Sage Green",
            ColorTriple::new("#C9D2C5", "#D4DDD0", "#BFC9BB"),
            ColorTriple::new("#2A3328", "#1F2620", "#232A22"),
        )
    }

    #[test]
    fn mode_toggles_between_two_states() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn mode_parses_persisted_scalar() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light\n".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn triple_selects_half_by_mode() {
        let preset = sample();
        assert_eq!(preset.triple(ThemeMode::Light).secondary, "#C9D2C5");
        assert_eq!(preset.triple(ThemeMode::Dark).secondary, "#2A3328");
    }

    #[test]
    fn slots_iterate_in_fixed_order() {
        let triple = sample().light;
        let slots: Vec<_> = triple.iter().collect();
        assert_eq!(
            slots,
            vec![
                (ToneSlot::Secondary, "#C9D2C5"),
                (ToneSlot::Tertiary, "#D4DDD0"),
                (ToneSlot::Card, "#BFC9BB"),
            ]
        );
        assert_eq!(ToneSlot::Card.css_property(), "--color-bg-card");
    }

    #[test]
    fn custom_flag_follows_name() {
        let mut preset = sample();
        assert!(!preset.is_custom());
        preset.name = CUSTOM_PRESET_NAME.to_string();
        assert!(preset.is_custom());
    }

    #[test]
    fn well_formed_rejects_partial_tones() {
        let mut preset = sample();
        assert!(preset.is_well_formed());
        preset.dark.card = "#23".to_string();
        assert!(!preset.is_well_formed());
    }
}
