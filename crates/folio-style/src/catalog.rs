#![forbid(unsafe_code)]

//! Built-in palette presets.
//!
//! The catalog is fixed at compile time and never mutated. Dark triples are
//! authored by hand for contrast rather than derived from the light ones, so
//! they differ from what [`crate::generator::generate`] would produce.
//!
//! Authored order is preserved everywhere (swatch grids lay presets out in
//! [`PresetId::ALL`] order).

use std::sync::OnceLock;

use crate::palette::{ColorTriple, PalettePreset};

/// Built-in preset identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetId {
    SageGreen,
    WarmBeige,
    /// Default.
    DustyRose,
    SoftBlue,
    Lavender,
    Mint,
    Peach,
    Slate,
}

impl PresetId {
    pub const ALL: [PresetId; 8] = [
        PresetId::SageGreen,
        PresetId::WarmBeige,
        PresetId::DustyRose,
        PresetId::SoftBlue,
        PresetId::Lavender,
        PresetId::Mint,
        PresetId::Peach,
        PresetId::Slate,
    ];

    pub const DEFAULT: PresetId = PresetId::DustyRose;

    pub const fn index(self) -> usize {
        match self {
            PresetId::SageGreen => 0,
            PresetId::WarmBeige => 1,
            PresetId::DustyRose => 2,
            PresetId::SoftBlue => 3,
            PresetId::Lavender => 4,
            PresetId::Mint => 5,
            PresetId::Peach => 6,
            PresetId::Slate => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        ENTRIES[self.index()].name
    }

    pub const fn from_index(idx: usize) -> Self {
        Self::ALL[idx % Self::ALL.len()]
    }

    /// Look up by display name: exact match first, then ASCII
    /// case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.name() == name)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|id| id.name().eq_ignore_ascii_case(name))
            })
    }

    #[must_use]
    pub fn preset(self) -> &'static PalettePreset {
        &presets()[self.index()]
    }
}

struct PresetEntry {
    name: &'static str,
    light: [&'static str; 3],
    dark: [&'static str; 3],
}

// [secondary, tertiary, card]
const ENTRIES: [PresetEntry; 8] = [
    PresetEntry {
        name: "Sage Green",
        light: ["#C9D2C5", "#D4DDD0", "#BFC9BB"],
        dark: ["#2A3328", "#1F2620", "#232A22"],
    },
    PresetEntry {
        name: "Warm Beige",
        light: ["#D4C4B0", "#DED0BE", "#CEBFA9"],
        dark: ["#332A22", "#28211A", "#2D251E"],
    },
    PresetEntry {
        name: "Dusty Rose",
        light: ["#D4C4C9", "#DED0D4", "#CEBABF"],
        dark: ["#332A2D", "#282125", "#2D2427"],
    },
    PresetEntry {
        name: "Soft Blue",
        light: ["#C4CDD4", "#D0D9DE", "#BAC4CC"],
        dark: ["#222A33", "#1A2128", "#1E252D"],
    },
    PresetEntry {
        name: "Lavender",
        light: ["#CFC9D4", "#D9D0DE", "#C5BFCC"],
        dark: ["#2A2833", "#211F28", "#25232D"],
    },
    PresetEntry {
        name: "Mint",
        light: ["#C5D4CF", "#D0DED8", "#BBCEC6"],
        dark: ["#223330", "#1A2825", "#1E2D2A"],
    },
    PresetEntry {
        name: "Peach",
        light: ["#D4CFC5", "#DED9D0", "#CEC5BB"],
        dark: ["#33302A", "#282521", "#2D2A25"],
    },
    PresetEntry {
        name: "Slate",
        light: ["#CBCDD0", "#D6D8DB", "#C2C4C7"],
        dark: ["#282A2D", "#1F2123", "#232527"],
    },
];

static CATALOG: OnceLock<[PalettePreset; 8]> = OnceLock::new();

fn triple([secondary, tertiary, card]: [&str; 3]) -> ColorTriple {
    ColorTriple::new(secondary, tertiary, card)
}

/// All built-in presets in authored order.
pub fn presets() -> &'static [PalettePreset] {
    CATALOG.get_or_init(|| {
        ENTRIES.map(|entry| PalettePreset::new(entry.name, triple(entry.light), triple(entry.dark)))
    })
}

/// The preset in effect when nothing has been chosen or persisted.
pub fn default_preset() -> &'static PalettePreset {
    PresetId::DEFAULT.preset()
}

/// Find a built-in preset by name (see [`PresetId::from_name`]).
pub fn find(name: &str) -> Option<&'static PalettePreset> {
    PresetId::from_name(name).map(PresetId::preset)
}

/// Position of a named preset in authored order.
pub fn position(name: &str) -> Option<usize> {
    PresetId::from_name(name).map(PresetId::index)
}
