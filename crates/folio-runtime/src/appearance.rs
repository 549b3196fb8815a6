#![forbid(unsafe_code)]

//! Active palette store.
//!
//! # Design
//!
//! [`AppearanceStore`] owns the active [`PalettePreset`], the base color it
//! was derived from, the brightness offset, and whether the preset came from
//! a user-picked color. Every mutation goes through the same pipeline:
//!
//! ```text
//! mutate state ──► apply active.triple(mode) to the surface ──► persist
//! ```
//!
//! It is the only writer of the three tone slots on the [`SurfaceSink`].
//! Until [`AppearanceStore::hydrate`] runs the mode is not settled, so
//! actions update state and storage but leave the surface untouched; the
//! first paint belongs to `hydrate`.
//!
//! # Brightness
//!
//! Offsets never compound. The base is the last color chosen explicitly
//! (a catalog preset's light secondary, or the custom color) and every
//! slider change regenerates from it, so moving +10 then +20 yields the same
//! preset as moving straight to +20.
//!
//! # Failure Modes
//!
//! - **Malformed color**: custom-color calls return `false` and change
//!   nothing.
//! - **Storage errors**: logged at `warn` and swallowed; in-memory state
//!   stays authoritative for the session.
//! - **Corrupt record**: hydrate logs and keeps the default preset.

use std::cell::Cell;
use std::ops::RangeInclusive;
use std::rc::Rc;

use folio_style::{
    CUSTOM_PRESET_NAME, ColorTriple, PalettePreset, ThemeMode, generate, generate_with_offset,
    is_hex_draft, is_valid_hex,
};
use tracing::{debug, info, warn};

use crate::config::{AppearanceConfig, DEFAULT_BRIGHTNESS_MAX, DEFAULT_BRIGHTNESS_MIN};
use crate::reactive::{Observable, Subscription};
use crate::storage::{StorageBackend, StorageError};
use crate::surface::SurfaceSink;
use crate::theme_mode::ThemeModeStore;

/// Snapshot of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppearanceState {
    pub preset: PalettePreset,
    /// Color that brightness offsets are computed from.
    pub base_color: String,
    /// Contents of the custom-color text field; may be a partial draft.
    pub custom_color: String,
    pub brightness: i32,
    pub is_custom: bool,
}

impl AppearanceState {
    fn from_preset(preset: &PalettePreset) -> Self {
        Self {
            preset: preset.clone(),
            base_color: preset.light.secondary.clone(),
            custom_color: preset.light.secondary.clone(),
            brightness: 0,
            is_custom: false,
        }
    }
}

struct AppearanceInner {
    state: Observable<AppearanceState>,
    mode: Cell<ThemeMode>,
    hydrated: Cell<bool>,
    storage: Rc<dyn StorageBackend>,
    surface: Rc<dyn SurfaceSink>,
    storage_key: String,
    default_preset: PalettePreset,
    brightness_range: RangeInclusive<i32>,
}

/// Shared handle to the active palette. Clones observe the same state.
#[derive(Clone)]
pub struct AppearanceStore {
    inner: Rc<AppearanceInner>,
}

impl std::fmt::Debug for AppearanceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppearanceStore")
            .field("state", &self.state())
            .field("mode", &self.mode())
            .field("hydrated", &self.is_hydrated())
            .field("storage", &self.inner.storage.name())
            .finish()
    }
}

impl AppearanceStore {
    /// A store holding the configured default preset. Nothing is written to
    /// the surface until [`hydrate`](Self::hydrate) or a user action.
    #[must_use]
    pub fn new(
        storage: Rc<dyn StorageBackend>,
        surface: Rc<dyn SurfaceSink>,
        config: &AppearanceConfig,
        mode: ThemeMode,
    ) -> Self {
        let default_preset = config.default_preset().clone();
        Self {
            inner: Rc::new(AppearanceInner {
                state: Observable::new(AppearanceState::from_preset(&default_preset)),
                mode: Cell::new(mode),
                hydrated: Cell::new(false),
                storage,
                surface,
                storage_key: config.storage_key.clone(),
                default_preset,
                brightness_range: checked_brightness_range(config),
            }),
        }
    }

    // ── Queries ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> AppearanceState {
        self.inner.state.get()
    }

    #[must_use]
    pub fn active_preset(&self) -> PalettePreset {
        self.inner.state.with(|s| s.preset.clone())
    }

    #[must_use]
    pub fn base_color(&self) -> String {
        self.inner.state.with(|s| s.base_color.clone())
    }

    /// Current text-field value for the custom color input.
    #[must_use]
    pub fn custom_color(&self) -> String {
        self.inner.state.with(|s| s.custom_color.clone())
    }

    #[must_use]
    pub fn brightness(&self) -> i32 {
        self.inner.state.with(|s| s.brightness)
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.inner.state.with(|s| s.is_custom)
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.inner.mode.get()
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.inner.hydrated.get()
    }

    #[must_use]
    pub fn brightness_range(&self) -> RangeInclusive<i32> {
        self.inner.brightness_range.clone()
    }

    /// The triple for the current mode.
    #[must_use]
    pub fn current_tones(&self) -> ColorTriple {
        let mode = self.mode();
        self.inner.state.with(|s| s.preset.triple(mode).clone())
    }

    /// Hex value offered by the "copy color" control: the visible
    /// secondary tone.
    #[must_use]
    pub fn copy_value(&self) -> String {
        self.current_tones().secondary
    }

    /// Run `callback` after every state change, until the guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(&AppearanceState) + 'static) -> Subscription {
        self.inner.state.subscribe(callback)
    }

    // ── Actions ─────────────────────────────────────────────────────────

    /// Make `preset` active and persist it.
    pub fn select_preset(&self, preset: &PalettePreset) {
        debug!(preset = %preset.name, "preset selected");
        self.commit(AppearanceState::from_preset(preset));
    }

    /// Generate and activate a preset from a user-picked color.
    ///
    /// Returns `false` and changes nothing unless `hex` is a complete
    /// `#RRGGBB` value.
    pub fn select_custom_color(&self, hex: &str) -> bool {
        if !is_valid_hex(hex) {
            debug!(input = hex, "ignoring malformed custom color");
            return false;
        }
        debug!(base = hex, "custom color selected");
        self.commit(AppearanceState {
            preset: generate(hex),
            base_color: hex.to_owned(),
            custom_color: hex.to_owned(),
            brightness: 0,
            is_custom: true,
        });
        true
    }

    /// Feed one keystroke's worth of the custom-color text field.
    ///
    /// Partial values like `"#C9"` are kept as the field contents; a
    /// complete value commits through
    /// [`select_custom_color`](Self::select_custom_color). Returns `false`
    /// when the draft is rejected outright (wrong characters or too long).
    pub fn set_custom_draft(&self, draft: &str) -> bool {
        if !is_hex_draft(draft) {
            return false;
        }
        if is_valid_hex(draft) {
            return self.select_custom_color(draft);
        }
        self.inner.state.update(|s| s.custom_color = draft.to_owned());
        true
    }

    /// Regenerate from the base color with a brightness offset (percent).
    ///
    /// The offset is clamped to the configured range. Returns the offset
    /// actually applied.
    pub fn set_brightness(&self, offset: i32) -> i32 {
        let range = self.brightness_range();
        let clamped = offset.clamp(*range.start(), *range.end());
        let mut next = self.state();
        next.preset = generate_with_offset(&next.base_color, clamped);
        next.brightness = clamped;
        debug!(requested = offset, applied = clamped, base = %next.base_color, "brightness changed");
        self.commit(next);
        clamped
    }

    /// Return to the default preset and forget the persisted record.
    ///
    /// Surface overrides are cleared first, then the default triple is
    /// written so the surface always holds a complete palette.
    pub fn reset_to_default(&self) {
        let inner = &self.inner;
        inner
            .state
            .set(AppearanceState::from_preset(&inner.default_preset));
        if let Err(err) = inner.storage.remove(&inner.storage_key) {
            warn!(
                key = %inner.storage_key,
                storage = inner.storage.name(),
                error = %err,
                "failed to remove persisted palette"
            );
        }
        if self.is_hydrated() {
            inner.surface.clear_tones();
            self.apply_to_surface(inner.default_preset.triple(self.mode()));
        }
        info!(preset = %inner.default_preset.name, "palette reset to default");
    }

    /// Write `triple` to the tone slots.
    pub fn apply_to_surface(&self, triple: &ColorTriple) {
        self.inner.surface.set_tones(triple);
    }

    /// Re-apply the active preset for `mode`. The preset itself is
    /// unchanged. Before hydration only the mode is recorded.
    pub fn on_mode_changed(&self, mode: ThemeMode) {
        self.inner.mode.set(mode);
        if !self.is_hydrated() {
            return;
        }
        debug!(%mode, "re-applying palette for mode");
        self.inner.surface.set_mode(mode);
        self.apply_to_surface(&self.current_tones());
    }

    /// Follow `modes`: adopt its current mode now and re-apply on every
    /// toggle, synchronously inside the toggle call.
    pub fn bind_mode(&self, modes: &ThemeModeStore) -> Subscription {
        let current = modes.mode();
        if current != self.mode() {
            self.on_mode_changed(current);
        }
        let store = self.clone();
        modes.subscribe(move |mode| store.on_mode_changed(mode))
    }

    /// Restore the persisted preset, or keep the default when there is none,
    /// then paint the surface. Returns `true` if a record was restored.
    pub fn hydrate(&self) -> bool {
        let restored = self.load();
        let found = restored.is_some();
        if let Some(preset) = restored {
            let is_custom = preset.name == CUSTOM_PRESET_NAME;
            let mut state = AppearanceState::from_preset(&preset);
            state.is_custom = is_custom;
            self.inner.state.set(state);
            info!(preset = %preset.name, is_custom, "palette restored");
        }
        self.inner.hydrated.set(true);
        self.inner.surface.set_mode(self.mode());
        self.apply_to_surface(&self.current_tones());
        found
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn commit(&self, next: AppearanceState) {
        let preset = next.preset.clone();
        self.inner.state.set(next);
        if self.is_hydrated() {
            self.apply_to_surface(preset.triple(self.mode()));
        }
        self.persist(&preset);
    }

    fn persist(&self, preset: &PalettePreset) {
        let inner = &self.inner;
        let result = serde_json::to_string(preset)
            .map_err(StorageError::from)
            .and_then(|json| inner.storage.set(&inner.storage_key, &json));
        if let Err(err) = result {
            warn!(
                key = %inner.storage_key,
                storage = inner.storage.name(),
                error = %err,
                "failed to persist palette"
            );
        }
    }

    fn load(&self) -> Option<PalettePreset> {
        let inner = &self.inner;
        let raw = match inner.storage.get(&inner.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(
                    key = %inner.storage_key,
                    storage = inner.storage.name(),
                    error = %err,
                    "failed to read persisted palette"
                );
                return None;
            }
        };
        match serde_json::from_str::<PalettePreset>(&raw) {
            Ok(preset) if preset.is_well_formed() => Some(preset),
            Ok(preset) => {
                warn!(preset = %preset.name, "ignoring persisted palette with malformed tones");
                None
            }
            Err(err) => {
                warn!(error = %err, "ignoring corrupt persisted palette");
                None
            }
        }
    }
}

/// The configured slider range, or the stock one when the bounds are
/// inverted.
fn checked_brightness_range(config: &AppearanceConfig) -> RangeInclusive<i32> {
    let range = config.brightness_range();
    if range.start() <= range.end() {
        return range;
    }
    warn!(
        min = config.brightness_min,
        max = config.brightness_max,
        "inverted brightness range, using defaults"
    );
    DEFAULT_BRIGHTNESS_MIN..=DEFAULT_BRIGHTNESS_MAX
}
