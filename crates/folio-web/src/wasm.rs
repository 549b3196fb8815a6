#![forbid(unsafe_code)]

//! JS-facing API.
//!
//! ```js
//! const folio = new FolioAppearance(null);
//! toggleButton.onclick = () => folio.toggleMode();
//! document.addEventListener("mousemove", (e) => folio.pointerMove(...));
//! ```

use std::rc::Rc;
use std::time::Duration;

use folio_core::PointerTracker;
use folio_runtime::{
    AppearanceConfig, AppearanceContext, StorageBackend, SurfaceSink, UnavailableStorage,
};
use folio_style::catalog;
use js_sys::Array;
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::css::{frame_to_array, indicator_style, pointer_target};
use crate::dom::{CssSurface, LocalStorage, is_touch_device, system_theme_preference};

/// Surface used when there is no document; paints nothing.
struct DetachedSurface;

impl SurfaceSink for DetachedSurface {
    fn set_tones(&self, _triple: &folio_style::ColorTriple) {}
}

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct FolioAppearance {
    ctx: AppearanceContext,
    tracker: PointerTracker,
}

#[wasm_bindgen]
impl FolioAppearance {
    /// Build and mount. `config_json` overrides defaults; pass `null` for
    /// the stock configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<FolioAppearance, JsValue> {
        let config = match config_json {
            Some(json) => AppearanceConfig::from_json_str(&json).map_err(js_err)?,
            None => AppearanceConfig::default(),
        };

        let storage: Rc<dyn StorageBackend> = match LocalStorage::open() {
            Ok(storage) => Rc::new(storage),
            Err(err) => {
                warn!(error = %err, "persistence disabled for this session");
                Rc::new(UnavailableStorage::new(err.to_string()))
            }
        };
        let surface: Rc<dyn SurfaceSink> = match CssSurface::from_document() {
            Some(surface) => Rc::new(surface),
            None => Rc::new(DetachedSurface),
        };

        let ctx = AppearanceContext::new(config, storage, surface);
        ctx.mount(system_theme_preference());
        let tracker = ctx.pointer_tracker(is_touch_device());
        Ok(Self { ctx, tracker })
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.ctx.is_mounted()
    }

    pub fn mode(&self) -> String {
        self.ctx.theme().mode().as_str().to_owned()
    }

    #[wasm_bindgen(js_name = toggleMode)]
    pub fn toggle_mode(&self) -> String {
        self.ctx.theme().toggle().as_str().to_owned()
    }

    #[wasm_bindgen(js_name = presetNames)]
    pub fn preset_names(&self) -> Array {
        catalog::presets()
            .iter()
            .map(|preset| JsValue::from_str(&preset.name))
            .collect()
    }

    #[wasm_bindgen(js_name = activePresetName)]
    pub fn active_preset_name(&self) -> String {
        self.ctx.appearance().active_preset().name
    }

    /// The active preset in its persisted JSON layout.
    #[wasm_bindgen(js_name = activePresetJson)]
    pub fn active_preset_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.ctx.appearance().active_preset()).map_err(js_err)
    }

    /// Returns `false` for names outside the catalog.
    #[wasm_bindgen(js_name = selectPreset)]
    pub fn select_preset(&self, name: &str) -> bool {
        match catalog::find(name) {
            Some(preset) => {
                self.ctx.appearance().select_preset(preset);
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = selectCustomColor)]
    pub fn select_custom_color(&self, hex: &str) -> bool {
        self.ctx.appearance().select_custom_color(hex)
    }

    #[wasm_bindgen(js_name = setCustomDraft)]
    pub fn set_custom_draft(&self, draft: &str) -> bool {
        self.ctx.appearance().set_custom_draft(draft)
    }

    #[wasm_bindgen(js_name = customColor)]
    pub fn custom_color(&self) -> String {
        self.ctx.appearance().custom_color()
    }

    #[wasm_bindgen(js_name = isCustom)]
    pub fn is_custom(&self) -> bool {
        self.ctx.appearance().is_custom()
    }

    #[wasm_bindgen(js_name = setBrightness)]
    pub fn set_brightness(&self, offset: i32) -> i32 {
        self.ctx.appearance().set_brightness(offset)
    }

    pub fn brightness(&self) -> i32 {
        self.ctx.appearance().brightness()
    }

    #[wasm_bindgen(js_name = brightnessMin)]
    pub fn brightness_min(&self) -> i32 {
        *self.ctx.appearance().brightness_range().start()
    }

    #[wasm_bindgen(js_name = brightnessMax)]
    pub fn brightness_max(&self) -> i32 {
        *self.ctx.appearance().brightness_range().end()
    }

    pub fn reset(&self) {
        self.ctx.appearance().reset_to_default();
    }

    /// Hex string for the "copy color" button.
    #[wasm_bindgen(js_name = copyValue)]
    pub fn copy_value(&self) -> String {
        self.ctx.appearance().copy_value()
    }

    // ── Cursor ──────────────────────────────────────────────────────────

    #[wasm_bindgen(js_name = cursorEnabled)]
    pub fn cursor_enabled(&self) -> bool {
        self.tracker.is_enabled()
    }

    /// Feed a `mousemove`. `ancestor_roles[i]` is the role of
    /// `ancestor_tags[i]` or `""`.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
        tag: &str,
        role: Option<String>,
        cursor: &str,
        ancestor_tags: Vec<String>,
        ancestor_roles: Vec<String>,
    ) {
        let target = pointer_target(tag, role.as_deref(), cursor, &ancestor_tags, &ancestor_roles);
        self.tracker.on_move(x, y, &target);
    }

    #[wasm_bindgen(js_name = pointerEnter)]
    pub fn pointer_enter(&mut self) {
        self.tracker.on_enter();
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) {
        self.tracker.on_leave();
    }

    /// Advance the followers; call from `requestAnimationFrame`.
    #[wasm_bindgen(js_name = advanceCursor)]
    pub fn advance_cursor(&mut self, dt_ms: f64) {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.tracker.advance(Duration::from_secs_f64(dt_ms / 1_000.0));
        }
    }

    /// `[dot x, y, size, scale, opacity, ring x, y, size, scale, opacity]`.
    #[wasm_bindgen(js_name = cursorFrame)]
    pub fn cursor_frame(&self) -> Vec<f64> {
        frame_to_array(&self.tracker.frame()).to_vec()
    }

    #[wasm_bindgen(js_name = dotStyle)]
    pub fn dot_style(&self) -> String {
        indicator_style(&self.tracker.frame().dot)
    }

    #[wasm_bindgen(js_name = ringStyle)]
    pub fn ring_style(&self) -> String {
        indicator_style(&self.tracker.frame().ring)
    }
}
