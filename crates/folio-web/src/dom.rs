#![forbid(unsafe_code)]

//! `web-sys` implementations of the runtime's storage and surface traits.

use folio_runtime::{StorageBackend, StorageError, StorageResult, SurfaceSink};
use folio_style::{ColorTriple, ThemeMode};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Storage, Window};

use crate::css::{DARK_CLASS, DARK_SCHEME_QUERY, tone_declarations, tone_properties, wants_dark_class};

fn js_error(context: &str, err: &JsValue) -> StorageError {
    StorageError::Unavailable(format!("{context}: {err:?}"))
}

fn window() -> Option<Window> {
    web_sys::window()
}

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Fails when there is no window or the browser blocks storage access.
    pub fn open() -> StorageResult<Self> {
        let window =
            window().ok_or_else(|| StorageError::Unavailable("no global window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|err| js_error("localStorage access denied", &err))?
            .ok_or_else(|| StorageError::Unavailable("localStorage not present".into()))?;
        Ok(Self { storage })
    }
}

impl StorageBackend for LocalStorage {
    fn name(&self) -> &str {
        "localStorage"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|err| js_error("getItem failed", &err))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| js_error("setItem failed", &err))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|err| js_error("removeItem failed", &err))
    }
}

/// Writes tones as CSS custom properties on `document.documentElement`
/// and toggles its `dark` class.
#[derive(Debug, Clone)]
pub struct CssSurface {
    root: HtmlElement,
}

impl CssSurface {
    /// `None` outside a document (workers, server rendering).
    #[must_use]
    pub fn from_document() -> Option<Self> {
        let root = window()?
            .document()?
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self { root })
    }

    #[must_use]
    pub fn new(root: HtmlElement) -> Self {
        Self { root }
    }
}

impl SurfaceSink for CssSurface {
    fn set_tones(&self, triple: &ColorTriple) {
        let style = self.root.style();
        for (property, value) in tone_declarations(triple) {
            if let Err(err) = style.set_property(property, &value) {
                warn!(property, error = ?err, "failed to set tone property");
            }
        }
    }

    fn clear_tones(&self) {
        let style = self.root.style();
        for property in tone_properties() {
            if let Err(err) = style.remove_property(property) {
                warn!(property, error = ?err, "failed to remove tone property");
            }
        }
    }

    fn set_mode(&self, mode: ThemeMode) {
        if let Err(err) = self
            .root
            .class_list()
            .toggle_with_force(DARK_CLASS, wants_dark_class(mode))
        {
            warn!(%mode, error = ?err, "failed to toggle dark class");
        }
    }
}

/// The host's `prefers-color-scheme`, if it can be read.
#[must_use]
pub fn system_theme_preference() -> Option<ThemeMode> {
    let query = window()?.match_media(DARK_SCHEME_QUERY).ok()??;
    Some(if query.matches() {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    })
}

/// Touch-capable device: `ontouchstart` exists or the navigator reports
/// touch points. Treated as touch when undetectable.
#[must_use]
pub fn is_touch_device() -> bool {
    let Some(window) = window() else {
        return true;
    };
    let has_touch_handler =
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_touch_handler || window.navigator().max_touch_points() > 0
}
