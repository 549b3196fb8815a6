#![forbid(unsafe_code)]

//! Folio public facade crate.
//!
//! Re-exports the types a host needs from the internal crates, a top-level
//! [`Error`], and a prelude. Native hosts can use [`native::open`] to get a
//! mounted context backed by a config file and a JSON storage file.

// --- Style re-exports ------------------------------------------------------

pub use folio_style::{
    ColorTriple, HexError, PalettePreset, PresetId, Rgb, ThemeMode, ToneSlot, adjust_brightness,
    catalog, generate, generate_with_offset, parse_hex, to_dark_variant,
};

// --- Core re-exports -------------------------------------------------------

pub use folio_core::{CursorFrame, HoverState, PointerTarget, PointerTracker, TrackerConfig};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use folio_runtime::{
    AppearanceConfig, AppearanceContext, AppearanceState, AppearanceStore, ConfigError,
    FileStorage, MemoryStorage, MemorySurface, StorageBackend, StorageError, Subscription,
    SurfaceSink, ThemeModeStore,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Folio hosts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Color(#[from] HexError),
    #[cfg(feature = "runtime")]
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[cfg(feature = "runtime")]
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, Error>;

// --- Native bootstrap -----------------------------------------------------

#[cfg(feature = "runtime")]
pub mod native {
    //! File-backed setup for desktop previews and tooling.

    use std::path::Path;
    use std::rc::Rc;

    use tracing::warn;

    use crate::{
        AppearanceConfig, AppearanceContext, FileStorage, MemoryStorage, Result, StorageBackend,
        SurfaceSink, ThemeMode,
    };

    /// Load config (defaults when `config_path` is `None`), open storage,
    /// and mount.
    ///
    /// A config that fails to load or validate is an error. A storage file
    /// that cannot be opened is logged and replaced by in-memory storage,
    /// the same way the browser build handles disabled `localStorage`.
    pub fn open(
        config_path: Option<&Path>,
        storage_path: &Path,
        surface: Rc<dyn SurfaceSink>,
        system_preference: Option<ThemeMode>,
    ) -> Result<AppearanceContext> {
        let config = match config_path {
            Some(path) if is_json(path) => AppearanceConfig::from_json_file(path)?,
            Some(path) => AppearanceConfig::from_toml_file(path)?,
            None => AppearanceConfig::default(),
        };
        let storage: Rc<dyn StorageBackend> = match FileStorage::open(storage_path) {
            Ok(storage) => Rc::new(storage),
            Err(err) => {
                warn!(
                    path = %storage_path.display(),
                    error = %err,
                    "storage file unusable, falling back to memory"
                );
                Rc::new(MemoryStorage::new())
            }
        };
        let ctx = AppearanceContext::new(config, storage, surface);
        ctx.mount(system_preference);
        Ok(ctx)
    }

    fn is_json(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ColorTriple, Error, PalettePreset, PointerTarget, PointerTracker, PresetId, Result,
        ThemeMode,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{AppearanceConfig, AppearanceContext, AppearanceStore, ThemeModeStore};

    pub use crate::{core, style};

    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use folio_core as core;
#[cfg(feature = "runtime")]
pub use folio_runtime as runtime;
pub use folio_style as style;
