#![forbid(unsafe_code)]

//! Light/dark mode store.
//!
//! Two states, one transition ([`ThemeModeStore::toggle`]). The mode is
//! persisted as the bare string `"light"` or `"dark"`.
//!
//! Until [`ThemeModeStore::mount`] runs, the store reports the configured
//! default and [`ThemeModeStore::is_mounted`] is false; controls that
//! depend on the real mode (the toggle icon) render a neutral placeholder
//! until then so the first paint never flashes the wrong state.

use std::cell::Cell;
use std::rc::Rc;

use folio_style::ThemeMode;
use tracing::{debug, info, warn};

use crate::config::AppearanceConfig;
use crate::reactive::{Observable, Subscription};
use crate::storage::StorageBackend;

/// Shared handle to the current mode. Clones observe the same state.
#[derive(Clone)]
pub struct ThemeModeStore {
    mode: Observable<ThemeMode>,
    mounted: Rc<Cell<bool>>,
    storage: Rc<dyn StorageBackend>,
    key: Rc<str>,
    config: Rc<AppearanceConfig>,
}

impl std::fmt::Debug for ThemeModeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeModeStore")
            .field("mode", &self.mode())
            .field("mounted", &self.is_mounted())
            .field("storage", &self.storage.name())
            .field("key", &self.key)
            .finish()
    }
}

impl ThemeModeStore {
    #[must_use]
    pub fn new(storage: Rc<dyn StorageBackend>, config: &AppearanceConfig) -> Self {
        Self {
            mode: Observable::new(config.default_mode),
            mounted: Rc::new(Cell::new(false)),
            storage,
            key: Rc::from(config.mode_storage_key.as_str()),
            config: Rc::new(config.clone()),
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Resolve the starting mode: persisted value, then the host's
    /// color-scheme preference, then the configured default. Idempotent.
    pub fn mount(&self, system_preference: Option<ThemeMode>) -> ThemeMode {
        if self.is_mounted() {
            return self.mode();
        }
        let mode = self
            .load()
            .unwrap_or_else(|| self.config.initial_mode(system_preference));
        self.mounted.set(true);
        self.mode.set(mode);
        info!(%mode, "theme mode mounted");
        mode
    }

    /// Flip the mode, notify subscribers, and persist. Returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let mode = self.mode().toggled();
        debug!(%mode, "theme mode toggled");
        self.mode.set(mode);
        self.persist(mode);
        mode
    }

    /// Run `callback` with each new mode, until the guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(ThemeMode) + 'static) -> Subscription {
        self.mode.subscribe(move |mode| callback(*mode))
    }

    /// Incremented on every mode change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.mode.version()
    }

    fn load(&self) -> Option<ThemeMode> {
        match self.storage.get(&self.key) {
            Ok(Some(raw)) => match raw.parse::<ThemeMode>() {
                Ok(mode) => Some(mode),
                Err(err) => {
                    warn!(key = %self.key, error = %err, "ignoring persisted theme mode");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(
                    key = %self.key,
                    storage = self.storage.name(),
                    error = %err,
                    "failed to read theme mode"
                );
                None
            }
        }
    }

    fn persist(&self, mode: ThemeMode) {
        if let Err(err) = self.storage.set(&self.key, mode.as_str()) {
            warn!(
                key = %self.key,
                storage = self.storage.name(),
                error = %err,
                "failed to persist theme mode"
            );
        }
    }
}
