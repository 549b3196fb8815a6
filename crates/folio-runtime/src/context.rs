#![forbid(unsafe_code)]

//! Application-scoped container that owns both stores.
//!
//! Created once at startup and passed (or cloned) to every consumer. It
//! wires the palette store to the mode store so a toggle re-applies tones
//! inside the same `toggle()` call.
//!
//! # Lifecycle
//!
//! 1. [`AppearanceContext::new`]: stores exist, nothing is painted.
//! 2. [`AppearanceContext::mount`]: mode resolved, palette hydrated, surface
//!    painted exactly once.
//! 3. User actions through [`theme`](AppearanceContext::theme) and
//!    [`appearance`](AppearanceContext::appearance).

use std::rc::Rc;

use folio_core::PointerTracker;
use folio_style::ThemeMode;
use tracing::info;

use crate::appearance::AppearanceStore;
use crate::config::AppearanceConfig;
use crate::reactive::Subscription;
use crate::storage::StorageBackend;
use crate::surface::SurfaceSink;
use crate::theme_mode::ThemeModeStore;

#[derive(Debug, Clone)]
pub struct AppearanceContext {
    config: Rc<AppearanceConfig>,
    theme: ThemeModeStore,
    appearance: AppearanceStore,
    _mode_binding: Rc<Subscription>,
}

impl AppearanceContext {
    /// Build both stores over shared storage and surface.
    #[must_use]
    pub fn new(
        config: AppearanceConfig,
        storage: Rc<dyn StorageBackend>,
        surface: Rc<dyn SurfaceSink>,
    ) -> Self {
        let theme = ThemeModeStore::new(Rc::clone(&storage), &config);
        let appearance = AppearanceStore::new(storage, surface, &config, theme.mode());
        let binding = appearance.bind_mode(&theme);
        Self {
            config: Rc::new(config),
            theme,
            appearance,
            _mode_binding: Rc::new(binding),
        }
    }

    /// Resolve the mode and restore the palette. Idempotent.
    pub fn mount(&self, system_preference: Option<ThemeMode>) {
        if self.is_mounted() {
            return;
        }
        let mode = self.theme.mount(system_preference);
        let restored = self.appearance.hydrate();
        info!(%mode, restored, "appearance mounted");
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.theme.is_mounted() && self.appearance.is_hydrated()
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeModeStore {
        &self.theme
    }

    #[must_use]
    pub fn appearance(&self) -> &AppearanceStore {
        &self.appearance
    }

    #[must_use]
    pub fn config(&self) -> &AppearanceConfig {
        &self.config
    }

    /// Cursor tracker configured from this context.
    #[must_use]
    pub fn pointer_tracker(&self, is_touch: bool) -> PointerTracker {
        PointerTracker::for_device(self.config.cursor, is_touch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::surface::{MemorySurface, SurfaceWrite};
    use folio_style::PresetId;

    fn context(storage: &MemoryStorage, surface: &MemorySurface) -> AppearanceContext {
        AppearanceContext::new(
            AppearanceConfig::default(),
            Rc::new(storage.clone()),
            Rc::new(surface.clone()),
        )
    }

    #[test]
    fn nothing_painted_before_mount() {
        let surface = MemorySurface::new();
        let ctx = context(&MemoryStorage::new(), &surface);
        assert!(!ctx.is_mounted());
        assert!(surface.history().is_empty());
    }

    #[test]
    fn selection_before_mount_waits_for_persisted_mode() {
        let storage = MemoryStorage::with_entries([("theme", "dark")]);
        let surface = MemorySurface::new();
        let ctx = context(&storage, &surface);
        let mint = PresetId::Mint.preset();

        ctx.appearance().select_preset(mint);
        assert!(surface.history().is_empty());

        ctx.mount(None);
        assert_eq!(
            surface.history(),
            vec![
                SurfaceWrite::Mode(ThemeMode::Dark),
                SurfaceWrite::Tones(mint.dark.clone()),
            ]
        );
    }

    #[test]
    fn mount_paints_once_for_resolved_mode() {
        let surface = MemorySurface::new();
        let ctx = context(&MemoryStorage::new(), &surface);
        ctx.mount(Some(ThemeMode::Dark));
        ctx.mount(Some(ThemeMode::Light));

        assert!(ctx.is_mounted());
        assert_eq!(ctx.appearance().mode(), ThemeMode::Dark);
        assert_eq!(surface.tone_writes(), 1);
        assert_eq!(
            surface.tones().as_ref(),
            Some(&PresetId::DustyRose.preset().dark)
        );
    }

    #[test]
    fn toggle_reapplies_in_same_call() {
        let surface = MemorySurface::new();
        let ctx = context(&MemoryStorage::new(), &surface);
        ctx.mount(None);
        ctx.appearance().select_preset(PresetId::SoftBlue.preset());
        surface.clear_history();

        ctx.theme().toggle();
        assert_eq!(
            surface.history(),
            vec![
                SurfaceWrite::Mode(ThemeMode::Dark),
                SurfaceWrite::Tones(PresetId::SoftBlue.preset().dark.clone()),
            ]
        );
    }

    #[test]
    fn clones_share_stores_and_binding() {
        let surface = MemorySurface::new();
        let ctx = context(&MemoryStorage::new(), &surface);
        let handle = ctx.clone();
        drop(ctx);
        handle.mount(None);
        handle.theme().toggle();
        assert_eq!(handle.appearance().mode(), ThemeMode::Dark);
    }

    #[test]
    fn pointer_tracker_respects_touch() {
        let ctx = context(&MemoryStorage::new(), &MemorySurface::new());
        assert!(ctx.pointer_tracker(false).is_enabled());
        assert!(!ctx.pointer_tracker(true).is_enabled());
    }
}
