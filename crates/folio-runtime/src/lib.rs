#![forbid(unsafe_code)]

//! Folio Runtime
//!
//! Stateful half of the appearance engine: the light/dark mode store, the
//! active palette store, persistence, and the surface the palette is
//! painted on.
//!
//! # Key Components
//!
//! - [`ThemeModeStore`] - persisted light/dark mode with synchronous toggle
//! - [`AppearanceStore`] - active preset, custom colors, brightness, reset
//! - [`AppearanceContext`] - app-scoped container wiring the two stores
//! - [`StorageBackend`] - key/value persistence ([`MemoryStorage`], [`FileStorage`])
//! - [`SurfaceSink`] - where tone slots are written ([`MemorySurface`])
//! - [`AppearanceConfig`] - TOML/JSON configuration
//!
//! # Role in Folio
//! `folio-runtime` sits between the pure color math in `folio-style` and a
//! host (the browser bindings in `folio-web`, or a native previewer). Hosts
//! supply storage and a surface; the stores decide what goes in them.

pub mod appearance;
pub mod config;
pub mod context;
pub mod logging;
pub mod reactive;
pub mod storage;
pub mod surface;
pub mod theme_mode;

pub use appearance::{AppearanceState, AppearanceStore};
pub use config::{
    AppearanceConfig, ConfigError, DEFAULT_MODE_STORAGE_KEY, DEFAULT_STORAGE_KEY,
};
pub use context::AppearanceContext;
#[cfg(feature = "log-init")]
pub use logging::{LoggingError, init_logging};
pub use logging::LoggingConfig;
pub use reactive::{Observable, Subscription};
pub use storage::{
    FileStorage, MemoryStorage, StorageBackend, StorageError, StorageResult, UnavailableStorage,
};
pub use surface::{MemorySurface, SurfaceSink, SurfaceWrite};
pub use theme_mode::ThemeModeStore;
