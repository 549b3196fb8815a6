#![forbid(unsafe_code)]

//! Browser bindings for the Folio appearance engine.
//!
//! On `wasm32` this crate provides:
//! - `LocalStorage`: `window.localStorage` as a `StorageBackend`.
//! - `CssSurface`: tone slots as CSS custom properties on `<html>`, plus the
//!   `dark` class.
//! - `system_theme_preference()` / `is_touch_device()`.
//! - `FolioAppearance`: the `wasm-bindgen` API the page scripts call.
//!
//! The CSS mapping in [`css`] is platform-neutral and builds natively.

pub mod css;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::{CssSurface, LocalStorage, is_touch_device, system_theme_preference};
#[cfg(target_arch = "wasm32")]
pub use wasm::FolioAppearance;

pub use css::{DARK_CLASS, DARK_SCHEME_QUERY};
