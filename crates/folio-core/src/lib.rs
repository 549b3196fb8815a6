#![forbid(unsafe_code)]

//! Core: spring motion and pointer tracking for the Folio custom cursor.
//!
//! # Role in Folio
//! `folio-core` is the input layer. The host forwards pointer events and a
//! description of the element under the pointer; [`PointerTracker`] turns
//! them into per-frame [`CursorFrame`]s for a dot and a trailing ring.
//!
//! # Primary responsibilities
//! - **Classification**: is the pointer over something clickable or a text
//!   field ([`PointerTarget`]).
//! - **Motion**: damped spring followers ([`animation::spring`]).
//! - **Appearance**: indicator size, scale, and opacity per frame.
//!
//! Enable the `serde` feature to load [`TrackerConfig`] from configuration.

pub mod animation;
pub mod pointer;

pub use animation::{Spring, SpringParams, SpringPoint};
pub use pointer::{
    CursorFrame, ElementInfo, HoverState, IndicatorStyle, PointerTarget, PointerTracker,
    TrackerConfig,
};
