#![forbid(unsafe_code)]

//! Change-notifying state shared by the stores.

pub mod observable;

pub use observable::{Observable, Subscription};
