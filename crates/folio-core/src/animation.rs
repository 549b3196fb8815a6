#![forbid(unsafe_code)]

//! Physically-based motion primitives.

pub mod spring;

pub use spring::{MAX_STEP_SECS, MIN_STIFFNESS, Spring, SpringParams, SpringPoint};
