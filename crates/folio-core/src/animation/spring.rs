#![forbid(unsafe_code)]

//! Damped spring followers for pointer indicators.
//!
//! Each axis is a damped harmonic oscillator:
//!
//!   a = -stiffness × (position - target) - damping × velocity
//!
//! integrated with semi-implicit Euler. Frame deltas longer than
//! [`MAX_STEP_SECS`] are subdivided so stiff springs stay stable when a tab
//! is backgrounded and the next frame arrives late.
//!
//! # Invariants
//!
//! 1. Stiffness is at least [`MIN_STIFFNESS`]; damping is non-negative.
//! 2. A spring at rest stays put until its target moves.
//! 3. Snapping to rest sets position to the target and zeroes velocity.

use std::time::Duration;

/// Largest integration step, in seconds.
pub const MAX_STEP_SECS: f64 = 0.004;

/// Minimum stiffness; lower values never converge in practice.
pub const MIN_STIFFNESS: f64 = 0.1;

/// Position delta (px) below which a spring may come to rest.
const DEFAULT_REST_THRESHOLD: f64 = 0.01;

/// Speed (px/s) below which a spring may come to rest.
const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.1;

/// Stiffness/damping pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringParams {
    /// Tight follower for the cursor dot.
    pub const DOT: SpringParams = SpringParams {
        stiffness: 300.0,
        damping: 25.0,
    };

    /// Looser, trailing follower for the cursor ring.
    pub const RING: SpringParams = SpringParams {
        stiffness: 150.0,
        damping: 20.0,
    };

    #[must_use]
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping }
    }
}

/// One-dimensional spring.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    rest_threshold: f64,
    velocity_threshold: f64,
    at_rest: bool,
}

impl Spring {
    /// A spring resting at `position`.
    #[must_use]
    pub fn new(position: f64, params: SpringParams) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            stiffness: params.stiffness.max(MIN_STIFFNESS),
            damping: params.damping.max(0.0),
            rest_threshold: DEFAULT_REST_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            at_rest: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    #[must_use]
    pub fn params(&self) -> SpringParams {
        SpringParams::new(self.stiffness, self.damping)
    }

    /// Move the target. Wakes the spring if the change is noticeable.
    pub fn set_target(&mut self, target: f64) {
        if (self.target - target).abs() > self.rest_threshold {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Jump straight to `position` and rest there.
    pub fn snap_to(&mut self, position: f64) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance by `dt`, subdividing for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }

        if (self.position - self.target).abs() < self.rest_threshold
            && self.velocity.abs() < self.velocity_threshold
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

/// Two independent springs sharing parameters: a point that chases a
/// target point.
#[derive(Debug, Clone)]
pub struct SpringPoint {
    x: Spring,
    y: Spring,
}

impl SpringPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, params: SpringParams) -> Self {
        Self {
            x: Spring::new(x, params),
            y: Spring::new(y, params),
        }
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x.position(), self.y.position())
    }

    #[must_use]
    pub fn target(&self) -> (f64, f64) {
        (self.x.target(), self.y.target())
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn snap_to(&mut self, x: f64, y: f64) {
        self.x.snap_to(x);
        self.y.snap_to(y);
    }

    pub fn advance(&mut self, dt: Duration) {
        self.x.advance(dt);
        self.y.advance(dt);
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    #[must_use]
    pub fn params(&self) -> SpringParams {
        self.x.params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.advance(FRAME);
        }
    }

    #[test]
    fn new_spring_rests_at_start() {
        let spring = Spring::new(12.0, SpringParams::DOT);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 12.0);
        assert_eq!(spring.target(), 12.0);
    }

    #[test]
    fn converges_to_target() {
        let mut spring = Spring::new(0.0, SpringParams::DOT);
        spring.set_target(400.0);
        assert!(!spring.is_at_rest());
        run(&mut spring, 240);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 400.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn ring_trails_dot() {
        let mut dot = Spring::new(0.0, SpringParams::DOT);
        let mut ring = Spring::new(0.0, SpringParams::RING);
        dot.set_target(100.0);
        ring.set_target(100.0);
        run(&mut dot, 3);
        run(&mut ring, 3);
        assert!(dot.position() > ring.position());
    }

    #[test]
    fn tiny_target_change_does_not_wake() {
        let mut spring = Spring::new(5.0, SpringParams::RING);
        spring.set_target(5.001);
        assert!(spring.is_at_rest());
        assert_eq!(spring.target(), 5.0);
    }

    #[test]
    fn large_dt_is_stable() {
        let mut spring = Spring::new(0.0, SpringParams::new(1_000.0, 10.0));
        spring.set_target(50.0);
        spring.advance(Duration::from_secs(5));
        assert!(spring.position().is_finite());
        assert!((spring.position() - 50.0).abs() < 1.0);
    }

    #[test]
    fn parameters_are_clamped() {
        let spring = Spring::new(0.0, SpringParams::new(-3.0, -1.0));
        assert_eq!(spring.params(), SpringParams::new(MIN_STIFFNESS, 0.0));
    }

    #[test]
    fn cursor_presets_are_underdamped() {
        // 2√300 ≈ 34.6, 2√150 ≈ 24.5
        for params in [SpringParams::DOT, SpringParams::RING] {
            assert!(params.damping < 2.0 * params.stiffness.sqrt());
        }
    }

    #[test]
    fn snap_discards_motion() {
        let mut spring = Spring::new(0.0, SpringParams::DOT);
        spring.set_target(10.0);
        spring.advance(FRAME);
        spring.snap_to(3.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 3.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn point_moves_both_axes() {
        let mut point = SpringPoint::new(0.0, 0.0, SpringParams::DOT);
        point.set_target(30.0, -20.0);
        for _ in 0..240 {
            point.advance(FRAME);
        }
        assert!(point.is_at_rest());
        assert_eq!(point.position(), (30.0, -20.0));
        assert_eq!(point.target(), (30.0, -20.0));
    }
}
