//! Easing helpers:
//! - cubic in/out/in-out (gizma-style `f(t, b, c, d)` signatures)
//! - back-in with configurable overshoot
//! - cubic Bézier point evaluation (per-axis expanded De Casteljau)
//!
//! All functions are pure. For t in [0, d] the output is continuous with
//! f(0) == b and f(d) == b + c exactly.

use crate::data::Point;

/// Default overshoot constant for [`ease_in_back`].
pub const BACK_OVERSHOOT: f32 = 1.70158;

/// Accelerating cubic: `c * (t/d)^3 + b`.
#[inline]
pub fn ease_in_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t + b
}

/// Decelerating cubic: `c * ((t/d - 1)^3 + 1) + b`.
#[inline]
pub fn ease_out_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

/// Accelerate to the midpoint, then decelerate (halved-duration branches).
#[inline]
pub fn ease_in_out_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

/// Back-in with the conventional overshoot constant.
#[inline]
pub fn ease_in_back(t: f32, b: f32, c: f32, d: f32) -> f32 {
    ease_in_back_with(t, b, c, d, BACK_OVERSHOOT)
}

/// Back-in: dips below `b` early (magnitude set by `s`), then snaps to `b + c`.
#[inline]
pub fn ease_in_back_with(t: f32, b: f32, c: f32, d: f32, s: f32) -> f32 {
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

/// Cubic Bézier point at parameter `t`, expected (not clamped) in [0, 1].
#[inline]
pub fn cubic_bezier(p0: Point, c0: Point, c1: Point, p1: Point, t: f32) -> Point {
    let nt = 1.0 - t;
    let w0 = nt * nt * nt;
    let w1 = 3.0 * nt * nt * t;
    let w2 = 3.0 * nt * t * t;
    let w3 = t * t * t;
    Point {
        x: w0 * p0.x + w1 * c0.x + w2 * c1.x + w3 * p1.x,
        y: w0 * p0.y + w1 * c0.y + w2 * c1.y + w3 * p1.y,
    }
}
