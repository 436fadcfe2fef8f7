//! Collapse effect between loading and burst: a filled circle shrinking to
//! nothing under back-in easing, which bumps the radius slightly past its
//! start before the snap.

use crate::data::{Color, Point};
use crate::interp::ease_in_back;
use crate::surface::DrawSurface;

#[derive(Clone, Debug)]
pub struct Exploder {
    center: Point,
    start_radius: f32,
    time: f32,
    duration: f32,
    progress: f32,
    complete: bool,
}

impl Exploder {
    /// `duration` must be finite and positive (Config::validate enforces
    /// this for driver-owned instances).
    pub fn new(center: Point, start_radius: f32, duration: f32) -> Self {
        assert!(
            duration.is_finite() && duration > 0.0,
            "exploder duration must be finite and > 0"
        );
        Self {
            center,
            start_radius,
            time: 0.0,
            duration,
            progress: 0.0,
            complete: false,
        }
    }

    /// Advance by `dt`, clamped so `time` lands exactly on `duration`.
    pub fn update(&mut self, dt: f32) {
        self.time = self.duration.min(self.time + dt);
        self.progress = ease_in_back(self.time, 0.0, 1.0, self.duration);
        self.complete = self.time == self.duration;
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
        self.progress = 0.0;
        self.complete = false;
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Radius as drawn this frame.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.start_radius * (1.0 - self.progress)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_fill(Color::BLACK);
        surface.fill_circle(self.center.x, self.center.y, self.radius());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_exactly_at_duration() {
        let mut ex = Exploder::new(Point::new(0.0, 0.0), 24.0, 0.4);
        // The clamp lands the accumulator exactly on `duration` once the
        // running sum meets it, so equality is safe to assert.
        for _ in 0..16 {
            ex.update(0.025);
        }
        assert!(ex.is_complete());
        assert_eq!(ex.progress(), 1.0);
        assert_eq!(ex.radius(), 0.0);
    }

    #[test]
    fn back_easing_overshoots_start_radius_early() {
        let mut ex = Exploder::new(Point::new(0.0, 0.0), 24.0, 0.4);
        ex.update(0.05);
        // progress dips negative early under back-in, so radius > start.
        assert!(ex.progress() < 0.0);
        assert!(ex.radius() > 24.0);
    }

    #[test]
    fn reset_clears_state() {
        let mut ex = Exploder::new(Point::new(0.0, 0.0), 24.0, 0.4);
        ex.update(1.0);
        assert!(ex.is_complete());
        ex.reset();
        assert!(!ex.is_complete());
        assert_eq!(ex.progress(), 0.0);
        assert_eq!(ex.radius(), 24.0);
    }
}
