//! Burst particle: a small rotated rectangle riding a cubic Bézier path
//! under ease-out timing, fluttering by oscillating its vertical scale.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::data::{Color, Point};
use crate::interp::{cubic_bezier, ease_out_cubic};
use crate::surface::DrawSurface;

/// Flutter oscillations over one particle lifetime.
const RIPPLE_CYCLES: f32 = 10.0;

#[derive(Clone, Debug)]
pub struct Particle {
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,

    time: f32,
    duration: f32,
    color: Color,

    width: f32,
    height: f32,

    pos: Point,
    rotation: f32,
    scale_y: f32,
    complete: bool,
}

impl Particle {
    /// `duration` must be finite and positive; driver-spawned particles get
    /// theirs from the validated config range.
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point, duration: f32, color: Color) -> Self {
        assert!(
            duration.is_finite() && duration > 0.0,
            "particle duration must be finite and > 0"
        );
        Self {
            p0,
            p1,
            p2,
            p3,
            time: 0.0,
            duration,
            color,
            width: 8.0,
            height: 6.0,
            pos: p0,
            rotation: 0.0,
            scale_y: 0.0,
            complete: false,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Advance by `dt` (clamped so `time` lands exactly on `duration`),
    /// move along the curve, and derive heading and flutter from the step.
    pub fn update(&mut self, dt: f32) {
        self.time = self.duration.min(self.time + dt);

        let f = ease_out_cubic(self.time, 0.0, 1.0, self.duration);
        let p = cubic_bezier(self.p0, self.p1, self.p2, self.p3, f);

        let dx = p.x - self.pos.x;
        let dy = p.y - self.pos.y;

        self.rotation = dy.atan2(dx) + FRAC_PI_2;
        self.scale_y = (PI * f * RIPPLE_CYCLES).sin();
        self.pos = p;

        self.complete = self.time == self.duration;
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.save();
        surface.translate(self.pos.x, self.pos.y);
        surface.rotate(self.rotation);
        surface.scale(1.0, self.scale_y);

        surface.set_fill(self.color);
        surface.fill_rect(
            -self.width * 0.5,
            -self.height * 0.5,
            self.width,
            self.height,
        );

        surface.restore();
    }
}
