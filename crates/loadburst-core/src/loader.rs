//! Radial loading indicator: a pie wedge sweeping clockwise from 12 o'clock.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::data::{Color, Point};
use crate::surface::DrawSurface;

#[derive(Clone, Debug)]
pub struct Loader {
    center: Point,
    radius: f32,
    progress: f32,
    complete: bool,
}

impl Loader {
    pub fn new(center: Point, radius: f32) -> Self {
        Self {
            center,
            radius,
            progress: 0.0,
            complete: false,
        }
    }

    /// Clamp-then-store; complete exactly when the stored value is 1.0.
    pub fn set_progress(&mut self, p: f32) {
        self.progress = p.clamp(0.0, 1.0);
        self.complete = self.progress == 1.0;
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.complete = false;
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_fill(Color::BLACK);
        surface.fill_pie(
            self.center.x,
            self.center.y,
            self.radius,
            -FRAC_PI_2,
            TAU * self.progress - FRAC_PI_2,
        );
    }
}
