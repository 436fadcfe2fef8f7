//! Geometric and color primitives shared across entities.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// 2D point; doubles as a particle position and a Bézier control point.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Opaque fill color (no alpha; the surface does no blending).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform sample over the 24-bit RGB cube.
    pub fn random(rng: &mut impl Rng) -> Self {
        let rgb: u32 = rng.gen_range(0..0x0100_0000);
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }
}
