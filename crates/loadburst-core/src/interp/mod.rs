//! Interpolation math: easing polynomials and cubic Bézier point evaluation.

pub mod functions;

pub use functions::{
    cubic_bezier, ease_in_back, ease_in_back_with, ease_in_cubic, ease_in_out_cubic,
    ease_out_cubic, BACK_OVERSHOOT,
};
