//! Drawing surface contract.
//!
//! The core never touches a real canvas; entities issue immediate-mode
//! drawing calls against this trait and adapters map them onto the host
//! (HTML canvas 2D context, a software rasterizer, a test recorder).

use crate::data::Color;

/// Immediate-mode 2D surface with an affine transform stack.
///
/// Transform calls (`translate`/`rotate`/`scale`) compose onto the current
/// transform; `save`/`restore` push and pop it, canvas-style. Fill calls use
/// the color set by the latest `set_fill`.
pub trait DrawSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Filled wedge: arc of radius `r` from `start_angle` to `end_angle`
    /// (radians, clockwise, 0 = +x axis), closed back through the center.
    fn fill_pie(&mut self, cx: f32, cy: f32, r: f32, start_angle: f32, end_angle: f32);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn rotate(&mut self, angle: f32);
    fn scale(&mut self, sx: f32, sy: f32);
}

/// Surface that discards every call; drives the state machine headless.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn set_fill(&mut self, _color: Color) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn fill_pie(&mut self, _cx: f32, _cy: f32, _r: f32, _start_angle: f32, _end_angle: f32) {}
    fn fill_circle(&mut self, _cx: f32, _cy: f32, _r: f32) {}
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _dx: f32, _dy: f32) {}
    fn rotate(&mut self, _angle: f32) {}
    fn scale(&mut self, _sx: f32, _sy: f32) {}
}
