//! Shared fakes for driver tests: a surface that records every call and a
//! scheduler that counts re-arms.

use loadburst_core::{Color, DrawSurface, FrameScheduler};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ClearRect { x: f32, y: f32, w: f32, h: f32 },
    SetFill(Color),
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    FillPie { cx: f32, cy: f32, r: f32, start: f32, end: f32 },
    FillCircle { cx: f32, cy: f32, r: f32 },
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    Rotate(f32),
    Scale { sx: f32, sy: f32 },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| matches(c)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(Call::ClearRect { x, y, w, h });
    }
    fn set_fill(&mut self, color: Color) {
        self.calls.push(Call::SetFill(color));
    }
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(Call::FillRect { x, y, w, h });
    }
    fn fill_pie(&mut self, cx: f32, cy: f32, r: f32, start: f32, end: f32) {
        self.calls.push(Call::FillPie { cx, cy, r, start, end });
    }
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32) {
        self.calls.push(Call::FillCircle { cx, cy, r });
    }
    fn save(&mut self) {
        self.calls.push(Call::Save);
    }
    fn restore(&mut self) {
        self.calls.push(Call::Restore);
    }
    fn translate(&mut self, dx: f32, dy: f32) {
        self.calls.push(Call::Translate { dx, dy });
    }
    fn rotate(&mut self, angle: f32) {
        self.calls.push(Call::Rotate(angle));
    }
    fn scale(&mut self, sx: f32, sy: f32) {
        self.calls.push(Call::Scale { sx, sy });
    }
}

#[derive(Default)]
pub struct CountingScheduler {
    pub requests: usize,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}
