use crate::error::TimelineResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_circle_count = frame.circles.len();
        self.last_text_count = frame.texts.len();
        self.render_count += 1;
        Ok(())
    }
}
