use crate::error::ChartResult;
use crate::render::{DrawCommand, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates every frame so tests catch invalid geometry, and keeps
/// the last frame around for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let (mut lines, mut rects, mut circles, mut texts) = (0, 0, 0, 0);
        for command in &frame.commands {
            match command {
                DrawCommand::Line(_) => lines += 1,
                DrawCommand::FillRect(_) | DrawCommand::StrokeRect(_) => rects += 1,
                DrawCommand::Circle(_) => circles += 1,
                DrawCommand::Text(_) => texts += 1,
            }
        }

        self.frames_rendered += 1;
        self.last_line_count = lines;
        self.last_rect_count = rects;
        self.last_circle_count = circles;
        self.last_text_count = texts;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
