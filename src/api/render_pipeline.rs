use tracing::trace;

use crate::core::{CoordinateMapper, WindowSnapshot};
use crate::interaction::{InspectedSample, InspectorCursor};
use crate::render::{
    CirclePrimitive, Color, DrawCommand, LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive,
};

use super::ChartConfiguration;

const AXIS_STROKE_WIDTH: f64 = 1.0;
const TICK_LENGTH_PX: f64 = 2.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;
const LABEL_LEFT_PX: f64 = 1.0;
const LABEL_RAISE_PX: f64 = 2.0;
const MARKER_RADIUS_PX: f64 = 2.0;
const INDEX_LABEL_OFFSET_X: f64 = 2.0;
const INDEX_LABEL_RAISE_PX: f64 = 3.0;

/// Inputs for one frame, captured after the sample lock was released.
#[derive(Debug, Clone, Copy)]
pub struct RenderInputs<'a> {
    pub config: &'a ChartConfiguration,
    pub snapshot: &'a WindowSnapshot,
    pub mapper: CoordinateMapper,
    pub inspector: InspectorCursor,
}

/// Builds the ordered draw list for one chart frame.
///
/// Layers, back to front: background, border, horizontal axis, ticks and
/// their labels, chart label, sample polyline, inspector overlay. Nothing in
/// here fails; an empty window, a degenerate scale or a zero-sized viewport
/// just yields fewer commands.
pub struct RenderPipeline;

impl RenderPipeline {
    #[must_use]
    pub fn build_frame(inputs: RenderInputs<'_>) -> RenderFrame {
        let RenderInputs {
            config,
            snapshot,
            mapper,
            inspector,
        } = inputs;
        let viewport = mapper.viewport();
        let mut frame = RenderFrame::new(viewport);
        if !viewport.is_valid() {
            return frame;
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let axis_y = mapper.value_to_y(0.0);

        frame.push(DrawCommand::FillRect(RectPrimitive::new(
            0.0,
            0.0,
            width,
            height,
            config.background_color,
        )));
        frame.push(DrawCommand::StrokeRect(RectPrimitive::new(
            0.0,
            0.0,
            width,
            height,
            config.border_color,
        )));
        frame.push(line(0.0, axis_y, width, axis_y, config.axis_color));

        push_ticks(&mut frame, config, snapshot, mapper, axis_y);

        if !config.label_text.is_empty() {
            frame.push(text(
                config,
                config.label_text.clone(),
                LABEL_LEFT_PX,
                axis_y - LABEL_RAISE_PX,
                config.axis_color,
            ));
        }

        let inspected = if config.inspector_enabled {
            inspector.resolve(snapshot, mapper)
        } else {
            None
        };
        push_series(&mut frame, config, snapshot, mapper, axis_y, inspected);

        trace!(
            commands = frame.commands.len(),
            samples = snapshot.samples.len(),
            "built chart frame"
        );
        frame
    }
}

/// Ticks sit on absolute sample indices that are multiples of the tick
/// distance, so they scroll with the data instead of staying fixed on screen.
fn push_ticks(
    frame: &mut RenderFrame,
    config: &ChartConfiguration,
    snapshot: &WindowSnapshot,
    mapper: CoordinateMapper,
    axis_y: f64,
) {
    let distance = u64::from(config.tick_distance);
    if distance == 0 {
        return;
    }

    let width = f64::from(mapper.viewport().width);
    let first_displayed = snapshot.first_displayed_index();
    let first_tick = first_displayed.div_ceil(distance).saturating_mul(distance);
    let mut absolute = first_tick;
    let mut offset = first_tick.saturating_sub(first_displayed);

    loop {
        let Ok(window_offset) = usize::try_from(offset) else {
            break;
        };
        let x = mapper.sample_index_to_x(window_offset);
        if x >= width {
            break;
        }

        frame.push(line(x, axis_y, x, axis_y + TICK_LENGTH_PX, config.axis_color));
        if config.is_tick_label_location(absolute) {
            frame.push(text(
                config,
                absolute.to_string(),
                x,
                axis_y + TICK_LABEL_GAP_PX + config.label_font.size_px,
                config.axis_color,
            ));
        }

        absolute = absolute.saturating_add(distance);
        offset = offset.saturating_add(distance);
    }
}

fn push_series(
    frame: &mut RenderFrame,
    config: &ChartConfiguration,
    snapshot: &WindowSnapshot,
    mapper: CoordinateMapper,
    axis_y: f64,
    inspected: Option<InspectedSample>,
) {
    let mut previous: Option<(f64, f64)> = None;
    for (index, &value) in snapshot.samples.iter().enumerate() {
        let point = (mapper.sample_index_to_x(index), mapper.value_to_y(value));
        if let Some((last_x, last_y)) = previous {
            frame.push(DrawCommand::Line(LinePrimitive::new(
                last_x,
                last_y,
                point.0,
                point.1,
                config.line_width,
                config.line_color,
            )));
        }
        if let Some(sample) = inspected.filter(|sample| sample.window_index == index) {
            push_inspector_overlay(frame, config, sample, axis_y);
        }
        previous = Some(point);
    }
}

fn push_inspector_overlay(
    frame: &mut RenderFrame,
    config: &ChartConfiguration,
    sample: InspectedSample,
    axis_y: f64,
) {
    let color = config.inspector_color;
    let InspectedSample { x, y, .. } = sample;

    frame.push(DrawCommand::Circle(CirclePrimitive::new(
        x,
        y,
        MARKER_RADIUS_PX,
        AXIS_STROKE_WIDTH,
        color,
    )));
    frame.push(line(x, y, 0.0, y, color));
    frame.push(text(
        config,
        config.format_value(sample.value),
        LABEL_LEFT_PX,
        y - LABEL_RAISE_PX,
        color,
    ));
    frame.push(line(x, y, x, axis_y, color));
    frame.push(text(
        config,
        sample.absolute_index.to_string(),
        x + INDEX_LABEL_OFFSET_X,
        axis_y - INDEX_LABEL_RAISE_PX,
        color,
    ));
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64, color: Color) -> DrawCommand {
    DrawCommand::Line(LinePrimitive::new(x1, y1, x2, y2, AXIS_STROKE_WIDTH, color))
}

fn text(config: &ChartConfiguration, content: String, x: f64, y: f64, color: Color) -> DrawCommand {
    DrawCommand::Text(TextPrimitive::new(
        content,
        x,
        y,
        config.label_font.clone(),
        color,
    ))
}
