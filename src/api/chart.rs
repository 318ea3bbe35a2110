use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::core::{CoordinateMapper, ScaleBounds, Viewport};
use crate::error::ChartResult;
use crate::interaction::{InspectedSample, InspectorCursor};
use crate::render::{RenderFrame, Renderer};

use super::render_pipeline::{RenderInputs, RenderPipeline};
use super::{
    ChartConfiguration, InvalidationLevel, NoopRedrawRequester, RedrawRequester, SampleFeed,
    StreamingChartConfig,
};

/// Embeddable live line chart.
///
/// The host drives it from its UI thread: resize and pointer hooks, and
/// `render` whenever a redraw was requested. Samples may arrive from any
/// thread through a `SampleFeed` obtained from `feed`.
pub struct StreamingChart {
    feed: SampleFeed,
    viewport: Viewport,
    inspector: InspectorCursor,
    configuration: ChartConfiguration,
    redraw: Arc<dyn RedrawRequester>,
    pending: InvalidationLevel,
}

impl std::fmt::Debug for StreamingChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingChart")
            .field("feed", &self.feed)
            .field("viewport", &self.viewport)
            .field("inspector", &self.inspector)
            .field("configuration", &self.configuration)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl StreamingChart {
    pub fn new(config: StreamingChartConfig, configuration: ChartConfiguration) -> ChartResult<Self> {
        Self::with_redraw_requester(config, configuration, Arc::new(NoopRedrawRequester))
    }

    pub fn with_redraw_requester(
        config: StreamingChartConfig,
        configuration: ChartConfiguration,
        redraw: Arc<dyn RedrawRequester>,
    ) -> ChartResult<Self> {
        configuration.validate()?;
        let window = config.build_window()?;
        let bounds = config.build_bounds()?;
        debug!(
            sample_count = config.sample_count,
            minimum = config.minimum,
            maximum = config.maximum,
            width = config.viewport.width,
            height = config.viewport.height,
            "create streaming chart"
        );

        Ok(Self {
            feed: SampleFeed::new(window, bounds, Arc::clone(&redraw)),
            viewport: config.viewport,
            inspector: InspectorCursor::new(config.viewport.width),
            configuration,
            redraw,
            pending: InvalidationLevel::Full,
        })
    }

    /// Producer handle sharing this chart's sample buffer.
    #[must_use]
    pub fn feed(&self) -> SampleFeed {
        self.feed.clone()
    }

    pub fn append(&self, value: impl Into<f64>) -> ChartResult<()> {
        self.feed.append(value)
    }

    pub fn extend<I>(&self, values: I) -> ChartResult<usize>
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        self.feed.extend(values)
    }

    pub fn set_sample_count(&self, sample_count: usize) -> ChartResult<()> {
        self.feed.set_sample_count(sample_count)
    }

    pub fn set_minimum(&self, minimum: f64) -> ChartResult<()> {
        self.feed.set_minimum(minimum)
    }

    pub fn set_maximum(&self, maximum: f64) -> ChartResult<()> {
        self.feed.set_maximum(maximum)
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.feed.sample_count()
    }

    #[must_use]
    pub fn bounds(&self) -> ScaleBounds {
        self.feed.bounds()
    }

    #[must_use]
    pub fn last_sample_index(&self) -> u64 {
        self.feed.last_sample_index()
    }

    /// Visible samples, oldest first.
    #[must_use]
    pub fn samples(&self) -> Vec<f64> {
        self.feed.snapshot_for_render().0.samples
    }

    #[must_use]
    pub fn configuration(&self) -> &ChartConfiguration {
        &self.configuration
    }

    pub fn set_configuration(&mut self, configuration: ChartConfiguration) -> ChartResult<()> {
        configuration.validate()?;
        debug!(
            inspector_enabled = configuration.inspector_enabled,
            tick_distance = configuration.tick_distance,
            "set chart configuration"
        );
        self.configuration = configuration;
        self.invalidate(InvalidationLevel::Full);
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn inspector(&self) -> InspectorCursor {
        self.inspector
    }

    /// Mapper for the current viewport, window size and bounds.
    #[must_use]
    pub fn coordinate_mapper(&self) -> CoordinateMapper {
        let (snapshot, bounds) = self.feed.snapshot_for_render();
        CoordinateMapper::new(self.viewport, snapshot.capacity, bounds)
    }

    /// Sample the inspector currently highlights, if it is enabled.
    #[must_use]
    pub fn inspected_sample(&self) -> Option<InspectedSample> {
        if !self.configuration.inspector_enabled {
            return None;
        }
        let (snapshot, bounds) = self.feed.snapshot_for_render();
        let mapper = CoordinateMapper::new(self.viewport, snapshot.capacity, bounds);
        self.inspector.resolve(&snapshot, mapper)
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.inspector.on_resize(width);
        debug!(width, height, "resize chart");
        self.invalidate(InvalidationLevel::Full);
    }

    pub fn on_pointer_enter(&mut self) {
        if self.configuration.inspector_enabled {
            self.inspector.on_pointer_enter();
        }
    }

    pub fn on_pointer_move(&mut self, x: f64) {
        if !self.configuration.inspector_enabled {
            return;
        }
        if !x.is_finite() {
            warn!(x, "ignoring non-finite pointer position");
            return;
        }
        self.inspector.on_pointer_move(x);
        trace!(focus_x = x, "inspector moved");
        self.invalidate(InvalidationLevel::Cursor);
    }

    pub fn on_pointer_exit(&mut self) {
        if !self.configuration.inspector_enabled {
            return;
        }
        self.inspector.on_pointer_exit(self.viewport.width);
        trace!(focus_x = self.inspector.focus_x(), "inspector reset on exit");
        self.invalidate(InvalidationLevel::Cursor);
    }

    /// Drag gestures are accepted but have no effect on the chart.
    pub fn on_pointer_drag(&mut self, _x: f64) {}

    /// Strongest repaint class requested since the last render.
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        if self.feed.is_dirty() {
            InvalidationLevel::Full
        } else {
            self.pending
        }
    }

    /// Builds the current frame without drawing it.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let (snapshot, bounds) = self.feed.snapshot_for_render();
        let mapper = CoordinateMapper::new(self.viewport, snapshot.capacity, bounds);
        RenderPipeline::build_frame(RenderInputs {
            config: &self.configuration,
            snapshot: &snapshot,
            mapper,
            inspector: self.inspector,
        })
    }

    /// Draws one frame onto `renderer` and clears pending invalidation.
    ///
    /// A zero-sized viewport skips the renderer entirely.
    pub fn render<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> ChartResult<()> {
        self.feed.take_dirty();
        self.pending = InvalidationLevel::None;

        if !self.viewport.is_valid() {
            debug!(
                width = self.viewport.width,
                height = self.viewport.height,
                "skip render for empty viewport"
            );
            return Ok(());
        }

        let frame = self.build_frame();
        renderer.render(&frame)
    }

    /// Draws one frame in place on a host-supplied Cairo context, such as the
    /// one handed to a toolkit draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context<R>(
        &mut self,
        renderer: &mut R,
        context: &cairo::Context,
    ) -> ChartResult<()>
    where
        R: crate::render::CairoContextRenderer + ?Sized,
    {
        self.feed.take_dirty();
        self.pending = InvalidationLevel::None;

        if !self.viewport.is_valid() {
            debug!(
                width = self.viewport.width,
                height = self.viewport.height,
                "skip cairo render for empty viewport"
            );
            return Ok(());
        }

        let frame = self.build_frame();
        renderer.render_on_cairo_context(context, &frame)
    }

    fn invalidate(&mut self, level: InvalidationLevel) {
        self.pending = self.pending.max(level);
        self.redraw.request_redraw(level);
    }
}
