mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DrawCommand, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, FontSpec, LinePrimitive, RectPrimitive, TextPrimitive,
};

use crate::error::ChartResult;

/// Drawing surface provided by the host.
///
/// Backends receive a fully materialized, ordered `RenderFrame`; every
/// primitive carries its own color and font, so there is no separate
/// set-color/set-font state to track.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
