mod chart;
mod chart_config;
mod chart_configuration;
mod invalidation;
mod render_pipeline;
mod sample_feed;

pub use chart::StreamingChart;
pub use chart_config::StreamingChartConfig;
pub use chart_configuration::{ChartConfiguration, TickLabelPolicy};
pub use invalidation::{InvalidationLevel, NoopRedrawRequester, RedrawRequester};
pub use render_pipeline::{RenderInputs, RenderPipeline};
pub use sample_feed::SampleFeed;
