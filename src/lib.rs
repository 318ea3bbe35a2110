//! stream-chart: an embeddable live line chart.
//!
//! Samples stream into a bounded window whose vertical scale widens to fit
//! them; each frame is materialized as backend-agnostic draw commands and
//! handed to a host-provided `Renderer`. An optional inspector highlights the
//! sample under the pointer.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfiguration, SampleFeed, StreamingChart, StreamingChartConfig};
pub use error::{ChartError, ChartResult};
