use serde::{Deserialize, Serialize};

use crate::core::bounds::{DEFAULT_MARGIN, DEFAULT_MAXIMUM, DEFAULT_MINIMUM};
use crate::core::sample_window::DEFAULT_SAMPLE_COUNT;
use crate::core::{ScaleBounds, SampleWindow, Viewport};
use crate::error::ChartResult;

/// Bootstrap settings for a `StreamingChart`.
///
/// Serializable so hosts can persist the initial window and scale alongside
/// their `ChartConfiguration`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamingChartConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    #[serde(default = "default_minimum")]
    pub minimum: f64,
    #[serde(default = "default_maximum")]
    pub maximum: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
}

impl Default for StreamingChartConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl StreamingChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            sample_count: default_sample_count(),
            minimum: default_minimum(),
            maximum: default_maximum(),
            margin: default_margin(),
        }
    }

    #[must_use]
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub(crate) fn build_window(&self) -> ChartResult<SampleWindow> {
        SampleWindow::new(self.sample_count)
    }

    pub(crate) fn build_bounds(&self) -> ChartResult<ScaleBounds> {
        ScaleBounds::new(self.minimum, self.maximum)?.with_margin(self.margin)
    }
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

fn default_minimum() -> f64 {
    DEFAULT_MINIMUM
}

fn default_maximum() -> f64 {
    DEFAULT_MAXIMUM
}

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}
