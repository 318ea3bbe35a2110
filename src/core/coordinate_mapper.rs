use crate::core::{ScaleBounds, Viewport};

/// Maps in-window sample indices and sample values into pixel space.
///
/// All outputs are truncated toward zero to whole pixels and are always
/// finite. The horizontal mapping spreads `sample_count` slots over the full
/// width whether or not the window is full, so a partially filled window
/// occupies the left part of the viewport.
///
/// The vertical mapping reproduces the historical formula
/// `((max - (1 - margin) * v) / (max - min)) * height`. The margin scales the
/// value rather than the range, so the curve is not centred symmetrically;
/// callers rely on that exact placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    viewport: Viewport,
    sample_count: usize,
    minimum: f64,
    maximum: f64,
    margin: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(viewport: Viewport, sample_count: usize, bounds: ScaleBounds) -> Self {
        Self::from_parts(
            viewport,
            sample_count,
            bounds.minimum(),
            bounds.maximum(),
            bounds.margin(),
        )
    }

    /// Builds a mapper from raw range values without validating them.
    ///
    /// Degenerate ranges (`maximum <= minimum`, non-finite values) map every
    /// sample to the middle row instead of failing.
    #[must_use]
    pub fn from_parts(
        viewport: Viewport,
        sample_count: usize,
        minimum: f64,
        maximum: f64,
        margin: f64,
    ) -> Self {
        Self {
            viewport,
            sample_count,
            minimum,
            maximum,
            margin,
        }
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn sample_count(self) -> usize {
        self.sample_count
    }

    #[must_use]
    pub fn pixels_per_sample(self) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        f64::from(self.viewport.width) / self.sample_count as f64
    }

    /// X pixel for the in-window index `index` (0 = oldest visible slot).
    #[must_use]
    pub fn sample_index_to_x(self, index: usize) -> f64 {
        if self.sample_count == 0 || self.viewport.width == 0 {
            return 0.0;
        }
        let width = f64::from(self.viewport.width);
        let x = (index as f64 / self.sample_count as f64) * width;
        x.trunc().clamp(0.0, width)
    }

    /// Y pixel for the sample value `value`.
    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        let height = f64::from(self.viewport.height);
        let middle = (height / 2.0).trunc();
        let span = self.maximum - self.minimum;
        if !span.is_finite() || span <= 0.0 {
            return middle;
        }

        let y = ((self.maximum - (1.0 - self.margin) * value) / span) * height;
        if y.is_finite() { y.trunc() } else { middle }
    }
}
