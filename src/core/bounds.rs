use crate::error::{ChartError, ChartResult};

pub const DEFAULT_MINIMUM: f64 = -1.0;
pub const DEFAULT_MAXIMUM: f64 = 1.0;
pub const DEFAULT_MARGIN: f64 = 0.1;

/// Vertical value range used to scale samples into pixel rows.
///
/// `maximum > minimum` holds for every value produced by the constructors and
/// setters. Appended samples only ever widen the range; narrowing it requires
/// an explicit `set_minimum`/`set_maximum` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    minimum: f64,
    maximum: f64,
    margin: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl ScaleBounds {
    pub fn new(minimum: f64, maximum: f64) -> ChartResult<Self> {
        validate_range(minimum, maximum)?;
        Ok(Self {
            minimum,
            maximum,
            margin: DEFAULT_MARGIN,
        })
    }

    pub fn with_margin(mut self, margin: f64) -> ChartResult<Self> {
        if !margin.is_finite() || !(0.0..1.0).contains(&margin) {
            return Err(ChartError::InvalidArgument(format!(
                "margin must be finite and in [0, 1), got {margin}"
            )));
        }
        self.margin = margin;
        Ok(self)
    }

    #[must_use]
    pub fn minimum(self) -> f64 {
        self.minimum
    }

    #[must_use]
    pub fn maximum(self) -> f64 {
        self.maximum
    }

    #[must_use]
    pub fn margin(self) -> f64 {
        self.margin
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.maximum - self.minimum
    }

    /// Widens the range so that `value` lies inside it.
    ///
    /// Returns `true` when either bound moved.
    pub fn widen_to(&mut self, value: f64) -> bool {
        let mut changed = false;
        if value > self.maximum {
            self.maximum = value;
            changed = true;
        }
        if value < self.minimum {
            self.minimum = value;
            changed = true;
        }
        changed
    }

    /// Sets the soft lower bound. Later samples below it still widen the range.
    pub fn set_minimum(&mut self, minimum: f64) -> ChartResult<()> {
        validate_range(minimum, self.maximum)?;
        self.minimum = minimum;
        Ok(())
    }

    /// Sets the soft upper bound. Later samples above it still widen the range.
    pub fn set_maximum(&mut self, maximum: f64) -> ChartResult<()> {
        validate_range(self.minimum, maximum)?;
        self.maximum = maximum;
        Ok(())
    }
}

fn validate_range(minimum: f64, maximum: f64) -> ChartResult<()> {
    if !minimum.is_finite() || !maximum.is_finite() {
        return Err(ChartError::InvalidArgument(
            "scale bounds must be finite".to_owned(),
        ));
    }
    if maximum <= minimum {
        return Err(ChartError::InvalidArgument(format!(
            "scale maximum ({maximum}) must be greater than minimum ({minimum})"
        )));
    }
    Ok(())
}
