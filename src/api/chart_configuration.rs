use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontSpec};

/// Decides which tick positions carry a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TickLabelPolicy {
    /// Every tick is labelled.
    All,
    /// Ticks are drawn without labels.
    Hidden,
    /// Only ticks at absolute indices divisible by `every` are labelled.
    EveryNth { every: u64 },
}

impl Default for TickLabelPolicy {
    fn default() -> Self {
        Self::EveryNth { every: 50 }
    }
}

impl TickLabelPolicy {
    #[must_use]
    pub fn accepts(self, absolute_index: u64) -> bool {
        match self {
            Self::All => true,
            Self::Hidden => false,
            Self::EveryNth { every } => every != 0 && absolute_index % every == 0,
        }
    }
}

/// Display settings read by the render pipeline.
///
/// The chart never mutates a configuration; hosts swap in a new one through
/// `StreamingChart::set_configuration`. Every field has a serde default so
/// partial JSON documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfiguration {
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_border_color")]
    pub border_color: Color,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_line_color")]
    pub line_color: Color,
    #[serde(default = "default_inspector_color")]
    pub inspector_color: Color,
    #[serde(default)]
    pub label_font: FontSpec,
    #[serde(default)]
    pub label_text: String,
    /// Distance between ticks in samples; zero disables ticks.
    #[serde(default = "default_tick_distance")]
    pub tick_distance: u32,
    #[serde(default)]
    pub tick_label_policy: TickLabelPolicy,
    #[serde(default)]
    pub inspector_enabled: bool,
    /// Fixed decimals for inspector value labels; `None` prints the shortest
    /// exact representation.
    #[serde(default)]
    pub value_label_precision: Option<usize>,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

impl Default for ChartConfiguration {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            border_color: default_border_color(),
            axis_color: default_axis_color(),
            line_color: default_line_color(),
            inspector_color: default_inspector_color(),
            label_font: FontSpec::default(),
            label_text: String::new(),
            tick_distance: default_tick_distance(),
            tick_label_policy: TickLabelPolicy::default(),
            inspector_enabled: false,
            value_label_precision: None,
            line_width: default_line_width(),
        }
    }
}

impl ChartConfiguration {
    #[must_use]
    pub fn with_label_text(mut self, label_text: impl Into<String>) -> Self {
        self.label_text = label_text.into();
        self
    }

    #[must_use]
    pub fn with_inspector_enabled(mut self, enabled: bool) -> Self {
        self.inspector_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_tick_distance(mut self, tick_distance: u32) -> Self {
        self.tick_distance = tick_distance;
        self
    }

    #[must_use]
    pub fn with_tick_label_policy(mut self, policy: TickLabelPolicy) -> Self {
        self.tick_label_policy = policy;
        self
    }

    #[must_use]
    pub fn with_label_font(mut self, font: FontSpec) -> Self {
        self.label_font = font;
        self
    }

    #[must_use]
    pub fn with_value_label_precision(mut self, precision: Option<usize>) -> Self {
        self.value_label_precision = precision;
        self
    }

    #[must_use]
    pub fn is_tick_label_location(&self, absolute_index: u64) -> bool {
        self.tick_label_policy.accepts(absolute_index)
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        match self.value_label_precision {
            Some(precision) => format!("{value:.precision$}"),
            None => format!("{value:?}"),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.background_color,
            self.border_color,
            self.axis_color,
            self.line_color,
            self.inspector_color,
        ] {
            color.validate()?;
        }
        self.label_font.validate()?;
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a configuration document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_background_color() -> Color {
    Color::BLACK
}

fn default_border_color() -> Color {
    Color::rgb(0.5, 0.5, 0.5)
}

fn default_axis_color() -> Color {
    Color::rgb(0.8, 0.8, 0.8)
}

fn default_line_color() -> Color {
    Color::rgb(0.2, 0.8, 0.2)
}

fn default_inspector_color() -> Color {
    Color::rgb(1.0, 0.3, 0.3)
}

fn default_tick_distance() -> u32 {
    10
}

fn default_line_width() -> f64 {
    1.0
}
