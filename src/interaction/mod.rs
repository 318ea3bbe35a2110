//! Pointer-driven inspector state.
//!
//! The inspector remembers one pixel column (`focus_x`) and resolves it to the
//! sample whose line segment spans that column.

use serde::{Deserialize, Serialize};

use crate::core::{CoordinateMapper, WindowSnapshot};

/// Fraction of the width the focus returns to when the pointer leaves.
pub const EXIT_FOCUS_RATIO: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerPresence {
    Inside,
    #[default]
    Outside,
}

/// Sample currently highlighted by the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InspectedSample {
    pub window_index: usize,
    pub absolute_index: u64,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InspectorCursor {
    presence: PointerPresence,
    focus_x: f64,
}

impl InspectorCursor {
    /// Creates a cursor focused on the rightmost column of a `width`-wide view.
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self {
            presence: PointerPresence::Outside,
            focus_x: rightmost_column(width),
        }
    }

    #[must_use]
    pub fn presence(self) -> PointerPresence {
        self.presence
    }

    #[must_use]
    pub fn focus_x(self) -> f64 {
        self.focus_x
    }

    pub fn on_pointer_enter(&mut self) {
        self.presence = PointerPresence::Inside;
    }

    pub fn on_pointer_move(&mut self, x: f64) {
        self.presence = PointerPresence::Inside;
        self.focus_x = x;
    }

    pub fn on_pointer_exit(&mut self, width: u32) {
        self.presence = PointerPresence::Outside;
        self.focus_x = EXIT_FOCUS_RATIO * f64::from(width) - 1.0;
    }

    pub fn on_resize(&mut self, width: u32) {
        self.focus_x = rightmost_column(width);
    }

    /// Finds the sample whose segment satisfies `previous_x < focus_x <= x`.
    ///
    /// Once the window is full, a focus right of the newest sample selects
    /// the newest sample; over the empty area of a partly filled window
    /// nothing is selected. The oldest sample has no incoming segment and is
    /// never selected through the segment rule.
    #[must_use]
    pub fn resolve(
        self,
        snapshot: &WindowSnapshot,
        mapper: CoordinateMapper,
    ) -> Option<InspectedSample> {
        let samples = &snapshot.samples;
        let newest = samples.len().checked_sub(1)?;

        let window_index = (1..samples.len())
            .find(|&index| {
                let previous_x = mapper.sample_index_to_x(index - 1);
                let x = mapper.sample_index_to_x(index);
                previous_x < self.focus_x && self.focus_x <= x
            })
            .or_else(|| {
                let window_full = samples.len() >= snapshot.capacity;
                (window_full && self.focus_x > mapper.sample_index_to_x(newest)).then_some(newest)
            })?;

        let value = samples[window_index];
        Some(InspectedSample {
            window_index,
            absolute_index: snapshot.absolute_index(window_index),
            value,
            x: mapper.sample_index_to_x(window_index),
            y: mapper.value_to_y(value),
        })
    }
}

fn rightmost_column(width: u32) -> f64 {
    f64::from(width) - 1.0
}
