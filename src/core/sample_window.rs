use std::collections::VecDeque;

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Bounded FIFO of the most recent samples.
///
/// Capacity is always at least one. `last_sample_index` counts every sample
/// ever appended and keeps growing after older samples are evicted, so tick
/// labels can be expressed in absolute sample indices.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow {
    samples: VecDeque<f64>,
    capacity: usize,
    last_sample_index: u64,
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(DEFAULT_SAMPLE_COUNT),
            capacity: DEFAULT_SAMPLE_COUNT,
            last_sample_index: 0,
        }
    }
}

impl SampleWindow {
    pub fn new(capacity: usize) -> ChartResult<Self> {
        validate_capacity(capacity)?;
        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            last_sample_index: 0,
        })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn last_sample_index(&self) -> u64 {
        self.last_sample_index
    }

    /// Absolute index of the oldest sample position the window can show.
    #[must_use]
    pub fn first_displayed_index(&self) -> u64 {
        self.last_sample_index.saturating_sub(self.capacity as u64)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Pushes `value` at the tail and returns the number of evicted samples.
    pub fn append(&mut self, value: f64) -> usize {
        self.samples.push_back(value);
        self.last_sample_index += 1;
        self.trim()
    }

    /// Changes capacity and trims the head immediately if needed.
    pub fn set_capacity(&mut self, capacity: usize) -> ChartResult<usize> {
        validate_capacity(capacity)?;
        self.capacity = capacity;
        Ok(self.trim())
    }

    #[must_use]
    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            samples: self.samples.iter().copied().collect(),
            capacity: self.capacity,
            last_sample_index: self.last_sample_index,
        }
    }

    fn trim(&mut self) -> usize {
        let excess = self.samples.len().saturating_sub(self.capacity);
        self.samples.drain(..excess);
        excess
    }
}

/// Owned, consistent copy of a window taken for one render pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowSnapshot {
    pub samples: Vec<f64>,
    pub capacity: usize,
    pub last_sample_index: u64,
}

impl WindowSnapshot {
    #[must_use]
    pub fn first_displayed_index(&self) -> u64 {
        self.last_sample_index.saturating_sub(self.capacity as u64)
    }

    /// Absolute index label for the sample at `window_index`.
    ///
    /// Counted from `first_displayed_index`, so right after the capacity grows
    /// the labels trail the true indices until the window fills again.
    #[must_use]
    pub fn absolute_index(&self, window_index: usize) -> u64 {
        self.first_displayed_index() + window_index as u64
    }
}

fn validate_capacity(capacity: usize) -> ChartResult<()> {
    if capacity < 1 {
        return Err(ChartError::InvalidArgument(
            "sample count must be >= 1".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_most_recent_samples_in_order() {
        let mut window = SampleWindow::new(100).expect("window");
        for value in 0..150 {
            window.append(f64::from(value));
        }
        let kept: Vec<f64> = window.iter().collect();
        let expected: Vec<f64> = (50..150).map(f64::from).collect();
        assert_eq!(kept, expected);
        assert_eq!(window.last_sample_index(), 150);
        assert_eq!(window.first_displayed_index(), 50);
    }

    #[test]
    fn shrinking_capacity_trims_eagerly() {
        let mut window = SampleWindow::new(10).expect("window");
        for value in 0..8 {
            window.append(f64::from(value));
        }
        assert_eq!(window.set_capacity(3).expect("capacity"), 5);
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![5.0, 6.0, 7.0]);
        assert_eq!(window.set_capacity(20).expect("capacity"), 0);
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(SampleWindow::new(0).is_err());
        let mut window = SampleWindow::default();
        assert!(matches!(
            window.set_capacity(0),
            Err(ChartError::InvalidArgument(_))
        ));
        assert_eq!(window.capacity(), DEFAULT_SAMPLE_COUNT);
    }

    #[test]
    fn snapshot_absolute_indices_follow_scroll_offset() {
        let mut window = SampleWindow::new(4).expect("window");
        for value in 0..6 {
            window.append(f64::from(value));
        }
        let snapshot = window.snapshot();
        assert_eq!(snapshot.samples, vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(snapshot.absolute_index(0), 2);
        assert_eq!(snapshot.absolute_index(3), 5);
    }

    #[test]
    fn grown_capacity_labels_from_capacity_offset() {
        let mut window = SampleWindow::new(4).expect("window");
        for value in 0..10 {
            window.append(f64::from(value));
        }
        window.set_capacity(8).expect("capacity");

        let snapshot = window.snapshot();
        assert_eq!(snapshot.samples, vec![6.0, 7.0, 8.0, 9.0]);
        assert_eq!(snapshot.first_displayed_index(), 2);
        assert_eq!(snapshot.absolute_index(0), 2);

        for value in 10..14 {
            window.append(f64::from(value));
        }
        let snapshot = window.snapshot();
        assert_eq!(snapshot.samples[0], 6.0);
        assert_eq!(snapshot.absolute_index(0), 6);
    }
}
