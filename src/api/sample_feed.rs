use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::core::{ScaleBounds, SampleWindow, WindowSnapshot};
use crate::error::{ChartError, ChartResult};

use super::{InvalidationLevel, RedrawRequester};

#[derive(Debug)]
struct FeedState {
    window: SampleWindow,
    bounds: ScaleBounds,
}

struct FeedShared {
    state: Mutex<FeedState>,
    dirty: AtomicBool,
    redraw: Arc<dyn RedrawRequester>,
}

/// Cloneable producer handle onto a chart's sample buffer.
///
/// Every mutation and every render snapshot runs under one lock, so a reader
/// never sees a window in the middle of an eviction. Clones share the same
/// buffer and can be moved to a producer thread.
#[derive(Clone)]
pub struct SampleFeed {
    shared: Arc<FeedShared>,
}

impl fmt::Debug for SampleFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleFeed")
            .field("state", &*self.shared.state.lock())
            .finish_non_exhaustive()
    }
}

impl SampleFeed {
    pub(crate) fn new(
        window: SampleWindow,
        bounds: ScaleBounds,
        redraw: Arc<dyn RedrawRequester>,
    ) -> Self {
        Self {
            shared: Arc::new(FeedShared {
                state: Mutex::new(FeedState { window, bounds }),
                dirty: AtomicBool::new(true),
                redraw,
            }),
        }
    }

    /// Appends one sample, evicting the oldest ones past capacity and widening
    /// the bounds when the value falls outside them.
    pub fn append(&self, value: impl Into<f64>) -> ChartResult<()> {
        let value = value.into();
        if !value.is_finite() {
            return Err(ChartError::InvalidArgument(format!(
                "sample value must be finite, got {value}"
            )));
        }

        {
            let mut state = self.shared.state.lock();
            let evicted = state.window.append(value);
            let widened = state.bounds.widen_to(value);
            trace!(
                value,
                len = state.window.len(),
                evicted,
                widened,
                "append sample"
            );
        }
        self.request_redraw();
        Ok(())
    }

    /// Appends many samples under a single lock acquisition.
    pub fn extend<I>(&self, values: I) -> ChartResult<usize>
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        let mut appended = 0;
        let outcome = {
            let mut state = self.shared.state.lock();
            let mut outcome = Ok(());
            for value in values {
                let value: f64 = value.into();
                if !value.is_finite() {
                    outcome = Err(ChartError::InvalidArgument(format!(
                        "sample value must be finite, got {value}"
                    )));
                    break;
                }
                state.window.append(value);
                state.bounds.widen_to(value);
                appended += 1;
            }
            trace!(appended, len = state.window.len(), "extend samples");
            outcome
        };
        if appended > 0 {
            self.request_redraw();
        }
        outcome.map(|()| appended)
    }

    pub fn set_sample_count(&self, sample_count: usize) -> ChartResult<()> {
        let evicted = self.shared.state.lock().window.set_capacity(sample_count)?;
        debug!(sample_count, evicted, "set sample count");
        self.request_redraw();
        Ok(())
    }

    pub fn set_minimum(&self, minimum: f64) -> ChartResult<()> {
        self.shared.state.lock().bounds.set_minimum(minimum)?;
        debug!(minimum, "set scale minimum");
        self.request_redraw();
        Ok(())
    }

    pub fn set_maximum(&self, maximum: f64) -> ChartResult<()> {
        self.shared.state.lock().bounds.set_maximum(maximum)?;
        debug!(maximum, "set scale maximum");
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.shared.state.lock().window.capacity()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.state.lock().window.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.state.lock().window.is_empty()
    }

    #[must_use]
    pub fn last_sample_index(&self) -> u64 {
        self.shared.state.lock().window.last_sample_index()
    }

    #[must_use]
    pub fn bounds(&self) -> ScaleBounds {
        self.shared.state.lock().bounds
    }

    /// Consistent copy of the window and bounds for one render pass.
    #[must_use]
    pub fn snapshot_for_render(&self) -> (WindowSnapshot, ScaleBounds) {
        let state = self.shared.state.lock();
        (state.window.snapshot(), state.bounds)
    }

    /// Whether the buffer changed since the last `take_dirty`.
    pub(crate) fn is_dirty(&self) -> bool {
        self.shared.dirty.load(Ordering::Acquire)
    }

    pub(crate) fn take_dirty(&self) -> bool {
        self.shared.dirty.swap(false, Ordering::AcqRel)
    }

    fn request_redraw(&self) {
        self.shared.dirty.store(true, Ordering::Release);
        self.shared.redraw.request_redraw(InvalidationLevel::Full);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NoopRedrawRequester;

    fn feed(capacity: usize) -> SampleFeed {
        SampleFeed::new(
            SampleWindow::new(capacity).expect("window"),
            ScaleBounds::default(),
            Arc::new(NoopRedrawRequester),
        )
    }

    #[test]
    fn append_widens_bounds() {
        let feed = feed(10);
        feed.append(5.0).expect("append");
        let bounds = feed.bounds();
        assert_eq!(bounds.maximum(), 5.0);
        assert_eq!(bounds.minimum(), -1.0);
    }

    #[test]
    fn non_finite_samples_are_rejected() {
        let feed = feed(10);
        assert!(feed.append(f64::NAN).is_err());
        assert!(feed.append(f64::INFINITY).is_err());
        assert!(feed.is_empty());
        assert_eq!(feed.last_sample_index(), 0);
    }

    #[test]
    fn extend_stops_at_first_invalid_value() {
        let feed = feed(10);
        let err = feed.extend([1.0, 2.0, f64::NAN, 3.0]);
        assert!(err.is_err());
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn accepts_values_convertible_to_f64() {
        let feed = feed(10);
        feed.append(3_i32).expect("append i32");
        feed.append(1.5_f32).expect("append f32");
        let appended = feed.extend([7_u16, 8, 9]).expect("extend u16");
        assert_eq!(appended, 3);

        let (snapshot, bounds) = feed.snapshot_for_render();
        assert_eq!(snapshot.samples, vec![3.0, 1.5, 7.0, 8.0, 9.0]);
        assert_eq!(bounds.maximum(), 9.0);
    }

    #[test]
    fn concurrent_appends_never_overflow_window() {
        let feed = feed(64);
        let producers: Vec<_> = (0..4)
            .map(|worker| {
                let feed = feed.clone();
                std::thread::spawn(move || {
                    for i in 0..500 {
                        feed.append(f64::from(worker * 1_000 + i)).expect("append");
                    }
                })
            })
            .collect();

        for _ in 0..200 {
            let (snapshot, _) = feed.snapshot_for_render();
            assert!(snapshot.samples.len() <= 64);
        }
        for producer in producers {
            producer.join().expect("producer thread");
        }

        assert_eq!(feed.len(), 64);
        assert_eq!(feed.last_sample_index(), 2_000);
    }
}
