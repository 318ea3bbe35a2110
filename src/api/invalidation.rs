use serde::{Deserialize, Serialize};

/// Ordered repaint classes; a pending level only ever rises until rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Only the inspector overlay moved.
    Cursor,
    /// Data, bounds, size or configuration changed.
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// Capability the host implements so the chart can ask for a repaint.
///
/// It is called from whichever thread mutated the chart, including producer
/// threads appending through a `SampleFeed`, so implementations only schedule
/// a paint on the UI thread (for example by posting to its event loop).
pub trait RedrawRequester: Send + Sync {
    fn request_redraw(&self, level: InvalidationLevel);
}

/// Requester for hosts that poll `StreamingChart::pending_invalidation` instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRedrawRequester;

impl RedrawRequester for NoopRedrawRequester {
    fn request_redraw(&self, _level: InvalidationLevel) {}
}
