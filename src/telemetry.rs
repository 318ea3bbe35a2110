//! Telemetry helpers for applications embedding `stream-chart`.
//!
//! The chart only emits `tracing` events; installing a subscriber is left to
//! the host unless it opts into the `telemetry` feature.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `stream_chart=info` when no filter is set in the environment.
/// Returns `false` when the feature is disabled or the host already installed
/// a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("stream_chart=info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
