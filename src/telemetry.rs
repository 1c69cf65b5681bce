//! Telemetry helpers for pages and hosts embedding `travel-charts`.
//!
//! Tracing setup stays explicit and opt-in. Hosts can either call
//! `init_default_tracing` or install their own `tracing` subscriber.

#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info,travel_charts=debug";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Without `RUST_LOG`, registry lifecycle events from this crate are shown at
/// `debug` and everything else at `info`.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
