//! Opt-in `tracing` setup for binaries embedding the adapter.
//!
//! Fallback paths (unknown units, unparseable input, calendar overflow) log at
//! `debug`/`trace` under the `chart_date_adapter` target. Hosts that already
//! install a subscriber can ignore this module.

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter that surfaces every fallback the adapter takes.
pub const FALLBACK_TRACE_FILTER: &str = "warn,chart_date_adapter=trace";

/// [`init_tracing`] with [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, or by
/// `fallback_filter` when the variable is unset or invalid.
///
/// Returns `false` without the `telemetry` feature, when `fallback_filter`
/// does not parse, or when the host already set a global subscriber.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match EnvFilter::try_new(fallback_filter) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
