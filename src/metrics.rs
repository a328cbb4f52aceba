//! Metrics helpers
//!
//! Thin wrappers around the `metrics` facade so call sites stay one-liners.
//! Whether anything is recorded depends on the recorder installed by the
//! embedding application; without one these are no-ops.

/// Label values shared across metrics
pub mod labels {
    /// Standalone server topology
    pub const MODE_STANDALONE: &str = "standalone";

    /// Sentinel-managed failover topology
    pub const MODE_SENTINEL: &str = "sentinel";

    /// Command completed successfully
    pub const STATUS_OK: &str = "ok";

    /// Command failed (transport, server, or decode error)
    pub const STATUS_ERROR: &str = "error";
}

/// Counter metrics
pub mod counters {
    /// A connection handle was established
    pub fn connection_opened(mode: &str) {
        metrics::counter!("graphwire_connections_opened_total", "mode" => mode.to_string())
            .increment(1);
    }

    /// Sentinel master discovery resolved a single primary
    pub fn primary_discovered() {
        metrics::counter!("graphwire_primaries_discovered_total").increment(1);
    }

    /// An administrative command finished
    pub fn command_completed(command: &str, status: &str) {
        metrics::counter!(
            "graphwire_commands_total",
            "command" => command.to_string(),
            "status" => status.to_string()
        )
        .increment(1);
    }
}

/// Histogram metrics
pub mod histograms {
    /// Time spent in connection bootstrap (probe, classification, rebind)
    pub fn bootstrap_duration(mode: &str, millis: u64) {
        metrics::histogram!("graphwire_bootstrap_duration_ms", "mode" => mode.to_string())
            .record(millis as f64);
    }

    /// Round-trip time of one administrative command
    pub fn command_duration(command: &str, millis: u64) {
        metrics::histogram!("graphwire_command_duration_ms", "command" => command.to_string())
            .record(millis as f64);
    }
}
