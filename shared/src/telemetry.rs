use std::time::Instant;

/// Wall-clock timer for long-running operations (matching runs, history
/// fetches).
pub struct Telemetry {
    start: Instant,
}

impl Telemetry {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }

    /// Elapsed time as a short human-readable figure, e.g. "2.1s".
    pub fn elapsed_secs(&self) -> String {
        format!("{:.1}s", self.start.elapsed().as_secs_f64())
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}
