// src/instrument.rs
//! Wall-clock and memory instrumentation.
//!
//! [`measure`] wraps an operation and records elapsed time plus resident-set
//! delta without touching the operation's result or error. The binary wraps
//! `Vetter::analyze` with it and copies the measurement into the report's
//! `PerformanceMetrics` before display; the analysis engine itself never
//! reads the clock.

use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    /// Elapsed wall-clock time in seconds.
    pub execution_time: f64,
    /// Resident-set-size delta in MB. Zero on platforms without /proc.
    pub memory_usage: f64,
}

/// Runs `op`, measuring it whether it succeeds or fails.
pub fn measure<T>(op: impl FnOnce() -> T) -> (T, Measurement) {
    let rss_before = resident_mb();
    let start = Instant::now();

    let value = op();

    let measurement = Measurement {
        execution_time: start.elapsed().as_secs_f64(),
        memory_usage: resident_mb() - rss_before,
    };
    (value, measurement)
}

#[cfg(target_os = "linux")]
fn resident_mb() -> f64 {
    // Second field of /proc/self/statm is resident pages.
    let pages = std::fs::read_to_string("/proc/self/statm")
        .ok()
        .and_then(|s| s.split_whitespace().nth(1).map(str::to_owned))
        .and_then(|f| f.parse::<f64>().ok())
        .unwrap_or(0.0);
    pages * 4096.0 / (1024.0 * 1024.0)
}

#[cfg(not(target_os = "linux"))]
fn resident_mb() -> f64 {
    0.0
}
