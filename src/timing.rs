//! Repeated wall-clock timing, minimum-of-repeats.
//!
//! Each repeat calls the timed function `number` times back to back; the
//! reported cost is the best repeat divided by `number`. Every call must be
//! independent: callers hand in a closure that builds its own input.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;

pub const DEFAULT_REPEAT: usize = 5;
pub const DEFAULT_NUMBER: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Number of repeats; the minimum is reported.
    pub repeat: usize,
    /// Calls per repeat.
    pub number: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            repeat: DEFAULT_REPEAT,
            number: DEFAULT_NUMBER,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimingReport {
    pub label: String,
    pub repeat: usize,
    pub number: usize,
    /// Total seconds of each repeat, in run order.
    pub repeat_secs: Vec<f64>,
    /// Minimum over repeats of (repeat total / number).
    pub best_per_run_secs: f64,
}

impl TimingReport {
    fn from_repeats(label: &str, number: usize, repeats: &[Duration]) -> Self {
        let per_run = |total: &Duration| total.as_secs_f64() / number.max(1) as f64;
        let best = repeats
            .iter()
            .map(per_run)
            .min_by(f64::total_cmp)
            .unwrap_or(0.0);
        Self {
            label: label.to_string(),
            repeat: repeats.len(),
            number,
            repeat_secs: repeats.iter().map(Duration::as_secs_f64).collect(),
            best_per_run_secs: best,
        }
    }
}

/// Time `f` per `config`. The first error aborts the measurement.
pub fn time_repeated<T, E, F>(
    label: &str,
    config: TimingConfig,
    mut f: F,
) -> Result<TimingReport, E>
where
    F: FnMut() -> Result<T, E>,
{
    let mut repeats = Vec::with_capacity(config.repeat);
    for _ in 0..config.repeat {
        let start = Instant::now();
        for _ in 0..config.number {
            black_box(f()?);
        }
        repeats.push(start.elapsed());
    }

    let report = TimingReport::from_repeats(label, config.number, &repeats);
    tracing::debug!(
        label,
        best_per_run_secs = report.best_per_run_secs,
        "timing finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_number_times_per_repeat() {
        let mut calls = 0;
        let report = time_repeated::<_, (), _>(
            "count",
            TimingConfig {
                repeat: 4,
                number: 3,
            },
            || {
                calls += 1;
                Ok(calls)
            },
        )
        .expect("timing");
        assert_eq!(calls, 12);
        assert_eq!(report.repeat, 4);
        assert_eq!(report.repeat_secs.len(), 4);
        assert_eq!(report.number, 3);
    }

    #[test]
    fn best_is_minimum_per_run() {
        let repeats = [
            Duration::from_millis(30),
            Duration::from_millis(12),
            Duration::from_millis(21),
        ];
        let report = TimingReport::from_repeats("x", 3, &repeats);
        assert!((report.best_per_run_secs - 0.004).abs() < 1e-12);
    }

    #[test]
    fn first_error_stops_timing() {
        let mut calls = 0;
        let result = time_repeated("fail", TimingConfig::default(), || {
            calls += 1;
            if calls == 2 { Err("boom") } else { Ok(()) }
        });
        assert_eq!(result.unwrap_err(), "boom");
        assert_eq!(calls, 2);
    }

    #[test]
    fn no_repeats_reports_zero() {
        let report = TimingReport::from_repeats("x", 3, &[]);
        assert_eq!(report.repeat, 0);
        assert_eq!(report.best_per_run_secs, 0.0);
    }
}
