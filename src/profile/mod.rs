//! Scoped profiling of detector runs.
//!
//! A [`Profiler`] is a [`Probe`] that records call counts and cumulative
//! wall time per [`Step`]. [`profile`] wraps a callable in an enabled
//! session and always closes it, even when the callable unwinds.

pub mod report;

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::detect::probe::{Probe, Step};

pub use report::{ProfileReport, ProfileRow};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub calls: u64,
    pub cumulative: Duration,
}

#[derive(Debug, Default)]
pub struct Profiler {
    enabled: bool,
    stats: BTreeMap<Step, StepStats>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn stats(&self, step: Step) -> StepStats {
        self.stats.get(&step).copied().unwrap_or_default()
    }

    /// Snapshot the collected stats as a report.
    pub fn report(&self, label: &str, total: Duration) -> ProfileReport {
        ProfileReport::from_stats(label, total, &self.stats)
    }
}

impl Probe for Profiler {
    fn tick(&mut self, step: Step) {
        if self.enabled {
            self.stats.entry(step).or_default().calls += 1;
        }
    }

    fn scope<T, F>(&mut self, step: Step, f: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        if !self.enabled {
            return f(self);
        }
        let start = Instant::now();
        let value = f(self);
        let entry = self.stats.entry(step).or_default();
        entry.calls += 1;
        entry.cumulative += start.elapsed();
        value
    }
}

/// An enabled profiling session; dropping it disables the profiler.
pub struct ProfileSession<'a> {
    profiler: &'a mut Profiler,
    label: String,
    started: Instant,
}

impl<'a> ProfileSession<'a> {
    pub fn enable(profiler: &'a mut Profiler, label: &str) -> Self {
        profiler.enable();
        tracing::debug!(label, "profiling enabled");
        Self {
            profiler,
            label: label.to_string(),
            started: Instant::now(),
        }
    }

    pub fn profiler(&mut self) -> &mut Profiler {
        self.profiler
    }

    /// Close the session and return what it recorded.
    pub fn finish(self) -> ProfileReport {
        let total = self.started.elapsed();
        self.profiler.disable();
        self.profiler.report(&self.label, total)
    }
}

impl Drop for ProfileSession<'_> {
    fn drop(&mut self) {
        if self.profiler.is_enabled() {
            self.profiler.disable();
        }
        tracing::debug!(label = %self.label, "profiling disabled");
    }
}

/// Run `f` under a fresh profiler. The value of `f` is returned unchanged.
pub fn profile<T, F>(label: &str, f: F) -> (T, ProfileReport)
where
    F: FnOnce(&mut Profiler) -> T,
{
    let mut profiler = Profiler::new();
    profile_with(&mut profiler, label, f)
}

/// Run `f` under a caller-owned profiler.
pub fn profile_with<T, F>(profiler: &mut Profiler, label: &str, f: F) -> (T, ProfileReport)
where
    F: FnOnce(&mut Profiler) -> T,
{
    let mut session = ProfileSession::enable(profiler, label);
    let value = f(session.profiler());
    (value, session.finish())
}
