//! Instrumentation seam shared by both detectors.
//!
//! Detectors report work through a [`Probe`]: `scope` brackets a named
//! internal step, `tick` records one elementary operation. The unit probe
//! `()` ignores everything and compiles away.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Named internal steps and operations of a detector run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Whole detector invocation.
    Detect,
    /// Reading the title list from its source.
    ReadTitles,
    /// Naive: scan of the remaining titles for one taken title.
    IsDuplicate,
    /// Naive: check that a key has not already been reported.
    Reconcile,
    /// One case-insensitive title comparison (operation).
    Compare,
    /// Linear: single pass building the frequency table.
    CountKeys,
    /// One frequency-table increment (operation).
    Tally,
    /// Linear: selection of keys seen more than once.
    CollectDuplicates,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::Detect,
        Step::ReadTitles,
        Step::IsDuplicate,
        Step::Reconcile,
        Step::Compare,
        Step::CountKeys,
        Step::Tally,
        Step::CollectDuplicates,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Step::Detect => "detect",
            Step::ReadTitles => "read_titles",
            Step::IsDuplicate => "is_duplicate",
            Step::Reconcile => "reconcile",
            Step::Compare => "compare",
            Step::CountKeys => "count_keys",
            Step::Tally => "tally",
            Step::CollectDuplicates => "collect_duplicates",
        }
    }

    /// True for steps recorded through [`Probe::tick`] rather than scoped.
    #[inline]
    pub const fn is_operation(self) -> bool {
        matches!(self, Step::Compare | Step::Tally)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Probe {
    /// Record one elementary operation.
    #[inline]
    fn tick(&mut self, _step: Step) {}

    /// Run `f` as the named internal step.
    #[inline]
    fn scope<T, F>(&mut self, _step: Step, f: F) -> T
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> T,
    {
        f(self)
    }
}

impl Probe for () {}

/// Deterministic operation counter, keyed by step.
///
/// Scoped steps count entries; operations count ticks. No clocks are read,
/// so counts are reproducible across machines.
#[derive(Debug, Clone, Default)]
pub struct OpCounter {
    counts: BTreeMap<Step, u64>,
}

impl OpCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, step: Step) -> u64 {
        self.counts.get(&step).copied().unwrap_or(0)
    }

    /// Sum of all operation ticks (comparisons plus tallies).
    pub fn operations(&self) -> u64 {
        self.counts
            .iter()
            .filter(|(step, _)| step.is_operation())
            .map(|(_, count)| *count)
            .sum()
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }
}

impl Probe for OpCounter {
    fn tick(&mut self, step: Step) {
        *self.counts.entry(step).or_insert(0) += 1;
    }

    fn scope<T, F>(&mut self, step: Step, f: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        *self.counts.entry(step).or_insert(0) += 1;
        f(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_names_are_unique() {
        let mut names: Vec<&str> = Step::ALL.iter().map(|step| step.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Step::ALL.len());
    }

    #[test]
    fn counter_separates_scopes_from_operations() {
        let mut counter = OpCounter::new();
        counter.scope(Step::IsDuplicate, |probe| {
            probe.tick(Step::Compare);
            probe.tick(Step::Compare);
        });
        counter.tick(Step::Tally);

        assert_eq!(counter.count(Step::IsDuplicate), 1);
        assert_eq!(counter.count(Step::Compare), 2);
        assert_eq!(counter.operations(), 3);

        counter.reset();
        assert_eq!(counter.operations(), 0);
    }

    #[test]
    fn unit_probe_forwards_result() {
        let value = ().scope(Step::Detect, |_| 42);
        assert_eq!(value, 42);
    }
}
