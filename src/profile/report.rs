//! Profile reports, ordered like a cumulative-time stats listing.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::detect::probe::Step;
use crate::profile::StepStats;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileRow {
    pub step: Step,
    pub calls: u64,
    /// Cumulative seconds; `None` for operation counters, which are not timed.
    pub cumulative_secs: Option<f64>,
    pub per_call_secs: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub label: String,
    pub total_secs: f64,
    pub total_calls: u64,
    pub rows: Vec<ProfileRow>,
}

impl ProfileReport {
    pub fn from_stats(label: &str, total: Duration, stats: &BTreeMap<Step, StepStats>) -> Self {
        let mut rows: Vec<ProfileRow> = stats
            .iter()
            .filter(|(_, stats)| stats.calls > 0)
            .map(|(step, stats)| {
                let cumulative = (!step.is_operation()).then(|| stats.cumulative.as_secs_f64());
                ProfileRow {
                    step: *step,
                    calls: stats.calls,
                    cumulative_secs: cumulative,
                    per_call_secs: cumulative.map(|secs| secs / stats.calls as f64),
                }
            })
            .collect();
        sort_rows(&mut rows);

        Self {
            label: label.to_string(),
            total_secs: total.as_secs_f64(),
            total_calls: rows.iter().map(|row| row.calls).sum(),
            rows,
        }
    }

    pub fn calls(&self, step: Step) -> u64 {
        self.rows
            .iter()
            .find(|row| row.step == step)
            .map(|row| row.calls)
            .unwrap_or(0)
    }
}

/// Timed steps by cumulative time (desc), then operation counters by calls
/// (desc). Ties fall back to the step name.
fn sort_rows(rows: &mut [ProfileRow]) {
    rows.sort_by(|a, b| {
        let timed = b.cumulative_secs.is_some().cmp(&a.cumulative_secs.is_some());
        timed
            .then_with(|| {
                let a_secs = a.cumulative_secs.unwrap_or(0.0);
                let b_secs = b.cumulative_secs.unwrap_or(0.0);
                b_secs.total_cmp(&a_secs)
            })
            .then_with(|| b.calls.cmp(&a.calls))
            .then_with(|| a.step.as_str().cmp(b.step.as_str()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(calls: u64, millis: u64) -> StepStats {
        StepStats {
            calls,
            cumulative: Duration::from_millis(millis),
        }
    }

    #[test]
    fn rows_sorted_by_cumulative_then_operations() {
        let mut map = BTreeMap::new();
        map.insert(Step::Detect, stats(1, 30));
        map.insert(Step::IsDuplicate, stats(5, 20));
        map.insert(Step::Compare, stats(10, 0));
        map.insert(Step::ReadTitles, stats(1, 40));

        let report = ProfileReport::from_stats("x", Duration::from_millis(70), &map);
        let order: Vec<Step> = report.rows.iter().map(|row| row.step).collect();
        assert_eq!(
            order,
            vec![Step::ReadTitles, Step::Detect, Step::IsDuplicate, Step::Compare]
        );
        assert_eq!(report.total_calls, 17);
        assert_eq!(report.rows[3].cumulative_secs, None);
    }

    #[test]
    fn per_call_is_cumulative_over_calls() {
        let mut map = BTreeMap::new();
        map.insert(Step::IsDuplicate, stats(4, 8));
        let report = ProfileReport::from_stats("x", Duration::from_millis(8), &map);
        let per_call = report.rows[0].per_call_secs.expect("timed row");
        assert!((per_call - 0.002).abs() < 1e-12);
    }

    #[test]
    fn empty_steps_are_skipped() {
        let mut map = BTreeMap::new();
        map.insert(Step::Tally, stats(0, 0));
        let report = ProfileReport::from_stats("x", Duration::ZERO, &map);
        assert!(report.rows.is_empty());
        assert_eq!(report.calls(Step::Tally), 0);
    }
}
