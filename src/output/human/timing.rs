// Human timing line

use crate::detect::Detector;
use crate::output::human::stage_label;
use crate::timing::TimingReport;

pub fn render_timing(detector: Detector, report: &TimingReport) -> Vec<String> {
    vec![
        format!("--- Timeit results, {} ---", stage_label(detector)),
        format!(
            "func={}  num_repeats={} runs_per_repeat={} time_cost={:.3} sec",
            report.label, report.repeat, report.number, report.best_per_run_secs
        ),
    ]
}
