// Human profile listing, cumulative-time order

use crate::detect::Detector;
use crate::output::human::stage_label;
use crate::profile::ProfileReport;

pub fn render_profile(detector: Detector, report: &ProfileReport) -> Vec<String> {
    let mut lines = vec![
        format!("--- Profile results, {} ---", stage_label(detector)),
        format!(
            "{} calls in {:.3} seconds ({})",
            report.total_calls, report.total_secs, report.label
        ),
        String::new(),
        "Ordered by: cumulative time".to_string(),
        String::new(),
        format!("{:>10} {:>9} {:>9}  step", "ncalls", "cumtime", "percall"),
    ];
    for row in &report.rows {
        lines.push(format!(
            "{:>10} {:>9} {:>9}  {}",
            row.calls,
            seconds_cell(row.cumulative_secs),
            seconds_cell(row.per_call_secs),
            row.step
        ));
    }
    lines
}

fn seconds_cell(secs: Option<f64>) -> String {
    match secs {
        Some(secs) => format!("{secs:.3}"),
        None => "-".to_string(),
    }
}
