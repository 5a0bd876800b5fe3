pub mod duplicates;
pub mod error;
pub mod profile;
pub mod timing;

use crate::detect::Detector;

/// Section label used in human reports.
pub fn stage_label(detector: Detector) -> &'static str {
    match detector {
        Detector::Naive => "before optimization",
        Detector::Linear => "after optimization",
    }
}
