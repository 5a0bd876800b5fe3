//! Pipeline orchestration: read → detect → (time, profile) → output

use std::error::Error;
use std::fmt;
use std::path::Path;

use crate::cli::args::Args;
use crate::cli::exit::Outcome;
use crate::detect::{Detector, DuplicateSet};
use crate::input::error::InputError;
use crate::output::human::duplicates::render_duplicates;
use crate::output::human::error::render_error;
use crate::output::human::profile::render_profile;
use crate::output::human::timing::render_timing;
use crate::output::json::{JsonError, JsonOutput, JsonRun, SCHEMA_VERSION};
use crate::profile::{ProfileReport, profile};
use crate::timing::{TimingReport, time_repeated};

pub struct PipelineResult {
    pub outcome: Outcome,
    pub output: String,
}

/// Everything measured for one detector.
#[derive(Debug, Clone)]
pub struct DetectorRun {
    pub detector: Detector,
    pub duplicates: DuplicateSet,
    pub timing: Option<TimingReport>,
    pub profile: Option<ProfileReport>,
}

/// Two detectors reported different normalized keys for the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceError {
    pub left: Detector,
    pub right: Detector,
    pub left_only: Vec<String>,
    pub right_only: Vec<String>,
}

impl fmt::Display for EquivalenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} and {} disagree: only {} found {:?}; only {} found {:?}",
            self.left, self.right, self.left, self.left_only, self.right, self.right_only
        )
    }
}

impl Error for EquivalenceError {}

impl EquivalenceError {
    pub const CODE: &'static str = "E_EQUIVALENCE";
}

pub fn run(args: &Args) -> Result<PipelineResult, Box<dyn Error>> {
    match run_detectors(args) {
        Ok(runs) => render_runs(args, &runs),
        Err(err) => {
            tracing::warn!(code = err.code(), "input refused");
            Ok(render_failure(args, JsonError::from(&err)))
        }
    }
}

/// Check the runs against each other and render them.
///
/// Disagreeing detectors are an `Error` outcome, rendered like input errors.
pub fn render_runs(args: &Args, runs: &[DetectorRun]) -> Result<PipelineResult, Box<dyn Error>> {
    let equivalent = match runs {
        [first, rest @ ..] if !rest.is_empty() => {
            for other in rest {
                if let Err(err) = check_equivalence(first, other) {
                    tracing::error!(%err, "detectors disagree");
                    return Ok(render_failure(args, JsonError::from(&err)));
                }
            }
            Some(true)
        }
        _ => None,
    };

    let outcome = match runs.first() {
        Some(run) if !run.duplicates.is_empty() => Outcome::Duplicates,
        _ => Outcome::NoDuplicates,
    };

    let output = if args.json {
        let json = JsonOutput {
            version: SCHEMA_VERSION,
            source: source_label(&args.source),
            outcome,
            runs: runs.iter().map(json_run).collect(),
            equivalent,
            error: None,
        };
        json.render()?
    } else {
        render_human(runs)
    };

    Ok(PipelineResult { outcome, output })
}

/// Run each selected detector on a fresh read of the source.
pub fn run_detectors(args: &Args) -> Result<Vec<DetectorRun>, InputError> {
    let mut runs = Vec::new();
    for &detector in args.detector.detectors() {
        runs.push(run_detector(args, detector)?);
    }
    Ok(runs)
}

fn run_detector(args: &Args, detector: Detector) -> Result<DetectorRun, InputError> {
    let source = args.source.as_path();
    let duplicates = detector.run(source)?;
    tracing::info!(
        detector = detector.as_str(),
        count = duplicates.len(),
        "duplicates found"
    );

    let timing = if args.timeit {
        let config = args.timing_config();
        Some(time_repeated(detector.function_name(), config, || {
            detector.run(source)
        })?)
    } else {
        None
    };

    let profile = if args.profile {
        let (result, report) = profile(detector.function_name(), |profiler| {
            detector.run_with(source, profiler)
        });
        result?;
        Some(report)
    } else {
        None
    };

    Ok(DetectorRun {
        detector,
        duplicates,
        timing,
        profile,
    })
}

/// Compare the normalized keys two runs reported.
pub fn check_equivalence(left: &DetectorRun, right: &DetectorRun) -> Result<(), EquivalenceError> {
    let left_keys = left.duplicates.normalized_keys();
    let right_keys = right.duplicates.normalized_keys();
    if left_keys == right_keys {
        return Ok(());
    }
    Err(EquivalenceError {
        left: left.detector,
        right: right.detector,
        left_only: left_keys.difference(&right_keys).cloned().collect(),
        right_only: right_keys.difference(&left_keys).cloned().collect(),
    })
}

fn render_human(runs: &[DetectorRun]) -> String {
    let mut sections: Vec<Vec<String>> = Vec::new();
    for run in runs {
        sections.push(render_duplicates(run.detector, &run.duplicates));
    }
    for run in runs {
        if let Some(timing) = &run.timing {
            sections.push(render_timing(run.detector, timing));
        }
    }
    for run in runs {
        if let Some(profile) = &run.profile {
            sections.push(render_profile(run.detector, profile));
        }
    }
    sections
        .into_iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_failure(args: &Args, error: JsonError) -> PipelineResult {
    let output = if args.json {
        let code = error.code;
        let json = JsonOutput {
            version: SCHEMA_VERSION,
            source: source_label(&args.source),
            outcome: Outcome::Error,
            runs: Vec::new(),
            equivalent: None,
            error: Some(error),
        };
        json.render()
            .unwrap_or_else(|_| format!("{{\"outcome\":\"ERROR\",\"code\":\"{code}\"}}"))
    } else {
        render_error(error.code, &error.message)
    };

    PipelineResult {
        outcome: Outcome::Error,
        output,
    }
}

fn json_run(run: &DetectorRun) -> JsonRun<'_> {
    JsonRun {
        detector: run.detector,
        function: run.detector.function_name(),
        count: run.duplicates.len(),
        duplicates: &run.duplicates,
        timing: run.timing.as_ref(),
        profile: run.profile.as_ref(),
    }
}

fn source_label(source: &Path) -> String {
    source.to_string_lossy().to_string()
}
