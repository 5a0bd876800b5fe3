// JSON output schema assembly

use serde::Serialize;

use crate::cli::exit::Outcome;
use crate::detect::{Detector, DuplicateSet};
use crate::input::error::InputError;
use crate::orchestrator::EquivalenceError;
use crate::profile::ProfileReport;
use crate::timing::TimingReport;

pub const SCHEMA_VERSION: &str = "tuneup.v0";

#[derive(Debug, Clone, Serialize)]
pub struct JsonRun<'a> {
    pub detector: Detector,
    pub function: &'static str,
    pub count: usize,
    pub duplicates: &'a DuplicateSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<&'a TimingReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<&'a ProfileReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonError {
    pub code: &'static str,
    pub message: String,
}

impl From<&InputError> for JsonError {
    fn from(err: &InputError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl From<&EquivalenceError> for JsonError {
    fn from(err: &EquivalenceError) -> Self {
        Self {
            code: EquivalenceError::CODE,
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    pub version: &'static str,
    pub source: String,
    pub outcome: Outcome,
    pub runs: Vec<JsonRun<'a>>,
    /// Whether all runs reported the same normalized keys; absent for one run.
    pub equivalent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl JsonOutput<'_> {
    pub fn render(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
