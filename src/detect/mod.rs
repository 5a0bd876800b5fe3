//! Duplicate detection: a quadratic and a linear detector that must agree.

pub mod linear;
pub mod naive;
pub mod probe;

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::input::error::InputError;
use crate::input::lines::read_titles;
use crate::normalize::key::normalized_key;

pub use linear::{find_duplicates_linear, find_duplicates_linear_with};
pub use naive::{find_duplicates_naive, find_duplicates_naive_with};
pub use probe::{OpCounter, Probe, Step};

/// One movie title, exactly as read.
pub type Title = String;

/// Titles whose normalized key occurred more than once, one per key.
///
/// Iteration order is whatever the producing detector chose. Compare sets
/// with [`DuplicateSet::same_keys`], not by position.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DuplicateSet(Vec<Title>);

impl DuplicateSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Title> {
        self.0.iter()
    }

    pub fn titles(&self) -> &[Title] {
        &self.0
    }

    pub fn into_titles(self) -> Vec<Title> {
        self.0
    }

    pub fn normalized_keys(&self) -> BTreeSet<String> {
        self.0.iter().map(|title| normalized_key(title)).collect()
    }

    /// True if both sets represent the same normalized keys.
    pub fn same_keys(&self, other: &DuplicateSet) -> bool {
        self.normalized_keys() == other.normalized_keys()
    }
}

impl From<Vec<Title>> for DuplicateSet {
    fn from(titles: Vec<Title>) -> Self {
        Self(titles)
    }
}

impl FromIterator<Title> for DuplicateSet {
    fn from_iter<I: IntoIterator<Item = Title>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DuplicateSet {
    type Item = &'a Title;
    type IntoIter = std::slice::Iter<'a, Title>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The two competing detectors, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Detector {
    Naive,
    Linear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDetector(pub String);

impl Detector {
    pub const ALL: [Detector; 2] = [Detector::Naive, Detector::Linear];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Detector::Naive => "naive",
            Detector::Linear => "linear",
        }
    }

    /// Long-form name used in timing and profiling reports.
    #[inline]
    pub const fn function_name(self) -> &'static str {
        match self {
            Detector::Naive => "find_duplicate_movies",
            Detector::Linear => "optimized_find_duplicate_movies",
        }
    }

    pub fn detect<T: AsRef<str>>(self, titles: &[T]) -> DuplicateSet {
        self.detect_with(titles, &mut ())
    }

    pub fn detect_with<T, P>(self, titles: &[T], probe: &mut P) -> DuplicateSet
    where
        T: AsRef<str>,
        P: Probe,
    {
        probe.scope(Step::Detect, |probe| match self {
            Detector::Naive => find_duplicates_naive_with(titles, probe),
            Detector::Linear => find_duplicates_linear_with(titles, probe),
        })
    }

    /// Read `source` and detect duplicates in it.
    pub fn run(self, source: &Path) -> Result<DuplicateSet, InputError> {
        self.run_with(source, &mut ())
    }

    pub fn run_with<P: Probe>(
        self,
        source: &Path,
        probe: &mut P,
    ) -> Result<DuplicateSet, InputError> {
        let titles = probe.scope(Step::ReadTitles, |_| read_titles(source))?;
        Ok(self.detect_with(&titles, probe))
    }
}

impl fmt::Display for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown detector: {}", self.0)
    }
}

impl std::error::Error for UnknownDetector {}

impl FromStr for Detector {
    type Err = UnknownDetector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" | "find_duplicate_movies" => Ok(Detector::Naive),
            "linear" | "optimized_find_duplicate_movies" => Ok(Detector::Linear),
            _ => Err(UnknownDetector(s.to_string())),
        }
    }
}
