use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::detect::{Detector, UnknownDetector};
use crate::timing::{DEFAULT_NUMBER, DEFAULT_REPEAT, TimingConfig};

const DEFAULT_SOURCE: &str = "movies.txt";

/// Which detectors a run exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorChoice {
    Naive,
    Linear,
    /// Naive first ("before optimization"), then linear ("after").
    Both,
}

impl DetectorChoice {
    pub fn detectors(self) -> &'static [Detector] {
        match self {
            DetectorChoice::Naive => &[Detector::Naive],
            DetectorChoice::Linear => &[Detector::Linear],
            DetectorChoice::Both => &Detector::ALL,
        }
    }
}

impl From<Detector> for DetectorChoice {
    fn from(detector: Detector) -> Self {
        match detector {
            Detector::Naive => DetectorChoice::Naive,
            Detector::Linear => DetectorChoice::Linear,
        }
    }
}

impl FromStr for DetectorChoice {
    type Err = UnknownDetector;

    /// `both`, or any name [`Detector`] answers to.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(DetectorChoice::Both),
            _ => s.parse::<Detector>().map(DetectorChoice::from),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "tuneup",
    about = "Find duplicate movie titles, and measure a quadratic detector against a linear one.",
    override_usage = "tuneup [SOURCE] [--detector <naive|linear|both>] [--timeit] [--repeat <N>] [--number <N>] [--profile] [--json]"
)]
pub struct Args {
    /// Title list, one title per line (default: movies.txt).
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Detector(s) to run: naive, linear, both, or a detector's function name.
    #[arg(long, value_name = "DETECTOR", default_value = "both", value_parser = parse_detector)]
    pub detector: DetectorChoice,

    /// Time each detector over repeated runs (minimum of repeats).
    #[arg(long)]
    pub timeit: bool,

    /// Timing repeats: N >= 1 (default: 5).
    #[arg(long, value_name = "N", default_value_t = DEFAULT_REPEAT, value_parser = parse_count)]
    pub repeat: usize,

    /// Calls per timing repeat: N >= 1 (default: 3).
    #[arg(long, value_name = "N", default_value_t = DEFAULT_NUMBER, value_parser = parse_count)]
    pub number: usize,

    /// Report call counts and cumulative time per internal step.
    #[arg(long)]
    pub profile: bool,

    /// Emit JSON output (single object).
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn parse() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Arguments for a plain run over `source` with both detectors.
    pub fn for_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            detector: DetectorChoice::Both,
            timeit: false,
            repeat: DEFAULT_REPEAT,
            number: DEFAULT_NUMBER,
            profile: false,
            json: false,
        }
    }

    pub fn timing_config(&self) -> TimingConfig {
        TimingConfig {
            repeat: self.repeat,
            number: self.number,
        }
    }
}

fn parse_detector(raw: &str) -> Result<DetectorChoice, String> {
    raw.parse::<DetectorChoice>().map_err(|err| err.to_string())
}

fn parse_count(raw: &str) -> Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| "must be a whole number".to_string())?;
    if value == 0 {
        return Err("must be >= 1".to_string());
    }
    Ok(value)
}
