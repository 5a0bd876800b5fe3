#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("fixture should be readable")
}

pub fn set_manifest_cwd() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    std::env::set_current_dir(&manifest_dir).expect("set current dir to manifest");
}

/// `n` distinct titles followed by `dup_fraction * n` re-cased copies of
/// randomly chosen ones.
pub fn titles_with_dups(n: usize, dup_fraction: f64, seed: u64) -> Vec<String> {
    assert!((0.0..=1.0).contains(&dup_fraction));
    let mut rng = StdRng::seed_from_u64(seed);
    let mut titles: Vec<String> = (0..n).map(|i| format!("Movie Title {i:06}")).collect();
    let dup_count = (n as f64 * dup_fraction).round() as usize;
    for _ in 0..dup_count {
        let idx = rng.gen_range(0..n);
        let copy = if rng.gen_bool(0.5) {
            titles[idx].to_uppercase()
        } else {
            titles[idx].to_lowercase()
        };
        titles.push(copy);
    }
    titles
}
