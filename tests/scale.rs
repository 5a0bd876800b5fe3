mod helpers;

use tuneup::detect::{Detector, OpCounter, Step};

fn operations(detector: Detector, titles: &[String]) -> (u64, usize) {
    let mut counter = OpCounter::new();
    let found = detector.detect_with(titles, &mut counter);
    (counter.operations(), found.len())
}

#[test]
fn outputs_match_at_scale() {
    let titles = helpers::titles_with_dups(2_000, 0.05, 2_000);
    let naive = Detector::Naive.detect(&titles);
    let linear = Detector::Linear.detect(&titles);
    assert!(!linear.is_empty());
    assert_eq!(naive.normalized_keys(), linear.normalized_keys());
}

#[test]
fn linear_does_one_tally_per_title() {
    for n in [250, 500, 1_000] {
        let titles = helpers::titles_with_dups(n, 0.05, n as u64);
        let mut counter = OpCounter::new();
        Detector::Linear.detect_with(&titles, &mut counter);
        assert_eq!(counter.count(Step::Tally), titles.len() as u64);
        assert_eq!(counter.count(Step::Compare), 0);
    }
}

#[test]
fn naive_compares_every_distinct_pair() {
    let n = 400;
    let titles = helpers::titles_with_dups(n, 0.05, 11);
    let len = titles.len() as u64;
    let (ops, _) = operations(Detector::Naive, &titles);

    // the distinct prefix is scanned in full
    let lower = (n as u64) * (n as u64 - 1) / 2;
    assert!(ops >= lower, "ops={ops} lower={lower}");
    assert!(ops <= len * len, "ops={ops} len={len}");
}

#[test]
fn growth_is_quadratic_versus_linear() {
    let small = helpers::titles_with_dups(500, 0.05, 1);
    let large = helpers::titles_with_dups(1_000, 0.05, 1);

    let (naive_small, dups_small) = operations(Detector::Naive, &small);
    let (naive_large, _) = operations(Detector::Naive, &large);
    let (linear_small, linear_dups_small) = operations(Detector::Linear, &small);
    let (linear_large, _) = operations(Detector::Linear, &large);

    assert_eq!(dups_small, linear_dups_small);
    assert_eq!(linear_large, 2 * linear_small);

    let naive_ratio = naive_large as f64 / naive_small as f64;
    assert!(naive_ratio > 3.5, "naive_ratio={naive_ratio}");
    assert!(naive_large > 100 * linear_large);
}
