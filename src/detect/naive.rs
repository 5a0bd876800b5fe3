//! Quadratic duplicate detection.
//!
//! Titles are taken from the back of the list, the way a stack is drained,
//! and each taken title is scanned against every title still ahead of it.
//! The input slice is never mutated; "remaining" is the prefix before the
//! taken index. A key is reported once: the partial result is scanned
//! linearly before a title is recorded, so the representative is the last
//! occurrence and the order is reverse of last-seen.

use crate::detect::DuplicateSet;
use crate::detect::probe::{Probe, Step};
use crate::normalize::key::titles_equal;

pub fn find_duplicates_naive<T: AsRef<str>>(titles: &[T]) -> DuplicateSet {
    find_duplicates_naive_with(titles, &mut ())
}

pub fn find_duplicates_naive_with<T, P>(titles: &[T], probe: &mut P) -> DuplicateSet
where
    T: AsRef<str>,
    P: Probe,
{
    let mut duplicates: Vec<String> = Vec::new();

    for taken in (0..titles.len()).rev() {
        let title = titles[taken].as_ref();
        let remaining = &titles[..taken];

        let found = probe.scope(Step::IsDuplicate, |probe| {
            is_duplicate(title, remaining, probe)
        });
        if !found {
            continue;
        }

        let reported = probe.scope(Step::Reconcile, |probe| {
            is_duplicate(title, duplicates.as_slice(), probe)
        });
        if !reported {
            duplicates.push(title.to_owned());
        }
    }

    DuplicateSet::from(duplicates)
}

/// Returns true if `title` equals (case-insensitively) any of `others`.
///
/// One [`Step::Compare`] tick per comparison made; stops at the first match.
pub fn is_duplicate<T, P>(title: &str, others: &[T], probe: &mut P) -> bool
where
    T: AsRef<str>,
    P: Probe,
{
    others.iter().any(|other| {
        probe.tick(Step::Compare);
        titles_equal(other.as_ref(), title)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::probe::OpCounter;

    #[test]
    fn empty_input() {
        let titles: [&str; 0] = [];
        assert!(find_duplicates_naive(&titles).is_empty());
    }

    #[test]
    fn reports_last_occurrence_in_reverse_order() {
        let titles = ["Cars", "Frozen", "cars", "Moana", "frozen", "Cars"];
        let found = find_duplicates_naive(&titles);
        assert_eq!(found.titles(), ["Cars", "frozen"]);
    }

    #[test]
    fn triple_is_reported_once() {
        let found = find_duplicates_naive(&["X", "X", "X"]);
        assert_eq!(found.titles(), ["X"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let titles = vec!["Up".to_string(), "up".to_string()];
        let before = titles.clone();
        let _ = find_duplicates_naive(&titles);
        assert_eq!(titles, before);
    }

    #[test]
    fn is_duplicate_stops_at_first_match() {
        let mut counter = OpCounter::new();
        assert!(is_duplicate("a", &["A", "a", "a"], &mut counter));
        assert_eq!(counter.count(Step::Compare), 1);
    }

    #[test]
    fn unique_titles_compare_every_pair() {
        let titles: Vec<String> = (0..10).map(|i| format!("title {i}")).collect();
        let mut counter = OpCounter::new();
        let found = find_duplicates_naive_with(&titles, &mut counter);
        assert!(found.is_empty());
        assert_eq!(counter.count(Step::Compare), 45);
        assert_eq!(counter.count(Step::IsDuplicate), 10);
        assert_eq!(counter.count(Step::Reconcile), 0);
    }
}
