//! Linear duplicate detection with a frequency table.
//!
//! One pass counts occurrences per normalized key; a second walk over the
//! distinct keys keeps those seen more than once. The representative is the
//! first occurrence and the order is first-seen.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::detect::DuplicateSet;
use crate::detect::probe::{Probe, Step};
use crate::normalize::key::normalized_key;

/// Occurrence count for one normalized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCount<'a> {
    pub first: &'a str,
    pub count: usize,
}

pub fn find_duplicates_linear<T: AsRef<str>>(titles: &[T]) -> DuplicateSet {
    find_duplicates_linear_with(titles, &mut ())
}

pub fn find_duplicates_linear_with<T, P>(titles: &[T], probe: &mut P) -> DuplicateSet
where
    T: AsRef<str>,
    P: Probe,
{
    let counts = probe.scope(Step::CountKeys, |probe| count_keys(titles, probe));
    probe.scope(Step::CollectDuplicates, |_| collect_duplicates(&counts))
}

/// Count titles per normalized key, in first-seen key order.
pub fn count_keys<'a, T, P>(titles: &'a [T], probe: &mut P) -> Vec<KeyCount<'a>>
where
    T: AsRef<str>,
    P: Probe,
{
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(titles.len());
    let mut counts: Vec<KeyCount<'a>> = Vec::new();

    for title in titles {
        let title = title.as_ref();
        probe.tick(Step::Tally);
        match slots.entry(normalized_key(title)) {
            Entry::Occupied(slot) => counts[*slot.get()].count += 1,
            Entry::Vacant(slot) => {
                slot.insert(counts.len());
                counts.push(KeyCount {
                    first: title,
                    count: 1,
                });
            }
        }
    }

    counts
}

fn collect_duplicates(counts: &[KeyCount<'_>]) -> DuplicateSet {
    counts
        .iter()
        .filter(|entry| entry.count > 1)
        .map(|entry| entry.first.to_owned())
        .collect()
}
