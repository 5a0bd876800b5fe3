// Human duplicate report body

use crate::detect::{Detector, DuplicateSet};
use crate::output::human::stage_label;

pub fn render_duplicates(detector: Detector, duplicates: &DuplicateSet) -> Vec<String> {
    let mut lines = Vec::with_capacity(duplicates.len() + 2);
    lines.push(format!("--- Duplicates, {} ---", stage_label(detector)));
    lines.push(format!("Found {} duplicate movies:", duplicates.len()));
    lines.extend(duplicates.iter().cloned());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_title_per_line() {
        let set = DuplicateSet::from(vec!["Cars".to_string(), "Frozen".to_string()]);
        let lines = render_duplicates(Detector::Linear, &set);
        assert_eq!(
            lines,
            vec![
                "--- Duplicates, after optimization ---",
                "Found 2 duplicate movies:",
                "Cars",
                "Frozen",
            ]
        );
    }

    #[test]
    fn empty_set_has_count_only() {
        let lines = render_duplicates(Detector::Naive, &DuplicateSet::default());
        assert_eq!(lines[1], "Found 0 duplicate movies:");
        assert_eq!(lines.len(), 2);
    }
}
