//! Key bookkeeping shared by the table checks.

use std::collections::BTreeSet;

/// Tracks natural keys and collects every key seen more than once.
///
/// Violations form a set: a key repeated three times is reported once.
#[derive(Debug, Default)]
pub(crate) struct DuplicateTracker {
    seen: BTreeSet<String>,
    duplicates: BTreeSet<String>,
}

impl DuplicateTracker {
    /// Seed with keys that already exist in the stored table.
    pub(crate) fn with_existing<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            seen: keys.into_iter().collect(),
            duplicates: BTreeSet::new(),
        }
    }

    pub(crate) fn observe(&mut self, key: String) {
        if self.seen.contains(&key) {
            self.duplicates.insert(key);
        } else {
            self.seen.insert(key);
        }
    }

    pub(crate) fn into_duplicates(self) -> Vec<String> {
        self.duplicates.into_iter().collect()
    }
}

/// 1-based row numbers for rows matching `blank`.
pub(crate) fn blank_rows<T>(rows: &[T], blank: impl Fn(&T) -> bool) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| blank(row))
        .map(|(index, _)| index + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_key_is_reported_once() {
        let mut tracker = DuplicateTracker::default();
        for key in ["A", "A", "A", "B"] {
            tracker.observe(key.to_string());
        }
        assert_eq!(tracker.into_duplicates(), vec!["A".to_string()]);
    }

    #[test]
    fn existing_keys_count_as_seen() {
        let mut tracker = DuplicateTracker::with_existing(["A".to_string()]);
        tracker.observe("A".to_string());
        assert_eq!(tracker.into_duplicates(), vec!["A".to_string()]);
    }

    #[test]
    fn blank_rows_are_one_based() {
        assert_eq!(blank_rows(&["x", "", "y", ""], |row| row.is_empty()), vec![2, 4]);
    }
}
