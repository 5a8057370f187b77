//! Box catalog checks.

use std::collections::BTreeSet;

use shiprate_model::{BoxDraft, BoxSpec, TableKind, ValidationError};

use crate::keys::{DuplicateTracker, blank_rows};

const REQUIRED: &[&str] = &["key", "label"];

/// Validate box rows: key and label required, every dimension positive,
/// keys unique.
pub fn validate_boxes(candidate: &[BoxDraft]) -> Result<Vec<BoxSpec>, ValidationError> {
    let table = TableKind::Boxes;
    let rows: Vec<BoxSpec> = candidate.iter().map(BoxDraft::normalize).collect();

    let missing = blank_rows(&rows, |row| row.key.is_empty() || row.label.is_empty());
    if !missing.is_empty() {
        return Err(ValidationError::MissingField {
            table,
            fields: REQUIRED,
            rows: missing,
        });
    }

    let invalid: BTreeSet<String> = rows
        .iter()
        .filter(|row| !row.has_valid_dimensions())
        .map(|row| row.key.clone())
        .collect();
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidDimension {
            table,
            keys: invalid.into_iter().collect(),
        });
    }

    let mut tracker = DuplicateTracker::default();
    for row in &rows {
        tracker.observe(row.key.clone());
    }
    let duplicates = tracker.into_duplicates();
    if !duplicates.is_empty() {
        return Err(ValidationError::DuplicateKey {
            table,
            keys: duplicates,
        });
    }

    Ok(rows)
}
