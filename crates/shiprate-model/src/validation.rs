//! Structured validation failures.
//!
//! A failed batch yields exactly one [`ValidationError`]: the highest-priority
//! violation category found, listing every offending key of that category.
//! The `Display` output is the human-readable message returned to callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::TableKind;

/// Category of a validation failure, in reporting priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    MissingField,
    InvalidDimension,
    DuplicateKey,
    UnknownService,
    UnknownCarrier,
    UnknownZone,
    UnknownCountry,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required cells are blank. `rows` are 1-based positions in the batch.
    #[error("{table}: {} are required (rows: {})", .fields.join(", "), join_rows(.rows))]
    MissingField {
        table: TableKind,
        fields: &'static [&'static str],
        rows: Vec<usize>,
    },

    /// Box dimensions must all be greater than zero.
    #[error("{table}: length_cm / width_cm / height_cm must be greater than 0: {}", .keys.join(", "))]
    InvalidDimension { table: TableKind, keys: Vec<String> },

    /// The same natural key appears more than once, in the batch or against
    /// the existing rows in append mode.
    #[error("{table}: duplicate {} combinations: {}", .table.key_columns().join(","), .keys.join(", "))]
    DuplicateKey { table: TableKind, keys: Vec<String> },

    /// Rate rows naming a service absent from the services table.
    #[error("{table}: unknown services (not in the services table): {}", .names.join(", "))]
    UnknownService { table: TableKind, names: Vec<String> },

    /// Mapping rows naming a carrier no service uses.
    #[error("{table}: unknown carriers: {}", .carriers.join(", "))]
    UnknownCarrier {
        table: TableKind,
        carriers: Vec<String>,
    },

    /// Rate rows whose `carrier|zone` pair has no carrier-zone mapping.
    #[error("{table}: unknown zones (no carrier zone mapping): {}", .pairs.join(", "))]
    UnknownZone { table: TableKind, pairs: Vec<String> },

    /// Mapping rows naming a country code absent from the countries table.
    #[error("{table}: unknown country codes: {}", .codes.join(", "))]
    UnknownCountry { table: TableKind, codes: Vec<String> },
}

impl ValidationError {
    pub fn kind(&self) -> ViolationKind {
        match self {
            ValidationError::MissingField { .. } => ViolationKind::MissingField,
            ValidationError::InvalidDimension { .. } => ViolationKind::InvalidDimension,
            ValidationError::DuplicateKey { .. } => ViolationKind::DuplicateKey,
            ValidationError::UnknownService { .. } => ViolationKind::UnknownService,
            ValidationError::UnknownCarrier { .. } => ViolationKind::UnknownCarrier,
            ValidationError::UnknownZone { .. } => ViolationKind::UnknownZone,
            ValidationError::UnknownCountry { .. } => ViolationKind::UnknownCountry,
        }
    }

    pub fn table(&self) -> TableKind {
        match self {
            ValidationError::MissingField { table, .. }
            | ValidationError::InvalidDimension { table, .. }
            | ValidationError::DuplicateKey { table, .. }
            | ValidationError::UnknownService { table, .. }
            | ValidationError::UnknownCarrier { table, .. }
            | ValidationError::UnknownZone { table, .. }
            | ValidationError::UnknownCountry { table, .. } => *table,
        }
    }

    /// Offending keys; row numbers for [`ValidationError::MissingField`].
    pub fn keys(&self) -> Vec<String> {
        match self {
            ValidationError::MissingField { rows, .. } => {
                rows.iter().map(ToString::to_string).collect()
            }
            ValidationError::InvalidDimension { keys, .. }
            | ValidationError::DuplicateKey { keys, .. } => keys.clone(),
            ValidationError::UnknownService { names, .. } => names.clone(),
            ValidationError::UnknownCarrier { carriers, .. } => carriers.clone(),
            ValidationError::UnknownZone { pairs, .. } => pairs.clone(),
            ValidationError::UnknownCountry { codes, .. } => codes.clone(),
        }
    }
}

fn join_rows(rows: &[usize]) -> String {
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
