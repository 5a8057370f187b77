//! Dispatch from a batch to its table check.

use tracing::debug;

use shiprate_model::{Batch, Country, MergeMode, Service, Table, ValidationError};
use shiprate_store::ReferenceData;

use crate::checks::{validate_boxes, validate_carrier_zones, validate_rates};

/// Validate one batch against `snapshot`.
///
/// Returns the normalized candidate rows; merging them with the stored table
/// is the caller's job. In [`MergeMode::Append`] the stored rows of the same
/// table take part in duplicate detection for rates and carrier zones.
/// Countries, services and settings are accepted structurally.
pub fn validate(
    batch: &Batch,
    mode: MergeMode,
    snapshot: &ReferenceData,
) -> Result<Table, ValidationError> {
    let append = mode == MergeMode::Append;
    let result = match batch {
        Batch::Countries(rows) => Ok(Table::Countries(
            rows.iter().map(Country::normalized).collect(),
        )),
        Batch::Services(rows) => Ok(Table::Services(
            rows.iter().map(Service::normalized).collect(),
        )),
        Batch::Settings(settings) => Ok(Table::Settings(settings.clone())),
        Batch::CarrierZones(rows) => {
            let existing = append.then(|| snapshot.carrier_zones());
            validate_carrier_zones(rows, existing, snapshot).map(Table::CarrierZones)
        }
        Batch::Rates(rows) => {
            let existing = append.then(|| snapshot.rates());
            validate_rates(rows, existing, snapshot).map(Table::Rates)
        }
        Batch::Boxes(rows) => validate_boxes(rows).map(Table::Boxes),
    };

    match &result {
        Ok(table) => debug!(table = %batch.kind(), %mode, rows = table.len(), "batch accepted"),
        Err(error) => debug!(
            table = %batch.kind(),
            %mode,
            kind = ?error.kind(),
            keys = error.keys().len(),
            "batch rejected"
        ),
    }
    result
}
