//! Combining an incoming batch with the stored table.
//!
//! Replace: the validated batch becomes the table. Append: rates and carrier
//! zones are additive only (a colliding key fails the batch); countries,
//! services, settings and boxes are upserted by natural key, keeping the
//! first position of each key. Nothing is written unless the whole batch is
//! accepted.

use std::collections::HashMap;

use tracing::info;

use shiprate_model::{
    Batch, BoxDraft, CarrierZoneMapping, Country, MergeMode, Service, Table, ValidationError,
};
use shiprate_normalization::normalize_box_key;
use shiprate_store::{ReferenceData, ReferenceStore};
use shiprate_validate::{validate, validate_boxes, validate_carrier_zones, validate_rates};

use crate::error::ApplyError;

/// Table to persist plus the counts reported back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileOutcome {
    pub table: Table,
    pub mode: MergeMode,
    /// Rows in the incoming batch.
    pub incoming: usize,
    /// Rows in the resulting table.
    pub total: usize,
}

/// Key-based upsert. Blank keys are skipped; a repeated key overwrites the
/// row in place.
fn upsert<T, I, K>(rows: I, key_of: K) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Fn(&T) -> String,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<T> = Vec::new();
    for row in rows {
        let key = key_of(&row);
        if key.is_empty() {
            continue;
        }
        match positions.get(&key) {
            Some(&position) => merged[position] = row,
            None => {
                positions.insert(key, merged.len());
                merged.push(row);
            }
        }
    }
    merged
}

fn append(batch: &Batch, snapshot: &ReferenceData) -> Result<Table, ValidationError> {
    let table = match batch {
        Batch::Countries(rows) => Table::Countries(upsert(
            snapshot.countries().iter().chain(rows).map(Country::normalized),
            |row| row.code.clone(),
        )),
        Batch::Services(rows) => Table::Services(upsert(
            snapshot.services().iter().chain(rows).map(Service::normalized),
            |row| row.id.clone(),
        )),
        Batch::Settings(settings) => {
            let mut merged = snapshot.settings().clone();
            merged.merge(settings);
            Table::Settings(merged)
        }
        Batch::Boxes(rows) => {
            let drafts = upsert(
                snapshot.boxes().iter().map(BoxDraft::from).chain(rows.iter().cloned()),
                |row| normalize_box_key(&row.key),
            );
            Table::Boxes(validate_boxes(&drafts)?)
        }
        Batch::CarrierZones(rows) => {
            let added = validate_carrier_zones(rows, Some(snapshot.carrier_zones()), snapshot)?;
            Table::CarrierZones(
                snapshot
                    .carrier_zones()
                    .iter()
                    .map(CarrierZoneMapping::normalized)
                    .chain(added)
                    .collect(),
            )
        }
        Batch::Rates(rows) => {
            let added = validate_rates(rows, Some(snapshot.rates()), snapshot)?;
            Table::Rates(snapshot.rates().iter().cloned().chain(added).collect())
        }
    };
    Ok(table)
}

/// Validate `batch` and compute the table that would replace the stored one.
pub fn reconcile(
    batch: &Batch,
    mode: MergeMode,
    snapshot: &ReferenceData,
) -> Result<ReconcileOutcome, ValidationError> {
    let table = match mode {
        MergeMode::Replace => validate(batch, mode, snapshot)?,
        MergeMode::Append => append(batch, snapshot)?,
    };
    Ok(ReconcileOutcome {
        mode,
        incoming: batch.len(),
        total: table.len(),
        table,
    })
}

/// Load a snapshot from `store`, reconcile `batch` and commit the result.
pub fn apply<S: ReferenceStore + ?Sized>(
    store: &mut S,
    batch: &Batch,
    mode: MergeMode,
) -> Result<ReconcileOutcome, ApplyError> {
    let snapshot = store.load()?;
    let outcome = reconcile(batch, mode, &snapshot)?;
    store.commit(outcome.table.clone())?;
    info!(
        table = %batch.kind(),
        %mode,
        incoming = outcome.incoming,
        total = outcome.total,
        "batch applied"
    );
    Ok(outcome)
}
