//! Command runners. Each takes a store, does one operation and returns what
//! the caller prints.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use shiprate_core::{
    BoxGuideEntry, CoverageGap, Quote, QuoteRequest, ReconcileOutcome, apply, box_guide,
    build_quote, countries_for_zone, fill_missing_zones, missing_zones, reconcile,
};
use shiprate_model::{Batch, MergeMode, TableKind};
use shiprate_store::{ReferenceStore, read_batch};

/// Missing carrier zones, plus the number of placeholders written when
/// filling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub gaps: Vec<CoverageGap>,
    pub filled: Option<usize>,
}

pub fn run_quote<S: ReferenceStore + ?Sized>(store: &S, request: &QuoteRequest) -> Result<Quote> {
    let span = info_span!("quote", country = %request.country_code);
    let _guard = span.enter();
    let snapshot = store.load().context("load reference data")?;
    let quote = build_quote(&snapshot, request)?;
    Ok(quote)
}

/// Dry run: read and reconcile `file` without committing.
pub fn run_validate<S: ReferenceStore + ?Sized>(
    store: &S,
    kind: TableKind,
    file: &Path,
    mode: MergeMode,
) -> Result<ReconcileOutcome> {
    let span = info_span!("validate", table = %kind, %mode);
    let _guard = span.enter();
    let batch = read_batch(kind, file)
        .with_context(|| format!("read {kind} upload {}", file.display()))?;
    let snapshot = store.load().context("load reference data")?;
    let outcome = reconcile(&batch, mode, &snapshot)
        .with_context(|| format!("{kind} batch rejected"))?;
    info!(incoming = outcome.incoming, total = outcome.total, "batch valid");
    Ok(outcome)
}

pub fn run_upload<S: ReferenceStore + ?Sized>(
    store: &mut S,
    kind: TableKind,
    file: &Path,
    mode: MergeMode,
) -> Result<ReconcileOutcome> {
    let span = info_span!("upload", table = %kind, %mode);
    let _guard = span.enter();
    let start = Instant::now();
    let batch = read_batch(kind, file)
        .with_context(|| format!("read {kind} upload {}", file.display()))?;
    let outcome = apply(store, &batch, mode).with_context(|| format!("{kind} upload failed"))?;
    info!(
        incoming = outcome.incoming,
        total = outcome.total,
        duration_ms = start.elapsed().as_millis(),
        "upload complete"
    );
    Ok(outcome)
}

pub fn run_coverage<S: ReferenceStore + ?Sized>(store: &mut S, fill: bool) -> Result<CoverageReport> {
    let span = info_span!("coverage", fill);
    let _guard = span.enter();
    let snapshot = store.load().context("load reference data")?;
    let gaps = missing_zones(&snapshot);
    let filled = if fill && !gaps.is_empty() {
        let (rows, added) = fill_missing_zones(&snapshot);
        apply(store, &Batch::CarrierZones(rows), MergeMode::Replace)
            .context("carrier_zones fill rejected")?;
        info!(added, "placeholder zones written");
        Some(added)
    } else {
        None
    };
    Ok(CoverageReport { gaps, filled })
}

pub fn run_zone_countries<S: ReferenceStore + ?Sized>(
    store: &S,
    carrier: &str,
    zone: &str,
) -> Result<Vec<String>> {
    let snapshot = store.load().context("load reference data")?;
    Ok(countries_for_zone(snapshot.carrier_zones(), carrier, zone))
}

pub fn run_boxes<S: ReferenceStore + ?Sized>(store: &S) -> Result<Vec<BoxGuideEntry>> {
    let snapshot = store.load().context("load reference data")?;
    Ok(box_guide(snapshot.boxes(), snapshot.settings()))
}

pub fn run_tables<S: ReferenceStore + ?Sized>(store: &S) -> Result<Vec<(TableKind, usize)>> {
    let snapshot = store.load().context("load reference data")?;
    Ok(TableKind::ALL
        .into_iter()
        .map(|kind| (kind, snapshot.row_count(kind)))
        .collect())
}
