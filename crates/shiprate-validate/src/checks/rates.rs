//! Rate table checks.
//!
//! Order: blank cells, duplicate `(service, zone, weight)`, unknown service,
//! unknown `carrier|zone` pair.

use std::collections::BTreeSet;

use shiprate_model::{CarrierZoneMapping, RateDraft, RateEntry, TableKind, ValidationError};
use shiprate_store::ReferenceData;

use crate::keys::{DuplicateTracker, blank_rows};

/// `carrier|zone` pairs backed by a complete mapping whose country exists.
fn zone_universe(snapshot: &ReferenceData) -> BTreeSet<String> {
    let countries = snapshot.country_codes();
    snapshot
        .carrier_zones()
        .iter()
        .map(CarrierZoneMapping::normalized)
        .filter(|mapping| mapping.is_complete() && countries.contains(&mapping.country_code))
        .map(|mapping| format!("{}|{}", mapping.carrier, mapping.zone))
        .collect()
}

/// Validate rate rows as submitted. Blank cells are missing fields; other
/// malformed numbers coerce to 0.
pub fn validate_rates(
    candidate: &[RateDraft],
    existing: Option<&[RateEntry]>,
    snapshot: &ReferenceData,
) -> Result<Vec<RateEntry>, ValidationError> {
    let table = TableKind::Rates;

    let missing = blank_rows(candidate, |row| !row.blank_fields().is_empty());
    if !missing.is_empty() {
        return Err(ValidationError::MissingField {
            table,
            fields: table.columns(),
            rows: missing,
        });
    }

    let rows: Vec<RateEntry> = candidate.iter().map(RateDraft::normalize).collect();

    let mut tracker = DuplicateTracker::with_existing(
        existing
            .unwrap_or_default()
            .iter()
            .map(RateEntry::key_label),
    );
    for row in &rows {
        tracker.observe(row.key_label());
    }
    let duplicates = tracker.into_duplicates();
    if !duplicates.is_empty() {
        return Err(ValidationError::DuplicateKey {
            table,
            keys: duplicates,
        });
    }

    let carriers = snapshot.carrier_by_service_name();
    let mut unknown_services = BTreeSet::new();
    let mut unknown_zones = BTreeSet::new();
    let universe = zone_universe(snapshot);
    for row in &rows {
        let Some(carrier) = carriers.get(&row.service) else {
            unknown_services.insert(row.service.clone());
            continue;
        };
        let pair = format!("{}|{}", carrier, row.zone);
        if !universe.contains(&pair) {
            unknown_zones.insert(pair);
        }
    }
    if !unknown_services.is_empty() {
        return Err(ValidationError::UnknownService {
            table,
            names: unknown_services.into_iter().collect(),
        });
    }
    if !unknown_zones.is_empty() {
        return Err(ValidationError::UnknownZone {
            table,
            pairs: unknown_zones.into_iter().collect(),
        });
    }

    Ok(rows)
}
