//! Carrier-zone mapping checks.
//!
//! Order: missing carrier/country code, duplicate `(carrier, country_code)`,
//! unknown carrier, unknown country.

use std::collections::BTreeSet;

use shiprate_model::{CarrierZoneMapping, TableKind, ValidationError};
use shiprate_store::ReferenceData;

use crate::keys::{DuplicateTracker, blank_rows};

const REQUIRED: &[&str] = &["carrier", "country_code"];

/// Validate mapping rows. `existing` is the stored table in append mode; an
/// incoming key already present there is a duplicate even when the zone
/// differs.
pub fn validate_carrier_zones(
    candidate: &[CarrierZoneMapping],
    existing: Option<&[CarrierZoneMapping]>,
    snapshot: &ReferenceData,
) -> Result<Vec<CarrierZoneMapping>, ValidationError> {
    let table = TableKind::CarrierZones;
    let rows: Vec<CarrierZoneMapping> = candidate.iter().map(CarrierZoneMapping::normalized).collect();

    let missing = blank_rows(&rows, |row| row.carrier.is_empty() || row.country_code.is_empty());
    if !missing.is_empty() {
        return Err(ValidationError::MissingField {
            table,
            fields: REQUIRED,
            rows: missing,
        });
    }

    let mut tracker = DuplicateTracker::with_existing(
        existing
            .unwrap_or_default()
            .iter()
            .map(|row| row.normalized().key_label()),
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

    let carriers = snapshot.service_carriers();
    let unknown_carriers: BTreeSet<String> = rows
        .iter()
        .filter(|row| !carriers.contains(&row.carrier))
        .map(|row| row.carrier.clone())
        .collect();
    if !unknown_carriers.is_empty() {
        return Err(ValidationError::UnknownCarrier {
            table,
            carriers: unknown_carriers.into_iter().collect(),
        });
    }

    let countries = snapshot.country_codes();
    let unknown_countries: BTreeSet<String> = rows
        .iter()
        .filter(|row| !countries.contains(&row.country_code))
        .map(|row| row.country_code.clone())
        .collect();
    if !unknown_countries.is_empty() {
        return Err(ValidationError::UnknownCountry {
            table,
            codes: unknown_countries.into_iter().collect(),
        });
    }

    Ok(rows)
}
