//! Carrier-zone coverage: which `(carrier, country)` pairs still lack a zone.

use std::collections::BTreeSet;
use std::fmt;

use shiprate_model::CarrierZoneMapping;
use shiprate_store::ReferenceData;

/// Zone written into generated placeholder rows.
pub const PLACEHOLDER_ZONE: &str = "TODO";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CoverageGap {
    pub carrier: String,
    pub country_code: String,
}

impl fmt::Display for CoverageGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.carrier, self.country_code)
    }
}

/// Every service carrier × country pair without a non-empty zone, carriers
/// and countries both in sorted order.
pub fn missing_zones(snapshot: &ReferenceData) -> Vec<CoverageGap> {
    let covered: BTreeSet<(String, String)> = snapshot
        .carrier_zones()
        .iter()
        .map(CarrierZoneMapping::normalized)
        .filter(CarrierZoneMapping::is_complete)
        .map(|mapping| (mapping.carrier, mapping.country_code))
        .collect();
    let countries = snapshot.country_codes();

    let mut gaps = Vec::new();
    for carrier in snapshot.service_carriers() {
        for code in &countries {
            if !covered.contains(&(carrier.clone(), code.clone())) {
                gaps.push(CoverageGap {
                    carrier: carrier.clone(),
                    country_code: code.clone(),
                });
            }
        }
    }
    gaps
}

/// The carrier-zone table with a placeholder row appended for each gap
/// whose key is not present at all. A row with a blank zone is left alone
/// rather than duplicated.
pub fn fill_missing_zones(snapshot: &ReferenceData) -> (Vec<CarrierZoneMapping>, usize) {
    let mut rows: Vec<CarrierZoneMapping> = snapshot.carrier_zones().to_vec();
    let mut keys: BTreeSet<String> = rows
        .iter()
        .map(|row| row.normalized().key_label())
        .collect();
    let mut added = 0;
    for gap in missing_zones(snapshot) {
        let mapping = CarrierZoneMapping::new(gap.carrier, gap.country_code, PLACEHOLDER_ZONE);
        if keys.insert(mapping.key_label()) {
            rows.push(mapping);
            added += 1;
        }
    }
    (rows, added)
}
