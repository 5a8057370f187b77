//! Carrier-specific zone resolution.

use std::collections::{BTreeMap, BTreeSet};

use shiprate_model::{CarrierZoneMapping, Service};
use shiprate_normalization::{normalize_carrier_key, normalize_country_code, normalize_zone};

/// Immutable `(carrier, country) -> zone` map.
///
/// Only complete mappings count. When a key repeats, the last row wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneLookup {
    zones: BTreeMap<(String, String), String>,
}

impl ZoneLookup {
    pub fn from_mappings(mappings: &[CarrierZoneMapping]) -> Self {
        let zones = mappings
            .iter()
            .map(CarrierZoneMapping::normalized)
            .filter(CarrierZoneMapping::is_complete)
            .map(|mapping| ((mapping.carrier, mapping.country_code), mapping.zone))
            .collect();
        Self { zones }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zone_for(&self, carrier: &str, country_code: &str) -> Option<&str> {
        let key = (
            normalize_carrier_key(carrier),
            normalize_country_code(country_code),
        );
        self.zones.get(&key).map(String::as_str)
    }

    /// Zone for `service` shipping to `country_code`, or an empty string when
    /// the service has no carrier or the carrier has no mapping.
    pub fn resolve_zone(&self, service: &Service, country_code: &str) -> String {
        let carrier = service.carrier_key();
        if carrier.is_empty() {
            return String::new();
        }
        self.zone_for(&carrier, country_code)
            .unwrap_or_default()
            .to_string()
    }
}

/// Country codes mapped to `zone` for `carrier`, sorted and de-duplicated.
pub fn countries_for_zone(
    mappings: &[CarrierZoneMapping],
    carrier: &str,
    zone: &str,
) -> Vec<String> {
    let carrier = normalize_carrier_key(carrier);
    let zone = normalize_zone(zone);
    mappings
        .iter()
        .map(CarrierZoneMapping::normalized)
        .filter(|mapping| mapping.carrier == carrier && mapping.zone == zone)
        .map(|mapping| mapping.country_code)
        .filter(|code| !code.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
