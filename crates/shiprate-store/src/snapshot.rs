//! Immutable reference-data snapshot.

use std::collections::{BTreeMap, BTreeSet};

use shiprate_model::{
    BoxSpec, CarrierZoneMapping, Country, RateEntry, Service, Settings, Table, TableKind,
};
use shiprate_normalization::{normalize_carrier_key, normalize_country_code};

/// Every reference table as read at the start of one operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    countries: Vec<Country>,
    services: Vec<Service>,
    carrier_zones: Vec<CarrierZoneMapping>,
    rates: Vec<RateEntry>,
    settings: Settings,
    boxes: Vec<BoxSpec>,
}

impl ReferenceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ReferenceData::replace`].
    pub fn with_table(mut self, table: Table) -> Self {
        self.replace(table);
        self
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn carrier_zones(&self) -> &[CarrierZoneMapping] {
        &self.carrier_zones
    }

    pub fn rates(&self) -> &[RateEntry] {
        &self.rates
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn boxes(&self) -> &[BoxSpec] {
        &self.boxes
    }

    /// Swap one whole table, returning the previous contents.
    pub fn replace(&mut self, table: Table) -> Table {
        match table {
            Table::Countries(rows) => Table::Countries(std::mem::replace(&mut self.countries, rows)),
            Table::Services(rows) => Table::Services(std::mem::replace(&mut self.services, rows)),
            Table::CarrierZones(rows) => {
                Table::CarrierZones(std::mem::replace(&mut self.carrier_zones, rows))
            }
            Table::Rates(rows) => Table::Rates(std::mem::replace(&mut self.rates, rows)),
            Table::Settings(settings) => {
                Table::Settings(std::mem::replace(&mut self.settings, settings))
            }
            Table::Boxes(rows) => Table::Boxes(std::mem::replace(&mut self.boxes, rows)),
        }
    }

    /// Copy of one table.
    pub fn table(&self, kind: TableKind) -> Table {
        match kind {
            TableKind::Countries => Table::Countries(self.countries.clone()),
            TableKind::Services => Table::Services(self.services.clone()),
            TableKind::CarrierZones => Table::CarrierZones(self.carrier_zones.clone()),
            TableKind::Rates => Table::Rates(self.rates.clone()),
            TableKind::Settings => Table::Settings(self.settings.clone()),
            TableKind::Boxes => Table::Boxes(self.boxes.clone()),
        }
    }

    pub fn row_count(&self, kind: TableKind) -> usize {
        match kind {
            TableKind::Countries => self.countries.len(),
            TableKind::Services => self.services.len(),
            TableKind::CarrierZones => self.carrier_zones.len(),
            TableKind::Rates => self.rates.len(),
            TableKind::Settings => self.settings.len(),
            TableKind::Boxes => self.boxes.len(),
        }
    }

    /// Non-empty, upper-cased country codes.
    pub fn country_codes(&self) -> BTreeSet<String> {
        self.countries
            .iter()
            .map(|country| normalize_country_code(&country.code))
            .filter(|code| !code.is_empty())
            .collect()
    }

    pub fn find_country(&self, code: &str) -> Option<&Country> {
        let wanted = normalize_country_code(code);
        self.countries
            .iter()
            .find(|country| normalize_country_code(&country.code) == wanted)
    }

    /// Non-empty carrier keys used by at least one service.
    pub fn service_carriers(&self) -> BTreeSet<String> {
        self.services
            .iter()
            .map(Service::carrier_key)
            .filter(|carrier| !carrier.is_empty())
            .collect()
    }

    /// Service name to carrier key. A repeated name maps to its last row.
    pub fn carrier_by_service_name(&self) -> BTreeMap<String, String> {
        self.services
            .iter()
            .filter(|service| !service.name.trim().is_empty())
            .map(|service| (service.name.trim().to_string(), normalize_carrier_key(&service.carrier)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_returns_previous_rows() {
        let mut data = ReferenceData::new()
            .with_table(Table::Countries(vec![Country::new("Japan", "JP")]));
        let previous = data.replace(Table::Countries(vec![Country::new("Korea", "KR")]));
        assert_eq!(previous, Table::Countries(vec![Country::new("Japan", "JP")]));
        assert_eq!(data.countries(), &[Country::new("Korea", "KR")]);
    }

    #[test]
    fn derived_sets_skip_blanks() {
        let data = ReferenceData::new()
            .with_table(Table::Countries(vec![
                Country::new("Japan", "jp"),
                Country::new("Blank", " "),
            ]))
            .with_table(Table::Services(vec![
                Service::new("s1", "A", "FedEx"),
                Service::new("s2", "B", ""),
            ]));
        assert_eq!(data.country_codes().into_iter().collect::<Vec<_>>(), ["JP"]);
        assert_eq!(data.service_carriers().into_iter().collect::<Vec<_>>(), ["fedex"]);
        assert_eq!(data.carrier_by_service_name().get("B").map(String::as_str), Some(""));
    }
}
