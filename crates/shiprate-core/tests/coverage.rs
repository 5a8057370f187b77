use shiprate_core::{CoverageGap, PLACEHOLDER_ZONE, fill_missing_zones, missing_zones};
use shiprate_model::{CarrierZoneMapping, Country, Service, Table};
use shiprate_store::ReferenceData;

fn snapshot() -> ReferenceData {
    ReferenceData::new()
        .with_table(Table::Countries(vec![
            Country::new("United States", "US"),
            Country::new("Japan", "JP"),
        ]))
        .with_table(Table::Services(vec![
            Service::new("s1", "A", "fedex"),
            Service::new("s2", "B", "dhl"),
            Service::new("s3", "C", ""),
        ]))
        .with_table(Table::CarrierZones(vec![
            CarrierZoneMapping::new("fedex", "US", "E"),
            CarrierZoneMapping::new("dhl", "JP", ""),
        ]))
}

#[test]
fn gaps_cover_every_carrier_and_country() {
    let gaps: Vec<String> = missing_zones(&snapshot())
        .iter()
        .map(CoverageGap::to_string)
        .collect();
    assert_eq!(gaps, ["dhl:JP", "dhl:US", "fedex:JP"]);
}

#[test]
fn fill_skips_keys_already_present() {
    let (rows, added) = fill_missing_zones(&snapshot());
    assert_eq!(added, 2);
    assert_eq!(
        rows,
        vec![
            CarrierZoneMapping::new("fedex", "US", "E"),
            CarrierZoneMapping::new("dhl", "JP", ""),
            CarrierZoneMapping::new("dhl", "US", PLACEHOLDER_ZONE),
            CarrierZoneMapping::new("fedex", "JP", PLACEHOLDER_ZONE),
        ]
    );
}
