use shiprate_core::{LineStatus, QuoteError, QuoteRequest, build_quote};
use shiprate_model::{CarrierZoneMapping, Country, RateEntry, Service, Table};
use shiprate_store::ReferenceData;

fn statuses(data: &ReferenceData, request: &QuoteRequest) -> Vec<(String, LineStatus)> {
    build_quote(data, request)
        .expect("quote")
        .lines
        .into_iter()
        .map(|line| (line.service.name, line.status))
        .collect()
}

#[test]
fn single_service_is_priced() {
    let data = ReferenceData::new()
        .with_table(Table::Countries(vec![Country::new("JP", "JP")]))
        .with_table(Table::Services(vec![Service::new("x", "X", "fedex")]))
        .with_table(Table::CarrierZones(vec![CarrierZoneMapping::new("fedex", "JP", "E")]))
        .with_table(Table::Rates(vec![RateEntry::new("X", "E", 5.0, 1000)]));

    let quote = build_quote(&data, &QuoteRequest::new("JP", 4.0)).expect("quote");
    assert_eq!(quote.lines.len(), 1);
    assert_eq!(
        quote.lines[0].status,
        LineStatus::Priced {
            price: 1000,
            tier_weight: 5.0
        }
    );
    assert_eq!(quote.weights.applied, 4.0);
    assert!(quote.diagnostics.is_empty());
}

fn catalog() -> ReferenceData {
    ReferenceData::new()
        .with_table(Table::Countries(vec![
            Country::new("United States", "US"),
            Country::new("Japan", "JP"),
        ]))
        .with_table(Table::Services(vec![
            Service::new("s1", "Slow", "fedex"),
            Service::new("s2", "Limited", "dhl").with_country_codes("JP"),
            Service::new("s3", "Orphan", ""),
            Service::new("s4", "Cheap", "dhl"),
            Service::new("s5", "NoZone", "ups"),
            Service::new("s6", "Heavy", "fedex"),
            Service::new("s7", "Exact", "fedex").with_actual_weight(true),
            Service::new("s8", "AlsoCheap", "dhl"),
        ]))
        .with_table(Table::CarrierZones(vec![
            CarrierZoneMapping::new("fedex", "US", "E"),
            CarrierZoneMapping::new("dhl", "US", "3"),
        ]))
        .with_table(Table::Rates(vec![
            RateEntry::new("Slow", "E", 10.0, 3000),
            RateEntry::new("Slow", "E", 30.0, 5000),
            RateEntry::new("Cheap", "3", 20.0, 1200),
            RateEntry::new("AlsoCheap", "3", 20.0, 1200),
            RateEntry::new("Heavy", "E", 5.0, 900),
            RateEntry::new("Exact", "E", 5.0, 2000),
        ]))
}

#[test]
fn lines_are_ordered_by_price_then_table_order() {
    let request = QuoteRequest::new("us", 3.0).with_dimensions(40.0, 40.0, 34.0);
    let lines = statuses(&catalog(), &request);
    let names: Vec<&str> = lines.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Cheap",
            "AlsoCheap",
            "Exact",
            "Slow",
            "Limited",
            "Orphan",
            "NoZone",
            "Heavy",
        ]
    );
    assert_eq!(lines[4].1, LineStatus::Unavailable);
    assert_eq!(lines[5].1, LineStatus::CarrierNotConfigured);
    assert_eq!(lines[6].1, LineStatus::ZoneNotConfigured);
    assert_eq!(lines[7].1, LineStatus::NoRateForWeight);
}

#[test]
fn volumetric_weight_drives_billable_weight() {
    let request = QuoteRequest::new("US", 3.0).with_dimensions(40.0, 40.0, 34.0);
    let quote = build_quote(&catalog(), &request).expect("quote");
    assert_eq!(quote.weights.volumetric, 11.0);
    assert_eq!(quote.weights.applied, 11.0);

    let slow = quote
        .lines
        .iter()
        .find(|line| line.service.name == "Slow")
        .expect("slow line");
    assert_eq!(slow.billable_weight, 11.0);
    assert_eq!(slow.status.price(), Some(5000));

    let exact = quote
        .lines
        .iter()
        .find(|line| line.service.name == "Exact")
        .expect("exact line");
    assert_eq!(exact.billable_weight, 3.0);
    assert_eq!(exact.status.price(), Some(2000));
}

#[test]
fn unavailable_wins_over_missing_carrier() {
    let data = ReferenceData::new()
        .with_table(Table::Countries(vec![Country::new("Japan", "JP")]))
        .with_table(Table::Services(vec![
            Service::new("s1", "Blank", "").with_country_codes("US"),
        ]));
    let lines = statuses(&data, &QuoteRequest::new("JP", 1.0));
    assert_eq!(lines, vec![("Blank".to_string(), LineStatus::Unavailable)]);
}

#[test]
fn diagnostics_list_unconfigured_services_once() {
    let quote = build_quote(&catalog(), &QuoteRequest::new("JP", 1.0)).expect("quote");
    assert_eq!(quote.diagnostics.services_without_carrier, ["Orphan"]);
    assert_eq!(quote.diagnostics.missing_zones, ["fedex:JP", "dhl:JP", "ups:JP"]);
    assert!(quote.cheapest().is_none());
}

#[test]
fn quote_rejects_unknown_country_and_bad_weight() {
    let data = catalog();
    assert_eq!(
        build_quote(&data, &QuoteRequest::new("ZZ", 1.0)).unwrap_err(),
        QuoteError::UnknownCountry("ZZ".to_string())
    );
    assert_eq!(
        build_quote(&data, &QuoteRequest::new("US", 0.0)).unwrap_err(),
        QuoteError::InvalidWeight(0.0)
    );
}
