use proptest::prelude::*;
use shiprate_core::{RateIndex, ZoneLookup, countries_for_zone, find_rate};
use shiprate_model::{CarrierZoneMapping, RateEntry};

fn tiers() -> Vec<RateEntry> {
    vec![
        RateEntry::new("A", "E", 10.0, 1500),
        RateEntry::new("A", "E", 5.0, 1000),
        RateEntry::new("A", "F", 5.0, 1100),
        RateEntry::new("B", "E", 5.0, 700),
    ]
}

#[test]
fn tier_upper_bound_is_inclusive() {
    let rates = tiers();
    assert_eq!(find_rate(&rates, "A", "E", 5.0).map(|r| r.price), Some(1000));
    assert_eq!(find_rate(&rates, "A", "E", 5.5).map(|r| r.price), Some(1500));
    assert_eq!(find_rate(&rates, "A", "E", 11.0), None);
    assert_eq!(find_rate(&rates, "A", " F ", 0.5).map(|r| r.price), Some(1100));
    assert_eq!(find_rate(&rates, "C", "E", 1.0), None);
}

#[test]
fn equal_bounds_pick_the_earliest_row() {
    let rates = vec![
        RateEntry::new("A", "E", 5.0, 1000),
        RateEntry::new("A", "E", 5.0, 900),
    ];
    assert_eq!(find_rate(&rates, "A", "E", 1.0).map(|r| r.price), Some(1000));
    assert_eq!(RateIndex::new(&rates).find("A", "E", 1.0).map(|r| r.price), Some(1000));
}

#[test]
fn reverse_lookup_lists_sorted_unique_codes() {
    let mappings = vec![
        CarrierZoneMapping::new("fedex", "us", "E"),
        CarrierZoneMapping::new("FEDEX", "CA", " E "),
        CarrierZoneMapping::new("fedex", "US", "E"),
        CarrierZoneMapping::new("fedex", "MX", "F"),
        CarrierZoneMapping::new("dhl", "GB", "E"),
    ];
    assert_eq!(countries_for_zone(&mappings, "FedEx", "E"), ["CA", "US"]);
    assert!(countries_for_zone(&mappings, "ups", "E").is_empty());
    assert_eq!(ZoneLookup::from_mappings(&mappings).zone_for("fedex", "CA"), Some("E"));
}

fn rate_strategy() -> impl Strategy<Value = RateEntry> {
    (
        prop::sample::select(vec!["A", "B"]),
        prop::sample::select(vec!["E", "F"]),
        1u32..60,
        100i64..10_000,
    )
        .prop_map(|(service, zone, half_kg, price)| {
            RateEntry::new(service, zone, f64::from(half_kg) / 2.0, price)
        })
}

proptest! {
    #[test]
    fn index_agrees_with_linear_scan(
        rates in prop::collection::vec(rate_strategy(), 0..24),
        weight in 0.0f64..35.0,
    ) {
        let index = RateIndex::new(&rates);
        for (service, zone) in [("A", "E"), ("A", "F"), ("B", "E"), ("B", "F")] {
            prop_assert_eq!(
                index.find(service, zone, weight),
                find_rate(&rates, service, zone, weight)
            );
        }
    }

    #[test]
    fn selected_tier_covers_weight(
        rates in prop::collection::vec(rate_strategy(), 0..24),
        weight in 0.0f64..35.0,
    ) {
        if let Some(rate) = find_rate(&rates, "A", "E", weight) {
            prop_assert!(weight <= rate.weight);
            for other in rates.iter().filter(|r| r.service == "A" && r.zone == "E") {
                prop_assert!(other.weight < weight || other.weight >= rate.weight);
            }
        }
    }
}
