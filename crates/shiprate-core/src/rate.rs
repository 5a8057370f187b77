//! Price tier selection.
//!
//! A rate row's `weight` is the upper bound of the tier: a parcel is priced by
//! the lightest tier whose bound is at least its billable weight.

use std::collections::BTreeMap;

use shiprate_model::RateEntry;
use shiprate_normalization::normalize_zone;

/// Tightest tier of `service_name` in `zone` covering `billable_weight`.
///
/// Among equal bounds the earliest row wins.
pub fn find_rate<'a>(
    rates: &'a [RateEntry],
    service_name: &str,
    zone: &str,
    billable_weight: f64,
) -> Option<&'a RateEntry> {
    let zone = normalize_zone(zone);
    rates
        .iter()
        .filter(|rate| {
            rate.service == service_name
                && normalize_zone(&rate.zone) == zone
                && billable_weight <= rate.weight
        })
        .min_by(|a, b| a.weight.total_cmp(&b.weight))
}

/// Rates grouped by `(service, zone)` with tiers in ascending weight order.
#[derive(Debug, Clone, Default)]
pub struct RateIndex<'a> {
    tiers: BTreeMap<(String, String), Vec<&'a RateEntry>>,
}

impl<'a> RateIndex<'a> {
    pub fn new(rates: &'a [RateEntry]) -> Self {
        let mut tiers: BTreeMap<(String, String), Vec<&'a RateEntry>> = BTreeMap::new();
        for rate in rates {
            tiers
                .entry((rate.service.clone(), normalize_zone(&rate.zone)))
                .or_default()
                .push(rate);
        }
        for rows in tiers.values_mut() {
            rows.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        }
        Self { tiers }
    }

    /// Same selection as [`find_rate`].
    pub fn find(
        &self,
        service_name: &str,
        zone: &str,
        billable_weight: f64,
    ) -> Option<&'a RateEntry> {
        self.tiers
            .get(&(service_name.to_string(), normalize_zone(zone)))?
            .iter()
            .copied()
            .find(|rate| billable_weight <= rate.weight)
    }
}
