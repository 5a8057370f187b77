//! Quote building.
//!
//! Every service is classified for one destination. Lookup misses are line
//! states, not errors; only an unknown destination or a non-positive weight
//! rejects the whole quote.

use tracing::{debug, info, warn};

use shiprate_model::{Country, Service};
use shiprate_normalization::{billable_weight, normalize_country_code, volumetric_weight};
use shiprate_store::ReferenceData;

use crate::error::QuoteError;
use crate::rate::RateIndex;
use crate::zone::ZoneLookup;

/// Destination and parcel as entered. Dimensions of 0 mean "not measured".
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub country_code: String,
    pub weight_kg: f64,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl QuoteRequest {
    pub fn new(country_code: impl Into<String>, weight_kg: f64) -> Self {
        Self {
            country_code: country_code.into(),
            weight_kg,
            length_cm: 0.0,
            width_cm: 0.0,
            height_cm: 0.0,
        }
    }

    pub fn with_dimensions(mut self, length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        self.length_cm = length_cm;
        self.width_cm = width_cm;
        self.height_cm = height_cm;
        self
    }
}

/// Actual, volumetric and applied weight of the parcel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightSummary {
    pub actual: f64,
    pub volumetric: f64,
    /// Greater of the two; services flagged for actual weight ignore it.
    pub applied: f64,
}

/// Outcome for one service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStatus {
    Priced { price: i64, tier_weight: f64 },
    /// The service's country allow-list excludes the destination.
    Unavailable,
    CarrierNotConfigured,
    ZoneNotConfigured,
    NoRateForWeight,
}

impl LineStatus {
    pub fn price(&self) -> Option<i64> {
        match self {
            LineStatus::Priced { price, .. } => Some(*price),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LineStatus::Priced { .. } => "priced",
            LineStatus::Unavailable => "unavailable",
            LineStatus::CarrierNotConfigured => "carrier not configured",
            LineStatus::ZoneNotConfigured => "zone not configured",
            LineStatus::NoRateForWeight => "no rate for weight",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLine {
    pub service: Service,
    /// Position in the services table.
    pub index: usize,
    pub carrier: String,
    /// Resolved zone, empty when none.
    pub zone: String,
    /// Weight used for the rate lookup.
    pub billable_weight: f64,
    pub status: LineStatus,
}

/// Configuration gaps noticed while quoting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteDiagnostics {
    /// Display names of services without a carrier.
    pub services_without_carrier: Vec<String>,
    /// `carrier:COUNTRY` pairs without a zone mapping.
    pub missing_zones: Vec<String>,
}

impl QuoteDiagnostics {
    pub fn is_empty(&self) -> bool {
        self.services_without_carrier.is_empty() && self.missing_zones.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub country: Country,
    pub weights: WeightSummary,
    /// Priced lines by ascending price, then every other line in table order.
    pub lines: Vec<QuoteLine>,
    pub diagnostics: QuoteDiagnostics,
}

impl Quote {
    pub fn cheapest(&self) -> Option<&QuoteLine> {
        self.lines.first().filter(|line| line.status.price().is_some())
    }

    pub fn priced_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.status.price().is_some())
            .count()
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

fn diagnose(services: &[Service], zones: &ZoneLookup, country_code: &str) -> QuoteDiagnostics {
    let mut diagnostics = QuoteDiagnostics::default();
    for service in services {
        let carrier = service.carrier_key();
        if carrier.is_empty() {
            push_unique(
                &mut diagnostics.services_without_carrier,
                service.display_name().to_string(),
            );
        } else if zones.zone_for(&carrier, country_code).is_none() {
            push_unique(
                &mut diagnostics.missing_zones,
                format!("{carrier}:{country_code}"),
            );
        }
    }
    diagnostics
}

/// Price every service for `request` against `snapshot`.
pub fn build_quote(snapshot: &ReferenceData, request: &QuoteRequest) -> Result<Quote, QuoteError> {
    let country_code = normalize_country_code(&request.country_code);
    let country = snapshot
        .find_country(&country_code)
        .map(Country::normalized)
        .ok_or_else(|| QuoteError::UnknownCountry(request.country_code.clone()))?;
    if !(request.weight_kg.is_finite() && request.weight_kg > 0.0) {
        return Err(QuoteError::InvalidWeight(request.weight_kg));
    }

    let volumetric = volumetric_weight(request.length_cm, request.width_cm, request.height_cm);
    let weights = WeightSummary {
        actual: request.weight_kg,
        volumetric,
        applied: billable_weight(request.weight_kg, volumetric, false),
    };

    let zones = ZoneLookup::from_mappings(snapshot.carrier_zones());
    let rates = RateIndex::new(snapshot.rates());
    let diagnostics = diagnose(snapshot.services(), &zones, &country_code);

    let mut lines: Vec<QuoteLine> = snapshot
        .services()
        .iter()
        .enumerate()
        .map(|(index, service)| {
            let carrier = service.carrier_key();
            let weight = billable_weight(weights.actual, weights.volumetric, service.use_actual_weight);
            let mut line = QuoteLine {
                service: service.clone(),
                index,
                carrier: carrier.clone(),
                zone: String::new(),
                billable_weight: weight,
                status: LineStatus::Unavailable,
            };
            if !service.is_available_in(&country_code) {
                return line;
            }
            if carrier.is_empty() {
                line.status = LineStatus::CarrierNotConfigured;
                return line;
            }
            line.zone = zones.resolve_zone(service, &country_code);
            if line.zone.is_empty() {
                line.status = LineStatus::ZoneNotConfigured;
                return line;
            }
            line.status = match rates.find(service.name.trim(), &line.zone, weight) {
                Some(rate) => LineStatus::Priced {
                    price: rate.price,
                    tier_weight: rate.weight,
                },
                None => LineStatus::NoRateForWeight,
            };
            debug!(
                service = service.display_name(),
                zone = %line.zone,
                weight,
                status = line.status.label(),
                "service classified"
            );
            line
        })
        .collect();

    // Stable: equal prices and every unpriced line keep table order.
    lines.sort_by_key(|line| match line.status.price() {
        Some(price) => (0, price),
        None => (1, 0),
    });

    if !diagnostics.services_without_carrier.is_empty() {
        warn!(
            services = %diagnostics.services_without_carrier.join(", "),
            "services without carrier"
        );
    }
    if !diagnostics.missing_zones.is_empty() {
        warn!(
            pairs = %diagnostics.missing_zones.join(", "),
            "carrier zones not configured"
        );
    }

    let quote = Quote {
        country,
        weights,
        lines,
        diagnostics,
    };
    info!(
        country = %quote.country.code,
        actual = quote.weights.actual,
        volumetric = quote.weights.volumetric,
        applied = quote.weights.applied,
        services = quote.lines.len(),
        priced = quote.priced_count(),
        "quote built"
    );
    Ok(quote)
}
