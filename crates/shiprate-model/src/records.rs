//! Reference-table records.
//!
//! Each table has one record type. Tables whose cells carry numbers also have
//! a `*Draft` type holding the raw text exactly as submitted, so that a blank
//! cell can be told apart from a cell that coerced to zero.

use serde::{Deserialize, Serialize};

use shiprate_normalization::{
    format_decimal, normalize_box_key, normalize_carrier_key, normalize_country_code,
    normalize_country_code_list, normalize_zone, parse_decimal, parse_integer,
};

use crate::serde_cells;

/// A destination country. `code` is the natural key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl Country {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Trim the name and upper-case the code.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            code: normalize_country_code(&self.code),
        }
    }
}

/// A carrier service offered to customers.
///
/// `name` is referenced by rate rows, `carrier` by carrier-zone mappings and
/// `id` is the natural key used when merging uploads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    /// Allow-list of destination codes; empty means every country.
    #[serde(default)]
    pub country_codes: String,
    #[serde(default, with = "serde_cells::flag")]
    pub use_actual_weight: bool,
}

impl Service {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        carrier: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            carrier: carrier.into(),
            ..Self::default()
        }
    }

    pub fn with_country_codes(mut self, codes: impl Into<String>) -> Self {
        self.country_codes = codes.into();
        self
    }

    pub fn with_actual_weight(mut self, enable: bool) -> Self {
        self.use_actual_weight = enable;
        self
    }

    /// Trim text fields, lower-case the carrier and canonicalize the
    /// country allow-list to a comma-joined upper-case list.
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            carrier: normalize_carrier_key(&self.carrier),
            color: self.color.trim().to_string(),
            description: self.description.trim().to_string(),
            country_codes: normalize_country_code_list(&self.country_codes).join(","),
            use_actual_weight: self.use_actual_weight,
        }
    }

    pub fn carrier_key(&self) -> String {
        normalize_carrier_key(&self.carrier)
    }

    pub fn allowed_countries(&self) -> Vec<String> {
        normalize_country_code_list(&self.country_codes)
    }

    /// Whether the service ships to `country_code`.
    pub fn is_available_in(&self, country_code: &str) -> bool {
        let allowed = self.allowed_countries();
        allowed.is_empty() || allowed.contains(&normalize_country_code(country_code))
    }

    /// Name shown in diagnostics: the name, else the id, else a placeholder.
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            self.name.trim()
        } else if !self.id.trim().is_empty() {
            self.id.trim()
        } else {
            "(unknown)"
        }
    }
}

/// Maps a destination country to a carrier-specific zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierZoneMapping {
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub zone: String,
}

impl CarrierZoneMapping {
    pub fn new(
        carrier: impl Into<String>,
        country_code: impl Into<String>,
        zone: impl Into<String>,
    ) -> Self {
        Self {
            carrier: carrier.into(),
            country_code: country_code.into(),
            zone: zone.into(),
        }
    }

    pub fn normalized(&self) -> Self {
        Self {
            carrier: normalize_carrier_key(&self.carrier),
            country_code: normalize_country_code(&self.country_code),
            zone: normalize_zone(&self.zone),
        }
    }

    /// `carrier|COUNTRY`, the natural key as rendered in messages.
    pub fn key_label(&self) -> String {
        format!("{}|{}", self.carrier, self.country_code)
    }

    /// A mapping only counts once every component is filled in.
    pub fn is_complete(&self) -> bool {
        !self.carrier.is_empty() && !self.country_code.is_empty() && !self.zone.is_empty()
    }
}

/// A rate row as submitted, before numeric canonicalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateDraft {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub price: String,
}

impl RateDraft {
    pub fn new(
        service: impl Into<String>,
        zone: impl Into<String>,
        weight: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            zone: zone.into(),
            weight: weight.into(),
            price: price.into(),
        }
    }

    /// Names of required cells that are blank.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        let mut blank = Vec::new();
        if self.service.trim().is_empty() {
            blank.push("service");
        }
        if self.zone.trim().is_empty() {
            blank.push("zone");
        }
        if self.weight.trim().is_empty() {
            blank.push("weight");
        }
        if self.price.trim().is_empty() {
            blank.push("price");
        }
        blank
    }

    /// Canonicalize every cell; malformed numbers become 0.
    pub fn normalize(&self) -> RateEntry {
        RateEntry {
            service: self.service.trim().to_string(),
            zone: normalize_zone(&self.zone),
            weight: parse_decimal(&self.weight),
            price: parse_integer(&self.price),
        }
    }
}

impl From<&RateEntry> for RateDraft {
    fn from(entry: &RateEntry) -> Self {
        Self {
            service: entry.service.clone(),
            zone: entry.zone.clone(),
            weight: entry.weight_key(),
            price: entry.price.to_string(),
        }
    }
}

/// One price tier: `weight` is the upper bound (kg) the tier covers and
/// `price` is in the smallest currency unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default, with = "serde_cells::decimal")]
    pub weight: f64,
    #[serde(default, with = "serde_cells::integer")]
    pub price: i64,
}

impl RateEntry {
    pub fn new(service: impl Into<String>, zone: impl Into<String>, weight: f64, price: i64) -> Self {
        Self {
            service: service.into(),
            zone: zone.into(),
            weight,
            price,
        }
    }

    /// Canonical weight string used in keys ("5" for 5.0).
    pub fn weight_key(&self) -> String {
        format_decimal(self.weight)
    }

    /// `service|zone|weight`, the natural key as rendered in messages.
    pub fn key_label(&self) -> String {
        format!("{}|{}|{}", self.service, self.zone, self.weight_key())
    }
}

/// A box-size row as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxDraft {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub length_cm: String,
    #[serde(default)]
    pub width_cm: String,
    #[serde(default)]
    pub height_cm: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub sort: String,
}

impl BoxDraft {
    pub fn normalize(&self) -> BoxSpec {
        BoxSpec {
            key: normalize_box_key(&self.key),
            label: self.label.trim().to_string(),
            length_cm: parse_decimal(&self.length_cm),
            width_cm: parse_decimal(&self.width_cm),
            height_cm: parse_decimal(&self.height_cm),
            comment: self.comment.trim().to_string(),
            sort: parse_integer(&self.sort),
        }
    }
}

impl From<&BoxSpec> for BoxDraft {
    fn from(spec: &BoxSpec) -> Self {
        Self {
            key: spec.key.clone(),
            label: spec.label.clone(),
            length_cm: format_decimal(spec.length_cm),
            width_cm: format_decimal(spec.width_cm),
            height_cm: format_decimal(spec.height_cm),
            comment: spec.comment.clone(),
            sort: spec.sort.to_string(),
        }
    }
}

/// A reference box shown in the size guide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, with = "serde_cells::decimal")]
    pub length_cm: f64,
    #[serde(default, with = "serde_cells::decimal")]
    pub width_cm: f64,
    #[serde(default, with = "serde_cells::decimal")]
    pub height_cm: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(default, with = "serde_cells::integer")]
    pub sort: i64,
}

impl BoxSpec {
    pub fn has_valid_dimensions(&self) -> bool {
        self.length_cm > 0.0 && self.width_cm > 0.0 && self.height_cm > 0.0
    }

    pub fn max_dimension(&self) -> f64 {
        self.length_cm.max(self.width_cm).max(self.height_cm)
    }
}
