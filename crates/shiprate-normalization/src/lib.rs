//! Normalization of reference-table cells.
//!
//! Every admin edit, upload and persisted read passes through these functions
//! so that keys compare identically regardless of how a value was typed:
//! carrier keys are lower-cased, country codes upper-cased, zones trimmed, and
//! numeric cells re-rendered in a canonical decimal form.
//!
//! All functions are pure and idempotent: `f(f(x)) == f(x)`.
//!
//! The [`weight`] module holds the billable-weight arithmetic used by the
//! quote builder.

pub mod text;
pub mod weight;

mod numeric;

pub use numeric::{
    format_decimal, normalize_decimal_string, normalize_integer_string, parse_decimal,
    parse_integer,
};
pub use text::{
    normalize_boolean_flag, normalize_box_key, normalize_carrier_key, normalize_country_code,
    normalize_country_code_list, normalize_zone,
};
pub use weight::{VOLUMETRIC_DIVISOR, billable_weight, round_up_to_half, volumetric_weight};
