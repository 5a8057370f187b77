//! Per-table check modules.
//!
//! Each returns the normalized candidate rows or the highest-priority
//! violation found.

mod boxes;
mod carrier_zones;
mod rates;

pub use boxes::validate_boxes;
pub use carrier_zones::validate_carrier_zones;
pub use rates::validate_rates;
