//! Integrity validation for reference-table batches.
//!
//! A batch is checked against the current snapshot of the other tables and,
//! in append mode, against the current rows of its own table. Checks run in
//! priority order and the first failing category is reported with every
//! offending key.

pub mod checks;
mod engine;
mod keys;

pub use checks::{validate_boxes, validate_carrier_zones, validate_rates};
pub use engine::validate;
