//! Rate resolution engine.
//!
//! Everything here works on one [`ReferenceData`](shiprate_store::ReferenceData)
//! snapshot. Lookup structures are built once per operation and never
//! mutated afterwards.

pub mod box_guide;
pub mod coverage;
pub mod error;
pub mod merge;
pub mod quote;
pub mod rate;
pub mod zone;

pub use box_guide::{BoxGuideConfig, BoxGuideEntry, box_guide};
pub use coverage::{CoverageGap, PLACEHOLDER_ZONE, fill_missing_zones, missing_zones};
pub use error::{ApplyError, QuoteError};
pub use merge::{ReconcileOutcome, apply, reconcile};
pub use quote::{
    LineStatus, Quote, QuoteDiagnostics, QuoteLine, QuoteRequest, WeightSummary, build_quote,
};
pub use rate::{RateIndex, find_rate};
pub use zone::{ZoneLookup, countries_for_zone};
