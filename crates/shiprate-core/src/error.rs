use shiprate_model::ValidationError;
use shiprate_store::StoreError;

/// Input rejected before any service is priced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuoteError {
    #[error("unknown destination country: {0}")]
    UnknownCountry(String),

    #[error("actual weight must be greater than 0 (got {0})")]
    InvalidWeight(f64),
}

/// Failure while reconciling a batch against a store.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
