use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown table kind: {0}")]
    UnknownTableKind(String),
    #[error("unknown merge mode: {0} (expected replace or append)")]
    UnknownMergeMode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
