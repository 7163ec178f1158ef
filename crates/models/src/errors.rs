use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown sort order: {0:?}")]
    UnknownSortOrder(String),
}
