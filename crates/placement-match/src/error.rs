//! Error types for the placement-match crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Store error: {0}")]
    Store(#[from] placement_graph::StoreError),

    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("Alumnus not found: {name}")]
    AlumnusNotFound { name: String },

    #[error("Alumnus {name} has no profile link")]
    NoProfileLink { name: String },
}

impl MatchError {
    /// Whether the underlying record store could not be reached.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_unavailable())
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
