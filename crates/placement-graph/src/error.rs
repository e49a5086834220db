//! Errors from record store operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    #[error("Neo4j query error: {0}")]
    Query(#[source] neo4rs::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether the store could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Socket and pool failures become `Unavailable`; anything else is a query error.
impl From<neo4rs::Error> for StoreError {
    fn from(err: neo4rs::Error) -> Self {
        if is_connection_failure(&err) {
            Self::Unavailable(connection_failure_message(&err))
        } else {
            Self::Query(err)
        }
    }
}

fn is_connection_failure(err: &neo4rs::Error) -> bool {
    if matches!(
        err,
        neo4rs::Error::IOError { .. } | neo4rs::Error::ConnectionError { .. }
    ) {
        return true;
    }
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        if inner.is::<std::io::Error>() {
            return true;
        }
        source = inner.source();
    }
    false
}

fn connection_failure_message(err: &neo4rs::Error) -> String {
    match std::error::Error::source(err) {
        Some(inner) => format!("{err}: {inner}"),
        None => err.to_string(),
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
