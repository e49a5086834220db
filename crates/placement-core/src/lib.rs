//! placement-core: Shared types, configuration, and error handling for the placement matcher.
//!
//! This crate provides the foundational types used across all placement components:
//! - Alumni and connection records held by the record store
//! - Layered configuration (file + environment)
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{PlacementConfig, Settings, StoreBackend};
pub use error::PlacementError;
pub use types::{Alumnus, AlumnusId, Connection, ConnectionId, NewAlumnus};
