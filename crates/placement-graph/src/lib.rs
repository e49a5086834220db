//! Placement Graph: record store for alumni and company connections.
//!
//! All reads and writes of alumni and connection records flow through the
//! [`RecordStore`] trait. Two backends are provided: a Neo4j client that keeps
//! both record kinds as flat nodes, and an in-process store used for local
//! runs and tests.

pub mod client;
pub mod error;
pub mod memory;
pub mod mutations;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig};
pub use error::StoreError;
pub use memory::{MemoryStore, Seed};
pub use store::RecordStore;
