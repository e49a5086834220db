//! The record store seam between the matching engine and its backends.

use async_trait::async_trait;

use placement_core::{Alumnus, Connection};

use crate::client::GraphClient;
use crate::error::Result;

/// Flat store of alumni and connection records.
///
/// Unknown companies and names are never errors: reads return empty results.
/// An `Err` always means the store itself failed.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Connection records where `company` is either endpoint.
    async fn connections_touching(&self, company: &str) -> Result<Vec<Connection>>;

    /// Alumni whose company field equals `company`.
    async fn alumni_by_company(&self, company: &str) -> Result<Vec<Alumnus>>;

    /// Number of connection records where `company` is either endpoint.
    async fn count_connections_touching(&self, company: &str) -> Result<u64>;

    /// Every connection record.
    async fn all_connections(&self) -> Result<Vec<Connection>>;

    /// Distinct alumni companies in order of first appearance.
    async fn distinct_companies(&self) -> Result<Vec<String>>;

    /// First alumnus record with this exact name.
    async fn find_alumnus_by_name(&self, name: &str) -> Result<Option<Alumnus>>;

    async fn insert_alumnus(&self, alumnus: &Alumnus) -> Result<()>;

    async fn insert_connection(&self, connection: &Connection) -> Result<()>;
}

#[async_trait]
impl RecordStore for GraphClient {
    async fn connections_touching(&self, company: &str) -> Result<Vec<Connection>> {
        self.query_connections_touching(company).await
    }

    async fn alumni_by_company(&self, company: &str) -> Result<Vec<Alumnus>> {
        self.query_alumni_by_company(company).await
    }

    async fn count_connections_touching(&self, company: &str) -> Result<u64> {
        self.query_connection_count(company).await
    }

    async fn all_connections(&self) -> Result<Vec<Connection>> {
        self.query_all_connections().await
    }

    async fn distinct_companies(&self) -> Result<Vec<String>> {
        self.query_distinct_companies().await
    }

    async fn find_alumnus_by_name(&self, name: &str) -> Result<Option<Alumnus>> {
        self.query_alumnus_by_name(name).await
    }

    async fn insert_alumnus(&self, alumnus: &Alumnus) -> Result<()> {
        self.create_alumnus(alumnus).await
    }

    async fn insert_connection(&self, connection: &Connection) -> Result<()> {
        self.create_connection(connection).await
    }
}
