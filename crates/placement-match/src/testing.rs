//! Record stores for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use placement_core::{Alumnus, Connection};
use placement_graph::error::Result;
use placement_graph::{MemoryStore, RecordStore, StoreError};

/// Wraps a [`MemoryStore`] and counts edge and count queries.
pub struct CountingStore {
    inner: MemoryStore,
    edge_queries: AtomicUsize,
    count_queries: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            edge_queries: AtomicUsize::new(0),
            count_queries: AtomicUsize::new(0),
        }
    }

    pub fn edge_queries(&self) -> usize {
        self.edge_queries.load(Ordering::SeqCst)
    }

    pub fn count_queries(&self) -> usize {
        self.count_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for CountingStore {
    async fn connections_touching(&self, company: &str) -> Result<Vec<Connection>> {
        self.edge_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.connections_touching(company).await
    }

    async fn alumni_by_company(&self, company: &str) -> Result<Vec<Alumnus>> {
        self.inner.alumni_by_company(company).await
    }

    async fn count_connections_touching(&self, company: &str) -> Result<u64> {
        self.count_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.count_connections_touching(company).await
    }

    async fn all_connections(&self) -> Result<Vec<Connection>> {
        self.inner.all_connections().await
    }

    async fn distinct_companies(&self) -> Result<Vec<String>> {
        self.inner.distinct_companies().await
    }

    async fn find_alumnus_by_name(&self, name: &str) -> Result<Option<Alumnus>> {
        self.inner.find_alumnus_by_name(name).await
    }

    async fn insert_alumnus(&self, alumnus: &Alumnus) -> Result<()> {
        self.inner.insert_alumnus(alumnus).await
    }

    async fn insert_connection(&self, connection: &Connection) -> Result<()> {
        self.inner.insert_connection(connection).await
    }
}

/// Connection-only store indexed by company, for large graphs.
#[derive(Default)]
pub struct IndexedStore {
    by_company: HashMap<String, Vec<Connection>>,
}

impl IndexedStore {
    pub fn from_connections(connections: Vec<Connection>) -> Self {
        let mut by_company: HashMap<String, Vec<Connection>> = HashMap::new();
        for conn in connections {
            if conn.company1 != conn.company2 {
                by_company
                    .entry(conn.company2.clone())
                    .or_default()
                    .push(conn.clone());
            }
            by_company.entry(conn.company1.clone()).or_default().push(conn);
        }
        Self { by_company }
    }
}

#[async_trait]
impl RecordStore for IndexedStore {
    async fn connections_touching(&self, company: &str) -> Result<Vec<Connection>> {
        Ok(self.by_company.get(company).cloned().unwrap_or_default())
    }

    async fn alumni_by_company(&self, _company: &str) -> Result<Vec<Alumnus>> {
        Ok(Vec::new())
    }

    async fn count_connections_touching(&self, company: &str) -> Result<u64> {
        Ok(self.by_company.get(company).map_or(0, Vec::len) as u64)
    }

    async fn all_connections(&self) -> Result<Vec<Connection>> {
        Ok(Vec::new())
    }

    async fn distinct_companies(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn find_alumnus_by_name(&self, _name: &str) -> Result<Option<Alumnus>> {
        Ok(None)
    }

    async fn insert_alumnus(&self, _alumnus: &Alumnus) -> Result<()> {
        Ok(())
    }

    async fn insert_connection(&self, _connection: &Connection) -> Result<()> {
        Ok(())
    }
}

/// A store whose every call fails as unreachable.
pub struct FailingStore;

fn unavailable<T>() -> Result<T> {
    Err(StoreError::Unavailable("connection refused".to_string()))
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn connections_touching(&self, _company: &str) -> Result<Vec<Connection>> {
        unavailable()
    }

    async fn alumni_by_company(&self, _company: &str) -> Result<Vec<Alumnus>> {
        unavailable()
    }

    async fn count_connections_touching(&self, _company: &str) -> Result<u64> {
        unavailable()
    }

    async fn all_connections(&self) -> Result<Vec<Connection>> {
        unavailable()
    }

    async fn distinct_companies(&self) -> Result<Vec<String>> {
        unavailable()
    }

    async fn find_alumnus_by_name(&self, _name: &str) -> Result<Option<Alumnus>> {
        unavailable()
    }

    async fn insert_alumnus(&self, _alumnus: &Alumnus) -> Result<()> {
        unavailable()
    }

    async fn insert_connection(&self, _connection: &Connection) -> Result<()> {
        unavailable()
    }
}
