//! In-process record store.
//!
//! Keeps both tables as insertion-ordered vectors behind a lock. Used when no
//! Neo4j server is configured and as the fixture store in tests. A store
//! opened on a seed file writes every insert back to that file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use placement_core::{Alumnus, Connection, NewAlumnus};

use crate::error::{Result, StoreError};
use crate::store::RecordStore;

/// Seed document for the in-memory store.
///
/// ```json
/// {
///   "alumni": [{"name": "Ada", "company": "Acme", "role": "SWE", "info": "..."}],
///   "connections": [{"company1": "Acme", "company2": "CIT"}]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub alumni: Vec<NewAlumnus>,
    #[serde(default)]
    pub connections: Vec<SeedConnection>,
}

/// A connection row in a seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConnection {
    pub company1: String,
    pub company2: String,
}

#[derive(Debug, Default)]
struct Tables {
    alumni: Vec<Alumnus>,
    connections: Vec<Connection>,
}

impl Tables {
    fn to_seed(&self) -> Seed {
        Seed {
            alumni: self
                .alumni
                .iter()
                .map(|a| NewAlumnus {
                    name: a.name.clone(),
                    company: a.company.clone(),
                    role: a.role.clone(),
                    info: a.info.clone(),
                    linkedin: a.linkedin.clone(),
                })
                .collect(),
            connections: self
                .connections
                .iter()
                .map(|c| SeedConnection {
                    company1: c.company1.clone(),
                    company2: c.company2.clone(),
                })
                .collect(),
        }
    }
}

/// Record store held in memory, optionally backed by a seed file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    seed_path: Option<PathBuf>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-materialised records.
    pub fn with_records(alumni: Vec<Alumnus>, connections: Vec<Connection>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                alumni,
                connections,
            }),
            seed_path: None,
        }
    }

    /// Build a store from a seed document, assigning fresh ids.
    pub fn from_seed(seed: Seed) -> Self {
        let alumni = seed
            .alumni
            .into_iter()
            .map(NewAlumnus::into_alumnus)
            .collect();
        let connections = seed
            .connections
            .into_iter()
            .map(|c| Connection::new(c.company1, c.company2))
            .collect();
        Self::with_records(alumni, connections)
    }

    /// Read a JSON seed document from disk.
    pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let seed: Seed = serde_json::from_str(&contents).map_err(|e| {
            StoreError::Serialization(format!("Invalid seed file {}: {e}", path.display()))
        })?;
        tracing::info!(
            path = %path.display(),
            alumni = seed.alumni.len(),
            connections = seed.connections.len(),
            "Loaded seed file"
        );
        Ok(Self::from_seed(seed))
    }

    /// Open a seed file as a durable store. A missing file starts empty and
    /// is created on the first insert.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut store = if path.exists() {
            Self::load_seed_file(&path)?
        } else {
            tracing::info!(path = %path.display(), "Seed file not found, starting empty");
            Self::new()
        };
        store.seed_path = Some(path);
        Ok(store)
    }

    /// Whether inserts outlive the process.
    pub fn is_durable(&self) -> bool {
        self.seed_path.is_some()
    }

    /// Write the tables back to the seed file, if there is one.
    fn persist(&self, tables: &Tables) -> Result<()> {
        let Some(path) = &self.seed_path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&tables.to_seed())
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        std::fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "Seed file updated");
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn connections_touching(&self, company: &str) -> Result<Vec<Connection>> {
        Ok(self
            .read()?
            .connections
            .iter()
            .filter(|c| c.touches(company))
            .cloned()
            .collect())
    }

    async fn alumni_by_company(&self, company: &str) -> Result<Vec<Alumnus>> {
        Ok(self
            .read()?
            .alumni
            .iter()
            .filter(|a| a.company == company)
            .cloned()
            .collect())
    }

    async fn count_connections_touching(&self, company: &str) -> Result<u64> {
        let count = self
            .read()?
            .connections
            .iter()
            .filter(|c| c.touches(company))
            .count();
        Ok(count as u64)
    }

    async fn all_connections(&self) -> Result<Vec<Connection>> {
        Ok(self.read()?.connections.clone())
    }

    async fn distinct_companies(&self) -> Result<Vec<String>> {
        let tables = self.read()?;
        let mut seen = HashSet::new();
        Ok(tables
            .alumni
            .iter()
            .filter(|a| seen.insert(a.company.as_str()))
            .map(|a| a.company.clone())
            .collect())
    }

    async fn find_alumnus_by_name(&self, name: &str) -> Result<Option<Alumnus>> {
        Ok(self.read()?.alumni.iter().find(|a| a.name == name).cloned())
    }

    async fn insert_alumnus(&self, alumnus: &Alumnus) -> Result<()> {
        let mut tables = self.write()?;
        tables.alumni.push(alumnus.clone());
        if let Err(e) = self.persist(&tables) {
            tables.alumni.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn insert_connection(&self, connection: &Connection) -> Result<()> {
        let mut tables = self.write()?;
        tables.connections.push(connection.clone());
        if let Err(e) = self.persist(&tables) {
            tables.connections.pop();
            return Err(e);
        }
        Ok(())
    }
}
