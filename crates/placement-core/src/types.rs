//! Core domain types for the placement record store.
//!
//! Alumni and connections are independent flat records. They relate to each
//! other only through matching company-name strings, never through ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Alumni ────────────────────────────────────────────────────────

/// Unique identifier for an alumnus record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AlumnusId(pub Uuid);

impl AlumnusId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AlumnusId {
    fn default() -> Self {
        Self::new()
    }
}

/// A former student now working at a company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alumnus {
    pub id: AlumnusId,
    pub name: String,
    pub company: String,
    pub role: String,
    pub info: String,
    /// External profile link, if the alumnus shared one.
    pub linkedin: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Alumnus fields as submitted, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAlumnus {
    pub name: String,
    pub company: String,
    pub role: String,
    pub info: String,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl NewAlumnus {
    /// Assign an id and creation time.
    pub fn into_alumnus(self) -> Alumnus {
        Alumnus {
            id: AlumnusId::new(),
            name: self.name,
            company: self.company,
            role: self.role,
            info: self.info,
            linkedin: self.linkedin.filter(|link| !link.trim().is_empty()),
            created_at: Utc::now(),
        }
    }
}

// ── Connections ───────────────────────────────────────────────────

/// Unique identifier for a connection record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// An undirected edge between two companies.
///
/// Endpoint order carries no meaning. Duplicate and reversed records may
/// coexist and each one counts as its own edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Connection {
    pub id: ConnectionId,
    pub company1: String,
    pub company2: String,
    pub created_at: DateTime<Utc>,
}

impl Connection {
    pub fn new(company1: impl Into<String>, company2: impl Into<String>) -> Self {
        Self {
            id: ConnectionId::new(),
            company1: company1.into(),
            company2: company2.into(),
            created_at: Utc::now(),
        }
    }

    /// Whether `company` is either endpoint.
    pub fn touches(&self, company: &str) -> bool {
        self.company1 == company || self.company2 == company
    }

    /// The endpoint on the other side of `current`.
    ///
    /// Returns `company2` when `company1 == current`, otherwise `company1`.
    /// A self-loop yields `current` back.
    pub fn neighbor_of(&self, current: &str) -> &str {
        if self.company1 == current {
            &self.company2
        } else {
            &self.company1
        }
    }
}
