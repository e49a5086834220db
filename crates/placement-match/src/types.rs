//! Response types for matching operations.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use placement_core::Alumnus;

/// Reachability answer for one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementResult {
    pub company: String,
    pub target_company: String,
    pub placement_possible: bool,
    /// Company chain from `company` to `target_company`, when one exists.
    pub path: Option<Vec<String>>,
}

/// Everything a student sees after picking a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentReport {
    pub company: String,
    pub target_company: String,
    pub alumni: Vec<Alumnus>,
    pub placement_possible: bool,
    pub placement_path: Option<Vec<String>>,
    /// Alumnus name → influence count, in discovery order.
    pub influencers: IndexMap<String, u64>,
    pub computed_at: DateTime<Utc>,
    pub computation_ms: u64,
}

/// Where to reach an alumnus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileLink {
    pub name: String,
    pub company: String,
    pub linkedin: String,
}

/// Whole-graph statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    pub total_companies: usize,
    pub total_connections: usize,
    pub companies: Vec<CompanyDegree>,
}

/// Degree of one company in the connection graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDegree {
    pub company: String,
    /// Connection records touching this company.
    pub degree: usize,
    /// Distinct neighboring companies in first-seen order.
    pub neighbors: Vec<String>,
}
