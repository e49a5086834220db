//! placement-match: Alumni placement matching.
//!
//! Answers two questions for a student's chosen company, straight from the
//! record store: can the company reach the configured destination company
//! through connection records, and how connected is each alumnus working
//! there. Also carries the record-level operations the student and alumni
//! views need (listing companies, adding records, profile lookup).

pub mod error;
pub mod graph;
pub mod influence;
pub mod reachability;
pub mod types;

#[cfg(test)]
mod testing;

pub use error::MatchError;
pub use types::{GraphSummary, PlacementResult, ProfileLink, StudentReport};

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;

use placement_core::config::DEFAULT_TARGET_COMPANY;
use placement_core::{Alumnus, Connection, NewAlumnus, PlacementConfig};
use placement_graph::RecordStore;

use crate::graph::CompanyGraph;

/// The placement matching engine.
pub struct PlacementEngine {
    store: Arc<dyn RecordStore>,
    target_company: String,
}

impl PlacementEngine {
    /// Create an engine targeting the default destination company.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            target_company: DEFAULT_TARGET_COMPANY.to_string(),
        }
    }

    /// Apply the `[placement]` configuration section.
    pub fn with_config(self, config: &PlacementConfig) -> Self {
        self.with_target_company(config.target_company.clone())
    }

    /// Set the company a placement path must reach.
    pub fn with_target_company(mut self, target_company: impl Into<String>) -> Self {
        self.target_company = target_company.into();
        self
    }

    pub fn target_company(&self) -> &str {
        &self.target_company
    }

    // ── Core queries ─────────────────────────────────────────────

    /// Whether `company` connects to the destination company.
    pub async fn is_placement_possible(&self, company: &str) -> error::Result<bool> {
        reachability::is_placement_possible(self.store.as_ref(), company, &self.target_company)
            .await
    }

    /// The company chain from `company` to the destination, if one exists.
    pub async fn find_placement_path(&self, company: &str) -> error::Result<Option<Vec<String>>> {
        reachability::find_placement_path(self.store.as_ref(), company, &self.target_company).await
    }

    /// Reachability answer with the path that proves it.
    pub async fn placement(&self, company: &str) -> error::Result<PlacementResult> {
        let path = self.find_placement_path(company).await?;
        Ok(PlacementResult {
            company: company.to_string(),
            target_company: self.target_company.clone(),
            placement_possible: path.is_some(),
            path,
        })
    }

    /// Alumnus name → connection count of their company.
    pub async fn get_influential_alumni(
        &self,
        company: &str,
    ) -> error::Result<IndexMap<String, u64>> {
        influence::get_influential_alumni(self.store.as_ref(), company).await
    }

    /// Alumni, reachability and influence for one company.
    pub async fn student_report(&self, company: &str) -> error::Result<StudentReport> {
        let start = std::time::Instant::now();

        let alumni = self.store.alumni_by_company(company).await?;
        let placement_path = self.find_placement_path(company).await?;
        let influencers = self.get_influential_alumni(company).await?;

        let computation_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            company,
            target = %self.target_company,
            alumni = alumni.len(),
            placement_possible = placement_path.is_some(),
            computation_ms,
            "Student report computed"
        );

        Ok(StudentReport {
            company: company.to_string(),
            target_company: self.target_company.clone(),
            alumni,
            placement_possible: placement_path.is_some(),
            placement_path,
            influencers,
            computed_at: Utc::now(),
            computation_ms,
        })
    }

    // ── Records ──────────────────────────────────────────────────

    /// Distinct companies that have at least one alumnus.
    pub async fn companies(&self) -> error::Result<Vec<String>> {
        Ok(self.store.distinct_companies().await?)
    }

    /// Store a new alumnus record.
    pub async fn add_alumnus(&self, new_alumnus: NewAlumnus) -> error::Result<Alumnus> {
        require_non_blank("name", &new_alumnus.name)?;
        require_non_blank("company", &new_alumnus.company)?;

        let alumnus = new_alumnus.into_alumnus();
        self.store.insert_alumnus(&alumnus).await?;
        tracing::info!(name = %alumnus.name, company = %alumnus.company, "Alumnus added");
        Ok(alumnus)
    }

    /// Store a new connection record between two companies.
    pub async fn add_connection(&self, company1: &str, company2: &str) -> error::Result<Connection> {
        require_non_blank("company1", company1)?;
        require_non_blank("company2", company2)?;

        let connection = Connection::new(company1, company2);
        self.store.insert_connection(&connection).await?;
        tracing::info!(company1, company2, "Connection added");
        Ok(connection)
    }

    /// Profile link of the first alumnus with this name.
    pub async fn profile_link(&self, name: &str) -> error::Result<ProfileLink> {
        let alumnus = self
            .store
            .find_alumnus_by_name(name)
            .await?
            .ok_or_else(|| MatchError::AlumnusNotFound {
                name: name.to_string(),
            })?;

        let linkedin = alumnus.linkedin.ok_or_else(|| MatchError::NoProfileLink {
            name: name.to_string(),
        })?;

        Ok(ProfileLink {
            name: alumnus.name,
            company: alumnus.company,
            linkedin,
        })
    }

    /// Degree statistics over every connection record.
    pub async fn graph_summary(&self) -> error::Result<GraphSummary> {
        let connections = self.store.all_connections().await?;
        Ok(CompanyGraph::from_connections(&connections).summary())
    }
}

fn require_non_blank(field: &'static str, value: &str) -> error::Result<()> {
    if value.trim().is_empty() {
        return Err(MatchError::EmptyField { field });
    }
    Ok(())
}
