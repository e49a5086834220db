//! Write operations for the record store.
//!
//! Records are append-only: every insert creates a new node, so duplicate
//! connection records are kept as separate edges.

use chrono::{DateTime, SecondsFormat, Utc};
use neo4rs::query;

use placement_core::{Alumnus, Connection};

use crate::client::GraphClient;
use crate::error::Result;

impl GraphClient {
    /// Create lookup indexes used by the read queries. Idempotent.
    pub async fn ensure_schema(&self) -> Result<()> {
        for statement in [
            "CREATE INDEX alumnus_company IF NOT EXISTS FOR (a:Alumnus) ON (a.company)",
            "CREATE INDEX alumnus_name IF NOT EXISTS FOR (a:Alumnus) ON (a.name)",
            "CREATE INDEX connection_company1 IF NOT EXISTS FOR (c:Connection) ON (c.company1)",
            "CREATE INDEX connection_company2 IF NOT EXISTS FOR (c:Connection) ON (c.company2)",
        ] {
            self.run(query(statement)).await?;
        }
        tracing::debug!("Record store indexes ensured");
        Ok(())
    }

    /// Insert an alumnus record.
    pub async fn create_alumnus(&self, alumnus: &Alumnus) -> Result<()> {
        let q = query(
            "CREATE (a:Alumnus {
               id: $id, name: $name, company: $company, role: $role,
               info: $info, linkedin: $linkedin, created_at: $created_at
             })",
        )
        .param("id", alumnus.id.0.to_string())
        .param("name", alumnus.name.clone())
        .param("company", alumnus.company.clone())
        .param("role", alumnus.role.clone())
        .param("info", alumnus.info.clone())
        .param("linkedin", opt_string(&alumnus.linkedin))
        .param("created_at", timestamp(&alumnus.created_at));

        self.run(q).await
    }

    /// Insert a connection record.
    pub async fn create_connection(&self, connection: &Connection) -> Result<()> {
        let q = query(
            "CREATE (c:Connection {
               id: $id, company1: $company1, company2: $company2, created_at: $created_at
             })",
        )
        .param("id", connection.id.0.to_string())
        .param("company1", connection.company1.clone())
        .param("company2", connection.company2.clone())
        .param("created_at", timestamp(&connection.created_at));

        self.run(q).await
    }
}

fn opt_string(opt: &Option<String>) -> String {
    opt.clone().unwrap_or_default()
}

/// Fixed-width RFC 3339 so timestamps order lexicographically.
fn timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
