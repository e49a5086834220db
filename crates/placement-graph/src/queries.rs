//! Read operations against the Neo4j record store.
//!
//! Every query returns plain columns instead of whole nodes so rows decode
//! straight into the core record types.

use chrono::{DateTime, Utc};
use neo4rs::{query, Row};
use uuid::Uuid;

use placement_core::{Alumnus, AlumnusId, Connection, ConnectionId};

use crate::client::GraphClient;
use crate::error::{Result, StoreError};

const CONNECTION_COLUMNS: &str = "c.id AS id, c.company1 AS company1, c.company2 AS company2,
             c.created_at AS created_at";

const ALUMNUS_COLUMNS: &str = "a.id AS id, a.name AS name, a.company AS company, a.role AS role,
             a.info AS info, a.linkedin AS linkedin, a.created_at AS created_at";

impl GraphClient {
    // ── Connections ──────────────────────────────────────────────

    /// All connection records with `company` at either endpoint, oldest first.
    pub async fn query_connections_touching(&self, company: &str) -> Result<Vec<Connection>> {
        let cypher = format!(
            "MATCH (c:Connection)
             WHERE c.company1 = $company OR c.company2 = $company
             RETURN {CONNECTION_COLUMNS}
             ORDER BY c.created_at, c.id"
        );
        let q = query(&cypher).param("company", company.to_string());

        let rows = self.query_rows(q).await?;
        rows.iter().map(row_to_connection).collect()
    }

    /// Count connection records with `company` at either endpoint.
    pub async fn query_connection_count(&self, company: &str) -> Result<u64> {
        let q = query(
            "MATCH (c:Connection)
             WHERE c.company1 = $company OR c.company2 = $company
             RETURN count(c) AS cnt",
        )
        .param("company", company.to_string());

        match self.query_one(q).await? {
            Some(row) => decode_count(row.get::<i64>("cnt"), "cnt"),
            None => Ok(0),
        }
    }

    /// Every connection record in the store, oldest first.
    pub async fn query_all_connections(&self) -> Result<Vec<Connection>> {
        let cypher = format!(
            "MATCH (c:Connection)
             RETURN {CONNECTION_COLUMNS}
             ORDER BY c.created_at, c.id"
        );

        let rows = self.query_rows(query(&cypher)).await?;
        rows.iter().map(row_to_connection).collect()
    }

    // ── Alumni ───────────────────────────────────────────────────

    /// All alumni whose company equals `company`, oldest first.
    pub async fn query_alumni_by_company(&self, company: &str) -> Result<Vec<Alumnus>> {
        let cypher = format!(
            "MATCH (a:Alumnus {{company: $company}})
             RETURN {ALUMNUS_COLUMNS}
             ORDER BY a.created_at, a.id"
        );
        let q = query(&cypher).param("company", company.to_string());

        let rows = self.query_rows(q).await?;
        rows.iter().map(row_to_alumnus).collect()
    }

    /// The earliest alumnus record with the given name.
    pub async fn query_alumnus_by_name(&self, name: &str) -> Result<Option<Alumnus>> {
        let cypher = format!(
            "MATCH (a:Alumnus {{name: $name}})
             RETURN {ALUMNUS_COLUMNS}
             ORDER BY a.created_at, a.id
             LIMIT 1"
        );
        let q = query(&cypher).param("name", name.to_string());

        match self.query_one(q).await? {
            Some(row) => Ok(Some(row_to_alumnus(&row)?)),
            None => Ok(None),
        }
    }

    /// Distinct alumni companies in order of first appearance.
    pub async fn query_distinct_companies(&self) -> Result<Vec<String>> {
        let q = query(
            "MATCH (a:Alumnus)
             WITH a.company AS company, min(a.created_at) AS first_seen
             RETURN company
             ORDER BY first_seen, company",
        );

        let rows = self.query_rows(q).await?;
        rows.iter()
            .map(|row| {
                row.get::<String>("company").map_err(|e| {
                    StoreError::Serialization(format!("Failed to read company column: {e}"))
                })
            })
            .collect()
    }
}

// ── Row decoding ─────────────────────────────────────────────────

fn row_to_connection(row: &Row) -> Result<Connection> {
    Ok(Connection {
        id: ConnectionId(parse_uuid(row, "id")?),
        company1: get_string(row, "company1")?,
        company2: get_string(row, "company2")?,
        created_at: parse_timestamp(row)?,
    })
}

fn row_to_alumnus(row: &Row) -> Result<Alumnus> {
    let linkedin = row
        .get::<String>("linkedin")
        .ok()
        .filter(|link| !link.is_empty());

    Ok(Alumnus {
        id: AlumnusId(parse_uuid(row, "id")?),
        name: get_string(row, "name")?,
        company: get_string(row, "company")?,
        role: get_string(row, "role")?,
        info: get_string(row, "info")?,
        linkedin,
        created_at: parse_timestamp(row)?,
    })
}

fn get_string(row: &Row, column: &str) -> Result<String> {
    row.get::<String>(column)
        .map_err(|e| StoreError::Serialization(format!("Failed to read column {column}: {e}")))
}

fn decode_count<E: std::fmt::Display>(
    value: std::result::Result<i64, E>,
    column: &str,
) -> Result<u64> {
    let raw =
        value.map_err(|e| StoreError::Serialization(format!("Failed to read column {column}: {e}")))?;
    u64::try_from(raw)
        .map_err(|_| StoreError::Serialization(format!("Negative {column} '{raw}'")))
}

fn parse_uuid(row: &Row, column: &str) -> Result<Uuid> {
    let raw = get_string(row, column)?;
    Uuid::parse_str(&raw)
        .map_err(|e| StoreError::Serialization(format!("Invalid {column} '{raw}': {e}")))
}

fn parse_timestamp(row: &Row) -> Result<DateTime<Utc>> {
    let raw = get_string(row, "created_at")?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| StoreError::Serialization(format!("Invalid created_at '{raw}': {e}")))
}
