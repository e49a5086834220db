//! Company connection graph.
//!
//! Traversal never loads the whole graph: [`connections_touching`] fetches the
//! edges around one company at a time. [`CompanyGraph`] is the whole-graph
//! adjacency view used for summaries.

use indexmap::IndexMap;

use placement_core::Connection;
use placement_graph::RecordStore;

use crate::error::Result;
use crate::types::{CompanyDegree, GraphSummary};

/// Fetch every connection record with `company` at either endpoint.
///
/// An empty result is an isolated company, not an error.
pub async fn connections_touching(
    store: &dyn RecordStore,
    company: &str,
) -> Result<Vec<Connection>> {
    let connections = store.connections_touching(company).await?;
    tracing::debug!(company, edges = connections.len(), "Loaded connections");
    Ok(connections)
}

/// Undirected adjacency over company names.
///
/// Each connection record contributes one neighbor entry on both sides
/// (one entry for a self-loop), so a company's degree equals the number of
/// records touching it.
#[derive(Debug, Default)]
pub struct CompanyGraph {
    adjacency: IndexMap<String, Vec<String>>,
    edge_count: usize,
}

impl CompanyGraph {
    /// Build from connection records in store order.
    pub fn from_connections(connections: &[Connection]) -> Self {
        let mut adjacency: IndexMap<String, Vec<String>> = IndexMap::new();

        for conn in connections {
            adjacency
                .entry(conn.company1.clone())
                .or_default()
                .push(conn.company2.clone());
            if conn.company1 != conn.company2 {
                adjacency
                    .entry(conn.company2.clone())
                    .or_default()
                    .push(conn.company1.clone());
            }
        }

        Self {
            adjacency,
            edge_count: connections.len(),
        }
    }

    /// Neighbors of `company`, one entry per record (duplicates kept).
    pub fn neighbors(&self, company: &str) -> &[String] {
        self.adjacency
            .get(company)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of connection records touching `company`.
    pub fn degree(&self, company: &str) -> usize {
        self.neighbors(company).len()
    }

    /// Number of companies that appear in at least one record.
    pub fn company_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of connection records.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Per-company degree and distinct neighbors, highest degree first.
    pub fn summary(&self) -> GraphSummary {
        let mut companies: Vec<CompanyDegree> = self
            .adjacency
            .iter()
            .map(|(company, neighbors)| {
                let mut distinct: Vec<String> = Vec::with_capacity(neighbors.len());
                for n in neighbors {
                    if !distinct.contains(n) {
                        distinct.push(n.clone());
                    }
                }
                CompanyDegree {
                    company: company.clone(),
                    degree: self.degree(company),
                    neighbors: distinct,
                }
            })
            .collect();

        // Stable sort keeps first-seen order among equal degrees.
        companies.sort_by(|a, b| b.degree.cmp(&a.degree));

        GraphSummary {
            total_companies: self.company_count(),
            total_connections: self.edge_count(),
            companies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(&str, &str)]) -> Vec<Connection> {
        pairs.iter().map(|(a, b)| Connection::new(*a, *b)).collect()
    }

    #[test]
    fn test_from_connections_is_undirected() {
        let graph = CompanyGraph::from_connections(&edges(&[("A", "B"), ("C", "B")]));

        assert_eq!(graph.company_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors("A"), ["B".to_string()]);
        assert_eq!(graph.neighbors("B"), ["A".to_string(), "C".to_string()]);
        assert_eq!(graph.neighbors("C"), ["B".to_string()]);
    }

    #[test]
    fn test_duplicate_and_reverse_records_all_count() {
        let graph =
            CompanyGraph::from_connections(&edges(&[("A", "B"), ("A", "B"), ("B", "A")]));
        assert_eq!(graph.degree("A"), 3);
        assert_eq!(graph.degree("B"), 3);
    }

    #[test]
    fn test_self_loop_counts_once() {
        let graph = CompanyGraph::from_connections(&edges(&[("A", "A"), ("A", "B")]));
        assert_eq!(graph.degree("A"), 2);
        assert_eq!(graph.degree("B"), 1);
    }

    #[test]
    fn test_unknown_company_has_no_neighbors() {
        let graph = CompanyGraph::from_connections(&[]);
        assert!(graph.neighbors("Nowhere").is_empty());
        assert_eq!(graph.degree("Nowhere"), 0);
    }

    #[test]
    fn test_summary_orders_by_degree() {
        let graph = CompanyGraph::from_connections(&edges(&[
            ("A", "B"),
            ("B", "C"),
            ("B", "C"),
        ]));
        let summary = graph.summary();

        assert_eq!(summary.total_companies, 3);
        assert_eq!(summary.total_connections, 3);
        assert_eq!(summary.companies[0].company, "B");
        assert_eq!(summary.companies[0].degree, 3);
        assert_eq!(
            summary.companies[0].neighbors,
            vec!["A".to_string(), "C".to_string()]
        );
        assert_eq!(summary.companies[1].company, "C");
        assert_eq!(summary.companies[2].company, "A");
    }
}
