//! Influence ranking of alumni.
//!
//! An alumnus's influence is the number of connection records touching their
//! company. Records are counted as stored: no dedup, no transitive reach.

use std::collections::HashMap;

use indexmap::IndexMap;

use placement_graph::RecordStore;

use crate::error::Result;

/// Map each alumnus at `company` to the connection count of their company.
///
/// Keys keep the order alumni were returned by the store. When two alumni
/// share a name the later row's value wins and the key keeps its first
/// position. The count is fetched once per distinct company.
pub async fn get_influential_alumni(
    store: &dyn RecordStore,
    company: &str,
) -> Result<IndexMap<String, u64>> {
    let alumni = store.alumni_by_company(company).await?;

    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut influencers = IndexMap::with_capacity(alumni.len());

    for alumnus in &alumni {
        let count = match counts.get(alumnus.company.as_str()) {
            Some(&count) => count,
            None => {
                let count = store.count_connections_touching(&alumnus.company).await?;
                counts.insert(&alumnus.company, count);
                count
            }
        };
        influencers.insert(alumnus.name.clone(), count);
    }

    tracing::debug!(
        company,
        alumni = alumni.len(),
        influencers = influencers.len(),
        "Ranked alumni influence"
    );
    Ok(influencers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingStore, FailingStore};
    use placement_core::{Alumnus, Connection, NewAlumnus};
    use placement_graph::MemoryStore;

    fn alumnus(name: &str, company: &str) -> Alumnus {
        NewAlumnus {
            name: name.to_string(),
            company: company.to_string(),
            role: "Engineer".to_string(),
            info: String::new(),
            linkedin: None,
        }
        .into_alumnus()
    }

    #[tokio::test]
    async fn test_all_alumni_share_company_count() {
        let store = CountingStore::new(MemoryStore::with_records(
            vec![
                alumnus("Ada", "Acme"),
                alumnus("Grace", "Acme"),
                alumnus("Linus", "Globex"),
            ],
            vec![
                Connection::new("Acme", "Globex"),
                Connection::new("Initech", "Acme"),
                Connection::new("Acme", "CIT"),
                Connection::new("Globex", "CIT"),
            ],
        ));

        let influencers = get_influential_alumni(&store, "Acme").await.unwrap();
        assert_eq!(influencers.len(), 2);
        assert_eq!(influencers["Ada"], 3);
        assert_eq!(influencers["Grace"], 3);
        assert_eq!(store.count_queries(), 1);
    }

    #[tokio::test]
    async fn test_unknown_company_is_empty() {
        let store = MemoryStore::with_records(vec![], vec![Connection::new("Acme", "CIT")]);
        let influencers = get_influential_alumni(&store, "Unknown").await.unwrap();
        assert!(influencers.is_empty());
    }

    #[tokio::test]
    async fn test_alumni_without_connections_score_zero() {
        let store = MemoryStore::with_records(vec![alumnus("Ada", "Acme")], vec![]);
        let influencers = get_influential_alumni(&store, "Acme").await.unwrap();
        assert_eq!(influencers.get("Ada"), Some(&0));
    }

    #[tokio::test]
    async fn test_duplicate_records_are_not_deduplicated() {
        let store = MemoryStore::with_records(
            vec![alumnus("Ada", "Acme")],
            vec![
                Connection::new("Acme", "Globex"),
                Connection::new("Acme", "Globex"),
                Connection::new("Globex", "Acme"),
            ],
        );
        let influencers = get_influential_alumni(&store, "Acme").await.unwrap();
        assert_eq!(influencers["Ada"], 3);
    }

    #[tokio::test]
    async fn test_duplicate_names_keep_first_position() {
        let store = MemoryStore::with_records(
            vec![
                alumnus("Ada", "Acme"),
                alumnus("Grace", "Acme"),
                alumnus("Ada", "Acme"),
            ],
            vec![Connection::new("Acme", "CIT")],
        );
        let influencers = get_influential_alumni(&store, "Acme").await.unwrap();

        assert_eq!(influencers.len(), 2);
        let names: Vec<&str> = influencers.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }

    #[tokio::test]
    async fn test_discovery_order_preserved() {
        let store = MemoryStore::with_records(
            vec![
                alumnus("Zed", "Acme"),
                alumnus("Ada", "Acme"),
                alumnus("Mia", "Acme"),
            ],
            vec![],
        );
        let influencers = get_influential_alumni(&store, "Acme").await.unwrap();
        let names: Vec<&str> = influencers.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Zed", "Ada", "Mia"]);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let err = get_influential_alumni(&FailingStore, "Acme")
            .await
            .unwrap_err();
        assert!(err.is_store_unavailable());
    }
}
