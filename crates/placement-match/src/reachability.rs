//! Placement reachability: depth-first search from a student's company to the
//! destination company over undirected connection records.
//!
//! The search is iterative. Each stack frame holds one company and the
//! connection records touching it, fetched when the frame is opened, plus a
//! cursor into those records. The frames on the stack are therefore always
//! the path from the start company to the company being expanded, and the
//! exploration order is the same as a recursive DFS that short-circuits on
//! the first success.

use std::collections::HashSet;

use placement_core::Connection;
use placement_graph::RecordStore;

use crate::error::Result;
use crate::graph;

/// One level of the explicit DFS stack.
struct Frame {
    company: String,
    connections: Vec<Connection>,
    next: usize,
}

impl Frame {
    async fn open(store: &dyn RecordStore, company: String) -> Result<Self> {
        let connections = graph::connections_touching(store, &company).await?;
        Ok(Self {
            company,
            connections,
            next: 0,
        })
    }
}

/// Whether a path of connection records links `start` to `target`.
///
/// Returns `true` without touching the store when `start == target`.
/// Unknown or isolated companies yield `false`.
pub async fn is_placement_possible(
    store: &dyn RecordStore,
    start: &str,
    target: &str,
) -> Result<bool> {
    Ok(find_placement_path(store, start, target).await?.is_some())
}

/// The company chain from `start` to `target` found by the DFS, if any.
///
/// The chain begins with `start` and ends with `target`.
pub async fn find_placement_path(
    store: &dyn RecordStore,
    start: &str,
    target: &str,
) -> Result<Option<Vec<String>>> {
    if start == target {
        return Ok(Some(vec![start.to_string()]));
    }

    // Monotonic for the lifetime of this call.
    let mut visited: HashSet<String> = HashSet::from([start.to_string()]);
    let mut stack = vec![Frame::open(store, start.to_string()).await?];

    while let Some(frame) = stack.last_mut() {
        let Some(conn) = frame.connections.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        let neighbor = conn.neighbor_of(&frame.company).to_string();
        if !visited.insert(neighbor.clone()) {
            continue;
        }

        if neighbor == target {
            let mut path: Vec<String> = stack.into_iter().map(|f| f.company).collect();
            path.push(neighbor);
            tracing::debug!(start, target, hops = path.len() - 1, "Placement path found");
            return Ok(Some(path));
        }

        stack.push(Frame::open(store, neighbor).await?);
    }

    tracing::debug!(start, target, visited = visited.len(), "No placement path");
    Ok(None)
}
