//! Structural consistency checks.
//!
//! [`Graph::check_invariants`] is public so callers and tests can audit a
//! graph at any point. [`debug_check`] runs it after every mutation, but only
//! in debug builds with the `invariant-checks` feature enabled; release builds
//! are unaffected.

use super::container::Graph;
use crate::error::{GraphError, GraphResult};

/// Debug-asserts that `graph` is consistent.
#[inline(always)]
pub(crate) fn debug_check<T>(graph: &Graph<T>) {
    if cfg!(all(debug_assertions, feature = "invariant-checks")) {
        let verdict = graph.check_invariants();
        debug_assert!(verdict.is_ok(), "Graph invariant violated: {:?}", verdict);
    }
}

fn inconsistent(message: String) -> GraphError {
    GraphError::Inconsistent(message)
}

impl<T> Graph<T> {
    /// Verifies the node/edge bookkeeping.
    ///
    /// Checks that:
    /// - every edge's endpoints are live nodes,
    /// - each node's outgoing list holds exactly the edges it is the source of,
    ///   and its incoming list exactly the edges it is the destination of,
    /// - every stored id matches its map key and lies below its counter.
    ///
    /// Id uniqueness follows from map keys being unique.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Inconsistent`] describing the first violation found.
    pub fn check_invariants(&self) -> GraphResult<()> {
        let next_node = self.node_counter.peek();
        let next_edge = self.edge_counter.peek();

        for (&key, node) in &self.nodes {
            if node.id != key {
                return Err(inconsistent(format!(
                    "node stored under {key} carries id {}",
                    node.id
                )));
            }
            if key.as_u64() >= next_node {
                return Err(inconsistent(format!(
                    "node {key} was never issued by the node counter"
                )));
            }
            for &edge_id in &node.outgoing {
                let edge = self.edges.get(&edge_id).ok_or_else(|| {
                    inconsistent(format!("{key} lists missing outgoing edge {edge_id}"))
                })?;
                if edge.source != key {
                    return Err(inconsistent(format!(
                        "{key} lists {edge_id} as outgoing but its source is {}",
                        edge.source
                    )));
                }
            }
            for &edge_id in &node.incoming {
                let edge = self.edges.get(&edge_id).ok_or_else(|| {
                    inconsistent(format!("{key} lists missing incoming edge {edge_id}"))
                })?;
                if edge.destination != key {
                    return Err(inconsistent(format!(
                        "{key} lists {edge_id} as incoming but its destination is {}",
                        edge.destination
                    )));
                }
            }
        }

        for (&key, edge) in &self.edges {
            if edge.id != key {
                return Err(inconsistent(format!(
                    "edge stored under {key} carries id {}",
                    edge.id
                )));
            }
            if key.as_u64() >= next_edge {
                return Err(inconsistent(format!(
                    "edge {key} was never issued by the edge counter"
                )));
            }
            let source = self.nodes.get(&edge.source).ok_or_else(|| {
                inconsistent(format!("{key} dangles from missing source {}", edge.source))
            })?;
            if !source.outgoing.contains(&key) {
                return Err(inconsistent(format!(
                    "{key} is not listed by its source {}",
                    edge.source
                )));
            }
            let destination = self.nodes.get(&edge.destination).ok_or_else(|| {
                inconsistent(format!(
                    "{key} dangles into missing destination {}",
                    edge.destination
                ))
            })?;
            if !destination.incoming.contains(&key) {
                return Err(inconsistent(format!(
                    "{key} is not listed by its destination {}",
                    edge.destination
                )));
            }
        }

        // Each edge is listed at least once on each side; equal totals rule out duplicates.
        let outgoing_total: usize = self.nodes.values().map(|n| n.outgoing.len()).sum();
        let incoming_total: usize = self.nodes.values().map(|n| n.incoming.len()).sum();
        if outgoing_total != self.edges.len() || incoming_total != self.edges.len() {
            return Err(inconsistent(format!(
                "{} edges but {outgoing_total} outgoing and {incoming_total} incoming entries",
                self.edges.len()
            )));
        }

        Ok(())
    }
}
