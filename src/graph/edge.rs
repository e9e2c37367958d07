//! Edge value type.

use super::ids::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Cost given to edges created through the `*_default` constructors.
pub const DEFAULT_EDGE_COST: f32 = 1.0;

/// A directed, weighted connection between two nodes.
///
/// Returned by value from [`Graph::get_edge_data`](crate::Graph::get_edge_data);
/// changing a copy has no effect on the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// This edge's identity.
    pub id: EdgeId,
    /// The node the edge leaves from.
    pub source: NodeId,
    /// The node the edge arrives at.
    pub destination: NodeId,
    /// Caller-supplied weight. The graph never interprets it.
    pub cost: f32,
}

impl Edge {
    pub(crate) const fn new(id: EdgeId, source: NodeId, destination: NodeId, cost: f32) -> Self {
        Self {
            id,
            source,
            destination,
            cost,
        }
    }

    /// Returns `true` if `node` is either endpoint.
    #[inline]
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.destination == node
    }

    /// Returns `true` if the edge starts and ends at the same node.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}
