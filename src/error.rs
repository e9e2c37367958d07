//! Error types for graph operations.

use crate::graph::{EdgeId, NodeId};
use thiserror::Error;

/// Errors returned by identity-taking graph operations.
///
/// A missing match in [`Graph::find_node`](crate::Graph::find_node) is not an
/// error; it is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The node id does not name a live node.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// The edge id does not name a live edge.
    #[error("edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// The node/edge bookkeeping disagrees with itself.
    ///
    /// Only produced by [`Graph::check_invariants`](crate::Graph::check_invariants).
    #[error("graph inconsistent: {0}")]
    Inconsistent(String),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GraphError::NodeNotFound(NodeId::new(42));
        assert!(err.to_string().contains("42"));

        let err = GraphError::EdgeNotFound(EdgeId::new(7));
        assert_eq!(err.to_string(), "edge not found: e7");
    }

    #[test]
    fn errors_compare_by_identity() {
        assert_eq!(
            GraphError::NodeNotFound(NodeId::new(1)),
            GraphError::NodeNotFound(NodeId::new(1))
        );
        assert_ne!(
            GraphError::NodeNotFound(NodeId::new(1)),
            GraphError::NodeNotFound(NodeId::new(2))
        );
    }
}
