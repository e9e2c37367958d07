//! The graph container and its identity and edge types.
//!
//! - `ids`: [`NodeId`], [`EdgeId`] and the per-graph monotonic counters
//! - `edge`: the [`Edge`] value type
//! - `node`: the internal node record with its outgoing list and incoming back-references
//! - `container`: [`Graph`] itself
//! - `invariants`: consistency checks over the node/edge bookkeeping

mod container;
mod edge;
mod ids;
mod invariants;
mod node;

pub use container::{Graph, DEFAULT_MATCH_RANGE};
pub use edge::{Edge, DEFAULT_EDGE_COST};
pub use ids::{EdgeId, NodeId};
