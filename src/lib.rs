//! # `waygraph` - Mutable Payload Graph
//!
//! A generic directed graph container that stores one payload per node and a
//! real-valued cost per edge. It is meant as a building block: callers put
//! waypoints, states or any other values at the nodes and layer their own
//! reasoning on top.
//!
//! ## Guarantees
//!
//! ### Stable Identity
//! - **Monotonic ids**: nodes and edges draw ids from two independent counters
//!   owned by the graph instance. An id is never handed out twice, not even
//!   after the entity it named is removed.
//! - **Typed ids**: [`NodeId`] and [`EdgeId`] are distinct types, so one can
//!   not be passed where the other is expected.
//!
//! ### Consistency
//! - **No dangling edges**: removing a node removes every edge entering or
//!   leaving it.
//! - **Two-sided bookkeeping**: each node lists the edges it is the source of,
//!   plus non-owning back-references to the edges it is the destination of.
//!   Both sides are updated on every insertion and removal.
//! - **Auditable**: [`Graph::check_invariants`] verifies all of the above on
//!   demand; the `invariant-checks` feature runs it after every mutation in
//!   debug builds.
//!
//! ### Explicit Failure
//! - Every operation taking an id returns [`GraphResult`]. A stale or foreign
//!   id is a [`GraphError`], never a panic.
//! - Nearest-match lookups that find nothing return `None`.
//!
//! ## Key Features
//!
//! - **Undirected links** as mirrored directed pairs ([`Graph::add_edge`])
//! - **Bulk removal** of every node strictly inside an interval ([`Graph::remove_range`])
//! - **Nearest match** under any caller-supplied distance and threshold
//!   ([`Graph::find_node`]), with ready-made metrics in [`metric`]
//!
//! ## Not Included
//!
//! Traversal and path algorithms, persistence, spatial indexing and internal
//! synchronization are left to callers. All mutation goes through
//! `&mut self`; wrap the graph in a lock to share it across threads.
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events for edge links, cascading removals and
//!   rejected ids.
//! - `invariant-checks`: run [`Graph::check_invariants`] after every mutation
//!   in debug builds.
//!
//! ## Example
//!
//! ```rust
//! use waygraph::{metric, Graph, GraphError};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(1.0_f64);
//! let b = graph.add_node(10.0);
//! graph.add_edge(a, b, 2.5)?;
//!
//! assert_eq!(graph.find_node(&1.1, metric::absolute_difference, 0.5), Some(a));
//! assert_eq!(graph.find_node(&5.0, metric::absolute_difference, 0.5), None);
//!
//! graph.remove_node(a)?;
//! assert_eq!(graph.edge_count(), 0);
//! assert_eq!(graph.remove_node(a), Err(GraphError::NodeNotFound(a)));
//! # Ok::<(), GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod metric;

pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeId, Graph, NodeId, DEFAULT_EDGE_COST, DEFAULT_MATCH_RANGE};

// Ids are plain integers underneath.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<NodeId>() == mem::size_of::<u64>());
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<u64>());
    assert!(mem::size_of::<Option<NodeId>>() <= mem::size_of::<u64>() * 2);
};
