//! `Graph` — a mutable, payload-carrying directed graph with stable ids.
//!
//! Nodes and edges live in two ordered maps keyed by ids drawn from two
//! independent monotonic counters. Each node records the edges it is the
//! source of (`outgoing`) and, as a non-owning back-reference, the edges it is
//! the destination of (`incoming`). The back-reference is what lets
//! [`Graph::remove_node`] unlink every incident edge without scanning the
//! whole edge map.
//!
//! # Performance
//! - `add_node`: O(log n)
//! - `add_directed_edge` / `add_edge`: O(log n + log m)
//! - `remove_node`: O(d · (log m + d')) for a node of degree d whose neighbors have degree d'
//! - `remove_range`: O(n) predicate calls, then one `remove_node` per match
//! - `find_node`: O(n) distance calls, no index
//! - accessors: O(log n) or O(log m)

use std::collections::BTreeMap;

use super::edge::{Edge, DEFAULT_EDGE_COST};
use super::ids::{EdgeId, IdCounter, NodeId};
use super::invariants::debug_check;
use super::node::Node;
use crate::error::{GraphError, GraphResult};

/// Match radius used by [`Graph::find_node_default`].
pub const DEFAULT_MATCH_RANGE: f32 = 0.0001;

/// A directed graph owning one payload of type `T` per node.
///
/// Undirected connections are expressed as two mirrored directed edges, see
/// [`Graph::add_edge`].
///
/// Ids are never reused: removing a node or clearing the graph retires its ids
/// for the lifetime of this instance.
///
/// # Example
///
/// ```rust
/// use waygraph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// let (ab, ba) = graph.add_edge(a, b, 2.5).unwrap();
///
/// assert_eq!(graph.get_node_edges(a).unwrap(), vec![ab]);
/// assert_eq!(graph.get_node_edges(b).unwrap(), vec![ba]);
///
/// graph.remove_node(a).unwrap();
/// assert_eq!(graph.edge_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T> {
    pub(super) nodes: BTreeMap<NodeId, Node<T>>,
    pub(super) edges: BTreeMap<EdgeId, Edge>,
    pub(super) node_counter: IdCounter,
    pub(super) edge_counter: IdCounter,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// Creates an empty graph. The first node and the first edge both get id 0.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            node_counter: IdCounter::new(),
            edge_counter: IdCounter::new(),
        }
    }

    /// Inserts a node holding `data` and returns its new id.
    pub fn add_node(&mut self, data: T) -> NodeId {
        let id = NodeId::new(self.node_counter.advance());
        self.nodes.insert(id, Node::new(id, data));
        debug_check(self);
        id
    }

    /// Adds a directed edge from `source` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is not a live
    /// node. The graph is left untouched and no edge id is consumed.
    pub fn add_directed_edge(
        &mut self,
        source: NodeId,
        destination: NodeId,
        cost: f32,
    ) -> GraphResult<EdgeId> {
        self.ensure_node(source)?;
        self.ensure_node(destination)?;
        let id = self.link(source, destination, cost);
        debug_check(self);
        Ok(id)
    }

    /// [`add_directed_edge`](Self::add_directed_edge) with [`DEFAULT_EDGE_COST`].
    ///
    /// # Errors
    ///
    /// Same as [`add_directed_edge`](Self::add_directed_edge).
    pub fn add_directed_edge_default(
        &mut self,
        source: NodeId,
        destination: NodeId,
    ) -> GraphResult<EdgeId> {
        self.add_directed_edge(source, destination, DEFAULT_EDGE_COST)
    }

    /// Connects `a` and `b` both ways with two directed edges of equal cost.
    ///
    /// Returns the ids of `a → b` and `b → a`, in that order. The two edges
    /// are independent entities that happen to mirror each other.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing.
    /// Both endpoints are checked before anything is inserted, so a failure
    /// never leaves half a connection behind.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, cost: f32) -> GraphResult<(EdgeId, EdgeId)> {
        self.ensure_node(a)?;
        self.ensure_node(b)?;
        let forward = self.link(a, b, cost);
        let backward = self.link(b, a, cost);
        debug_check(self);
        Ok((forward, backward))
    }

    /// [`add_edge`](Self::add_edge) with [`DEFAULT_EDGE_COST`].
    ///
    /// # Errors
    ///
    /// Same as [`add_edge`](Self::add_edge).
    pub fn add_edge_default(&mut self, a: NodeId, b: NodeId) -> GraphResult<(EdgeId, EdgeId)> {
        self.add_edge(a, b, DEFAULT_EDGE_COST)
    }

    /// Removes `node` together with every edge entering or leaving it, and
    /// hands back its payload.
    ///
    /// Afterwards no surviving edge mentions `node` and no surviving node
    /// lists one of the removed edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is not live.
    pub fn remove_node(&mut self, node: NodeId) -> GraphResult<T> {
        let data = self.detach(node).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(%node, "remove_node on unknown node");
            GraphError::NodeNotFound(node)
        })?;
        debug_check(self);
        Ok(data)
    }

    /// Removes every node whose payload lies strictly between `min` and `max`.
    ///
    /// `less_than` must be a strict order. A payload `p` is removed when
    /// `less_than(min, p) && less_than(p, max)`; payloads equal to either
    /// bound are kept.
    ///
    /// Matching ids are collected before anything is removed, so the
    /// predicate always sees the graph as it was on entry. Returns the removed
    /// ids in ascending order.
    pub fn remove_range<F>(&mut self, min: &T, max: &T, mut less_than: F) -> Vec<NodeId>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut doomed: Vec<NodeId> = self
            .nodes
            .values()
            .filter(|node| less_than(min, &node.data) && less_than(&node.data, max))
            .map(|node| node.id)
            .collect();

        doomed.retain(|&id| self.detach(id).is_some());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            removed = doomed.len(),
            remaining = self.nodes.len(),
            "remove_range finished"
        );

        debug_check(self);
        doomed
    }

    /// [`remove_range`](Self::remove_range) using the payload's own `<`.
    pub fn remove_between(&mut self, min: &T, max: &T) -> Vec<NodeId>
    where
        T: PartialOrd,
    {
        self.remove_range(min, max, |a, b| a < b)
    }

    /// Finds the node whose payload is closest to `query`, provided it is
    /// within `range`.
    ///
    /// `distance` is called as `distance(node_payload, query)` once per node,
    /// in ascending id order. A node replaces the current best only when it is
    /// strictly closer, so among equally close nodes the lowest id wins.
    /// Distances that are NaN or above `range` never match.
    pub fn find_node<F>(&self, query: &T, distance: F, range: f32) -> Option<NodeId>
    where
        F: FnMut(&T, &T) -> f32,
    {
        self.find_node_with_distance(query, distance, range)
            .map(|(id, _)| id)
    }

    /// [`find_node`](Self::find_node) with [`DEFAULT_MATCH_RANGE`].
    pub fn find_node_default<F>(&self, query: &T, distance: F) -> Option<NodeId>
    where
        F: FnMut(&T, &T) -> f32,
    {
        self.find_node(query, distance, DEFAULT_MATCH_RANGE)
    }

    /// Like [`find_node`](Self::find_node), but also returns the winning distance.
    pub fn find_node_with_distance<F>(
        &self,
        query: &T,
        mut distance: F,
        range: f32,
    ) -> Option<(NodeId, f32)>
    where
        F: FnMut(&T, &T) -> f32,
    {
        let mut best: Option<(NodeId, f32)> = None;

        for (&id, node) in &self.nodes {
            let d = distance(&node.data, query);
            if d.is_nan() || d > range {
                continue;
            }
            let improves = match best {
                Some((_, best_d)) => d < best_d,
                None => true,
            };
            if improves {
                best = Some((id, d));
            }
        }

        best
    }

    /// Returns a copy of the payload stored at `node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is not live.
    pub fn get_node_data(&self, node: NodeId) -> GraphResult<T>
    where
        T: Clone,
    {
        self.node_data(node).cloned()
    }

    /// Borrows the payload stored at `node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is not live.
    pub fn node_data(&self, node: NodeId) -> GraphResult<&T> {
        self.node(node).map(|n| &n.data)
    }

    /// Replaces the payload stored at `node`, returning the previous one.
    ///
    /// The node keeps its id and its edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is not live.
    pub fn set_node_data(&mut self, node: NodeId, data: T) -> GraphResult<T> {
        let entry = self
            .nodes
            .get_mut(&node)
            .ok_or(GraphError::NodeNotFound(node))?;
        Ok(std::mem::replace(&mut entry.data, data))
    }

    /// Returns a copy of the edge record for `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if `edge` is not live.
    pub fn get_edge_data(&self, edge: EdgeId) -> GraphResult<Edge> {
        self.edges
            .get(&edge)
            .copied()
            .ok_or(GraphError::EdgeNotFound(edge))
    }

    /// Returns a copy of the ids of the edges leaving `node`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is not live.
    pub fn get_node_edges(&self, node: NodeId) -> GraphResult<Vec<EdgeId>> {
        self.outgoing_edges(node).map(<[EdgeId]>::to_vec)
    }

    /// Borrows the ids of the edges leaving `node`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is not live.
    pub fn outgoing_edges(&self, node: NodeId) -> GraphResult<&[EdgeId]> {
        self.node(node).map(|n| n.outgoing.as_slice())
    }

    /// Number of edges leaving `node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is not live.
    pub fn out_degree(&self, node: NodeId) -> GraphResult<usize> {
        self.node(node).map(|n| n.outgoing.len())
    }

    /// Number of edges arriving at `node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is not live.
    pub fn in_degree(&self, node: NodeId) -> GraphResult<usize> {
        self.node(node).map(|n| n.incoming.len())
    }

    /// Returns `true` if `node` is live.
    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Returns `true` if `edge` is live.
    #[inline]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains_key(&edge)
    }

    /// Number of live nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over live node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Iterates over live nodes and their payloads in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.nodes.iter().map(|(&id, node)| (id, &node.data))
    }

    /// Iterates over live edges in ascending id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// The id the next [`add_node`](Self::add_node) call will return.
    #[inline]
    pub fn next_node_id(&self) -> NodeId {
        NodeId::new(self.node_counter.peek())
    }

    /// The id the next successful edge insertion will use.
    #[inline]
    pub fn next_edge_id(&self) -> EdgeId {
        EdgeId::new(self.edge_counter.peek())
    }

    /// Removes every node and edge. Counters keep their values, so ids issued
    /// before the call are still never reissued.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    fn node(&self, node: NodeId) -> GraphResult<&Node<T>> {
        self.nodes.get(&node).ok_or(GraphError::NodeNotFound(node))
    }

    fn ensure_node(&self, node: NodeId) -> GraphResult<()> {
        if self.nodes.contains_key(&node) {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(%node, "edge endpoint is not a live node");
            Err(GraphError::NodeNotFound(node))
        }
    }

    /// Inserts an edge between two nodes already known to be live.
    fn link(&mut self, source: NodeId, destination: NodeId, cost: f32) -> EdgeId {
        let id = EdgeId::new(self.edge_counter.advance());
        self.edges
            .insert(id, Edge::new(id, source, destination, cost));
        if let Some(node) = self.nodes.get_mut(&source) {
            node.outgoing.push(id);
        }
        if let Some(node) = self.nodes.get_mut(&destination) {
            node.incoming.push(id);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(edge = %id, %source, %destination, cost, "linked");

        id
    }

    /// Takes `node` out of the node map and unlinks all of its edges.
    ///
    /// A self-loop appears in both of the node's lists; it is dropped on the
    /// outgoing pass and skipped on the incoming pass.
    fn detach(&mut self, node: NodeId) -> Option<T> {
        let removed = self.nodes.remove(&node)?;

        for edge_id in &removed.outgoing {
            if let Some(edge) = self.edges.remove(edge_id) {
                if let Some(destination) = self.nodes.get_mut(&edge.destination) {
                    destination.unlink_incoming(*edge_id);
                }
            }
        }

        for edge_id in &removed.incoming {
            if let Some(edge) = self.edges.remove(edge_id) {
                if let Some(source) = self.nodes.get_mut(&edge.source) {
                    source.unlink_outgoing(*edge_id);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            %node,
            outgoing = removed.outgoing.len(),
            incoming = removed.incoming.len(),
            "detached node"
        );

        Some(removed.data)
    }
}
