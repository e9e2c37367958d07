//! Internal node record.

use super::ids::{EdgeId, NodeId};

/// A payload plus the ids of its incident edges.
///
/// `incoming` does not own anything; it exists so that removing this node can
/// find and unlink the edges that point at it.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) id: NodeId,
    pub(crate) data: T,
    pub(crate) outgoing: Vec<EdgeId>, // this node is the source
    pub(crate) incoming: Vec<EdgeId>, // this node is the destination
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId, data: T) -> Self {
        Self {
            id,
            data,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Drops `edge` from the outgoing list, keeping the order of the rest.
    pub(crate) fn unlink_outgoing(&mut self, edge: EdgeId) {
        if let Some(pos) = self.outgoing.iter().position(|&e| e == edge) {
            self.outgoing.remove(pos);
        }
    }

    /// Drops `edge` from the incoming list, keeping the order of the rest.
    pub(crate) fn unlink_incoming(&mut self, edge: EdgeId) {
        if let Some(pos) = self.incoming.iter().position(|&e| e == edge) {
            self.incoming.remove(pos);
        }
    }
}
