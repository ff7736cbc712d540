/*!
# Node Representation

A node is any value that exposes a signed integer identifier via [`Node::id`].
Identifiers must be unique within a single graph and stable for its lifetime; this is the
only property algorithms rely on. Everything else about a node (labels, payload, ...) is
opaque and handed back to the caller unchanged.

Plain identifiers (`NodeId`) are nodes themselves, which is what most tests and small
applications use. Reference-counted wrappers forward to their contents so that callers
who need pointer identity in the results can use `Rc<T>` or `Arc<T>` as node type.
*/

use std::{fmt::Debug, rc::Rc, sync::Arc};

/// Identifier of a node. Unique within a graph, may be negative.
pub type NodeId = i64;

/// Anything that can be stored as a node in a graph.
pub trait Node: Clone + Debug {
    /// Returns the graph-unique identifier of this node
    fn id(&self) -> NodeId;
}

impl Node for NodeId {
    #[inline]
    fn id(&self) -> NodeId {
        *self
    }
}

impl<T: Node> Node for &T {
    #[inline]
    fn id(&self) -> NodeId {
        (**self).id()
    }
}

impl<T: Node> Node for Rc<T> {
    #[inline]
    fn id(&self) -> NodeId {
        self.as_ref().id()
    }
}

impl<T: Node> Node for Arc<T> {
    #[inline]
    fn id(&self) -> NodeId {
        self.as_ref().id()
    }
}

/// Sorts a slice of nodes by increasing id
pub fn sort_by_id<N: Node>(nodes: &mut [N]) {
    nodes.sort_unstable_by_key(|u| u.id());
}

/// Collects the ids of a sequence of nodes
pub fn ids_of<'a, N, I>(nodes: I) -> Vec<NodeId>
where
    N: Node + 'a,
    I: IntoIterator<Item = &'a N>,
{
    nodes.into_iter().map(Node::id).collect()
}
