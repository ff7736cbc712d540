/*!
# Graph Representations

Two general-purpose, mutable representations keyed by [`NodeId`]:

- [`DirectedGraph`]: stores successors and predecessors of every node,
- [`UndirectedGraph`]: stores a symmetric neighborhood per node.

Both keep a cost per edge (and thus implement [`Weighted`]) and allow self-loops.
In most applications a graph specific to the problem domain that implements the traits in
[`crate::ops`] directly is preferable; these types serve as defaults and test subjects.
*/

use fxhash::{FxHashMap, FxHashSet};

use crate::{ops::*, *};

mod directed;
mod undirected;

pub use directed::*;
pub use undirected::*;

/// Neighborhood of a node: maps the id of a neighbor to the connecting edge
pub(crate) type EdgeMap<N> = FxHashMap<NodeId, WeightedEdge<N>>;

/// Bookkeeping of the nodes of a graph and allocation of fresh ids
#[derive(Clone, Debug)]
pub(crate) struct NodeStore<N: Node> {
    nodes: FxHashMap<NodeId, N>,
    max_id: Option<NodeId>,
    free_ids: FxHashSet<NodeId>,
}

impl<N: Node> Default for NodeStore<N> {
    fn default() -> Self {
        Self {
            nodes: FxHashMap::default(),
            max_id: None,
            free_ids: FxHashSet::default(),
        }
    }
}

impl<N: Node> NodeStore<N> {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(&id)
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.values()
    }

    /// Inserts `u` and returns *true* if its id was not taken before
    pub(crate) fn insert(&mut self, u: N) -> bool {
        let id = u.id();
        if self.nodes.contains_key(&id) {
            return false;
        }

        self.nodes.insert(id, u);
        self.free_ids.remove(&id);
        self.max_id = Some(self.max_id.map_or(id, |m| m.max(id)));
        true
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<N> {
        let u = self.nodes.remove(&id)?;
        self.free_ids.insert(id);
        Some(u)
    }

    /// Returns the id following the largest id ever inserted. If that overflows, a
    /// previously freed id is handed out, and as a last resort the id space is scanned.
    pub(crate) fn new_id(&self) -> NodeId {
        let Some(max_id) = self.max_id else {
            return 0;
        };

        if let Some(next) = max_id.checked_add(1) {
            return next;
        }

        if let Some(&id) = self.free_ids.iter().next() {
            return id;
        }

        // a HashMap cannot hold 2^64 entries, so some id is always free
        (NodeId::MIN..=NodeId::MAX)
            .find(|id| !self.nodes.contains_key(id))
            .unwrap_or_else(|| unreachable!("cannot allocate node: graph too large"))
    }
}

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident => $store:ident) => {
            impl<N: Node> GraphNodeOrder for $struct<N> {
                type Node = N;

                fn number_of_nodes(&self) -> usize {
                    self.$store.len()
                }

                fn vertices(&self) -> impl Iterator<Item = N> + '_ {
                    self.$store.values().cloned()
                }

                fn node(&self, id: NodeId) -> Option<N> {
                    self.$store.get(id).cloned()
                }

                fn has_node(&self, u: &N) -> bool {
                    self.$store.contains(u.id())
                }
            }

            impl<N: Node> Default for $struct<N> {
                fn default() -> Self {
                    Self::new()
                }
            }
        };
    }

    pub(super) use impl_common_graph_ops;
}
