/*!
# Utilities

Provides the set abstractions used throughout the algorithms:
- [`Set`]: a minimal trait for set-like collections,
- [`NodeSet`]: an id-keyed set of nodes with aliasing-aware set algebra,
- [`IntSet`]: a set of bare node ids.

In addition, [`DenseIndex`] assigns consecutive indices to the nodes of a graph so that
algorithms can keep their per-node state in plain vectors.
*/

pub mod set;

pub use set::{IntSet, NodeSet, Set};

use fxhash::FxHashMap;

use crate::prelude::*;

/// Bijection between the nodes of a graph and `0..n`.
///
/// Nodes are stored in the order the graph lists them.
pub struct DenseIndex<N: Node> {
    nodes: Vec<N>,
    index_of: FxHashMap<NodeId, usize>,
}

impl<N: Node> DenseIndex<N> {
    /// Indexes all nodes of `graph`
    pub fn new<G>(graph: &G) -> Self
    where
        G: GraphNodeOrder<Node = N>,
    {
        Self::from_nodes(graph.vertices())
    }

    /// Indexes the given nodes in iteration order. Repeated ids keep their first index.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let iter = nodes.into_iter();
        let mut index = Self {
            nodes: Vec::with_capacity(iter.size_hint().0),
            index_of: FxHashMap::with_capacity_and_hasher(iter.size_hint().0, Default::default()),
        };

        for u in iter {
            let next = index.nodes.len();
            index.index_of.entry(u.id()).or_insert_with(|| {
                index.nodes.push(u);
                next
            });
        }

        index
    }

    /// Number of indexed nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns *true* if no node is indexed
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the index of `u`, if `u` is indexed
    pub fn index_of(&self, u: &N) -> Option<usize> {
        self.index_of.get(&u.id()).copied()
    }

    /// Returns the node with index `i`.
    /// ** Panics if `i >= len` **
    pub fn node(&self, i: usize) -> &N {
        &self.nodes[i]
    }

    /// All indexed nodes in index order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Maps an iterator of nodes to their indices, skipping nodes that are not indexed
    pub fn indices_of<'a, I>(&'a self, nodes: I) -> impl Iterator<Item = usize> + 'a
    where
        I: IntoIterator<Item = N>,
        I::IntoIter: 'a,
    {
        nodes.into_iter().filter_map(|u| self.index_of(&u))
    }

    /// Returns the neighbors of every indexed node as sorted lists of indices.
    ///
    /// Each reported edge is added in both directions, so undirected graphs that list an edge
    /// at only one of its endpoints are handled as well. Self-loops are dropped.
    pub fn symmetric_neighborhoods<G>(&self, graph: &G) -> Vec<Vec<usize>>
    where
        G: AdjacencyList<Node = N>,
    {
        let mut neighbors = vec![Vec::new(); self.len()];
        for (u, node) in self.nodes.iter().enumerate() {
            for v in self.indices_of(graph.neighbors_of(node)) {
                if u != v {
                    neighbors[u].push(v);
                    neighbors[v].push(u);
                }
            }
        }

        for nbs in &mut neighbors {
            nbs.sort_unstable();
            nbs.dedup();
        }

        neighbors
    }
}
