/*!
# Graph Capabilities

Algorithms never see a concrete graph type. Instead they are written against a small set
of traits that a caller's graph representation implements:

- [`GraphNodeOrder`]: existence test and full node listing,
- [`AdjacencyList`]: successors of a node,
- [`AdjacencyTest`]: edge queries,
- [`DirectedAdjacencyList`] / [`UndirectedAdjacency`]: the two flavours of graphs,
- [`Weighted`]: edge costs,
- [`GraphMutation`]: insertion/deletion of nodes and edges.

Every algorithm requires exactly the capabilities it uses, so a caller with a read-only
adjacency view only needs to implement the first few traits.
*/

use crate::{utils::NodeSet, *};

/// Provides getters pertaining to the nodes of a graph
pub trait GraphNodeOrder {
    /// Type of the nodes stored in the graph
    type Node: Node;

    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> usize;

    /// Returns an iterator over all nodes. No particular order is guaranteed.
    fn vertices(&self) -> impl Iterator<Item = Self::Node> + '_;

    /// Returns the node stored under `id` if it exists
    fn node(&self, id: NodeId) -> Option<Self::Node>;

    /// Returns *true* if the node exists within the graph
    fn has_node(&self, u: &Self::Node) -> bool {
        self.node(u.id()).is_some()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }

    /// Returns a set of all nodes of the graph
    fn vertex_set(&self) -> NodeSet<Self::Node> {
        self.vertices().collect()
    }
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder {
    /// Returns an iterator over the nodes that can be reached directly from `u`.
    /// For undirected graphs these are all neighbors, for directed graphs all successors.
    /// Returns an empty iterator if `u` is not part of the graph.
    fn neighbors_of(&self, u: &Self::Node) -> impl Iterator<Item = Self::Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    fn degree_of(&self, u: &Self::Node) -> usize {
        self.neighbors_of(u).count()
    }

    /// Returns the (outgoing) neighbors of `u` as a [`NodeSet`]
    fn neighbors_of_as_set(&self, u: &Self::Node) -> NodeSet<Self::Node> {
        self.neighbors_of(u).collect()
    }

    /// Returns the maximum (outgoing) degree in the graph
    fn max_degree(&self) -> usize {
        self.vertices().map(|u| self.degree_of(&u)).max().unwrap_or(0)
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if an edge between `u` and `v` exists, without considering direction
    fn has_edge(&self, u: &Self::Node, v: &Self::Node) -> bool;

    /// Returns the edge from `u` to `v` if it exists.
    /// `v` must be directly reachable from `u` as defined by [`AdjacencyList::neighbors_of`].
    fn edge(&self, u: &Self::Node, v: &Self::Node) -> Option<Edge<Self::Node>>;

    /// Returns *true* if a self-loop `(u,u)` exists
    fn has_self_loop(&self, u: &Self::Node) -> bool {
        self.has_edge(u, u)
    }
}

macro_rules! propagate {
    ($out_fn:ident => $fn:ident($($arg:ident : $type:ty),*) -> $ret:ty) => {
        #[inline]
        fn $out_fn(&self, $($arg: $type),*) -> $ret {
            self.$fn($($arg),*)
        }
    };
}

/// Capabilities of a directed graph
pub trait DirectedAdjacencyList: AdjacencyList + AdjacencyTest {
    propagate!(out_neighbors_of => neighbors_of(u: &Self::Node) -> impl Iterator<Item = Self::Node> + '_);
    propagate!(out_degree_of => degree_of(u: &Self::Node) -> usize);

    /// Returns an iterator over all nodes `v` with an edge `(v, u)`
    fn in_neighbors_of(&self, u: &Self::Node) -> impl Iterator<Item = Self::Node> + '_;

    /// Returns the number of incoming neighbors of `u`
    fn in_degree_of(&self, u: &Self::Node) -> usize {
        self.in_neighbors_of(u).count()
    }

    /// Returns *true* if the directed edge `(u, v)` exists
    fn has_edge_from_to(&self, u: &Self::Node, v: &Self::Node) -> bool;
}

/// Capabilities of an undirected graph
pub trait UndirectedAdjacency: AdjacencyList + AdjacencyTest {
    /// Returns the edge between `x` and `y` if it exists
    fn edge_between(&self, x: &Self::Node, y: &Self::Node) -> Option<Edge<Self::Node>> {
        self.edge(x, y)
    }
}

/// Graphs that can report edge weights
pub trait Weighted: GraphNodeOrder {
    /// Returns the weight of the given edge, `+inf` if the edge does not exist
    fn weight(&self, edge: &Edge<Self::Node>) -> f64;
}

/// Provides functions to insert/delete nodes and edges
pub trait GraphMutation: GraphNodeOrder {
    /// Returns an id not in use by any node of the graph
    fn new_node_id(&self) -> NodeId;

    /// Adds `u` to the graph.
    /// ** Panics if a node with the same id already exists **
    fn add_node(&mut self, u: Self::Node) {
        let id = u.id();
        assert!(self.try_add_node(u), "node id collision: {id}");
    }

    /// Adds `u` to the graph. Returns *true* exactly if no node with the same id was present.
    fn try_add_node(&mut self, u: Self::Node) -> bool;

    /// Removes the node as well as all edges attached to it.
    /// Returns *true* if the node was present.
    fn remove_node(&mut self, u: &Self::Node) -> bool;

    /// Adds or replaces the edge with the given cost. Missing endpoints are added.
    fn set_edge(&mut self, edge: Edge<Self::Node>, cost: f64);

    /// Removes the edge, leaving its endpoints. Returns *true* if the edge was present.
    fn remove_edge(&mut self, edge: &Edge<Self::Node>) -> bool;

    /// Adds all edges in the collection with uniform cost
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge<Self::Node>>>) {
        for edge in edges {
            self.set_edge(edge.into(), 1.0);
        }
    }
}

/// Copying the nodes and edges of one graph into another
pub trait GraphCopy: GraphMutation {
    /// Copies all nodes and edges of `src` without clearing `self` first.
    /// Edges get the cost [`uniform_cost`] assigns to them.
    /// If `self` is directed and `src` is undirected, both directions are present afterwards.
    ///
    /// ** Panics if a node id of `src` already exists in `self` **
    fn copy_from<G>(&mut self, src: &G)
    where
        G: AdjacencyList<Node = Self::Node> + AdjacencyTest,
    {
        copy_edges(self, src, |edge| uniform_cost(Some(edge)));
    }

    /// Same as [`GraphCopy::copy_from`] but with the edge costs reported by `src`
    fn copy_weighted_from<G>(&mut self, src: &G)
    where
        G: AdjacencyList<Node = Self::Node> + AdjacencyTest + Weighted,
    {
        copy_edges(self, src, |edge| src.weight(edge));
    }
}

impl<G: GraphMutation> GraphCopy for G {}

fn copy_edges<D, S, W>(dst: &mut D, src: &S, weight: W)
where
    D: GraphMutation + ?Sized,
    S: AdjacencyList<Node = D::Node> + AdjacencyTest,
    W: Fn(&Edge<D::Node>) -> f64,
{
    for u in src.vertices() {
        dst.add_node(u);
    }

    for u in src.vertices() {
        for v in src.neighbors_of(&u) {
            if let Some(edge) = src.edge(&u, &v) {
                let cost = weight(&edge);
                dst.set_edge(edge, cost);
            }
        }
    }
}
