use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// An undirected graph representation.
///
/// Each edge `{u, v}` is kept in the neighborhoods of both endpoints; the copy stored at
/// `u` is oriented as `(u, v)`. A self-loop occupies a single entry.
#[derive(Clone, Debug)]
pub struct UndirectedGraph<N: Node> {
    store: NodeStore<N>,
    nbs: FxHashMap<NodeId, EdgeMap<N>>,
    num_edges: usize,
}

impl_common_graph_ops!(UndirectedGraph => store);

impl<N: Node> UndirectedGraph<N> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            store: NodeStore::default(),
            nbs: FxHashMap::default(),
            num_edges: 0,
        }
    }

    /// Creates a graph from a list of edges, each with cost `1`
    pub fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge<N>>>) -> Self {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }

    /// Returns the number of edges of the graph
    pub fn number_of_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns all edges of the graph, each exactly once and oriented from the smaller id
    pub fn edges(&self) -> impl Iterator<Item = Edge<N>> + '_ {
        self.nbs.iter().flat_map(|(&u, nbs)| {
            nbs.iter()
                .filter(move |&(&v, _)| u <= v)
                .map(|(_, we)| we.edge.clone())
        })
    }

    /// Removes all nodes and edges
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn lookup(&self, u: NodeId, v: NodeId) -> Option<&WeightedEdge<N>> {
        self.nbs.get(&u)?.get(&v)
    }
}

impl<N: Node> AdjacencyList for UndirectedGraph<N> {
    fn neighbors_of(&self, u: &N) -> impl Iterator<Item = N> + '_ {
        self.nbs
            .get(&u.id())
            .into_iter()
            .flat_map(|nbs| nbs.values().map(|we| we.edge.1.clone()))
    }

    fn degree_of(&self, u: &N) -> usize {
        self.nbs.get(&u.id()).map_or(0, |nbs| nbs.len())
    }
}

impl<N: Node> AdjacencyTest for UndirectedGraph<N> {
    fn has_edge(&self, u: &N, v: &N) -> bool {
        self.lookup(u.id(), v.id()).is_some()
    }

    fn edge(&self, u: &N, v: &N) -> Option<Edge<N>> {
        self.lookup(u.id(), v.id()).map(|we| we.edge.clone())
    }
}

impl<N: Node> UndirectedAdjacency for UndirectedGraph<N> {}

impl<N: Node> Weighted for UndirectedGraph<N> {
    fn weight(&self, edge: &Edge<N>) -> f64 {
        let (u, v) = edge.ids();
        self.lookup(u, v).map_or(f64::INFINITY, |we| we.cost)
    }
}

impl<N: Node> GraphMutation for UndirectedGraph<N> {
    fn new_node_id(&self) -> NodeId {
        self.store.new_id()
    }

    fn try_add_node(&mut self, u: N) -> bool {
        let id = u.id();
        if !self.store.insert(u) {
            return false;
        }

        self.nbs.insert(id, EdgeMap::default());
        true
    }

    fn remove_node(&mut self, u: &N) -> bool {
        let id = u.id();
        if self.store.remove(id).is_none() {
            return false;
        }

        let nbs = self.nbs.remove(&id).unwrap_or_default();
        self.num_edges -= nbs.len();
        for v in nbs.into_keys().filter(|&v| v != id) {
            if let Some(other) = self.nbs.get_mut(&v) {
                other.remove(&id);
            }
        }

        true
    }

    fn set_edge(&mut self, edge: Edge<N>, cost: f64) {
        let (u, v) = edge.ids();
        self.try_add_node(edge.0.clone());
        self.try_add_node(edge.1.clone());

        let reversed = WeightedEdge::new(edge.reversed(), cost);
        let previous = self
            .nbs
            .entry(u)
            .or_default()
            .insert(v, WeightedEdge::new(edge, cost));

        if u != v {
            self.nbs.entry(v).or_default().insert(u, reversed);
        }

        if previous.is_none() {
            self.num_edges += 1;
        }
    }

    fn remove_edge(&mut self, edge: &Edge<N>) -> bool {
        let (u, v) = edge.ids();
        let removed = self
            .nbs
            .get_mut(&u)
            .is_some_and(|nbs| nbs.remove(&v).is_some());

        if !removed {
            return false;
        }

        if u != v {
            if let Some(nbs) = self.nbs.get_mut(&v) {
                nbs.remove(&u);
            }
        }

        self.num_edges -= 1;
        true
    }
}


test_graph_ops!(
    test_undirected_graph,
    UndirectedGraph<NodeId>,
    true,
    (AdjacencyList, GraphMutation)
);
