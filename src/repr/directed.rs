/*!
# Directed Graph Representation

[`DirectedGraph`] stores **both outgoing and incoming neighborhoods** of every node,
so that successors and predecessors are available in time linear in their number.
Every edge carries a cost that is reported through [`Weighted`].
*/

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A mutable directed graph over arbitrary nodes.
#[derive(Clone, Debug)]
pub struct DirectedGraph<N: Node> {
    store: NodeStore<N>,
    successors: FxHashMap<NodeId, EdgeMap<N>>,
    predecessors: FxHashMap<NodeId, EdgeMap<N>>,
}

impl_common_graph_ops!(DirectedGraph => store);

impl<N: Node> DirectedGraph<N> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            store: NodeStore::default(),
            successors: FxHashMap::default(),
            predecessors: FxHashMap::default(),
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
        self.successors.values().map(|s| s.len()).sum()
    }

    /// Returns all edges of the graph, each exactly once
    pub fn edges(&self) -> impl Iterator<Item = Edge<N>> + '_ {
        self.successors
            .values()
            .flat_map(|s| s.values().map(|we| we.edge.clone()))
    }

    /// Removes all nodes and edges
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn lookup(&self, u: NodeId, v: NodeId) -> Option<&WeightedEdge<N>> {
        self.successors.get(&u)?.get(&v)
    }
}

impl<N: Node> AdjacencyList for DirectedGraph<N> {
    fn neighbors_of(&self, u: &N) -> impl Iterator<Item = N> + '_ {
        self.successors
            .get(&u.id())
            .into_iter()
            .flat_map(|s| s.values().map(|we| we.edge.1.clone()))
    }

    fn degree_of(&self, u: &N) -> usize {
        self.successors.get(&u.id()).map_or(0, |s| s.len())
    }
}

impl<N: Node> AdjacencyTest for DirectedGraph<N> {
    fn has_edge(&self, u: &N, v: &N) -> bool {
        self.has_edge_from_to(u, v) || self.has_edge_from_to(v, u)
    }

    fn edge(&self, u: &N, v: &N) -> Option<Edge<N>> {
        self.lookup(u.id(), v.id()).map(|we| we.edge.clone())
    }
}

impl<N: Node> DirectedAdjacencyList for DirectedGraph<N> {
    fn in_neighbors_of(&self, u: &N) -> impl Iterator<Item = N> + '_ {
        self.predecessors
            .get(&u.id())
            .into_iter()
            .flat_map(|p| p.values().map(|we| we.edge.0.clone()))
    }

    fn in_degree_of(&self, u: &N) -> usize {
        self.predecessors.get(&u.id()).map_or(0, |p| p.len())
    }

    fn has_edge_from_to(&self, u: &N, v: &N) -> bool {
        self.lookup(u.id(), v.id()).is_some()
    }
}

impl<N: Node> Weighted for DirectedGraph<N> {
    fn weight(&self, edge: &Edge<N>) -> f64 {
        let (u, v) = edge.ids();
        self.lookup(u, v).map_or(f64::INFINITY, |we| we.cost)
    }
}

impl<N: Node> GraphMutation for DirectedGraph<N> {
    fn new_node_id(&self) -> NodeId {
        self.store.new_id()
    }

    fn try_add_node(&mut self, u: N) -> bool {
        let id = u.id();
        if !self.store.insert(u) {
            return false;
        }

        self.successors.insert(id, EdgeMap::default());
        self.predecessors.insert(id, EdgeMap::default());
        true
    }

    fn remove_node(&mut self, u: &N) -> bool {
        let id = u.id();
        if self.store.remove(id).is_none() {
            return false;
        }

        for succ in self.successors.remove(&id).into_iter().flat_map(|s| s.into_keys()) {
            if let Some(p) = self.predecessors.get_mut(&succ) {
                p.remove(&id);
            }
        }

        for pred in self
            .predecessors
            .remove(&id)
            .into_iter()
            .flat_map(|p| p.into_keys())
        {
            if let Some(s) = self.successors.get_mut(&pred) {
                s.remove(&id);
            }
        }

        true
    }

    fn set_edge(&mut self, edge: Edge<N>, cost: f64) {
        let (u, v) = edge.ids();
        self.try_add_node(edge.0.clone());
        self.try_add_node(edge.1.clone());

        let weighted = WeightedEdge::new(edge, cost);
        self.predecessors
            .entry(v)
            .or_default()
            .insert(u, weighted.clone());
        self.successors.entry(u).or_default().insert(v, weighted);
    }

    fn remove_edge(&mut self, edge: &Edge<N>) -> bool {
        let (u, v) = edge.ids();
        let removed = self
            .successors
            .get_mut(&u)
            .is_some_and(|s| s.remove(&v).is_some());

        if removed {
            if let Some(p) = self.predecessors.get_mut(&v) {
                p.remove(&u);
            }
        }

        removed
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn successors_and_predecessors() {
        let graph = DirectedGraph::from_edges([(1i64, 2), (1, 3), (3, 2), (4, 4)]);

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.neighbors_of(&1).sorted().collect_vec(), vec![2, 3]);
        assert_eq!(graph.in_neighbors_of(&2).sorted().collect_vec(), vec![1, 3]);
        assert_eq!(graph.out_degree_of(&2), 0);
        assert_eq!(graph.in_degree_of(&2), 2);

        assert!(graph.has_edge_from_to(&1, &2));
        assert!(!graph.has_edge_from_to(&2, &1));
        assert!(graph.has_edge(&2, &1));
        assert!(graph.has_self_loop(&4));

        assert_eq!(graph.edge(&3, &2), Some(Edge(3, 2)));
        assert_eq!(graph.edge(&2, &3), None);
        assert_eq!(graph.neighbors_of(&99).count(), 0);
    }

    #[test]
    fn weights() {
        let mut graph = DirectedGraph::new();
        graph.set_edge(Edge(1i64, 2), 2.5);
        assert_eq!(graph.weight(&Edge(1, 2)), 2.5);
        assert!(graph.weight(&Edge(2, 1)).is_infinite());

        graph.set_edge(Edge(1, 2), 4.0);
        assert_eq!(graph.weight(&Edge(1, 2)), 4.0);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn remove_node_detaches_edges() {
        let mut graph = DirectedGraph::from_edges([(1i64, 2), (2, 3), (3, 1), (2, 2)]);

        assert!(graph.remove_node(&2));
        assert!(!graph.remove_node(&2));
        assert!(!graph.has_node(&2));
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.in_neighbors_of(&3).count(), 0);
        assert_eq!(graph.neighbors_of(&1).count(), 0);
        assert_eq!(graph.edges().collect_vec(), vec![Edge(3, 1)]);
    }

    #[test]
    fn node_ids() {
        let mut graph = DirectedGraph::<NodeId>::new();
        assert_eq!(graph.new_node_id(), 0);
        graph.add_node(7);
        assert!(!graph.try_add_node(7));
        assert_eq!(graph.new_node_id(), 8);
    }

    #[test]
    #[should_panic]
    fn add_node_twice() {
        let mut graph = DirectedGraph::<NodeId>::new();
        graph.add_node(1);
        graph.add_node(1);
    }

    #[test]
    fn copy_from_undirected() {
        let mut src = UndirectedGraph::new();
        src.set_edge(Edge(1i64, 2), 3.0);
        src.add_node(5);

        let mut dst = DirectedGraph::new();
        dst.copy_weighted_from(&src);
        assert_eq!(dst.number_of_nodes(), 3);
        assert!(dst.has_edge_from_to(&1, &2));
        assert!(dst.has_edge_from_to(&2, &1));
        assert_eq!(dst.weight(&Edge(2, 1)), 3.0);

        let mut dst = DirectedGraph::new();
        dst.copy_from(&src);
        assert_eq!(dst.weight(&Edge(1, 2)), 1.0);
    }
}

test_graph_ops!(
    test_directed_graph,
    DirectedGraph<NodeId>,
    false,
    (AdjacencyList, DirectedAdjacencyList, GraphMutation)
);
