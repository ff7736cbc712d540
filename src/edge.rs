use std::fmt::{Debug, Display};

use crate::node::*;

/// An edge is defined by two nodes/endpoints.
/// It is up to the graph whether an edge is directed or not; in undirected graphs
/// `Edge(u, v)` and `Edge(v, u)` describe the same adjacency.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Edge<N>(pub N, pub N);

impl<N: Node> Display for Edge<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0.id(), self.1.id())
    }
}

impl<N: Node> Debug for Edge<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<N: Node> Edge<N> {
    /// Node the edge starts at
    pub fn source(&self) -> &N {
        &self.0
    }

    /// Node the edge points to
    pub fn target(&self) -> &N {
        &self.1
    }

    /// Returns the ids of both endpoints
    pub fn ids(&self) -> (NodeId, NodeId) {
        (self.0.id(), self.1.id())
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0.id() == self.1.id()
    }

    /// Reverses the edge by switching the endpoints
    pub fn reversed(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from(value: (N, N)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<N: Clone> From<&(N, N)> for Edge<N> {
    fn from(value: &(N, N)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

/// An edge together with its cost as stored by the representations in [`crate::repr`]
#[derive(Clone, PartialEq, Debug)]
pub struct WeightedEdge<N: Node> {
    pub edge: Edge<N>,
    pub cost: f64,
}

impl<N: Node> WeightedEdge<N> {
    pub fn new(edge: Edge<N>, cost: f64) -> Self {
        Self { edge, cost }
    }
}

/// Weight used for graphs without own edge weights:
/// `1` for an existing edge and `+inf` for a missing one.
pub fn uniform_cost<N: Node>(edge: Option<&Edge<N>>) -> f64 {
    match edge {
        Some(_) => 1.0,
        None => f64::INFINITY,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn endpoints() {
        let e: Edge<NodeId> = (3, -1).into();
        assert_eq!(*e.source(), 3);
        assert_eq!(*e.target(), -1);
        assert_eq!(e.reversed(), Edge(-1, 3));
        assert!(!e.is_loop());
        assert!(Edge(4i64, 4).is_loop());
        assert_eq!(format!("{e}"), "(3,-1)");
    }

    #[test]
    fn uniform() {
        assert_eq!(uniform_cost(Some(&Edge(1i64, 2))), 1.0);
        assert!(uniform_cost::<NodeId>(None).is_infinite());
    }
}
