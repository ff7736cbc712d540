/*!
# Graph Generators

This module provides random graph generators and deterministic substructures, mainly to build
test instances for the algorithms in [`crate::algo`].

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] trait wraps this into constructors of whole graphs over the nodes `0..n`:
```rust
use topograph::{prelude::*, gens::*};
use rand::SeedableRng;

let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
let graph = DirectedGraph::gnp_no_loops(rng, 10, 0.3);
assert_eq!(graph.number_of_nodes(), 10);
```
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NodeId) -> Self;
}

/// General trait for a configurable random edge generator over the nodes `0..n`.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge<NodeId>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge<NodeId>>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
/// All nodes `0..n` are part of the graph, even if they receive no edge.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: NodeId, p: f64) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops.
    fn gnp_no_loops<R>(rng: &mut R, n: NodeId, p: f64) -> Self
    where
        R: Rng;
}

fn graph_from_stream<G, I>(n: NodeId, edges: I) -> G
where
    G: GraphMutation<Node = NodeId> + Default,
    I: Iterator<Item = Edge<NodeId>>,
{
    let mut graph = G::default();
    for u in 0..n {
        graph.add_node(u);
    }
    graph.add_edges(edges);
    graph
}

macro_rules! impl_random_graph {
    ($graph:ident, $undirected:literal) => {
        impl RandomGraph for $graph<NodeId> {
            fn gnp<R>(rng: &mut R, n: NodeId, p: f64) -> Self
            where
                R: Rng,
            {
                graph_from_stream(
                    n,
                    Gnp::new()
                        .nodes(n)
                        .prob(p)
                        .stream(rng)
                        .filter(|e| !$undirected || e.0 <= e.1),
                )
            }

            fn gnp_no_loops<R>(rng: &mut R, n: NodeId, p: f64) -> Self
            where
                R: Rng,
            {
                graph_from_stream(
                    n,
                    Gnp::new()
                        .nodes(n)
                        .prob(p)
                        .stream(rng)
                        .filter(|e| !e.is_loop() && (!$undirected || e.0 < e.1)),
                )
            }
        }
    };
}

impl_random_graph!(DirectedGraph, false);
impl_random_graph!(UndirectedGraph, true);
