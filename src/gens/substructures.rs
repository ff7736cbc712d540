/*!
# Substructure Generators

Utility methods to add common motifs to an already existing graph:

- **Paths**
- **Cycles**
- **Cliques**

Missing nodes are added on the fly, each edge receives cost `1`.

# Example

```rust
use topograph::{prelude::*, gens::*};

let mut g = DirectedGraph::<NodeId>::new();
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert!(g.has_edge_from_to(&1, &2));
assert!(g.has_edge_from_to(&4, &2));
assert_eq!(g.number_of_edges(), 5);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support mutation.
pub trait GeneratorSubstructures: GraphMutation {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Self::Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Self::Node>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    /// In a directed graph, both directions are added.
    ///
    /// If `with_loops` is `true`, each node also gets a self-loop.
    fn connect_clique(&mut self, nodes: &NodeSet<Self::Node>, with_loops: bool);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphMutation,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Self::Node>,
    {
        let mut iter = nodes_on_path.into_iter().peekable();

        // a single node still ends up in the graph
        if let Some(u) = iter.peek() {
            self.try_add_node(u.clone());
        }

        for (u, v) in iter.tuple_windows() {
            self.set_edge(Edge(u, v), 1.0);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Self::Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first.clone();
            for cur in iter {
                self.set_edge(Edge(prev, cur.clone()), 1.0);
                prev = cur;
            }

            self.set_edge(Edge(prev, first), 1.0);
        }
    }

    fn connect_clique(&mut self, nodes: &NodeSet<Self::Node>, with_loops: bool) {
        for u in nodes.nodes() {
            self.try_add_node(u.clone());
            for v in nodes.nodes() {
                let e = Edge(u.clone(), v.clone());
                if !with_loops && e.is_loop() {
                    continue;
                }

                self.set_edge(e, 1.0);
            }
        }
    }
}
