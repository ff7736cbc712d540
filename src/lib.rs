/*!
`topograph` computes global structural properties of abstract graphs:
- **strongly connected components** (Tarjan, iterative),
- **topological orderings**, reporting the blocking cycles if none exists,
- **degeneracy orderings** and the k-core decomposition,
- **maximal cliques** (Bron–Kerbosch with pivoting).

# Representation

Algorithms only rely on node identity and adjacency queries. A **node** is any value implementing
[`Node`], which exposes a unique integer id of type [`NodeId`] (`i64`). Ids need not be dense or
non-negative. For **edges**, we use a simple tuple-struct `Edge(N, N)`.

### Directed vs Undirected

- In a **directed** graph, `Edge(u, v)` and `Edge(v, u)` are distinct.
- In an **undirected** graph, the presence of `Edge(u, v)` implies adjacency in both directions.

The capabilities a graph offers are spelled out as traits in [`ops`]. Callers wire their own
storage into the algorithms by implementing these traits; [`repr`] provides two general-purpose
representations for everything else.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using either
the *Builder* / *Setter* pattern before running them on a provided graph.
The most commonly used functionality is also implemented via traits on the graph itself, making it
usable without configuring the algorithm beforehand.

Algorithms never mutate the graph. They are single-threaded and keep no global state, so
concurrent calls on read-only graphs need no synchronization. Progress is reported through
[`tracing`] events; no subscriber is installed by this crate.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and both representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself, such as
  `graph.strongly_connected_components()`, `graph.topological_sort()` or `graph.maximal_cliques()`,
- [`gens`] includes random graph generators and deterministic substructures such as paths/cycles/cliques,
- [`utils`] includes the [`NodeSet`](utils::NodeSet) abstraction and helpers for dense indexing.

In most use-cases, `use topograph::{prelude::*, algo::*};` suffices for your needs.

```rust
use topograph::{prelude::*, algo::*};

let graph = DirectedGraph::<NodeId>::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);

let err = graph.topological_sort().unwrap_err();
assert_eq!(err.cyclic_components(), &[vec![1, 2, 3]]);
assert_eq!(err.partial_order(), &[None, Some(4)]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `topograph::prelude` includes definitions for nodes and edges, all basic graph operation traits
/// as well as both implemented representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::*,
        node::*,
        ops::*,
        repr::*,
        utils::{NodeSet, Set},
    };
}
