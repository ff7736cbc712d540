/*!
# Graph Algorithms

This module provides the structural algorithms of this crate. They are written against the
capability traits in [`crate::ops`] and never mutate the graph they are run on.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use topograph::algo::*;
```
and gain access to connectivity, topological sorting, degeneracy orderings, clique enumeration
and dominator sets.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod cliques;
mod connectivity;
mod degeneracy;
mod dominators;
mod topo;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{prelude::*, utils::*};

pub use cliques::*;
pub use connectivity::*;
pub use degeneracy::*;
pub use dominators::*;
pub use topo::*;
