/*!
# Topological Sorting

A topological sort is derived from the strongly connected components of a graph: Tarjan's
algorithm emits them in reverse topological order of the condensation, so reversing that
sequence yields a valid order whenever every component is a single node.

If the graph contains cycles, [`CyclicOrderingError`] reports every cyclic component and still
hands out the best-effort order in which each cyclic component is replaced by a placeholder.
*/

use super::*;

pub trait TopologicalSort: DirectedAdjacencyList + Sized {
    /// Returns the nodes of the graph such that `u` precedes `v` for every edge `(u, v)`.
    /// Self-loops are ignored.
    ///
    /// # Errors
    /// Returns a [`CyclicOrderingError`] if the graph contains a cycle of length at least 2.
    fn topological_sort(&self) -> Result<Vec<Self::Node>, CyclicOrderingError<Self::Node>> {
        let mut sccs = self.strongly_connected_components().collect_vec();
        sccs.reverse();

        let mut components = Vec::new();
        let mut partial_order = Vec::with_capacity(sccs.len());

        for mut scc in sccs {
            if scc.len() == 1 {
                partial_order.push(scc.pop());
            } else {
                sort_by_id(&mut scc);
                components.push(scc);
                partial_order.push(None);
            }
        }

        if components.is_empty() {
            debug!(nodes = partial_order.len(), "topological sort succeeded");
            return Ok(partial_order.into_iter().flatten().collect());
        }

        let error = CyclicOrderingError {
            components,
            partial_order,
        };
        debug!(
            cyclic_components = error.components.len(),
            cyclic_nodes = error.number_of_cyclic_nodes(),
            "graph admits no topological ordering"
        );

        Err(error)
    }
}

impl<G: DirectedAdjacencyList + Sized> TopologicalSort for G {}

pub trait PathValidation: AdjacencyTest + Sized {
    /// Returns *true* if consecutive nodes of `path` are adjacent, ignoring edge directions.
    /// This also holds for directed graphs, where an edge `(v, u)` suffices to step from `u`
    /// to `v`; use [`PathValidation::is_directed_path_in`] to respect directions.
    /// The empty path is always a path; a single node is a path iff it is part of the graph.
    fn is_path_in(&self, path: &[Self::Node]) -> bool {
        validate_path(self, path, |u, v| self.has_edge(u, v))
    }

    /// Same as [`PathValidation::is_path_in`] but each step has to follow an edge's direction
    fn is_directed_path_in(&self, path: &[Self::Node]) -> bool
    where
        Self: DirectedAdjacencyList,
    {
        validate_path(self, path, |u, v| self.has_edge_from_to(u, v))
    }
}

impl<G: AdjacencyTest + Sized> PathValidation for G {}

fn validate_path<G, F>(graph: &G, path: &[G::Node], can_reach: F) -> bool
where
    G: GraphNodeOrder,
    F: Fn(&G::Node, &G::Node) -> bool,
{
    match path {
        [] => true,
        [u] => graph.has_node(u),
        _ => path.iter().tuple_windows().all(|(u, v)| can_reach(u, v)),
    }
}
