use std::{iter::FusedIterator, marker::PhantomData};

use super::*;

pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of an undirected graph
    fn connected_components(&self) -> ConnectedComponents<'_, Self>
    where
        Self: UndirectedAdjacency;

    /// Same as [`Connectivity::connected_components`] but skips components of a single node
    fn connected_components_no_singletons(&self) -> ConnectedComponents<'_, Self>
    where
        Self: UndirectedAdjacency;

    /// Returns an iterator over the strongly connected components of the graph
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self>
    where
        Self: DirectedAdjacencyList;

    /// In contrast to [`Connectivity::strongly_connected_components`], this method includes
    /// SCCs of size 1 if and only if the node has a self-loop
    fn strongly_connected_components_no_singletons(&self) -> StronglyConnectedComponents<'_, Self>
    where
        Self: DirectedAdjacencyList;
}

impl<G> Connectivity for G
where
    G: AdjacencyList + Sized,
{
    fn connected_components(&self) -> ConnectedComponents<'_, Self>
    where
        Self: UndirectedAdjacency,
    {
        ConnectedComponents::new(self)
    }

    fn connected_components_no_singletons(&self) -> ConnectedComponents<'_, Self>
    where
        Self: UndirectedAdjacency,
    {
        ConnectedComponents::new(self).include_singletons(false)
    }

    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self>
    where
        Self: DirectedAdjacencyList,
    {
        StronglyConnectedComponents::new(self)
    }

    fn strongly_connected_components_no_singletons(&self) -> StronglyConnectedComponents<'_, Self>
    where
        Self: DirectedAdjacencyList,
    {
        StronglyConnectedComponents::new(self).include_singletons(false)
    }
}

/// Shorthand for [`StronglyConnectedComponents::new`]
pub fn strongly_connected_components<G>(graph: &G) -> StronglyConnectedComponents<'_, G>
where
    G: DirectedAdjacencyList,
{
    StronglyConnectedComponents::new(graph)
}

/// Iterator over the connected components of an undirected graph, found by an iterative DFS.
/// Nodes are visited in the order the graph lists them; an edge listed at only one of its
/// endpoints still joins both.
pub struct ConnectedComponents<'a, G>
where
    G: UndirectedAdjacency,
{
    graph: PhantomData<&'a G>,
    index: DenseIndex<G::Node>,
    neighbors: Vec<Vec<usize>>,
    visited: Vec<bool>,
    potentially_unvisited: usize,
    include_singletons: bool,
    stack: Vec<usize>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: UndirectedAdjacency,
{
    pub fn new(graph: &'a G) -> Self {
        let index = DenseIndex::new(graph);
        Self {
            graph: PhantomData,
            neighbors: index.symmetric_neighborhoods(graph),
            visited: vec![false; index.len()],
            index,
            potentially_unvisited: 0,
            include_singletons: true,
            stack: Vec::with_capacity(32),
        }
    }

    /// If `include = false`, components consisting of a single node are not returned
    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    pub fn include_singletons(mut self, include: bool) -> Self {
        self.set_include_singletons(include);
        self
    }

    fn explore(&mut self, start: usize) -> Vec<G::Node> {
        let mut component = Vec::new();
        self.visited[start] = true;
        self.stack.push(start);

        while let Some(u) = self.stack.pop() {
            for &w in &self.neighbors[u] {
                if !self.visited[w] {
                    self.visited[w] = true;
                    self.stack.push(w);
                }
            }
            component.push(self.index.node(u).clone());
        }

        component
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: UndirectedAdjacency,
{
    type Item = Vec<G::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.potentially_unvisited < self.index.len() {
            let u = self.potentially_unvisited;
            self.potentially_unvisited += 1;

            if self.visited[u] {
                continue;
            }

            let component = self.explore(u);
            if self.include_singletons || component.len() > 1 {
                trace!(size = component.len(), "connected component");
                return Some(component);
            }
        }

        None
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: UndirectedAdjacency {}

/// Implementation of Tarjan's Algorithm for Strongly Connected Components.
/// It is designed as an iterator that emits the nodes of one strongly connected component at a
/// time. Observe that the order of nodes within a component is non-deterministic; the order of the
/// components themselves are in the reverse topological order of the SCCs (i.e. if each SCC
/// were contracted into a single node).
pub struct StronglyConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    graph: &'a G,
    nodes: DenseIndex<G::Node>,
    idx: usize,

    states: Vec<NodeState>,
    potentially_unvisited: usize,

    include_singletons: bool,

    path_stack: Vec<usize>,

    call_stack: Vec<StackFrame>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    /// Construct the iterator for some graph
    pub fn new(graph: &'a G) -> Self {
        let nodes = DenseIndex::new(graph);
        debug!(nodes = nodes.len(), "searching strongly connected components");

        Self {
            graph,
            states: vec![Default::default(); nodes.len()],
            nodes,
            idx: 0,
            potentially_unvisited: 0,

            include_singletons: true,

            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Each node that is not part of a circle is returned as its own SCC.
    /// By setting `include = false`, those nodes are not returned (which can lead to a significant
    /// performance boost)
    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    pub fn include_singletons(mut self, include: bool) -> Self {
        self.set_include_singletons(include);
        self
    }

    /// Just like in a classic DFS where we want to compute a spanning-forest, we will need to
    /// to visit each node at least once. We start with the first indexed node, and cover all nodes
    /// reachable from there in `search`. Then, we search for an untouched node here, and start over.
    fn next_unvisited_node(&mut self) -> Option<usize> {
        while self.potentially_unvisited < self.nodes.len() {
            if !self.states[self.potentially_unvisited].visited {
                let v = self.potentially_unvisited;
                self.push_node(v, None);
                return Some(v);
            }

            self.potentially_unvisited += 1;
        }
        None
    }

    /// Put a pristine stack frame on the call stack. Roughly speaking, this is the first step
    /// to a recursive call of search.
    fn push_node(&mut self, node: usize, parent: Option<usize>) {
        let neighbors = self
            .nodes
            .indices_of(self.graph.out_neighbors_of(self.nodes.node(node)))
            .collect();

        self.call_stack.push(StackFrame {
            node,
            parent: parent.unwrap_or(node),
            initial_stack_len: 0,
            first_call: true,
            has_loop: false,
            neighbors,
            next_neighbor: 0,
        });
    }

    fn search(&mut self) -> Option<Vec<G::Node>> {
        /*
        Tarjan's algorithm is typically described in a recursive fashion similarly to DFS
        with some extra steps. Recursing once per node overflows the stack on long paths,
        and a recursive search cannot be paused to hand out a component.

        Hence, the explicit call stack `self.call_stack` simulates recursive calls. On first
        visit of a node v it is assigned a DFS index and the same low_link value, the
        smallest known index of any node known to be reachable from v. We then process all of its
        neighbors (which may trigger recursive calls). Eventually, all nodes in an SCC will have
        the same low_link and the unique node with this index becomes the root of this SCC.

        All state (including the position in the neighborhood) lives in the call stack, so we
        can return a component and later resume by reentering the function.
        */

        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let v = frame.node;

            if frame.first_call {
                frame.first_call = false;
                frame.initial_stack_len = self.path_stack.len();

                self.states[v].visit(self.idx);
                self.idx += 1;

                self.path_stack.push(v);
            }

            while let Some(&w) = frame.neighbors.get(frame.next_neighbor) {
                frame.next_neighbor += 1;
                frame.has_loop |= w == v;

                let w_state = self.states[w];
                if !w_state.visited {
                    self.push_node(w, Some(v));
                    continue 'recurse;
                } else if w_state.on_stack {
                    self.states[v].try_lower_link(w_state.index);
                }
            }

            let (parent, initial_stack_len, has_loop) =
                (frame.parent, frame.initial_stack_len, frame.has_loop);
            self.call_stack.pop();

            let state = self.states[v];
            self.states[parent].try_lower_link(state.low_link);

            if state.is_root() {
                let is_singleton = self.path_stack.len() == initial_stack_len + 1;

                if !self.include_singletons && is_singleton && !has_loop {
                    // skip producing a component, but undo the bookkeeping of v
                    self.states[v].on_stack = false;
                    self.path_stack.pop();
                } else {
                    let component = self
                        .path_stack
                        .drain(initial_stack_len..)
                        .map(|w| {
                            self.states[w].on_stack = false;
                            self.nodes.node(w).clone()
                        })
                        .collect_vec();

                    trace!(size = component.len(), "strongly connected component");
                    return Some(component);
                }
            }
        }

        None
    }
}

impl<G> Iterator for StronglyConnectedComponents<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Vec<G::Node>;

    /// Returns either a vector of nodes that form an SCC or None if no further SCC was found
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = self.search() {
                return Some(x);
            }

            self.next_unvisited_node()?;
        }
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<'_, G> where G: DirectedAdjacencyList {}

#[derive(Debug, Clone)]
struct StackFrame {
    node: usize,
    parent: usize,
    initial_stack_len: usize,
    first_call: bool,
    has_loop: bool,
    neighbors: Vec<usize>,
    next_neighbor: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct NodeState {
    visited: bool,
    on_stack: bool,
    index: usize,
    low_link: usize,
}

impl NodeState {
    fn visit(&mut self, u: usize) {
        debug_assert!(!self.visited);
        self.index = u;
        self.low_link = u;
        self.visited = true;
        self.on_stack = true;
    }

    fn try_lower_link(&mut self, l: usize) {
        self.low_link = self.low_link.min(l);
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

/// Sorts the nodes in each component by id and then the components themselves lexicographically.
pub fn sort_components<N: Node>(mut components: Vec<Vec<N>>) -> Vec<Vec<N>> {
    components.iter_mut().for_each(|comp| sort_by_id(comp));
    components.sort_by_cached_key(|comp| ids_of(comp.iter()));
    components
}
