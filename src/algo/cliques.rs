/*!
# Maximal Cliques

Enumerates all maximal cliques of an undirected graph with the Bron–Kerbosch algorithm.
The outermost level iterates over a degeneracy ordering of the graph, so the number of top-level
branches is bounded by the degeneracy instead of the number of nodes; all deeper levels prune
with a pivot.

The recursion is carried out on an explicit stack of frames, each holding the clique built so
far (`R`), its candidates (`P`) and the already excluded nodes (`X`).
*/

use fxhash::FxHashMap;
use smallvec::SmallVec;

use super::*;

/// Rule to select the pivot `u` of a Bron–Kerbosch step; only nodes of `P` that are not adjacent
/// to `u` spawn a recursive call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PivotStrategy {
    /// Any node of `P`, or of `X` if `P` is empty
    #[default]
    Trivial,
    /// The node of `P ∪ X` with the most neighbors in `P`
    TomitaTanakaTakahashi,
}

pub trait MaximalCliques: UndirectedAdjacency + Sized {
    /// Returns every maximal clique of the graph exactly once using the default pivot strategy.
    /// Self-loops are ignored.
    ///
    /// # Errors
    /// Returns an [`InvariantViolation`] if internal bookkeeping turns out inconsistent.
    fn maximal_cliques(&self) -> Result<Vec<Vec<Self::Node>>, InvariantViolation> {
        BronKerbosch::new(self).enumerate()
    }
}

impl<G: UndirectedAdjacency + Sized> MaximalCliques for G {}

/// Configurable Bron–Kerbosch clique enumeration
pub struct BronKerbosch<'a, G>
where
    G: UndirectedAdjacency,
{
    graph: &'a G,
    pivot: PivotStrategy,
}

type Neighborhoods<N> = FxHashMap<NodeId, NodeSet<N>>;

struct Frame<N: Node> {
    r: SmallVec<[N; 8]>,
    p: NodeSet<N>,
    x: NodeSet<N>,
    candidates: Vec<N>,
    next: usize,
    /// Candidate whose branch was entered last; moved from `P` to `X` on return
    pending: Option<N>,
}

impl<'a, G> BronKerbosch<'a, G>
where
    G: UndirectedAdjacency,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            pivot: PivotStrategy::default(),
        }
    }

    pub fn set_pivot(&mut self, pivot: PivotStrategy) {
        self.pivot = pivot;
    }

    pub fn pivot(mut self, pivot: PivotStrategy) -> Self {
        self.set_pivot(pivot);
        self
    }

    /// Enumerates all maximal cliques. Within a clique, nodes appear in the order they were added.
    ///
    /// # Errors
    /// Returns an [`InvariantViolation`] if a pivot is requested from empty sets or a candidate
    /// has no known neighborhood. No partial result is returned in this case.
    pub fn enumerate(&self) -> Result<Vec<Vec<G::Node>>, InvariantViolation> {
        let index = DenseIndex::new(self.graph);
        let neighborhoods: Neighborhoods<G::Node> = index
            .symmetric_neighborhoods(self.graph)
            .into_iter()
            .enumerate()
            .map(|(u, nbs)| {
                let nbs: NodeSet<_> = nbs.into_iter().map(|v| index.node(v).clone()).collect();
                (index.node(u).id(), nbs)
            })
            .collect();

        let mut cliques = Vec::new();
        let mut stack = vec![Frame {
            r: SmallVec::new(),
            p: self.graph.vertex_set(),
            x: NodeSet::new(),
            candidates: self.graph.degeneracy_ordering().order,
            next: 0,
            pending: None,
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some(v) = frame.pending.take() {
                frame.p.remove(&v);
                frame.x.insert(v);
            }

            let Some(v) = frame.candidates.get(frame.next).cloned() else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            let nv = neighborhood(&neighborhoods, &v)?;
            let p = frame.p.intersection(nv);
            let x = frame.x.intersection(nv);
            let mut r = frame.r.clone();
            r.push(v.clone());
            frame.pending = Some(v);

            if let Some(child) = self.descend(&neighborhoods, r, p, x, &mut cliques)? {
                stack.push(child);
            }
        }

        debug!(
            cliques = cliques.len(),
            pivot = ?self.pivot,
            "enumerated maximal cliques"
        );

        Ok(cliques)
    }

    /// Emits `r` if it is maximal, otherwise prepares the frame processing `P \ N(pivot)`
    fn descend(
        &self,
        neighborhoods: &Neighborhoods<G::Node>,
        r: SmallVec<[G::Node; 8]>,
        p: NodeSet<G::Node>,
        x: NodeSet<G::Node>,
        cliques: &mut Vec<Vec<G::Node>>,
    ) -> Result<Option<Frame<G::Node>>, InvariantViolation> {
        if p.is_empty() && x.is_empty() {
            trace!(size = r.len(), "maximal clique");
            cliques.push(r.into_vec());
            return Ok(None);
        }

        let u = self.choose_pivot(neighborhoods, &p, &x)?;
        let nu = neighborhood(neighborhoods, &u)?;

        let mut candidates = p
            .nodes()
            .filter(|w| !nu.contains_id(w.id()))
            .cloned()
            .collect_vec();
        if candidates.is_empty() {
            return Ok(None);
        }
        sort_by_id(&mut candidates);

        Ok(Some(Frame {
            r,
            p,
            x,
            candidates,
            next: 0,
            pending: None,
        }))
    }

    fn choose_pivot(
        &self,
        neighborhoods: &Neighborhoods<G::Node>,
        p: &NodeSet<G::Node>,
        x: &NodeSet<G::Node>,
    ) -> Result<G::Node, InvariantViolation> {
        let pivot = match self.pivot {
            PivotStrategy::Trivial => p.any().or_else(|| x.any()).cloned(),
            PivotStrategy::TomitaTanakaTakahashi => {
                let mut best: Option<(&G::Node, usize)> = None;
                for u in p.nodes().chain(x.nodes()) {
                    let common = p.count_common(neighborhood(neighborhoods, u)?);
                    if best.is_none_or(|(_, c)| common > c) {
                        best = Some((u, common));
                    }
                }
                best.map(|(u, _)| u.clone())
            }
        };

        let pivot = pivot.ok_or(InvariantViolation {
            what: "pivot requested from empty candidate and exclusion sets",
        })?;
        trace!(pivot = pivot.id(), "chose pivot");

        Ok(pivot)
    }
}

fn neighborhood<'a, N: Node>(
    neighborhoods: &'a Neighborhoods<N>,
    u: &N,
) -> Result<&'a NodeSet<N>, InvariantViolation> {
    neighborhoods.get(&u.id()).ok_or(InvariantViolation {
        what: "clique candidate is not a node of the graph",
    })
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::GeneratorSubstructures, testing::*};

    const STRATEGIES: [PivotStrategy; 2] =
        [PivotStrategy::Trivial, PivotStrategy::TomitaTanakaTakahashi];

    fn sorted_cliques<G>(graph: &G, pivot: PivotStrategy) -> Vec<Vec<NodeId>>
    where
        G: UndirectedAdjacency<Node = NodeId>,
    {
        BronKerbosch::new(graph)
            .pivot(pivot)
            .enumerate()
            .unwrap()
            .into_iter()
            .map(|c| c.into_iter().sorted().collect_vec())
            .sorted()
            .collect()
    }

    #[test]
    fn triangle_with_pendant() {
        let graph = UndirectedGraph::<NodeId>::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);
        for pivot in STRATEGIES {
            assert_eq!(sorted_cliques(&graph, pivot), vec![vec![1, 2, 3], vec![3, 4]]);
        }
    }

    #[test]
    fn two_triangles() {
        let graph = UndirectedGraph::<NodeId>::from_edges([
            (1, 2),
            (2, 3),
            (3, 1),
            (4, 5),
            (5, 6),
            (6, 4),
        ]);
        assert_eq!(graph.maximal_cliques().unwrap().len(), 2);
        for pivot in STRATEGIES {
            assert_eq!(sorted_cliques(&graph, pivot), vec![vec![1, 2, 3], vec![4, 5, 6]]);
        }
    }

    #[test]
    fn trivial_graphs() {
        let graph = UndirectedGraph::<NodeId>::new();
        assert!(graph.maximal_cliques().unwrap().is_empty());

        let mut graph = UndirectedGraph::<NodeId>::new();
        graph.add_node(1);
        assert_eq!(graph.maximal_cliques().unwrap(), vec![vec![1]]);

        let graph = UndirectedGraph::<NodeId>::from_edges([(1, 1), (2, 2)]);
        for pivot in STRATEGIES {
            assert_eq!(sorted_cliques(&graph, pivot), vec![vec![1], vec![2]]);
        }
    }

    #[test]
    fn complete_graph() {
        let mut graph = UndirectedGraph::<NodeId>::new();
        graph.connect_clique(&(0..10).collect(), true);

        for pivot in STRATEGIES {
            assert_eq!(sorted_cliques(&graph, pivot), vec![(0..10).collect_vec()]);
        }
    }

    #[test]
    fn empty_pivot_is_reported() {
        let graph = UndirectedGraph::<NodeId>::new();
        for pivot in STRATEGIES {
            let bk = BronKerbosch::new(&graph).pivot(pivot);
            let err = bk
                .choose_pivot(&Neighborhoods::default(), &NodeSet::new(), &NodeSet::new())
                .unwrap_err();
            assert!(err.to_string().starts_with("invariant violated"));
        }
    }

    #[test]
    fn matches_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for n in [1, 4, 8, 12] {
            for p in [0.2, 0.5, 0.8] {
                for _ in 0..5 {
                    let graph = random_graph(rng, n, p);
                    let expected = brute_force_cliques(&graph);

                    for pivot in STRATEGIES {
                        assert_eq!(sorted_cliques(&graph, pivot), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn one_sided_adjacency() {
        let triangle = OneSidedGraph::new(1..=3, [(1, 2), (1, 3), (2, 3)]);
        for pivot in STRATEGIES {
            assert_eq!(sorted_cliques(&triangle, pivot), vec![vec![1, 2, 3]]);
        }

        let graph = OneSidedGraph::new(0..6, [(0, 1), (0, 4), (5, 0), (4, 1), (1, 5)]);
        let expected = brute_force_cliques(&graph);
        assert_eq!(expected, vec![vec![0, 1, 4], vec![0, 1, 5], vec![2], vec![3]]);
        for pivot in STRATEGIES {
            assert_eq!(sorted_cliques(&graph, pivot), expected);
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct Tagged {
        id: NodeId,
        from_vertices: bool,
    }

    impl Node for Tagged {
        fn id(&self) -> NodeId {
            self.id
        }
    }

    /// Hands out different node values for the same id depending on the query
    struct TaggedGraph(UndirectedGraph<NodeId>);

    impl TaggedGraph {
        fn tag(id: NodeId, from_vertices: bool) -> Tagged {
            Tagged { id, from_vertices }
        }
    }

    impl GraphNodeOrder for TaggedGraph {
        type Node = Tagged;

        fn number_of_nodes(&self) -> usize {
            self.0.number_of_nodes()
        }

        fn vertices(&self) -> impl Iterator<Item = Tagged> + '_ {
            self.0.vertices().map(|u| Self::tag(u, true))
        }

        fn node(&self, id: NodeId) -> Option<Tagged> {
            self.0.node(id).map(|u| Self::tag(u, true))
        }
    }

    impl AdjacencyList for TaggedGraph {
        fn neighbors_of(&self, u: &Tagged) -> impl Iterator<Item = Tagged> + '_ {
            self.0.neighbors_of(&u.id).map(|v| Self::tag(v, false))
        }
    }

    impl AdjacencyTest for TaggedGraph {
        fn has_edge(&self, u: &Tagged, v: &Tagged) -> bool {
            self.0.has_edge(&u.id, &v.id)
        }

        fn edge(&self, u: &Tagged, v: &Tagged) -> Option<Edge<Tagged>> {
            self.0.edge(&u.id, &v.id).map(|_| Edge(*u, *v))
        }
    }

    impl UndirectedAdjacency for TaggedGraph {}

    #[test]
    fn clique_members_come_from_vertices() {
        let graph = TaggedGraph(UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]));
        for pivot in STRATEGIES {
            let cliques = BronKerbosch::new(&graph).pivot(pivot).enumerate().unwrap();
            assert_eq!(cliques.len(), 2);
            assert!(cliques.iter().flatten().all(|u| u.from_vertices));
        }
    }

    proptest! {
        #[test]
        fn every_clique_exactly_once(edges in prop::collection::vec((0i64..10, 0i64..10), 0..40)) {
            let graph = UndirectedGraph::<NodeId>::from_edges(edges);
            let expected = brute_force_cliques(&graph);
            for pivot in STRATEGIES {
                prop_assert_eq!(sorted_cliques(&graph, pivot), expected.clone());
            }
        }
    }
}
