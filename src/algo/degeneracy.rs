/*!
# Degeneracy Ordering

Computes a degeneracy ordering (and with it the k-core decomposition) of an undirected graph
by repeatedly removing a node of minimum remaining degree. Buckets of nodes indexed by their
remaining degree make each removal and each degree update `O(1)`, resulting in `O(n + m)` total.
*/

use fxhash::FxHashMap;

use super::*;

/// Result of [`Degeneracy::degeneracy_ordering`]
#[derive(Debug, Clone)]
pub struct DegeneracyOrdering<N: Node> {
    /// All nodes in the order of their removal, i.e. from lowest to highest core number
    pub order: Vec<N>,
    /// `cores[i]` contains all nodes with core number `i`; there is always at least one entry
    pub cores: Vec<Vec<N>>,
}

impl<N: Node> DegeneracyOrdering<N> {
    /// Returns the degeneracy of the graph, i.e. the largest core number
    pub fn degeneracy(&self) -> usize {
        self.cores.len().saturating_sub(1)
    }

    /// Returns the core number of every node keyed by its id
    pub fn core_numbers(&self) -> FxHashMap<NodeId, usize> {
        self.cores
            .iter()
            .enumerate()
            .flat_map(|(k, core)| core.iter().map(move |u| (u.id(), k)))
            .collect()
    }
}

pub trait Degeneracy: UndirectedAdjacency + Sized {
    /// Computes a degeneracy ordering of the graph. Self-loops do not count toward the degree.
    fn degeneracy_ordering(&self) -> DegeneracyOrdering<Self::Node> {
        let index = DenseIndex::new(self);
        let neighbors = index.symmetric_neighborhoods(self);

        let (order, core_of) = peel(&neighbors);

        let max_core = core_of.iter().copied().max().unwrap_or(0);
        let mut cores = vec![Vec::new(); max_core + 1];
        for &u in &order {
            cores[core_of[u]].push(index.node(u).clone());
        }

        debug!(
            nodes = order.len(),
            degeneracy = max_core,
            "computed degeneracy ordering"
        );

        DegeneracyOrdering {
            order: order.into_iter().map(|u| index.node(u).clone()).collect(),
            cores,
        }
    }
}

impl<G: UndirectedAdjacency + Sized> Degeneracy for G {}

/// Removes nodes of minimum remaining degree one at a time.
/// Returns the removal order and the core number of every node.
fn peel(neighbors: &[Vec<usize>]) -> (Vec<usize>, Vec<usize>) {
    let n = neighbors.len();
    let mut degree = neighbors.iter().map(|nbs| nbs.len()).collect_vec();
    let max_degree = degree.iter().copied().max().unwrap_or(0);

    let mut buckets = vec![Vec::new(); max_degree + 1];
    let mut position = vec![0; n];
    for (u, &d) in degree.iter().enumerate() {
        position[u] = buckets[d].len();
        buckets[d].push(u);
    }

    let mut removed = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut core_of = vec![0; n];

    let mut k = 0;
    let mut i = 0;
    while order.len() < n {
        while buckets[i].is_empty() {
            i += 1;
        }

        k = k.max(i);
        let Some(v) = buckets[i].pop() else {
            unreachable!("bucket {i} was checked to be non-empty");
        };

        removed[v] = true;
        core_of[v] = k;
        order.push(v);
        trace!(node = v, core = k, "peeled node");

        for &w in &neighbors[v] {
            if removed[w] {
                continue;
            }

            let d = degree[w];
            let bucket = &mut buckets[d];
            let p = position[w];
            bucket.swap_remove(p);
            if let Some(&moved) = bucket.get(p) {
                position[moved] = p;
            }

            degree[w] = d - 1;
            position[w] = buckets[d - 1].len();
            buckets[d - 1].push(w);
        }

        // a removal lowers remaining degrees by at most one
        i = i.saturating_sub(1);
    }

    (order, core_of)
}

#[cfg(test)]
mod test {
    use fxhash::FxHashSet;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::GeneratorSubstructures, testing::*};

    /// Replays the removal order and checks the bounds every degeneracy ordering has to satisfy
    fn assert_valid_ordering(graph: &UndirectedGraph<NodeId>, ordering: &DegeneracyOrdering<NodeId>) {
        assert_eq!(ordering.order.len(), graph.number_of_nodes());

        let cores = ordering.core_numbers();
        assert_eq!(cores.len(), graph.number_of_nodes());

        let mut removed = FxHashSet::default();
        let mut last_core = 0;
        for u in &ordering.order {
            let core = cores[u];
            assert!(core >= last_core, "core numbers must not decrease");
            last_core = core;

            let remaining = graph
                .neighbors_of(u)
                .filter(|v| v != u && !removed.contains(v))
                .count();
            assert!(remaining <= core, "{u} has {remaining} remaining neighbors but core {core}");

            removed.insert(*u);
        }

        assert_eq!(
            cores.into_iter().sorted().collect_vec(),
            naive_core_numbers(graph)
        );
    }

    #[test]
    fn triangle_with_pendant() {
        let graph = UndirectedGraph::<NodeId>::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);
        let ordering = graph.degeneracy_ordering();

        assert_eq!(ordering.order[0], 4);
        assert_eq!(ordering.degeneracy(), 2);
        assert_eq!(ordering.cores.len(), 3);
        assert!(ordering.cores[0].is_empty());
        assert_eq!(ordering.cores[1], vec![4]);
        assert_eq!(ordering.cores[2].iter().copied().sorted().collect_vec(), vec![1, 2, 3]);

        assert_valid_ordering(&graph, &ordering);
    }

    #[test]
    fn empty_graph() {
        let graph = UndirectedGraph::<NodeId>::new();
        let ordering = graph.degeneracy_ordering();

        assert!(ordering.order.is_empty());
        assert_eq!(ordering.cores, vec![Vec::<NodeId>::new()]);
        assert_eq!(ordering.degeneracy(), 0);
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut graph = UndirectedGraph::<NodeId>::from_edges([(1, 1), (2, 2), (1, 2)]);
        graph.add_node(3);

        let ordering = graph.degeneracy_ordering();
        let cores = ordering.core_numbers();
        assert_eq!(cores[&1], 1);
        assert_eq!(cores[&2], 1);
        assert_eq!(cores[&3], 0);
    }

    #[test]
    fn clique_and_path() {
        let mut graph = UndirectedGraph::<NodeId>::new();
        graph.connect_clique(&(0..6).collect(), false);
        graph.connect_path(5..20);

        let ordering = graph.degeneracy_ordering();
        assert_eq!(ordering.degeneracy(), 5);
        assert_eq!(ordering.cores[5].len(), 6);
        assert_eq!(ordering.cores[1].len(), 14);
        assert_valid_ordering(&graph, &ordering);
    }

    #[test]
    fn random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [5, 20, 60] {
            for p in [0.05, 0.2, 0.5] {
                let graph = random_graph(rng, n, p);
                let ordering = graph.degeneracy_ordering();
                assert_valid_ordering(&graph, &ordering);
            }
        }
    }

    #[test]
    fn one_sided_adjacency() {
        let edges = [(0, 1), (0, 4), (5, 0), (4, 1), (1, 5)];
        let one_sided = OneSidedGraph::new(0..6, edges);
        let mut graph = UndirectedGraph::<NodeId>::from_edges(edges);
        graph.add_node(2);
        graph.add_node(3);

        let ordering = one_sided.degeneracy_ordering();
        assert_eq!(ordering.order.len(), 6);
        assert_eq!(ordering.degeneracy(), 2);
        assert_eq!(
            ordering.core_numbers().into_iter().sorted().collect_vec(),
            naive_core_numbers(&graph)
        );

        let triangle = OneSidedGraph::new(1..=3, [(1, 2), (1, 3), (2, 3)]);
        let ordering = triangle.degeneracy_ordering();
        assert_eq!(ordering.degeneracy(), 2);
        assert_eq!(ordering.cores[2].iter().copied().sorted().collect_vec(), vec![1, 2, 3]);
    }

    proptest! {
        #[test]
        fn degeneracy_is_valid(edges in prop::collection::vec((0i64..25, 0i64..25), 0..100)) {
            let graph = UndirectedGraph::<NodeId>::from_edges(edges);
            let ordering = graph.degeneracy_ordering();
            assert_valid_ordering(&graph, &ordering);
        }
    }
}
