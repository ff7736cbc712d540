/*!
# Dominators

A node `a` dominates `b` (with respect to a start node `s`) if every path from `s` to `b`
passes through `a`. Symmetrically, `a` post-dominates `b` (with respect to an end node `t`) if
every path from `b` to `t` passes through `a`. Every node dominates itself.

Both relations are computed as the greatest fixed point of
`dom(u) = {u} ∪ ⋂ { dom(p) | p predecessor of u }`, starting with `dom(s) = {s}` and all other
sets holding every node. Nodes without predecessors keep the full set, so nodes unreachable
from `s` are reported as dominated by everything. No pruning to strict or immediate dominators
is done.
*/

use std::ops::Index;

use fxhash::FxHashMap;

use super::*;

/// Dominator (or post-dominator) sets of all nodes of a graph
#[derive(Debug, Clone)]
pub struct DominatorSets<N: Node> {
    root: N,
    sets: FxHashMap<NodeId, NodeSet<N>>,
}

impl<N: Node> DominatorSets<N> {
    /// The start (or end) node the sets were computed for
    pub fn root(&self) -> &N {
        &self.root
    }

    /// Returns the set of nodes dominating `u`, including `u` itself
    pub fn of(&self, u: &N) -> Option<&NodeSet<N>> {
        self.sets.get(&u.id())
    }

    /// Returns *true* if `a` dominates `b`
    pub fn dominates(&self, a: &N, b: &N) -> bool {
        self.of(b).is_some_and(|dom| dom.contains(a))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn into_map(self) -> FxHashMap<NodeId, NodeSet<N>> {
        self.sets
    }
}

impl<N: Node> Index<&N> for DominatorSets<N> {
    type Output = NodeSet<N>;

    fn index(&self, u: &N) -> &Self::Output {
        &self.sets[&u.id()]
    }
}

pub trait Dominators: AdjacencyList + Sized {
    /// Computes the dominators of every node with respect to `start`.
    /// Returns `None` if `start` is not part of the graph.
    fn dominators(&self, start: &Self::Node) -> Option<DominatorSets<Self::Node>>
    where
        Self: DirectedAdjacencyList,
    {
        let index = DenseIndex::new(self);
        let preds = index
            .nodes()
            .iter()
            .map(|u| index.indices_of(self.in_neighbors_of(u)).collect_vec())
            .collect_vec();

        solve(index, start, &preds)
    }

    /// Computes the dominators of every node with respect to `start` in an undirected graph,
    /// where the neighbors of a node act as its predecessors.
    /// Returns `None` if `start` is not part of the graph.
    fn undirected_dominators(&self, start: &Self::Node) -> Option<DominatorSets<Self::Node>>
    where
        Self: UndirectedAdjacency,
    {
        let index = DenseIndex::new(self);
        let neighbors = index.symmetric_neighborhoods(self);

        solve(index, start, &neighbors)
    }

    /// Computes the post-dominators of every node with respect to `end`, following the
    /// (outgoing) neighbors of each node.
    /// Returns `None` if `end` is not part of the graph.
    fn post_dominators(&self, end: &Self::Node) -> Option<DominatorSets<Self::Node>> {
        let index = DenseIndex::new(self);
        let succs = index
            .nodes()
            .iter()
            .map(|u| index.indices_of(self.neighbors_of(u)).collect_vec())
            .collect_vec();

        solve(index, end, &succs)
    }
}

impl<G: AdjacencyList + Sized> Dominators for G {}

/// Iterates `dom(u) = {u} ∪ ⋂ dom(p)` over `preds[u]` until no set changes
fn solve<N: Node>(
    index: DenseIndex<N>,
    root: &N,
    preds: &[Vec<usize>],
) -> Option<DominatorSets<N>> {
    let r = index.index_of(root)?;
    let root = index.node(r).clone();

    let all: NodeSet<N> = index.nodes().iter().cloned().collect();
    let mut doms = (0..index.len())
        .map(|u| {
            if u == r {
                NodeSet::from_iter([root.clone()])
            } else {
                all.clone()
            }
        })
        .collect_vec();

    let mut tmp = NodeSet::with_capacity(index.len());
    let mut rounds = 0;
    let mut changed = true;
    while changed {
        changed = false;
        rounds += 1;

        for (u, node) in index.nodes().iter().enumerate() {
            if u == r {
                continue;
            }
            let Some((&first, rest)) = preds[u].split_first() else {
                continue;
            };

            tmp.copy_from(&doms[first]);
            for &p in rest {
                tmp.intersect_with(&doms[p]);
            }

            let mut dom = NodeSet::from_iter([node.clone()]);
            dom.union_with(&tmp);

            if !NodeSet::equal(&dom, &doms[u]) {
                doms[u] = dom;
                changed = true;
            }
        }
    }

    debug!(
        nodes = index.len(),
        root = root.id(),
        rounds,
        "computed dominator sets"
    );

    let sets = index
        .nodes()
        .iter()
        .map(|u| u.id())
        .zip(doms)
        .collect();

    Some(DominatorSets { root, sets })
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::*;

    fn ids(set: &NodeSet<NodeId>) -> Vec<NodeId> {
        set.ids().copied().sorted().collect()
    }

    #[test]
    fn diamond() {
        let graph = DirectedGraph::<NodeId>::from_edges([(0, 1), (0, 2), (1, 3), (2, 3)]);

        let dom = graph.dominators(&0).unwrap();
        assert_eq!(dom.root(), &0);
        assert_eq!(dom.len(), 4);
        assert_eq!(ids(&dom[&0]), vec![0]);
        assert_eq!(ids(&dom[&1]), vec![0, 1]);
        assert_eq!(ids(&dom[&2]), vec![0, 2]);
        assert_eq!(ids(&dom[&3]), vec![0, 3]);
        assert!(dom.dominates(&0, &3));
        assert!(!dom.dominates(&1, &3));

        let pdom = graph.post_dominators(&3).unwrap();
        assert_eq!(ids(&pdom[&0]), vec![0, 3]);
        assert_eq!(ids(&pdom[&1]), vec![1, 3]);
        assert_eq!(ids(&pdom[&3]), vec![3]);
    }

    #[test]
    fn loop_with_exit() {
        let graph = DirectedGraph::<NodeId>::from_edges([(0, 1), (1, 2), (2, 1), (2, 3), (3, 3)]);

        let dom = graph.dominators(&0).unwrap();
        assert_eq!(ids(&dom[&1]), vec![0, 1]);
        assert_eq!(ids(&dom[&2]), vec![0, 1, 2]);
        assert_eq!(ids(&dom[&3]), vec![0, 1, 2, 3]);

        let pdom = graph.post_dominators(&3).unwrap();
        assert_eq!(ids(&pdom[&0]), vec![0, 1, 2, 3]);
        assert_eq!(ids(&pdom[&1]), vec![1, 2, 3]);
        assert_eq!(ids(&pdom[&2]), vec![2, 3]);
    }

    #[test]
    fn unreachable_and_missing_nodes() {
        let mut graph = DirectedGraph::<NodeId>::from_edges([(0, 1), (5, 6)]);
        graph.add_node(7);

        assert!(graph.dominators(&42).is_none());
        assert!(graph.post_dominators(&42).is_none());

        let dom = graph.dominators(&0).unwrap();
        assert_eq!(ids(&dom[&1]), vec![0, 1]);
        assert_eq!(ids(&dom[&5]).len(), 5);
        assert_eq!(ids(&dom[&6]).len(), 5);
        assert_eq!(ids(&dom[&7]).len(), 5);

        let graph = DirectedGraph::<NodeId>::new();
        assert!(graph.dominators(&0).is_none());
    }

    #[test]
    fn undirected() {
        let edges = [(0, 1), (2, 1), (2, 3), (4, 3), (2, 4)];
        let graph = UndirectedGraph::<NodeId>::from_edges(edges);
        let one_sided = OneSidedGraph::new(0..5, edges);

        for dom in [
            graph.undirected_dominators(&0).unwrap(),
            one_sided.undirected_dominators(&0).unwrap(),
        ] {
            assert_eq!(ids(&dom[&1]), vec![0, 1]);
            assert_eq!(ids(&dom[&2]), vec![0, 1, 2]);
            assert_eq!(ids(&dom[&3]), vec![0, 1, 2, 3]);
            assert_eq!(ids(&dom[&4]), vec![0, 1, 2, 4]);
        }
    }

    /// `a` dominates a reachable `b` iff `b` cannot be reached from the start once `a` is gone
    #[test]
    fn matches_removal_reachability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for n in [5, 10, 20] {
            for p in [0.1, 0.2, 0.4] {
                let graph = random_digraph(rng, n, p);
                let dom = graph.dominators(&0).unwrap();
                let reachable = reachable_from(&graph, &0);

                for a in 1..n {
                    let mut without = graph.clone();
                    without.remove_node(&a);
                    let still_reachable = reachable_from(&without, &0);

                    for &b in &reachable {
                        let expected = a == b || !still_reachable.contains(&b);
                        assert_eq!(dom.dominates(&a, &b), expected, "{a} dom {b}");
                    }
                }

                for &b in &reachable {
                    assert!(dom.dominates(&0, &b));
                }
            }
        }
    }
}
