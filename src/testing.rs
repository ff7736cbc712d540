//! Shared helpers for tests: a randomized test-suite for graph representations and
//! brute-force reference implementations the algorithms are checked against.

#[cfg(test)]
pub(crate) use reference::*;

/// Every graph should implement `GraphNodeOrder` and `GraphMutation`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops};
            use fxhash::FxHashSet;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NodeId, m_ub: usize) -> Vec<Edge<NodeId>> {
                let mut edges = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    if $undirected && v < u {
                        Edge(v, u)
                    } else {
                        Edge(u, v)
                    }
                }).collect_vec();
                edges.sort_unstable_by_key(|e| e.ids());
                edges.dedup();

                edges
            }

            /// Adjacency of `0..n` as sets of successors (or predecessors if `reverse`)
            fn adjacency(n: NodeId, edges: &[Edge<NodeId>], reverse: bool) -> Vec<FxHashSet<NodeId>> {
                let mut adj = vec![FxHashSet::default(); n as usize];
                for &Edge(u, v) in edges {
                    let (u, v) = if reverse { (v, u) } else { (u, v) };
                    adj[u as usize].insert(v);
                    if $undirected {
                        adj[v as usize].insert(u);
                    }
                }
                adj
            }

            $(
                test_graph_ops!(@suite $graph, $undirected, $trait);
            )*
        }
    };
    (@suite $graph:ty, $undirected:literal, AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NodeId, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as usize);
                        let adj = adjacency(n, &edges, false);

                        let mut graph = <$graph>::new();
                        for u in 0..n {
                            graph.add_node(u);
                        }
                        graph.add_edges(edges.iter().copied());

                        assert_eq!(graph.number_of_nodes(), n as usize);
                        assert_eq!(graph.number_of_edges(), edges.len());
                        assert_eq!(graph.vertices().sorted().collect_vec(), (0..n).collect_vec());
                        assert_eq!(
                            graph.edges().map(|e| e.ids()).sorted().collect_vec(),
                            edges.iter().map(|e| e.ids()).collect_vec()
                        );

                        for u in 0..n {
                            let nbs: FxHashSet<NodeId> = graph.neighbors_of(&u).collect();
                            assert_eq!(nbs, adj[u as usize]);
                            assert_eq!(graph.degree_of(&u), adj[u as usize].len());
                            assert_eq!(graph.neighbors_of_as_set(&u).len(), adj[u as usize].len());

                            for v in 0..n {
                                let expected = adj[u as usize].contains(&v);
                                assert_eq!(graph.edge(&u, &v).is_some(), expected);
                                assert_eq!(graph.weight(&Edge(u, v)) == 1.0, expected);
                            }
                        }

                        assert_eq!(
                            graph.max_degree(),
                            adj.iter().map(|a| a.len()).max().unwrap_or(0)
                        );
                    }
                }
            }
        }
    };
    (@suite $graph:ty, $undirected:literal, DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NodeId, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as usize);
                        let adj_in = adjacency(n, &edges, true);

                        let mut graph = <$graph>::new();
                        graph.add_edges(edges.iter().copied());

                        for u in 0..n {
                            if !graph.has_node(&u) {
                                continue;
                            }

                            let preds: FxHashSet<NodeId> = graph.in_neighbors_of(&u).collect();
                            assert_eq!(preds, adj_in[u as usize]);
                            assert_eq!(graph.in_degree_of(&u), adj_in[u as usize].len());

                            for &v in &adj_in[u as usize] {
                                assert!(graph.has_edge_from_to(&v, &u));
                                assert!(graph.has_edge(&u, &v));
                            }
                        }
                    }
                }
            }
        }
    };
    (@suite $graph:ty, $undirected:literal, GraphMutation) => {
        #[test]
        fn test_graph_mutation() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NodeId, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as usize);

                        let mut graph = <$graph>::new();
                        for u in 0..n {
                            graph.add_node(u);
                        }
                        graph.add_edges(edges.iter().copied());

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            let present = graph.edge(&u, &v).is_some();
                            assert_eq!(graph.remove_edge(&Edge(u, v)), present);
                            if present {
                                m -= 1;
                            }

                            assert!(graph.edge(&u, &v).is_none());
                            assert_eq!(m, graph.number_of_edges());
                        }

                        let fresh = graph.new_node_id();
                        assert!(!graph.has_node(&fresh));
                        assert!(graph.try_add_node(fresh));
                        assert!(!graph.try_add_node(fresh));

                        for u in 0..n {
                            assert!(graph.remove_node(&u));
                            assert!(graph.neighbors_of(&u).next().is_none());
                        }

                        assert_eq!(graph.number_of_nodes(), 1);
                        assert_eq!(graph.number_of_edges(), 0);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
