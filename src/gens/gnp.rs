use itertools::Either;
use rand_distr::Geometric;

use super::*;

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with probability `p`
/// independent from each other.
///
/// Due to this independence, we do not need to incorporate normalized-checks for undirected graphs
/// or self-loop checks in the generator itself. Filterings of this sort are up to the caller.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NodeId,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly.
    /// ** Panics if `p` is not a probability **
    pub fn set_prob(&mut self, prob: f64) {
        assert!((0.0..=1.0).contains(&prob), "invalid probability: {prob}");
        self.p = Some(prob);
    }

    pub fn prob(mut self, prob: f64) -> Self {
        self.set_prob(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NodeId) -> Self {
        assert!(n >= 0, "number of nodes must not be negative");
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges, ordered lexicographically
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge<NodeId>> {
        let Some(p) = self.p else {
            panic!("probability of Gnp was not set");
        };

        let n = self.n as u64;
        let Some(stop) = n.checked_mul(n) else {
            panic!("too many nodes for Gnp: {n}");
        };
        let to_edge = move |x: u64| Edge((x / n) as NodeId, (x % n) as NodeId);

        // Geometric skips over the n^2 candidate edges; p = 0 never hits one
        match Geometric::new(p) {
            Ok(distr) if p > 0.0 => Either::Right(
                GeometricJumps {
                    distr,
                    rng,
                    cur: 0,
                    stop,
                }
                .map(to_edge),
            ),
            _ => Either::Left(std::iter::empty()),
        }
    }
}

/// Starts at `0` and repeatedly jumps ahead by a geometrically distributed number of
/// failures, yielding every landing position below `stop`.
struct GeometricJumps<'a, R: Rng> {
    distr: Geometric,
    rng: &'a mut R,
    cur: u64,
    stop: u64,
}

impl<R: Rng> Iterator for GeometricJumps<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur >= self.stop {
            return None;
        }

        let skip = self.rng.sample(&self.distr);
        match self.cur.checked_add(skip).filter(|&x| x < self.stop) {
            Some(x) => {
                self.cur = x + 1;
                Some(x)
            }
            None => {
                self.cur = self.stop;
                None
            }
        }
    }
}
