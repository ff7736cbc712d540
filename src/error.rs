//! Error types returned by the algorithms in [`crate::algo`].

use itertools::Itertools;
use thiserror::Error;

use crate::node::*;

/// Above this many nodes the message of a [`CyclicOrderingError`] only reports counts.
pub const MAX_REPORTED_CYCLIC_NODES: usize = 10;

/// No topological ordering exists since the graph contains cycles.
///
/// This is an expected outcome on cyclic input, not a defect. Besides the cyclic
/// components (each sorted by id, ordered by their position in the attempted sort) the
/// error carries the best-effort order in which every cyclic component is represented by
/// a single `None` placeholder at its topological position.
#[derive(Debug, Clone, Error)]
#[error("{}", describe_cyclic(.components))]
pub struct CyclicOrderingError<N: Node> {
    pub components: Vec<Vec<N>>,
    pub partial_order: Vec<Option<N>>,
}

impl<N: Node> CyclicOrderingError<N> {
    /// The cyclic components blocking the ordering
    pub fn cyclic_components(&self) -> &[Vec<N>] {
        &self.components
    }

    /// The best-effort order with placeholders for cyclic components
    pub fn partial_order(&self) -> &[Option<N>] {
        &self.partial_order
    }

    /// Total number of nodes in all cyclic components
    pub fn number_of_cyclic_nodes(&self) -> usize {
        self.components.iter().map(Vec::len).sum()
    }

    /// Consumes the error and returns the best-effort order
    pub fn into_partial_order(self) -> Vec<Option<N>> {
        self.partial_order
    }
}

fn describe_cyclic<N: Node>(components: &[Vec<N>]) -> String {
    let n: usize = components.iter().map(Vec::len).sum();
    if n > MAX_REPORTED_CYCLIC_NODES {
        return format!(
            "no topological ordering: {n} nodes in {} cyclic components",
            components.len()
        );
    }

    format!(
        "no topological ordering: cyclic components: [{}]",
        components
            .iter()
            .map(|comp| format!("[{}]", comp.iter().map(Node::id).join(" ")))
            .join(" ")
    )
}

/// An internal precondition of an algorithm did not hold. This indicates a bug in the
/// algorithm's own bookkeeping; the operation is aborted without partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invariant violated: {what}")]
pub struct InvariantViolation {
    pub what: &'static str,
}
