//! Stem to branch fanout derived from gates and explicit declarations.

use itertools::Itertools;
use petgraph::prelude::*;

use crate::gate::Gate;
use crate::net::NetId;

/// Which nets each net structurally drives.
///
/// Edges run stem -> branch. Adding an edge twice keeps the first, and branches come back in the order they were
/// first added.
#[derive(Clone, Debug, Default)]
pub struct FanoutGraph {
    graph: DiGraphMap<NetId, ()>,
}

impl FanoutGraph {
    /// Record that `stem` drives `branch`. Returns false if the edge was already present.
    pub fn add_edge(&mut self, stem: NetId, branch: NetId) -> bool {
        self.graph.add_edge(stem, branch, ()).is_none()
    }

    /// Record that both inputs of `gate` drive its output.
    pub fn add_gate(&mut self, gate: &Gate) {
        for input in gate.inputs() {
            self.add_edge(input, gate.output);
        }
    }

    /// Nets driven by `stem`, in first-seen order.
    pub fn branches(&self, stem: NetId) -> impl Iterator<Item = NetId> + '_ {
        self.graph.neighbors(stem)
    }

    /// Every stem with at least one branch, ascending, paired with its branches.
    pub fn stems(&self) -> impl Iterator<Item = (NetId, Vec<NetId>)> + '_ {
        self.graph
            .nodes()
            .filter(move |node| self.branches(*node).next().is_some())
            .sorted()
            .map(move |stem| (stem, self.branches(stem).collect()))
    }

    /// Number of distinct stem -> branch edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if no edge has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }
}
