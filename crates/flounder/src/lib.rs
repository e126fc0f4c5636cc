//! Left-right planarity testing.
//!
//! Decides whether a finite simple undirected graph admits a drawing in the
//! plane with no edge crossings. The test runs in linear time: a first DFS
//! orients the graph into a palm tree and computes lowpoints and nesting
//! depths, a second DFS walks children in nesting-depth order and maintains a
//! stack of conflict pairs enforcing the left-right constraints.
//!
//! Baseline: U. Brandes, "The left-right planarity test" (a refinement of
//! Hopcroft–Tarjan and de Fraysseix–Rosenstiehl).

pub use flounder_graphlib as graphlib;

use flounder_graphlib::NodeId;

mod orient;
mod state;
mod testing;

/// Read-only view of a finite simple undirected graph.
///
/// Iteration orders must be deterministic (repeated calls yield the same
/// sequences). Self-loops and parallel edges are outside the supported
/// domain; verdicts on such inputs are unspecified.
pub trait UndirectedGraph {
    fn node_count(&self) -> usize;

    /// Number of undirected edges, each counted once.
    fn edge_count(&self) -> usize;

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Neighbors of `v`, empty for unknown vertices.
    fn neighbors(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_;
}

impl UndirectedGraph for graphlib::Graph {
    fn node_count(&self) -> usize {
        graphlib::Graph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        graphlib::Graph::edge_count(self)
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        graphlib::Graph::nodes(self)
    }

    fn neighbors(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        graphlib::Graph::neighbors(self, v)
    }
}

/// Reports whether `g` is planar.
///
/// Non-planarity is an ordinary verdict, not an error: the call has no
/// failure channel and performs no I/O. The state it builds is owned by the
/// invocation and discarded on return, so independent calls on distinct
/// graphs may run concurrently.
pub fn is_planar<G: UndirectedGraph>(g: &G) -> bool {
    let n = g.node_count();
    let m = g.edge_count();

    // Euler criterion: a simple planar graph on more than two vertices has
    // at most 3|V| - 6 edges.
    if n > 2 && m > 3 * n - 6 {
        return false;
    }

    let mut st = state::LrState::new(g);
    orient::run(&mut st);
    st.sort_outgoing();
    st.prepare_testing();
    testing::run(&mut st)
}
