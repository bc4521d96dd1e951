//! Basic statistics for a directed graph.
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: size of the graph (edges deduplicated).
//! - **density**: `edge_count / (node_count * (node_count - 1))`. Zero for
//!   graphs with fewer than two nodes. Self-loops count as edges, so a graph
//!   full of them can exceed 1.0.
//! - **self_loop_count**: edges `v → v`.
//! - **dangling_node_count**: nodes with no outgoing edges. PageRank mass
//!   that reaches these nodes is dropped under the default policy.
//! - **source_node_count**: nodes with no incoming edges (authority 0 after
//!   the first HITS update).
//! - **isolated_node_count**: nodes with neither in- nor out-edges.
//! - **max_in_degree** / **max_out_degree**.

use serde::Serialize;

use crate::graph::build::DirectedGraph;
use crate::graph::node::NodeId;

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for a [`DirectedGraph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,
    /// Edge density over all ordered pairs of distinct nodes.
    pub density: f64,
    /// Number of `v → v` edges.
    pub self_loop_count: usize,
    /// Nodes with out-degree zero.
    pub dangling_node_count: usize,
    /// Nodes with in-degree zero.
    pub source_node_count: usize,
    /// Nodes with no edges at all.
    pub isolated_node_count: usize,
    /// Highest in-degree over all nodes.
    pub max_in_degree: usize,
    /// Highest out-degree over all nodes.
    pub max_out_degree: usize,
}

impl GraphStats {
    /// Compute statistics for `graph`.
    #[must_use]
    pub fn from_graph<N: NodeId>(graph: &DirectedGraph<N>) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();

        let mut stats = Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            self_loop_count: graph.edges().filter(|(s, t)| s == t).count(),
            dangling_node_count: 0,
            source_node_count: 0,
            isolated_node_count: 0,
            max_in_degree: 0,
            max_out_degree: 0,
        };

        for idx in 0..node_count {
            let out_degree = graph.successor_indices(idx).len();
            let in_degree = graph.predecessor_indices(idx).len();

            if out_degree == 0 {
                stats.dangling_node_count += 1;
            }
            if in_degree == 0 {
                stats.source_node_count += 1;
            }
            if out_degree == 0 && in_degree == 0 {
                stats.isolated_node_count += 1;
            }
            stats.max_in_degree = stats.max_in_degree.max(in_degree);
            stats.max_out_degree = stats.max_out_degree.max(out_degree);
        }

        stats
    }

    /// Return `true` if the graph has no edges.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.edge_count == 0
    }

    /// Return `true` if some node has no outgoing edges.
    #[must_use]
    pub const fn has_dangling_nodes(&self) -> bool {
        self.dangling_node_count > 0
    }
}

fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
