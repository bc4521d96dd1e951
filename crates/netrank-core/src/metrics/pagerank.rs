//! PageRank by power iteration.
//!
//! # Overview
//!
//! PageRank models a random walker who follows an outgoing edge with
//! probability `d` (the damping factor) and jumps to a uniformly random node
//! otherwise. A node ranks high when high-ranking nodes point to it.
//!
//! # Algorithm
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / out_degree(u)   for each u → v
//! ```
//!
//! Every node starts at `1 / N`. Each iteration computes all new ranks from
//! the previous iteration's ranks, then measures the L1 distance between the
//! two vectors. The loop stops when that distance drops below the tolerance
//! or the iteration cap is reached; the ranks of the last iteration are
//! returned either way.
//!
//! # Dangling Nodes
//!
//! A node without outgoing edges passes its rank to nobody. Under the
//! default [`DanglingPolicy::Drop`] that mass simply leaves the system, so
//! the ranks of a graph with dangling nodes sum to less than 1.
//! [`DanglingPolicy::Redistribute`] spreads it uniformly over all nodes
//! instead, which keeps the total at 1.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::graph::build::DirectedGraph;
use crate::graph::node::NodeId;
use crate::metrics::convergence::l1_distance;
use crate::metrics::score::ScoreMap;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// What happens to rank held by nodes with no outgoing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingPolicy {
    /// The mass is lost. Ranks may sum to less than 1.
    #[default]
    Drop,
    /// The mass is shared equally by every node on the next iteration.
    Redistribute,
}

/// Configuration for PageRank computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    /// Default: 0.85.
    pub damping: f64,
    /// Convergence threshold: stop when L1 norm of rank delta < tolerance.
    /// Default: 1e-4.
    pub tolerance: f64,
    /// Maximum number of iterations.
    /// Default: 100.
    pub max_iter: usize,
    /// Treatment of dangling nodes.
    /// Default: [`DanglingPolicy::Drop`].
    pub dangling: DanglingPolicy,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-4,
            max_iter: 100,
            dangling: DanglingPolicy::Drop,
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Result of a PageRank computation.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "N: NodeId + Serialize"))]
pub struct PageRankResult<N = String> {
    /// PageRank scores: node → rank, in graph node order.
    pub scores: ScoreMap<N>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the rank delta fell below the tolerance within `max_iter`.
    pub converged: bool,
}

// ---------------------------------------------------------------------------
// PageRank
// ---------------------------------------------------------------------------

/// Compute PageRank for every node of `graph`.
///
/// An empty graph yields an empty score map and counts as converged.
/// The computation never fails; per-node sums run in node order, so
/// identical inputs give bit-identical scores.
#[must_use]
#[instrument(skip(graph, config), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn pagerank<N: NodeId>(graph: &DirectedGraph<N>, config: &PageRankConfig) -> PageRankResult<N> {
    let n = graph.node_count();

    if n == 0 {
        return PageRankResult {
            scores: ScoreMap::empty(),
            iterations: 0,
            converged: true,
        };
    }

    let n_f64 = n as f64;
    let base = (1.0 - config.damping) / n_f64;
    let out_degree: Vec<usize> = (0..n).map(|v| graph.successor_indices(v).len()).collect();

    // Initialize ranks uniformly.
    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0_f64; n];

    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iter {
        iterations += 1;

        let teleport = match config.dangling {
            DanglingPolicy::Drop => base,
            DanglingPolicy::Redistribute => {
                let dangling_sum: f64 = ranks
                    .iter()
                    .zip(&out_degree)
                    .filter(|&(_, &d)| d == 0)
                    .map(|(r, _)| r)
                    .sum();
                base + config.damping * dangling_sum / n_f64
            }
        };

        // Pull rank from every predecessor; out-degree 0 contributes nothing.
        for (v, slot) in new_ranks.iter_mut().enumerate() {
            let inflow: f64 = graph
                .predecessor_indices(v)
                .iter()
                .filter(|&&u| out_degree[u] > 0)
                .map(|&u| ranks[u] / out_degree[u] as f64)
                .sum();
            *slot = teleport + config.damping * inflow;
        }

        // Check convergence: L1 norm of delta.
        let delta = l1_distance(&ranks, &new_ranks);

        std::mem::swap(&mut ranks, &mut new_ranks);
        trace!(iteration = iterations, delta, "pagerank iteration");

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    debug!(iterations, converged, "pagerank finished");

    PageRankResult {
        scores: ScoreMap::from_graph(graph, ranks),
        iterations,
        converged,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
