//! HITS (Hyperlink-Induced Topic Search) algorithm.
//!
//! # Overview
//!
//! HITS computes two scores for each node:
//!
//! - **Authority score**: how much a node is pointed to by good hubs.
//! - **Hub score**: how much a node points to good authorities.
//!
//! # Algorithm
//!
//! 1. Initialize all hub and authority scores to 1.0.
//! 2. Authority update: `auth(v) = sum of hub(u) for all u → v`.
//! 3. Hub update: `hub(v) = sum of auth(w) for all v → w`.
//! 4. Normalize both vectors.
//! 5. Stop when `Σ |Δauth| + |Δhub|` < tolerance or after `max_iter`.
//!
//! Both updates in step 2 and 3 read the scores from the start of the
//! iteration; the hub update does not see the authorities just computed.
//!
//! Normalization divides by the vector's **sum** by default
//! ([`HitsNormalization::Sum`]), so each vector sums to 1 unless it is all
//! zeros. [`HitsNormalization::Euclidean`] gives the textbook unit-L2
//! vectors instead.
//!
//! The default iteration cap is 2. With that cap the scores are usually far
//! from the HITS fixed point; raise `max_iter` for converged values.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::graph::build::DirectedGraph;
use crate::graph::node::NodeId;
use crate::metrics::convergence::{normalize_l2, normalize_sum};
use crate::metrics::score::ScoreMap;

/// How authority and hub vectors are rescaled after each update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitsNormalization {
    /// Divide by the sum of the vector (skipped when the sum is zero).
    #[default]
    Sum,
    /// Divide by the L2 norm of the vector (skipped when the norm is zero).
    Euclidean,
}

impl HitsNormalization {
    fn apply(self, v: &mut [f64]) {
        match self {
            Self::Sum => normalize_sum(v),
            Self::Euclidean => normalize_l2(v),
        }
    }
}

/// Configuration for HITS computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitsConfig {
    /// Stop when the summed absolute change of both vectors is below this.
    /// Default: 1e-4.
    pub tolerance: f64,
    /// Maximum number of iterations.
    /// Default: 2.
    pub max_iter: usize,
    /// Vector normalization.
    /// Default: [`HitsNormalization::Sum`].
    pub normalization: HitsNormalization,
}

impl Default for HitsConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iter: 2,
            normalization: HitsNormalization::Sum,
        }
    }
}

/// Result of the HITS algorithm.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "N: NodeId + Serialize"))]
pub struct HitsResult<N = String> {
    /// Authority scores: node → authority score.
    pub authorities: ScoreMap<N>,
    /// Hub scores: node → hub score.
    pub hubs: ScoreMap<N>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the algorithm converged within `max_iter`.
    pub converged: bool,
}

/// Compute HITS authority and hub scores.
///
/// A graph with no nodes yields two empty maps and counts as converged.
/// A node without predecessors ends with authority 0 and a node without
/// successors with hub 0, once at least one iteration has run.
#[must_use]
#[instrument(skip(graph, config), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn hits<N: NodeId>(graph: &DirectedGraph<N>, config: &HitsConfig) -> HitsResult<N> {
    let n = graph.node_count();

    if n == 0 {
        return HitsResult {
            authorities: ScoreMap::empty(),
            hubs: ScoreMap::empty(),
            iterations: 0,
            converged: true,
        };
    }

    let mut auth: Vec<f64> = vec![1.0; n];
    let mut hub: Vec<f64> = vec![1.0; n];

    let mut converged = false;
    let mut iterations = 0;

    for iter in 0..config.max_iter {
        iterations = iter + 1;

        // Authority update: auth(v) = sum of hub(u) for all u → v.
        // Sums start at +0.0; an empty f64 `sum()` yields -0.0.
        let mut new_auth: Vec<f64> = (0..n)
            .map(|v| {
                graph
                    .predecessor_indices(v)
                    .iter()
                    .fold(0.0, |acc, &u| acc + hub[u])
            })
            .collect();

        // Hub update: hub(v) = sum of auth(w) for all v → w, previous auth.
        let mut new_hub: Vec<f64> = (0..n)
            .map(|v| {
                graph
                    .successor_indices(v)
                    .iter()
                    .fold(0.0, |acc, &w| acc + auth[w])
            })
            .collect();

        config.normalization.apply(&mut new_auth);
        config.normalization.apply(&mut new_hub);

        let diff: f64 = (0..n)
            .map(|v| (new_auth[v] - auth[v]).abs() + (new_hub[v] - hub[v]).abs())
            .sum();

        auth = new_auth;
        hub = new_hub;
        trace!(iteration = iterations, diff, "hits iteration");

        if diff < config.tolerance {
            converged = true;
            break;
        }
    }

    debug!(iterations, converged, "hits finished");

    HitsResult {
        authorities: ScoreMap::from_graph(graph, auth),
        hubs: ScoreMap::from_graph(graph, hub),
        iterations,
        converged,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build::GraphBuilder;

    fn make_graph(edges: &[(&'static str, &'static str)]) -> DirectedGraph<&'static str> {
        DirectedGraph::build(edges.iter().copied()).unwrap()
    }

    fn converging() -> HitsConfig {
        HitsConfig {
            max_iter: 100,
            tolerance: 1e-9,
            ..HitsConfig::default()
        }
    }

    #[test]
    fn empty_graph_returns_empty() {
        let g: DirectedGraph<&str> = DirectedGraph::empty();
        let result = hits(&g, &HitsConfig::default());
        assert!(result.hubs.is_empty());
        assert!(result.authorities.is_empty());
        assert!(result.converged);
    }

    #[test]
    fn single_edge_stabilizes_after_first_iteration() {
        // A → B with the default cap of 2.
        let result = hits(&make_graph(&[("A", "B")]), &HitsConfig::default());

        assert_eq!(result.authorities.values(), &[0.0, 1.0]);
        assert_eq!(result.hubs.values(), &[1.0, 0.0]);
        assert_eq!(result.iterations, 2);
        assert!(result.converged, "second iteration repeats the first");
    }

    #[test]
    fn unlinked_scores_are_positive_zero() {
        // `==` treats -0.0 as 0.0, so check the sign bit directly.
        let result = hits(&make_graph(&[("A", "B")]), &HitsConfig::default());
        let auth_a = result.authorities.get(&"A").unwrap();
        let hub_b = result.hubs.get(&"B").unwrap();
        assert!(auth_a.is_sign_positive(), "authority of A is {auth_a:?}");
        assert!(hub_b.is_sign_positive(), "hub of B is {hub_b:?}");

        let sorted = result.authorities.ranked();
        assert_eq!(sorted[1].1.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn single_iteration_cap() {
        let config = HitsConfig {
            max_iter: 1,
            ..HitsConfig::default()
        };
        let result = hits(&make_graph(&[("A", "B")]), &config);
        assert_eq!(result.authorities.get(&"B"), Some(1.0));
        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
    }

    #[test]
    fn zero_iterations_keeps_initial_scores() {
        let config = HitsConfig {
            max_iter: 0,
            ..HitsConfig::default()
        };
        let result = hits(&make_graph(&[("A", "B")]), &config);
        assert_eq!(result.authorities.values(), &[1.0, 1.0]);
        assert_eq!(result.hubs.values(), &[1.0, 1.0]);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn updates_share_the_prior_snapshot() {
        // A → B, A → C, C → B, one iteration from all-ones.
        //   auth = [0, hub(A) + hub(C), hub(A)] = [0, 2, 1] / 3
        //   hub  = [auth(B) + auth(C), 0, auth(B)] = [2, 0, 1] / 3
        // Reading the fresh authorities instead would give hub(A) = 3.
        let config = HitsConfig {
            max_iter: 1,
            ..HitsConfig::default()
        };
        let result = hits(&make_graph(&[("A", "B"), ("A", "C"), ("C", "B")]), &config);

        let expected_auth = [0.0, 2.0 / 3.0, 1.0 / 3.0];
        let expected_hub = [2.0 / 3.0, 0.0, 1.0 / 3.0];
        for (got, want) in result.authorities.values().iter().zip(expected_auth) {
            assert!((got - want).abs() < 1e-12, "auth {got} != {want}");
        }
        for (got, want) in result.hubs.values().iter().zip(expected_hub) {
            assert!((got - want).abs() < 1e-12, "hub {got} != {want}");
        }
    }

    #[test]
    fn sum_normalization_sums_to_one() {
        let g = make_graph(&[("A", "B"), ("A", "C"), ("B", "C"), ("C", "A")]);
        let result = hits(&g, &HitsConfig::default());
        assert!((result.authorities.sum() - 1.0).abs() < 1e-12);
        assert!((result.hubs.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn euclidean_normalization_unit_norm() {
        let g = make_graph(&[("A", "B"), ("A", "C"), ("B", "C")]);
        let config = HitsConfig {
            normalization: HitsNormalization::Euclidean,
            ..converging()
        };
        let result = hits(&g, &config);
        let norm: f64 = result.hubs.values().iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12, "norm = {norm}");
    }

    #[test]
    fn isolated_node_scores_zero() {
        let mut b = GraphBuilder::new();
        b.add_node("X").unwrap();
        b.add_edge("A", "B").unwrap();
        let result = hits(&b.build(), &HitsConfig::default());
        assert_eq!(result.authorities.get(&"X"), Some(0.0));
        assert_eq!(result.hubs.get(&"X"), Some(0.0));
    }

    #[test]
    fn edgeless_graph_keeps_zero_vectors() {
        // Sums are zero: normalization is skipped, raw zeros are kept.
        let mut b = GraphBuilder::new();
        b.add_node("A").unwrap();
        b.add_node("B").unwrap();
        let result = hits(&b.build(), &HitsConfig::default());
        assert_eq!(result.authorities.values(), &[0.0, 0.0]);
        assert_eq!(result.hubs.values(), &[0.0, 0.0]);
    }

    #[test]
    fn star_hub_topology() {
        // A → B, A → C, A → D (A is a hub, B/C/D are authorities)
        let result = hits(&make_graph(&[("A", "B"), ("A", "C"), ("A", "D")]), &converging());

        assert_eq!(result.hubs.get(&"A"), Some(1.0));
        let b = result.authorities.get(&"B").unwrap();
        let c = result.authorities.get(&"C").unwrap();
        let d = result.authorities.get(&"D").unwrap();
        assert!((b - 1.0 / 3.0).abs() < 1e-12);
        assert!((b - c).abs() < 1e-15 && (c - d).abs() < 1e-15);
    }

    #[test]
    fn star_authority_topology() {
        // A → D, B → D, C → D (D is the authority, A/B/C are hubs)
        let result = hits(&make_graph(&[("A", "D"), ("B", "D"), ("C", "D")]), &converging());

        assert_eq!(result.authorities.get(&"D"), Some(1.0));
        let ranked = result.hubs.ranked();
        assert!((ranked[0].1 - ranked[2].1).abs() < 1e-15, "hubs tie");
    }

    #[test]
    fn hits_is_deterministic() {
        let g = make_graph(&[("A", "B"), ("B", "C"), ("C", "A"), ("A", "C"), ("D", "A")]);
        let first = hits(&g, &converging());
        let second = hits(&g, &converging());
        assert_eq!(first.authorities, second.authorities);
        assert_eq!(first.hubs, second.hubs);
    }
}
