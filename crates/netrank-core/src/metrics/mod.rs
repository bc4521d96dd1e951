//! Ranking metrics for a directed graph.
//!
//! # Overview
//!
//! Two iterative solvers read a [`DirectedGraph`] and score every node:
//!
//! - **PageRank** (`pagerank`): which nodes would a random walker visit
//!   most often?
//! - **HITS** (`hits`): which nodes are authoritative (pointed to by good
//!   hubs) and which are hubs (pointing to good authorities)?
//!
//! # Usage
//!
//! Both solvers return [`ScoreMap`]s keyed by the graph's node ids, in the
//! graph's node order. Neither solver can fail.
//!
//! ```rust
//! use netrank_core::graph::DirectedGraph;
//! use netrank_core::metrics::hits::{HitsConfig, hits};
//! use netrank_core::metrics::pagerank::{PageRankConfig, pagerank};
//!
//! let g = DirectedGraph::build([("A", "B"), ("B", "C"), ("C", "A")])?;
//!
//! let pr = pagerank(&g, &PageRankConfig::default());
//! let h = hits(&g, &HitsConfig::default());
//!
//! assert_eq!(pr.scores.len(), 3);
//! assert_eq!(h.authorities.len(), 3);
//! # Ok::<(), netrank_core::error::GraphError>(())
//! ```
//!
//! [`DirectedGraph`]: crate::graph::DirectedGraph

pub mod convergence;
pub mod hits;
pub mod pagerank;
pub mod score;

pub use hits::{HitsConfig, HitsNormalization, HitsResult, hits};
pub use pagerank::{DanglingPolicy, PageRankConfig, PageRankResult, pagerank};
pub use score::ScoreMap;
