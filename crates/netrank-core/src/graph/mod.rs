//! Directed graph module for ranking computation.
//!
//! # Overview
//!
//! This module owns the graph representation both solvers read from. It is
//! built once from an ordered edge list and never mutated afterwards.
//!
//! ## Pipeline
//!
//! ```text
//! (source, target) pairs
//!        ↓  build::DirectedGraph::build()
//! DirectedGraph (deduplicated, adjacency indices in node order)
//!        ├─ metrics::pagerank::pagerank()
//!        ├─ metrics::hits::hits()
//!        └─ stats::GraphStats::from_graph()
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use netrank_core::graph::{DirectedGraph, GraphStats};
//!
//! let g = DirectedGraph::build([("A", "B"), ("B", "C"), ("A", "B")])?;
//! let stats = GraphStats::from_graph(&g);
//!
//! assert_eq!(stats.node_count, 3);
//! assert_eq!(stats.edge_count, 2);
//! assert_eq!(g.out_degree(&"A")?, 1);
//! # Ok::<(), netrank_core::error::GraphError>(())
//! ```

pub mod build;
pub mod node;
pub mod stats;

// Re-export primary types at module level for convenience.
pub use build::{DirectedGraph, GraphBuilder};
pub use node::NodeId;
pub use stats::GraphStats;
