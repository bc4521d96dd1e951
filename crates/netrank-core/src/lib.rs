#![forbid(unsafe_code)]
//! netrank-core library.
//!
//! PageRank and HITS over a simple directed graph built from an edge list.
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums in [`error`] for graph and parameter
//!   errors; `anyhow::Result` where files are read ([`config`]).
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`) and
//!   `#[instrument]` on solver entry points.

pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;

pub use error::{ConfigError, Endpoint, GraphError};
pub use graph::{DirectedGraph, GraphBuilder, GraphStats, NodeId};
pub use metrics::{
    DanglingPolicy, HitsConfig, HitsNormalization, HitsResult, PageRankConfig, PageRankResult,
    ScoreMap, hits, pagerank,
};
