//! Error types for graph construction, queries and solver configuration.
//!
//! Solvers themselves never fail: degenerate inputs (no nodes, dangling
//! nodes, zero normalization sums) are numeric special cases. Only building
//! a graph from malformed edges, querying a node that is not in the graph,
//! or supplying out-of-range solver parameters produce an error.

use std::fmt;

// ---------------------------------------------------------------------------
// GraphError
// ---------------------------------------------------------------------------

/// Which side of an edge a construction error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The edge's source (tail).
    Source,
    /// The edge's target (head).
    Target,
    /// A node added on its own, outside any edge.
    Node,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
            Self::Node => f.write_str("node"),
        }
    }
}

/// Errors raised while building or querying a [`crate::graph::DirectedGraph`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge entry has a missing or blank endpoint.
    ///
    /// `index` is the zero-based position of the entry in the input
    /// sequence. For nodes added on their own it is `None`.
    #[error("invalid input: {}", describe_invalid(*.index, *.endpoint))]
    InvalidInput {
        index: Option<usize>,
        endpoint: Endpoint,
    },

    /// The queried node is not part of the graph.
    #[error("unknown node: {0}")]
    UnknownNode(String),
}

fn describe_invalid(index: Option<usize>, endpoint: Endpoint) -> String {
    match index {
        Some(i) => format!("edge #{i} has an undefined {endpoint}"),
        None => format!("{endpoint} id is undefined"),
    }
}

impl GraphError {
    /// Stable machine-readable identifier for this error kind.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::UnknownNode(_) => "unknown_node",
        }
    }

    /// Remediation hint suitable for terminal output.
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Every edge needs a non-blank source and target id.",
            Self::UnknownNode(_) => "Check the node id against the graph's node list.",
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Out-of-range solver parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Damping must lie in `[0, 1]`.
    #[error("damping factor {0} is outside [0, 1]")]
    DampingOutOfRange(f64),

    /// Tolerances must be finite and non-negative.
    #[error("{solver} tolerance {value} must be finite and non-negative")]
    InvalidTolerance { solver: &'static str, value: f64 },
}

impl ConfigError {
    /// Stable machine-readable identifier for this error kind.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DampingOutOfRange(_) => "damping_out_of_range",
            Self::InvalidTolerance { .. } => "invalid_tolerance",
        }
    }
}
