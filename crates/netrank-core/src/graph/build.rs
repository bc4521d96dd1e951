//! Graph construction from an ordered edge list.
//!
//! # Overview
//!
//! [`DirectedGraph`] is a simple directed graph: at most one edge per ordered
//! pair `(u, v)`. Repeated pairs in the input collapse to a single edge.
//! Self-loops are kept and count once as an outgoing and once as an
//! incoming edge.
//!
//! ## Node Order
//!
//! Nodes are numbered in order of first appearance (source before target
//! within an edge). Every adjacency list is kept sorted by that number, so
//! solvers summing over predecessors or successors always add in the same
//! order and produce reproducible floating-point results.
//!
//! ## Immutability
//!
//! A graph is assembled through [`GraphBuilder`] and frozen by
//! [`GraphBuilder::build`]. [`DirectedGraph`] exposes no mutating methods,
//! so it can be shared between concurrent solver calls.
//!
//! ## Cache Invalidation
//!
//! [`DirectedGraph::content_hash`] is a BLAKE3 hash of the deduplicated edge
//! list in insertion order. Compare it against a stored value to decide
//! whether cached scores are still valid.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::error::{Endpoint, GraphError};
use crate::graph::node::NodeId;

// ---------------------------------------------------------------------------
// DirectedGraph
// ---------------------------------------------------------------------------

/// An immutable, simple directed graph with adjacency indices.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N = String> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
    content_hash: String,
}

impl<N: NodeId> DirectedGraph<N> {
    /// Build a graph from an ordered sequence of `(source, target)` pairs.
    ///
    /// Duplicate pairs collapse to one edge. The node set is exactly the set
    /// of endpoints seen.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidInput`] if an endpoint is undefined
    /// (see [`NodeId::is_defined`]). Duplicates never cause an error.
    #[instrument(skip(edges))]
    pub fn build<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut builder = GraphBuilder::new();
        for (source, target) in edges {
            builder.add_edge(source, target)?;
        }
        Ok(builder.build())
    }

    /// A graph with no nodes.
    #[must_use]
    pub fn empty() -> Self {
        GraphBuilder::new().build()
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Return `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return `true` if `node` is part of the graph.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Distinct edges in the order they were first seen.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.edges
            .iter()
            .map(|&(s, t)| (&self.nodes[s], &self.nodes[t]))
    }

    /// Nodes reachable from `node` over one outgoing edge, in node order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `node` is not in the graph.
    pub fn successors(&self, node: &N) -> Result<Vec<&N>, GraphError> {
        let idx = self.position(node)?;
        Ok(self.labels(self.successor_indices(idx)))
    }

    /// Nodes with an edge into `node`, in node order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `node` is not in the graph.
    pub fn predecessors(&self, node: &N) -> Result<Vec<&N>, GraphError> {
        let idx = self.position(node)?;
        Ok(self.labels(self.predecessor_indices(idx)))
    }

    /// Number of outgoing edges of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `node` is not in the graph.
    pub fn out_degree(&self, node: &N) -> Result<usize, GraphError> {
        let idx = self.position(node)?;
        Ok(self.successor_indices(idx).len())
    }

    /// Number of incoming edges of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `node` is not in the graph.
    pub fn in_degree(&self, node: &N) -> Result<usize, GraphError> {
        let idx = self.position(node)?;
        Ok(self.predecessor_indices(idx).len())
    }

    /// BLAKE3 hash of the edge set, formatted `blake3:<hex>`.
    #[must_use]
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// Position of `node` in [`Self::nodes`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `node` is not in the graph.
    pub fn position(&self, node: &N) -> Result<usize, GraphError> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(node.to_string()))
    }

    pub(crate) fn successor_indices(&self, idx: usize) -> &[usize] {
        self.successors.get(idx).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn predecessor_indices(&self, idx: usize) -> &[usize] {
        self.predecessors.get(idx).map(Vec::as_slice).unwrap_or_default()
    }

    fn labels(&self, indices: &[usize]) -> Vec<&N> {
        indices.iter().map(|&i| &self.nodes[i]).collect()
    }
}

impl<N: NodeId> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self::empty()
    }
}

// ---------------------------------------------------------------------------
// GraphBuilder
// ---------------------------------------------------------------------------

/// Incremental construction of a [`DirectedGraph`].
///
/// Use this instead of [`DirectedGraph::build`] when isolated nodes must be
/// present in the graph.
#[derive(Debug, Clone)]
pub struct GraphBuilder<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    edges: Vec<(usize, usize)>,
    seen: HashSet<(usize, usize)>,
    entries: usize,
}

impl<N: NodeId> GraphBuilder<N> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            seen: HashSet::new(),
            entries: 0,
        }
    }

    /// Register `node` without any edge. Adding a known node is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidInput`] if `node` is undefined.
    pub fn add_node(&mut self, node: N) -> Result<&mut Self, GraphError> {
        if !node.is_defined() {
            return Err(GraphError::InvalidInput {
                index: None,
                endpoint: Endpoint::Node,
            });
        }
        self.intern(node);
        Ok(self)
    }

    /// Add the edge `source → target`. Returns `false` if the edge was
    /// already present.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidInput`] if either endpoint is undefined.
    /// Neither endpoint is registered in that case.
    pub fn add_edge(&mut self, source: N, target: N) -> Result<bool, GraphError> {
        let entry = self.entries;
        self.entries += 1;

        if !source.is_defined() {
            return Err(GraphError::InvalidInput {
                index: Some(entry),
                endpoint: Endpoint::Source,
            });
        }
        if !target.is_defined() {
            return Err(GraphError::InvalidInput {
                index: Some(entry),
                endpoint: Endpoint::Target,
            });
        }

        let s = self.intern(source);
        let t = self.intern(target);
        if self.seen.insert((s, t)) {
            self.edges.push((s, t));
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Freeze the builder into an immutable graph.
    #[must_use]
    pub fn build(self) -> DirectedGraph<N> {
        let n = self.nodes.len();
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

        for &(s, t) in &self.edges {
            successors[s].push(t);
            predecessors[t].push(s);
        }
        for list in successors.iter_mut().chain(predecessors.iter_mut()) {
            list.sort_unstable();
        }

        let content_hash = compute_edge_hash(&self.nodes, &self.edges);
        debug!(
            nodes = n,
            edges = self.edges.len(),
            duplicates = self.entries - self.edges.len(),
            "graph built"
        );

        DirectedGraph {
            nodes: self.nodes,
            index: self.index,
            successors,
            predecessors,
            edges: self.edges,
            content_hash,
        }
    }

    fn intern(&mut self, node: N) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(node.clone());
        self.index.insert(node, idx);
        idx
    }
}

impl<N: NodeId> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Compute a BLAKE3 hash of the edge list for cache invalidation.
///
/// Each id is length-prefixed so ids containing separator bytes cannot
/// shift into their neighbor.
fn compute_edge_hash<N: NodeId>(nodes: &[N], edges: &[(usize, usize)]) -> String {
    let mut hasher = blake3::Hasher::new();
    let mut hash_id = |id: String| {
        hasher.update(&id.len().to_le_bytes());
        hasher.update(id.as_bytes());
    };
    for &(s, t) in edges {
        hash_id(nodes[s].to_string());
        hash_id(nodes[t].to_string());
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
