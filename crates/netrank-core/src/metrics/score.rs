//! Per-node score maps returned by the solvers.
//!
//! A [`ScoreMap`] holds exactly one value per graph node and iterates in the
//! graph's node order. Consumers usually want the entries sorted by score;
//! [`ScoreMap::ranked`] and [`ScoreMap::top`] do that without imposing a
//! limit on the map itself.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::GraphError;
use crate::graph::build::DirectedGraph;
use crate::graph::node::NodeId;

/// Node → score, in graph node order.
#[derive(Debug, Clone)]
pub struct ScoreMap<N = String> {
    nodes: Vec<N>,
    values: Vec<f64>,
    index: HashMap<N, usize>,
}

impl<N: NodeId> ScoreMap<N> {
    /// An empty map.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            values: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Pair each node of `graph` with the value at its position.
    ///
    /// `values` must hold one entry per node.
    pub(crate) fn from_graph(graph: &DirectedGraph<N>, values: Vec<f64>) -> Self {
        debug_assert_eq!(graph.node_count(), values.len());
        let nodes = graph.nodes().to_vec();
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.clone(), i))
            .collect();
        Self {
            nodes,
            values,
            index,
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Return `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Score of `node`, or `None` if it is not in the map.
    #[must_use]
    pub fn get(&self, node: &N) -> Option<f64> {
        self.index.get(node).map(|&i| self.values[i])
    }

    /// Score of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `node` is not in the map.
    pub fn score(&self, node: &N) -> Result<f64, GraphError> {
        self.get(node)
            .ok_or_else(|| GraphError::UnknownNode(node.to_string()))
    }

    /// Entries in graph node order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, f64)> + '_ {
        self.nodes.iter().zip(self.values.iter().copied())
    }

    /// Nodes in graph node order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Scores in graph node order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sum of all scores, added in node order.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// All entries sorted by descending score. Ties keep node order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&N, f64)> {
        let mut entries: Vec<(&N, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }

    /// The `k` highest-scoring entries, sorted descending.
    #[must_use]
    pub fn top(&self, k: usize) -> Vec<(&N, f64)> {
        let mut entries = self.ranked();
        entries.truncate(k);
        entries
    }
}

impl<N: NodeId> Default for ScoreMap<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N: NodeId> PartialEq for ScoreMap<N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.values == other.values
    }
}

impl<N: NodeId + Serialize> Serialize for ScoreMap<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (node, value) in self.iter() {
            map.serialize_entry(node, &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(edges: &[(&'static str, &'static str)], values: Vec<f64>) -> ScoreMap<&'static str> {
        let g = DirectedGraph::build(edges.iter().copied()).unwrap();
        ScoreMap::from_graph(&g, values)
    }

    #[test]
    fn lookup_and_unknown() {
        let m = map(&[("A", "B")], vec![0.25, 0.75]);
        assert_eq!(m.get(&"A"), Some(0.25));
        assert_eq!(m.score(&"B").unwrap(), 0.75);
        assert_eq!(m.get(&"Z"), None);
        assert_eq!(
            m.score(&"Z").unwrap_err(),
            GraphError::UnknownNode("Z".to_string())
        );
    }

    #[test]
    fn iteration_follows_node_order() {
        let m = map(&[("C", "A"), ("A", "B")], vec![0.1, 0.2, 0.3]);
        let nodes: Vec<_> = m.iter().map(|(n, _)| *n).collect();
        assert_eq!(nodes, vec!["C", "A", "B"]);
        assert!((m.sum() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn ranked_descending_with_stable_ties() {
        let m = map(&[("A", "B"), ("C", "D")], vec![0.2, 0.5, 0.2, 0.1]);
        let ranked: Vec<_> = m.ranked().into_iter().map(|(n, _)| *n).collect();
        assert_eq!(ranked, vec!["B", "A", "C", "D"]);

        let top: Vec<_> = m.top(2).into_iter().map(|(n, _)| *n).collect();
        assert_eq!(top, vec!["B", "A"]);
        assert_eq!(m.top(10).len(), 4);
        assert!(m.top(0).is_empty());
    }

    #[test]
    fn empty_map() {
        let m: ScoreMap<String> = ScoreMap::empty();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert!(m.ranked().is_empty());
    }

    #[test]
    fn serializes_as_ordered_object() {
        let m = map(&[("b", "a")], vec![1.0, 0.5]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"b":1.0,"a":0.5}"#);
    }
}
