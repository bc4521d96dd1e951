pub mod info;
pub mod rank;

use std::path::Path;

use anyhow::Result;
use netrank_core::DirectedGraph;

use crate::edges::load_edges;

/// Load an edge CSV and build its graph.
pub fn load_graph(path: &Path) -> Result<DirectedGraph<String>> {
    load_edges(path)?.into_graph()
}
