//! `netrank info`: graph summary for an edge file.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use netrank_core::GraphStats;
use serde::Serialize;

use super::load_graph;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `netrank info`.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Edge CSV file with `source` and `target` columns.
    pub edges: PathBuf,
}

/// Report payload for `netrank info`.
#[derive(Debug, Serialize)]
pub struct GraphInfo {
    pub node_count: usize,
    pub edge_count: usize,
    pub content_hash: String,
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub stats: GraphStats,
}

/// Execute `netrank info`.
pub fn run_info(args: &InfoArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.edges)?;

    let info = GraphInfo {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        content_hash: graph.content_hash().to_string(),
        nodes: graph.nodes().to_vec(),
        edges: graph
            .edges()
            .map(|(s, t)| (s.clone(), t.clone()))
            .collect(),
        stats: GraphStats::from_graph(&graph),
    };

    render_mode(output, &info, render_info_text, render_info_pretty)
}

fn render_info_text(info: &GraphInfo, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "Number of nodes: {}", info.node_count)?;
    writeln!(w, "Number of edges: {}", info.edge_count)?;
    writeln!(w, "Nodes: {}", info.nodes.join(", "))?;
    let edges: Vec<String> = info.edges.iter().map(|(s, t)| format!("{s}->{t}")).collect();
    writeln!(w, "Edges: {}", edges.join(", "))
}

fn render_info_pretty(info: &GraphInfo, w: &mut dyn Write) -> io::Result<()> {
    let stats = &info.stats;
    pretty_section(w, "Graph")?;
    pretty_kv(w, "Nodes", info.node_count.to_string())?;
    pretty_kv(w, "Edges", info.edge_count.to_string())?;
    pretty_kv(w, "Density", format!("{:.4}", stats.density))?;
    pretty_kv(w, "Self-loops", stats.self_loop_count.to_string())?;
    pretty_kv(w, "Dangling", stats.dangling_node_count.to_string())?;
    pretty_kv(w, "Sources", stats.source_node_count.to_string())?;
    pretty_kv(w, "Isolated", stats.isolated_node_count.to_string())?;
    pretty_kv(w, "Max in-degree", stats.max_in_degree.to_string())?;
    pretty_kv(w, "Max out-degree", stats.max_out_degree.to_string())?;
    pretty_kv(w, "Hash", &info.content_hash)?;
    writeln!(w)?;

    pretty_section(w, "Nodes")?;
    for node in &info.nodes {
        writeln!(w, "  {node}")?;
    }
    writeln!(w)?;

    pretty_section(w, "Edges")?;
    for (source, target) in &info.edges {
        writeln!(w, "  {source} → {target}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphInfo {
        let graph = netrank_core::DirectedGraph::build([
            ("A".to_string(), "B".to_string()),
            ("B".to_string(), "A".to_string()),
        ])
        .unwrap();
        GraphInfo {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            content_hash: graph.content_hash().to_string(),
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().map(|(s, t)| (s.clone(), t.clone())).collect(),
            stats: GraphStats::from_graph(&graph),
        }
    }

    #[test]
    fn text_lists_nodes_and_edges() {
        let mut buf = Vec::new();
        render_info_text(&sample(), &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(
            s,
            "Number of nodes: 2\nNumber of edges: 2\nNodes: A, B\nEdges: A->B, B->A\n"
        );
    }

    #[test]
    fn pretty_includes_stats() {
        let mut buf = Vec::new();
        render_info_pretty(&sample(), &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains("Density:"));
        assert!(s.contains("1.0000"));
        assert!(s.contains("A → B"));
    }
}
