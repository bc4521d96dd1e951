//! Edge list loader for CSV files with a `source,target` header.
//!
//! ```text
//! source,target,weight
//! alice,bob,1
//! "carol, jr",alice,2
//! ```
//!
//! Column order is free and extra columns are ignored. A blank or missing
//! endpoint cell is kept as an empty id; graph construction rejects it.

use std::path::Path;

use anyhow::{Context, Result, bail};
use netrank_core::{DirectedGraph, GraphError};
use tracing::debug;

/// Edges read from a file, with the 1-based line each edge came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub edges: Vec<(String, String)>,
    pub lines: Vec<usize>,
}

impl EdgeList {
    /// Build the graph, attaching the file line to endpoint errors.
    ///
    /// # Errors
    ///
    /// Returns the [`GraphError`] from construction, with the offending line
    /// number as context.
    pub fn into_graph(self) -> Result<DirectedGraph<String>> {
        let lines = self.lines;
        DirectedGraph::build(self.edges).map_err(|err| {
            let GraphError::InvalidInput {
                index: Some(index), ..
            } = &err
            else {
                return anyhow::Error::new(err);
            };
            let Some(&line) = lines.get(*index) else {
                return anyhow::Error::new(err);
            };
            anyhow::Error::new(err).context(format!("line {line}"))
        })
    }
}

/// Read and parse an edge CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid edge CSV.
pub fn load_edges(path: &Path) -> Result<EdgeList> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let list = parse_edges(&content).with_context(|| format!("Invalid edge file {}", path.display()))?;
    debug!(path = %path.display(), edges = list.edges.len(), "loaded edge file");
    Ok(list)
}

/// Parse edge CSV text.
///
/// # Errors
///
/// Returns an error if there is no header, the header lacks a `source` or
/// `target` column, or a quoted field is not terminated.
pub fn parse_edges(content: &str) -> Result<EdgeList> {
    let mut rows = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((header_line, header)) = rows.next() else {
        bail!("missing header line");
    };
    let columns = split_record(header).with_context(|| format!("line {header_line}"))?;
    let find = |name: &str| {
        columns
            .iter()
            .position(|c| c.trim().eq_ignore_ascii_case(name))
    };
    let (Some(source_col), Some(target_col)) = (find("source"), find("target")) else {
        bail!("header must name a `source` and a `target` column");
    };

    let mut list = EdgeList::default();
    for (line_no, line) in rows {
        let fields = split_record(line).with_context(|| format!("line {line_no}"))?;
        let cell = |col: usize| fields.get(col).map_or_else(String::new, |f| f.trim().to_string());
        list.edges.push((cell(source_col), cell(target_col)));
        list.lines.push(line_no);
    }
    Ok(list)
}

/// Split one CSV record on commas, honoring double quotes.
fn split_record(line: &str) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            (',', false) => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        bail!("unterminated quoted field");
    }
    fields.push(field);
    Ok(fields)
}
