//! `netrank rank`: PageRank and HITS scores for an edge file.
//!
//! Parameters come from the config file first; command-line flags override
//! individual values. The merged config is validated before any solver runs.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use netrank_core::config::RankConfig;
use netrank_core::{DanglingPolicy, HitsNormalization, ScoreMap, hits, pagerank};
use serde::Serialize;
use tracing::debug;

use super::load_graph;
use crate::output::{OutputMode, pretty_rule, pretty_section, render_mode};

/// Which score maps to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Metric {
    #[default]
    All,
    Pagerank,
    Hits,
}

impl Metric {
    const fn wants_pagerank(self) -> bool {
        matches!(self, Self::All | Self::Pagerank)
    }

    const fn wants_hits(self) -> bool {
        matches!(self, Self::All | Self::Hits)
    }
}

/// Arguments for `netrank rank`.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Edge CSV file with `source` and `target` columns.
    pub edges: PathBuf,

    /// Entries to show per score map (0 shows every node).
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Score maps to compute.
    #[arg(long, value_enum, default_value_t = Metric::All)]
    pub metric: Metric,

    /// PageRank damping factor in [0, 1].
    #[arg(long)]
    pub damping: Option<f64>,

    /// PageRank convergence tolerance.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// PageRank iteration cap.
    #[arg(long)]
    pub max_iter: Option<usize>,

    /// HITS convergence tolerance.
    #[arg(long)]
    pub hits_tolerance: Option<f64>,

    /// HITS iteration cap.
    #[arg(long)]
    pub hits_max_iter: Option<usize>,

    /// Spread dangling-node rank uniformly instead of dropping it.
    #[arg(long)]
    pub redistribute_dangling: bool,

    /// Normalize HITS vectors to unit length instead of unit sum.
    #[arg(long)]
    pub euclidean: bool,
}

impl RankArgs {
    /// Overlay command-line values on `config`.
    fn apply(&self, mut config: RankConfig) -> RankConfig {
        if let Some(damping) = self.damping {
            config.pagerank.damping = damping;
        }
        if let Some(tolerance) = self.tolerance {
            config.pagerank.tolerance = tolerance;
        }
        if let Some(max_iter) = self.max_iter {
            config.pagerank.max_iter = max_iter;
        }
        if self.redistribute_dangling {
            config.pagerank.dangling = DanglingPolicy::Redistribute;
        }
        if let Some(tolerance) = self.hits_tolerance {
            config.hits.tolerance = tolerance;
        }
        if let Some(max_iter) = self.hits_max_iter {
            config.hits.max_iter = max_iter;
        }
        if self.euclidean {
            config.hits.normalization = HitsNormalization::Euclidean;
        }
        config
    }
}

#[derive(Debug, Serialize)]
struct Entry {
    node: String,
    score: f64,
}

#[derive(Debug, Serialize)]
struct PageRankSection {
    iterations: usize,
    converged: bool,
    scores: Vec<Entry>,
}

#[derive(Debug, Serialize)]
struct HitsSection {
    iterations: usize,
    converged: bool,
    authorities: Vec<Entry>,
    hubs: Vec<Entry>,
}

/// Report payload for `netrank rank`.
#[derive(Debug, Serialize)]
pub struct RankReport {
    node_count: usize,
    edge_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagerank: Option<PageRankSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hits: Option<HitsSection>,
}

fn top_entries(scores: &ScoreMap, k: usize) -> Vec<Entry> {
    let ranked = if k == 0 { scores.ranked() } else { scores.top(k) };
    ranked
        .into_iter()
        .map(|(node, score)| Entry {
            node: node.clone(),
            score,
        })
        .collect()
}

/// Execute `netrank rank`.
pub fn run_rank(args: &RankArgs, base: RankConfig, output: OutputMode) -> anyhow::Result<()> {
    let config = args.apply(base);
    config.validate()?;
    debug!(?config, "rank parameters");

    let graph = load_graph(&args.edges)?;

    let pagerank_section = args.metric.wants_pagerank().then(|| {
        let result = pagerank(&graph, &config.pagerank);
        PageRankSection {
            iterations: result.iterations,
            converged: result.converged,
            scores: top_entries(&result.scores, args.top),
        }
    });

    let hits_section = args.metric.wants_hits().then(|| {
        let result = hits(&graph, &config.hits);
        HitsSection {
            iterations: result.iterations,
            converged: result.converged,
            authorities: top_entries(&result.authorities, args.top),
            hubs: top_entries(&result.hubs, args.top),
        }
    });

    let report = RankReport {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        pagerank: pagerank_section,
        hits: hits_section,
    };

    render_mode(output, &report, render_rank_text, render_rank_pretty)
}

fn render_rank_text(report: &RankReport, w: &mut dyn Write) -> io::Result<()> {
    if let Some(pr) = &report.pagerank {
        write_rows(w, "pagerank", &pr.scores)?;
    }
    if let Some(h) = &report.hits {
        write_rows(w, "authority", &h.authorities)?;
        write_rows(w, "hub", &h.hubs)?;
    }
    Ok(())
}

fn write_rows(w: &mut dyn Write, metric: &str, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        writeln!(w, "{metric}\t{}\t{}", entry.node, entry.score)?;
    }
    Ok(())
}

fn render_rank_pretty(report: &RankReport, w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "{} nodes, {} edges",
        report.node_count, report.edge_count
    )?;
    writeln!(w)?;

    if let Some(pr) = &report.pagerank {
        pretty_section(w, "PageRank")?;
        write_table(w, &pr.scores)?;
        write_footer(w, pr.iterations, pr.converged)?;
    }
    if let Some(h) = &report.hits {
        pretty_section(w, "HITS authorities")?;
        write_table(w, &h.authorities)?;
        writeln!(w)?;
        pretty_section(w, "HITS hubs")?;
        write_table(w, &h.hubs)?;
        write_footer(w, h.iterations, h.converged)?;
    }
    Ok(())
}

fn write_table(w: &mut dyn Write, entries: &[Entry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(w, "  (no nodes)");
    }
    let width = entries.iter().map(|e| e.node.len()).max().unwrap_or(0);
    for (rank, entry) in entries.iter().enumerate() {
        writeln!(
            w,
            "{:>4}  {:<width$}  {:.6}",
            rank + 1,
            entry.node,
            entry.score
        )?;
    }
    Ok(())
}

fn write_footer(w: &mut dyn Write, iterations: usize, converged: bool) -> io::Result<()> {
    pretty_rule(w)?;
    if converged {
        writeln!(w, "converged after {iterations} iteration(s)")?;
    } else {
        writeln!(w, "stopped at iteration cap ({iterations}), not converged")?;
    }
    writeln!(w)
}
