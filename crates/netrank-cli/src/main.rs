#![forbid(unsafe_code)]

mod cmd;
mod edges;
mod output;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use netrank_core::config::{CONFIG_FILE_NAME, load_config};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "netrank: PageRank and HITS for directed edge lists",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Solver config file. Missing files fall back to the defaults.
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Summarize the graph in an edge file",
        long_about = "Print node and edge counts, the node and edge lists, structural statistics and the content hash.",
        after_help = "EXAMPLES:\n    # Summarize a graph\n    netrank info data/network_edges.csv\n\n    # Emit machine-readable output\n    netrank info data/network_edges.csv --json"
    )]
    Info(cmd::info::InfoArgs),

    #[command(
        about = "Rank nodes with PageRank and HITS",
        long_about = "Run PageRank and HITS over the graph in an edge file and print the highest-scoring nodes.",
        after_help = "EXAMPLES:\n    # Top 5 nodes for every score\n    netrank rank data/network_edges.csv\n\n    # Full PageRank table with a lower damping factor\n    netrank rank data/network_edges.csv --metric pagerank --damping 0.5 --top 0\n\n    # HITS run to convergence\n    netrank rank data/network_edges.csv --metric hits --hits-max-iter 100"
    )]
    Rank(cmd::rank::RankArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("NETRANK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "netrank_cli=debug,netrank_core=debug,info"
        } else {
            "netrank_cli=info,netrank_core=info,warn"
        })
    });

    let format = env::var("NETRANK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: &Cli, output: OutputMode) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Info(args) => cmd::info::run_info(args, output),
        Commands::Rank(args) => {
            let config = load_config(&cli.config)?;
            cmd::rank::run_rank(args, config, output)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();

    match run(&cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if render_error(output, &CliError::from_anyhow(&err)).is_err() {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_after_subcommand() {
        let cli = Cli::parse_from(["netrank", "info", "edges.csv", "--json"]);
        assert!(cli.json);
        assert_eq!(cli.output_mode(), OutputMode::Json);
    }

    #[test]
    fn format_flag_parses() {
        let cli = Cli::parse_from(["netrank", "--format", "text", "info", "edges.csv"]);
        assert_eq!(cli.format, Some(OutputMode::Text));
    }

    #[test]
    fn config_defaults_to_working_directory_file() {
        let cli = Cli::parse_from(["netrank", "info", "edges.csv"]);
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE_NAME));
    }

    #[test]
    fn rank_subcommand_parses() {
        let cli = Cli::parse_from(["netrank", "rank", "edges.csv", "--top", "3", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Rank(args) => assert_eq!(args.top, 3),
            Commands::Info(_) => panic!("expected rank"),
        }
    }

    #[test]
    fn unknown_metric_rejected() {
        assert!(Cli::try_parse_from(["netrank", "rank", "e.csv", "--metric", "katz"]).is_err());
    }
}
