//! Solver configuration loaded from TOML.
//!
//! ```toml
//! [pagerank]
//! damping = 0.85
//! tolerance = 1e-4
//! max_iter = 100
//! dangling = "drop"        # or "redistribute"
//!
//! [hits]
//! tolerance = 1e-4
//! max_iter = 2
//! normalization = "sum"    # or "euclidean"
//! ```
//!
//! Every key is optional; missing keys take the solver defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::metrics::hits::HitsConfig;
use crate::metrics::pagerank::PageRankConfig;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "netrank.toml";

/// Parameters for both solvers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default)]
    pub pagerank: PageRankConfig,
    #[serde(default)]
    pub hits: HitsConfig,
}

impl RankConfig {
    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the damping factor is outside `[0, 1]`
    /// or a tolerance is negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let damping = self.pagerank.damping;
        if !(0.0..=1.0).contains(&damping) {
            return Err(ConfigError::DampingOutOfRange(damping));
        }
        check_tolerance("pagerank", self.pagerank.tolerance)?;
        check_tolerance("hits", self.hits.tolerance)?;
        Ok(())
    }
}

fn check_tolerance(solver: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTolerance { solver, value })
    }
}

/// Parse and validate a TOML document.
///
/// # Errors
///
/// Returns an error if the document is not valid TOML for [`RankConfig`]
/// or fails [`RankConfig::validate`].
pub fn parse_config(content: &str) -> Result<RankConfig> {
    let config = toml::from_str::<RankConfig>(content).context("Failed to parse rank config")?;
    config.validate()?;
    Ok(config)
}

/// Load the config at `path`. A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed or
/// validated.
pub fn load_config(path: &Path) -> Result<RankConfig> {
    if !path.exists() {
        return Ok(RankConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_config(&content).with_context(|| format!("Invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::hits::HitsNormalization;
    use crate::metrics::pagerank::DanglingPolicy;

    #[test]
    fn empty_document_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, RankConfig::default());
        assert!((config.pagerank.damping - 0.85).abs() < f64::EPSILON);
        assert_eq!(config.pagerank.max_iter, 100);
        assert_eq!(config.hits.max_iter, 2);
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config = parse_config(
            r#"
            [pagerank]
            damping = 0.5
            dangling = "redistribute"

            [hits]
            normalization = "euclidean"
            "#,
        )
        .unwrap();

        assert!((config.pagerank.damping - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.pagerank.dangling, DanglingPolicy::Redistribute);
        assert_eq!(config.pagerank.max_iter, 100);
        assert_eq!(config.hits.normalization, HitsNormalization::Euclidean);
        assert!((config.hits.tolerance - 1e-4).abs() < f64::EPSILON);
    }

    #[test]
    fn damping_out_of_range_rejected() {
        let err = parse_config("[pagerank]\ndamping = 1.5\n").unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert_eq!(config_err, &ConfigError::DampingOutOfRange(1.5));
    }

    #[test]
    fn negative_tolerance_rejected() {
        let err = parse_config("[hits]\ntolerance = -0.1\n").unwrap_err();
        assert!(err.to_string().contains("hits tolerance"));
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        assert!(parse_config("[pagerank]\ndangling = \"spread\"\n").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, RankConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[hits]\nmax_iter = 50\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.hits.max_iter, 50);
    }

    #[test]
    fn load_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[pagerank\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }
}
