//! Configuration for graph construction and route queries
//!
//! Every field has a default, so partial YAML or JSON documents are accepted.

use crate::graph::Weight;
use egress_algorithms::Reconstruction;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Only `.yaml`, `.yml` and `.json` files are understood
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Inclusive range for randomly generated edge weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightRange {
    pub min: Weight,
    pub max: Weight,
}

impl WeightRange {
    /// Random weights must be positive and the range non-empty
    pub fn is_valid(&self) -> bool {
        self.min > 0 && self.min <= self.max
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self { min: 1, max: 100 }
    }
}

/// Graph store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Maximum number of vertices
    pub max_vertices: usize,
    /// Maximum number of accepted edge insertions
    pub max_edges: usize,
    /// Range for edges added without a weight
    pub random_weights: WeightRange,
    /// Seed for random weights (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_vertices: 20,
            max_edges: 27,
            random_weights: WeightRange::default(),
            seed: None,
        }
    }
}

/// Route query configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Path reconstruction strategy
    pub strategy: Reconstruction,
    /// First token of every path label
    pub label_prefix: String,
    /// Token between vertex names in a label
    pub separator: String,
    /// Groups of interchangeable exit vertices, by name
    pub exit_groups: Vec<Vec<String>>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            strategy: Reconstruction::default(),
            label_prefix: "Begin".to_string(),
            separator: "->".to_string(),
            exit_groups: Vec::new(),
        }
    }
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EgressConfig {
    pub graph: GraphConfig,
    pub query: QueryConfig,
}

impl EgressConfig {
    pub fn from_yaml_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let config: Self = load_document(path.as_ref())?;
        info!("Loaded configuration from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Deserialize a YAML or JSON document, picking the format from the extension
pub(crate) fn load_document<T: DeserializeOwned>(path: &Path) -> ConfigResult<T> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "yaml" | "yml" => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&text)?)
        }
        "json" => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EgressConfig::default();
        assert_eq!(config.graph.max_vertices, 20);
        assert_eq!(config.graph.max_edges, 27);
        assert_eq!(config.graph.random_weights, WeightRange { min: 1, max: 100 });
        assert_eq!(config.query.strategy, Reconstruction::Predecessor);
        assert_eq!(config.query.label_prefix, "Begin");
        assert_eq!(config.query.separator, "->");
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
graph:
  max_vertices: 8
  seed: 3
query:
  strategy: distance_backtrace
  exit_groups:
    - [S, O]
"#;
        let config = EgressConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.graph.max_vertices, 8);
        assert_eq!(config.graph.max_edges, 27);
        assert_eq!(config.graph.seed, Some(3));
        assert_eq!(config.query.strategy, Reconstruction::DistanceBacktrace);
        assert_eq!(config.query.exit_groups, vec![vec!["S".to_string(), "O".to_string()]]);
        assert_eq!(config.query.label_prefix, "Begin");
    }

    #[test]
    fn test_json() {
        let config =
            EgressConfig::from_json_str(r#"{"graph": {"random_weights": {"min": 2, "max": 4}}}"#)
                .unwrap();
        assert_eq!(config.graph.random_weights, WeightRange { min: 2, max: 4 });
        assert!(config.graph.random_weights.is_valid());
    }

    #[test]
    fn test_weight_range_validity() {
        assert!(!WeightRange { min: 0, max: 5 }.is_valid());
        assert!(!WeightRange { min: 6, max: 5 }.is_valid());
        assert!(WeightRange { min: 5, max: 5 }.is_valid());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "graph:\n  max_edges: 99").unwrap();

        let config = EgressConfig::from_file(file.path()).unwrap();
        assert_eq!(config.graph.max_edges, 99);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = EgressConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
