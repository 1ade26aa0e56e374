use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use wayfind_core::{Algorithm, CampusModelConfig};

use crate::cli::Cli;

/// Settings read from `wayfind.toml`; command-line flags win over them
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Campus dataset (JSON)
    pub dataset: PathBuf,
    /// Insert reverse edges for one-way walkways
    pub mirror_edges: bool,
    /// Tracing filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Worker threads for matrix queries, rayon's default when unset
    pub threads: Option<usize>,
    pub routing: RoutingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutingConfig {
    pub algorithm: Algorithm,
    pub accessible_only: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("campus_nodes_edges.json"),
            mirror_edges: false,
            log_filter: "info".to_string(),
            threads: None,
            routing: RoutingConfig::default(),
        }
    }
}

impl AppConfig {
    pub const DEFAULT_PATH: &'static str = "wayfind.toml";

    /// Reads an explicit config file, falls back to `wayfind.toml` in the
    /// working directory and then to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(Self::DEFAULT_PATH).is_file() => {
                Self::from_file(Path::new(Self::DEFAULT_PATH))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(dataset) = &cli.dataset {
            self.dataset.clone_from(dataset);
        }
        self.mirror_edges |= cli.mirror_edges;
    }

    pub fn model_config(&self) -> CampusModelConfig {
        CampusModelConfig {
            dataset_path: self.dataset.clone(),
            mirror_edges: self.mirror_edges,
        }
    }
}

impl RoutingConfig {
    /// Algorithm and accessibility for one query, flags taking precedence
    pub fn resolve(&self, algorithm: Option<Algorithm>, accessible: bool) -> (Algorithm, bool) {
        (
            algorithm.unwrap_or(self.algorithm),
            accessible || self.accessible_only,
        )
    }
}
