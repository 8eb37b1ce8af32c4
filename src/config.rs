//! Runtime configuration
//!
//! Loaded from a TOML file; every field has a default, so an empty file (or
//! no file at all) is a valid configuration.
//!
//! ```toml
//! [limits]
//! max_sort_len = 10
//! max_search_len = 15
//! max_operations = 20
//! max_vertices = 26
//! max_fibonacci = 90
//!
//! [playback]
//! interval_ms = 1000
//! ```

use crate::catalog::Request;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// An input is larger than the configured cap
    #[error("{what} has {actual} entries, the limit is {limit}")]
    LimitExceeded {
        what: &'static str,
        actual: usize,
        limit: usize,
    },

    /// A setting that cannot work, e.g. a zero playback interval
    #[error("invalid setting '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub limits: Limits,
    pub playback: Playback,
}

/// Caller-side caps on input size
///
/// The tracers themselves accept any size; these keep traces short enough to
/// step through by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub max_sort_len: usize,
    /// Also applies to the values of a search tree
    pub max_search_len: usize,
    pub max_operations: usize,
    pub max_vertices: usize,
    pub max_fibonacci: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_sort_len: 10,
            max_search_len: 15,
            max_operations: 20,
            max_vertices: 26,
            max_fibonacci: 90,
        }
    }
}

impl Limits {
    /// Reject a request whose input is over its cap
    pub fn check(&self, request: &Request) -> Result<(), ConfigError> {
        let (what, actual, limit) = match request {
            Request::Sort { values, .. } => ("sort input", values.len(), self.max_sort_len),
            Request::Search { values, .. } => ("search input", values.len(), self.max_search_len),
            Request::Bst { values, .. } => ("tree input", values.len(), self.max_search_len),
            Request::Traverse { graph, .. } => {
                ("graph", graph.vertex_count(), self.max_vertices)
            }
            Request::Dijkstra { graph, .. } => {
                ("weighted graph", graph.node_count(), self.max_vertices)
            }
            Request::Stack { ops } => ("stack operation list", ops.len(), self.max_operations),
            Request::Queue { ops } => ("queue operation list", ops.len(), self.max_operations),
            Request::Fibonacci { n, .. } => (
                "fibonacci index",
                *n as usize,
                self.max_fibonacci as usize,
            ),
        };
        within(what, actual, limit)
    }

    /// Reject a vertex count over the cap, before any graph is allocated
    pub fn check_vertices(&self, vertices: usize) -> Result<(), ConfigError> {
        within("graph", vertices, self.max_vertices)
    }
}

fn within(what: &'static str, actual: usize, limit: usize) -> Result<(), ConfigError> {
    if actual > limit {
        return Err(ConfigError::LimitExceeded {
            what,
            actual,
            limit,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Playback {
    /// Delay between autoplay steps in the replay viewer
    pub interval_ms: u64,
}

impl Default for Playback {
    fn default() -> Self {
        Playback { interval_ms: 1000 }
    }
}

impl Playback {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Config {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.playback.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "playback.interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
