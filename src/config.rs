//! Configuration file support for federation-atlas.
//!
//! Provides YAML-based configuration through `federation-atlas.config.yml`
//! files, environment overrides, and the resolved [`Settings`] the server
//! runs with.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::error::AtlasError;
use crate::shared::Result;
use crate::topology::services::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES};

pub const CONFIG_FILENAME: &str = "federation-atlas.config.yml";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3030;
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server: Option<ServerSection>,
    pub store: Option<StoreSection>,
    pub tree: Option<TreeSection>,
    pub logging: Option<LoggingSection>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Omitting `path` keeps the graph in memory only.
#[derive(Debug, Deserialize, Default)]
pub struct StoreSection {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TreeSection {
    pub max_depth: Option<usize>,
    pub max_nodes: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LoggingSection {
    pub level: Option<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(host) = config.server.as_ref().and_then(|s| s.host.as_deref()) {
        if host.trim().is_empty() {
            bail!(
                "Invalid config: server.host must not be empty.\n\n\
                 💡 Hint: Use an address such as \"127.0.0.1\" or \"0.0.0.0\"."
            );
        }
    }

    if let Some(0) = config.tree.as_ref().and_then(|t| t.max_depth) {
        bail!(
            "Invalid config: tree.max_depth must be at least 1.\n\n\
             💡 Hint: The default depth limit is {}.",
            DEFAULT_MAX_DEPTH
        );
    }

    if let Some(0) = config.tree.as_ref().and_then(|t| t.max_nodes) {
        bail!(
            "Invalid config: tree.max_nodes must be at least 1.\n\n\
             💡 Hint: The default node limit is {}.",
            DEFAULT_MAX_NODES
        );
    }

    if let Some(level) = config.logging.as_ref().and_then(|l| l.level.as_deref()) {
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            bail!(
                "Invalid config: logging.level '{}' is not recognised.\n\n\
                 💡 Hint: Use one of: {}.",
                level,
                LOG_LEVELS.join(", ")
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Effective server settings after file, environment and flags are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub store_path: Option<PathBuf>,
    pub max_depth: usize,
    pub max_nodes: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            store_path: None,
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Builds settings from an optional config file with process environment overrides
    pub fn resolve(config: Option<ConfigFile>) -> Result<Self> {
        Self::resolve_with(config, |key| std::env::var(key).ok())
    }

    /// Same as [`Settings::resolve`] with an injectable environment lookup
    pub fn resolve_with(
        config: Option<ConfigFile>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(config) = config {
            if let Some(server) = config.server {
                if let Some(host) = server.host {
                    settings.host = host;
                }
                if let Some(port) = server.port {
                    settings.port = port;
                }
            }
            if let Some(path) = config.store.and_then(|s| s.path) {
                settings.store_path = Some(path);
            }
            if let Some(tree) = config.tree {
                if let Some(depth) = tree.max_depth {
                    settings.max_depth = depth;
                }
                if let Some(nodes) = tree.max_nodes {
                    settings.max_nodes = nodes;
                }
            }
            if let Some(level) = config.logging.and_then(|l| l.level) {
                settings.log_level = level.to_ascii_lowercase();
            }
        }

        if let Some(host) = env("ATLAS_HOST").filter(|h| !h.trim().is_empty()) {
            settings.host = host;
        }
        if let Some(port) = env("ATLAS_PORT") {
            settings.port = port.trim().parse().map_err(|_| AtlasError::Config {
                message: format!("ATLAS_PORT '{}' is not a valid port number", port),
            })?;
        }
        if let Some(store) = env("ATLAS_STORE").filter(|s| !s.trim().is_empty()) {
            settings.store_path = Some(PathBuf::from(store));
        }

        Ok(settings)
    }
}
