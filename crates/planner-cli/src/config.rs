//! Configuration file management for planner.
//!
//! Provides a TOML-based config file at `~/.config/planner/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use planner_core::export::DEFAULT_EXPORT_FILENAME;
use planner_store::StoreConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub storage: StorageSection,
    pub export: ExportSection,
    pub generation: GenerationSection,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// Directory holding the persisted planner state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// File name used by `planner export` when `--output` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSection {
    /// Fixed RNG seed for hook selection. Unset means a fresh seed per run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the planner config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/planner` or `~/.config/planner`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("planner");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("planner")
}

/// Return the path to the planner config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse a config file. Returns an error if it does not exist.
pub fn load_config_from(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<PathBuf> {
    let path = config_path();
    save_config_to(config, &path)?;
    Ok(path)
}

pub fn save_config_to(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub store: StoreConfig,
    pub export_filename: String,
    pub seed: Option<u64>,
}

impl PlannerConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - State dir: `cli_state_dir` > `PLANNER_STATE_DIR` env > `storage.state_dir` > data dir
    /// - Export filename: `export.filename` > `plan.csv`
    /// - Seed: `generation.seed` > none
    ///
    /// A missing config file is not an error; an unparseable one is.
    pub fn resolve(cli_state_dir: Option<&Path>) -> Result<Self> {
        let path = config_path();
        let file_config = if path.exists() {
            load_config_from(&path)?
        } else {
            ConfigFile::default()
        };
        Ok(Self::resolve_with(cli_state_dir, file_config))
    }

    fn resolve_with(cli_state_dir: Option<&Path>, file_config: ConfigFile) -> Self {
        let state_dir = if let Some(dir) = cli_state_dir {
            dir.to_path_buf()
        } else if let Some(dir) =
            std::env::var_os(StoreConfig::ENV_VAR).filter(|v| !v.is_empty())
        {
            PathBuf::from(dir)
        } else if let Some(dir) = file_config.storage.state_dir {
            dir
        } else {
            StoreConfig::default_state_dir()
        };

        Self {
            store: StoreConfig::new(state_dir),
            export_filename: file_config
                .export
                .filename
                .unwrap_or_else(|| DEFAULT_EXPORT_FILENAME.to_owned()),
            seed: file_config.generation.seed,
        }
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
