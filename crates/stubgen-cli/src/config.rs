//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--app-root`, handled at the call-site)
//! 2. Config file (`--config FILE` or the default location)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generator settings.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Application root holding Stubs/ and the artifact directories.
    pub app_root: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("app"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { no_color: false }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location).  A missing file at the default location
    /// is fine (defaults apply); an explicitly passed file that cannot be
    /// read or parsed is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, explicit) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if explicit {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        let config = toml::from_str(&text)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stubgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stubgen", "stubgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stubgen.toml"))
    }

    /// The application root after applying the CLI override.
    pub fn resolved_app_root(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.generator.app_root.clone())
    }
}
