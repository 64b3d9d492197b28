use crate::export::{ExportFormat, DEFAULT_CSS_PREFIX};
use crate::history::DEFAULT_MAX_ENTRIES;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "AURAPAL_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Number of similar palettes shown for a catalog palette
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,
    /// Featured palettes in the showcase
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
    /// Extra random palettes in the showcase
    #[serde(default = "default_random_count")]
    pub random_count: usize,
}

fn default_similar_limit() -> usize {
    4
}

fn default_featured_count() -> usize {
    4
}

fn default_random_count() -> usize {
    8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Palettes kept in session history
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Prefix for CSS custom properties (`<prefix>-1`, `<prefix>-2`, ...)
    #[serde(default = "default_css_prefix")]
    pub css_prefix: String,
    #[serde(default)]
    pub default_format: ExportFormat,
}

fn default_css_prefix() -> String {
    DEFAULT_CSS_PREFIX.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            similar_limit: default_similar_limit(),
            featured_count: default_featured_count(),
            random_count: default_random_count(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            css_prefix: default_css_prefix(),
            default_format: ExportFormat::default(),
        }
    }
}

impl Config {
    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mrmattias", "aurapal")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Load config from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load config from `path`, writing defaults if the file is missing and
    /// falling back to defaults if it is corrupt.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            match toml::from_str::<Config>(&data) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    Ok(config)
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "failed to parse config, using defaults"
                    );
                    Ok(Config::default())
                }
            }
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save config to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }
}
