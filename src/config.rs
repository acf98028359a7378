use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

use crate::helpers::ImportPolicy;

const DEFAULTS: &str = include_str!("../config/default.toml");
const APP_NAME: &str = "pure-helpers";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub build: BuildConfig,
    pub import: ImportConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub module_path: PathBuf,
    pub readme_path: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            module_path: PathBuf::from("dist/pure_helpers.rs"),
            readme_path: PathBuf::from("README.md"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    #[serde(deserialize_with = "policy_from_str")]
    pub policy: ImportPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
    /// Defaults to the platform data directory.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "pure_helpers=info".to_string(),
            directory: None,
        }
    }
}

/// One config file; sections it leaves out keep their earlier value.
#[derive(Debug, Default, Deserialize)]
struct ConfigLayer {
    build: Option<BuildConfig>,
    import: Option<ImportConfig>,
    log: Option<LogConfig>,
}

fn policy_from_str<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ImportPolicy, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Load configuration with layering: defaults → user config → `explicit`.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::from_toml(DEFAULTS).context("parsing built-in defaults")?;

        if let Some(path) = user_config_path().filter(|p| p.exists()) {
            config.overlay_file(&path)?;
        }
        if let Some(path) = explicit {
            config.overlay_file(path)?;
        }

        config.expand_home()?;
        Ok(config)
    }

    /// Code defaults overlaid with `toml`.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let mut config = Self::default();
        config.overlay(toml::from_str(toml)?);
        Ok(config)
    }

    fn overlay_file(&mut self, path: &Path) -> Result<()> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let layer: ConfigLayer =
            toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?;
        self.overlay(layer);
        Ok(())
    }

    fn overlay(&mut self, layer: ConfigLayer) {
        if let Some(build) = layer.build {
            self.build = build;
        }
        if let Some(import) = layer.import {
            self.import = import;
        }
        if let Some(log) = layer.log {
            self.log = log;
        }
    }

    // Expand ~ in configured paths
    fn expand_home(&mut self) -> Result<()> {
        let paths = [
            Some(&mut self.build.module_path),
            Some(&mut self.build.readme_path),
            self.log.directory.as_mut(),
        ];
        for path in paths.into_iter().flatten() {
            if path.starts_with("~") {
                let home = dirs_home().ok_or_else(|| anyhow!("cannot determine home directory"))?;
                let rest = path.strip_prefix("~").unwrap_or(Path::new("")).to_path_buf();
                *path = home.join(rest);
            }
        }
        Ok(())
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log
            .directory
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("", "", APP_NAME).map(|d| d.data_dir().to_path_buf())
            })
            .unwrap_or_else(std::env::temp_dir)
    }
}

fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|d| d.config_dir().join("config.toml"))
}

fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}
