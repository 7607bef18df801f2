// src/core/config_manager.rs
//! Configuration loading: config file, environment, then built-in defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{ExtractorConfig, MatchMode};
use crate::core::FsOps;

const CONFIG_ENV: &str = "CVEXTRACT_CONFIG";
const DATA_DIR_ENV: &str = "CVEXTRACT_DATA_DIR";
const DEFAULT_CONFIG_FILES: [&str; 3] = ["cvextract.yaml", "cvextract.yml", "cvextract.toml"];

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub extractor: ExtractorConfig,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
}

/// On-disk shape of the configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    skills_file: Option<PathBuf>,
    majors_file: Option<PathBuf>,
    positions_file: Option<PathBuf>,
    keyword_match: Option<MatchMode>,
}

impl ConfigManager {
    /// Load configuration, preferring an explicit path, then `CVEXTRACT_CONFIG`,
    /// then a `cvextract.{yaml,yml,toml}` in the current directory.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let root_dir = std::env::current_dir().context("Failed to get current directory")?;
        let source = Self::locate_config(explicit_path, &root_dir)?;

        let file = match &source {
            Some(path) => {
                info!("Loading configuration from: {}", path.display());
                Self::parse_file(path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                ConfigFile::default()
            }
        };

        let mut extractor = Self::apply_file(ExtractorConfig::new().with_root_dir(root_dir), file);

        if let Ok(data_dir) = std::env::var(DATA_DIR_ENV) {
            debug!("{} overrides data_dir: {}", DATA_DIR_ENV, data_dir);
            extractor = extractor.with_data_dir(PathBuf::from(data_dir));
        }

        Ok(Self { extractor, source })
    }

    fn locate_config(explicit_path: Option<&Path>, root_dir: &Path) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(Some(path.to_path_buf()));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if !path.exists() {
                anyhow::bail!(
                    "{} points to a missing file: {}",
                    CONFIG_ENV,
                    path.display()
                );
            }
            return Ok(Some(path));
        }

        Ok(DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| root_dir.join(name))
            .find(|path| path.exists()))
    }

    fn parse_file(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        match FsOps::get_extension(path).as_deref() {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display())),
            _ => anyhow::bail!(
                "Unsupported config file extension: {}. Use .yaml, .yml or .toml",
                path.display()
            ),
        }
    }

    fn apply_file(mut config: ExtractorConfig, file: ConfigFile) -> ExtractorConfig {
        if let Some(dir) = file.data_dir {
            config = config.with_data_dir(dir);
        }
        if let Some(skills) = file.skills_file {
            config = config.with_skills_file(skills);
        }
        if let Some(majors) = file.majors_file {
            config = config.with_majors_file(majors);
        }
        if let Some(positions) = file.positions_file {
            config = config.with_positions_file(positions);
        }
        if let Some(mode) = file.keyword_match {
            config = config.with_keyword_match(mode);
        }
        config
    }
}
