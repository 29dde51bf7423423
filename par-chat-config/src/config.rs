//! Top-level `ChatConfig` with YAML persistence and path resolution.
//!
//! Covers:
//! - `load` / `load_from` (variable substitution, YAML parse, validation)
//! - `save_to` (atomic temp-file + rename)
//! - XDG-style path helpers (`config_dir`, `config_path`)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::BackendConfig;
use crate::env_vars::{pre_scan_allow_all_env_vars, substitute_variables_with_allowlist};
use crate::error::ConfigError;
use crate::text::UiText;

/// Configuration for the chat widget core.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatConfig {
    /// Backend connection and endpoint paths
    #[serde(default)]
    pub backend: BackendConfig,

    /// User-facing strings
    #[serde(default)]
    pub text: UiText,

    /// Resolve every `${VAR}` in the config file, not just allowlisted ones
    #[serde(default)]
    pub allow_all_env_vars: bool,
}

impl ChatConfig {
    /// Parse a YAML document after `${VAR}` substitution, then validate it.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let allow_all = pre_scan_allow_all_env_vars(raw);
        let contents = substitute_variables_with_allowlist(raw, allow_all);
        let config: ChatConfig = serde_yaml_ng::from_str(&contents)?;
        config.backend.validate()?;
        Ok(config)
    }

    /// Load configuration from the default path, writing the defaults there
    /// first if no file exists yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save_to(&config_path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            Ok(config)
        }
    }

    /// Load configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading config from {:?}", path);

        let raw = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to read config {:?}", path))?;

        // The file may carry session cookies or tokens in `backend.headers`.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(metadata) = fs::metadata(path) {
                let mode = metadata.permissions().mode();
                let has_headers = raw.lines().any(|l| l.trim_start().starts_with("headers:"));
                if mode & 0o044 != 0 && has_headers {
                    log::warn!(
                        "Config file {:?} has insecure permissions (mode {:04o}) and defines \
                         backend headers. Run: chmod 600 {:?}",
                        path,
                        mode & 0o777,
                        path,
                    );
                }
            }
        }

        let config = Self::from_yaml(&raw).with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }

    /// Save configuration to `path` atomically.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("par-chat")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("par-chat")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
