//! Client configuration loader
//!
//! Builds a [`ClientConfig`] from environment variables or a file.
//!
//! ## Loading Strategy
//! 1. Environment variables, if they describe a valid client
//! 2. Otherwise a JSON or TOML file, probed in the working directory and
//!    next to the executable
//!
//! ## Environment Variables
//! - `HARVEST_SUBDOMAIN` (required)
//! - `HARVEST_EMAIL`, `HARVEST_PASSWORD`: basic authentication
//! - `HARVEST_IDENTIFIER`, `HARVEST_SECRET`, `HARVEST_REDIRECT_URI`: OAuth
//! - `HARVEST_USER_AGENT`
//! - `HARVEST_DEBUG` (`1`/`true`/`yes`/`on`)
//! - `HARVEST_BASE_URL`: host override
//! - `HARVEST_TIMEOUT_SECS`
//!
//! ## File Locations
//! `harvest.{json,toml}` then `config.{json,toml}`, first in the current
//! working directory, then next to the executable.

use std::path::{Path, PathBuf};

use harvest_domain::{ClientConfig, HarvestError, Result};

use crate::errors::InfraError;

const FILE_STEMS: [&str; 2] = ["harvest", "config"];
const FILE_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Load configuration, preferring the environment over files.
///
/// # Errors
/// Returns `HarvestError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Harvest configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Environment incomplete, trying config file");
            load_from_file(None)
        }
    }
}

/// Load configuration from `HARVEST_*` environment variables.
///
/// # Errors
/// Returns `HarvestError::Config` if `HARVEST_SUBDOMAIN` is missing, a
/// number does not parse, or no complete credential set is present.
pub fn load_from_env() -> Result<ClientConfig> {
    let timeout_secs = optional_env("HARVEST_TIMEOUT_SECS")
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| HarvestError::Config(format!("Invalid HARVEST_TIMEOUT_SECS: {e}")))
        })
        .transpose()?;

    let config = ClientConfig {
        subdomain: Some(env_var("HARVEST_SUBDOMAIN")?),
        email: optional_env("HARVEST_EMAIL"),
        password: optional_env("HARVEST_PASSWORD"),
        identifier: optional_env("HARVEST_IDENTIFIER"),
        secret: optional_env("HARVEST_SECRET"),
        redirect_uri: optional_env("HARVEST_REDIRECT_URI"),
        user_agent: optional_env("HARVEST_USER_AGENT"),
        debug: env_bool("HARVEST_DEBUG", false),
        base_url: optional_env("HARVEST_BASE_URL"),
        timeout_secs,
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file.
///
/// With `None`, the first file found by [`probe_config_paths`] is used. The
/// format follows the extension.
///
/// # Errors
/// Returns `HarvestError::Config` if the file is missing, unreadable, not
/// valid JSON/TOML, or does not describe a valid client.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) if !p.exists() => {
            return Err(HarvestError::Config(format!("Config file not found: {}", p.display())));
        }
        Some(p) => p,
        None => probe_config_paths().ok_or_else(|| {
            HarvestError::Config("No Harvest config file found in any standard location".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading Harvest configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| HarvestError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| HarvestError::from(InfraError::from(e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| HarvestError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(HarvestError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
        dirs.push(exe_dir);
    }

    dirs.iter().find_map(|dir| probe_dir(dir))
}

fn probe_dir(dir: &Path) -> Option<PathBuf> {
    FILE_STEMS
        .iter()
        .flat_map(|stem| FILE_EXTENSIONS.iter().map(move |ext| dir.join(format!("{stem}.{ext}"))))
        .find(|path| path.is_file())
}

fn env_var(key: &str) -> Result<String> {
    optional_env(key).ok_or_else(|| {
        HarvestError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Set and non-blank.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off`
/// (case-insensitive).
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
