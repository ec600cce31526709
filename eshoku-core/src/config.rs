//! e-Shoku configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::error::{EshokuError, EshokuResult};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SITE_URL: &str = "https://e-shoku.netlify.app";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4096";
pub const DEFAULT_VIEWER_HEADER: &str = "x-eshoku-user-id";

const ENV_PREFIX: &str = "ESHOKU";

/// Configuration at ~/.config/eshoku/config.toml
///
/// Every field can be overridden with an `ESHOKU_*` environment variable,
/// e.g. `ESHOKU_API_BASE_URL`.
#[derive(Debug, Deserialize, Clone)]
pub struct EshokuConfig {
    /// Where the room service lives; rooms are fetched from `{api_base_url}/rooms/{id}/`.
    pub api_base_url: Url,

    /// Public site, used to build the room URLs that get shared.
    pub site_url: Url,

    pub listen_addr: SocketAddr,

    /// Request header the identity proxy puts the signed-in user id in.
    pub viewer_header: String,
}

impl EshokuConfig {
    pub fn config_path() -> EshokuResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EshokuError::Config("Could not determine config directory".into()))?
            .join("eshoku");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented-out config file
    /// there first if none exists.
    pub fn load() -> EshokuResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Defaults, then the file at `path` if present, then the environment.
    pub fn load_from(path: &Path) -> EshokuResult<Self> {
        let config: EshokuConfig = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)
            .and_then(|b| b.set_default("site_url", DEFAULT_SITE_URL))
            .and_then(|b| b.set_default("listen_addr", DEFAULT_LISTEN_ADDR))
            .and_then(|b| b.set_default("viewer_header", DEFAULT_VIEWER_HEADER))
            .map_err(|e| EshokuError::Config(e.to_string()))?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| EshokuError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EshokuError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> EshokuResult<()> {
        for (name, url) in [("api_base_url", &self.api_base_url), ("site_url", &self.site_url)] {
            if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
                return Err(EshokuError::Config(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        if self.viewer_header.trim().is_empty() {
            return Err(EshokuError::Config("viewer_header must not be empty".into()));
        }

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EshokuResult<()> {
        let contents = format!(
            "\
# eshoku configuration

# Room service the room page fetches from:
# api_base_url = \"{DEFAULT_API_BASE_URL}\"

# Public site used in share links:
# site_url = \"{DEFAULT_SITE_URL}\"

# Address eshoku-server listens on:
# listen_addr = \"{DEFAULT_LISTEN_ADDR}\"

# Header carrying the signed-in user id:
# viewer_header = \"{DEFAULT_VIEWER_HEADER}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}
