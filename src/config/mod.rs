mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

/// Loads configuration from `CONFIG_PATH` (default `config.yaml`) and the process
/// environment. A missing file is not an error; built-in defaults apply.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let config = load_file(&config_path).await?;

    Ok(apply_env_overrides(config, |key| env::var(key).ok()))
}

pub async fn load_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Overlays environment variables onto `config`. `lookup` resolves a variable name.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup("GROQ_API_KEY") {
        config.llm.api_key = api_key;
    }
    if let Some(model) = lookup("LLM_MODEL").filter(|m| !m.is_empty()) {
        config.llm.model = model;
    }
    if let Some(base_url) = lookup("LLM_BASE_URL").filter(|u| !u.is_empty()) {
        config.llm.base_url = base_url;
    }
    if let Some(host) = lookup("HOST").filter(|h| !h.is_empty()) {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
        config.server.port = port;
    }

    config
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        if self.llm.base_url.trim().is_empty() {
            return Err(Error::config("llm.base_url must not be empty"));
        }
        Ok(())
    }
}
