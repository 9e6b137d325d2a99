use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

fn default_server_address() -> String {
    "0.0.0.0:8080".to_string()
}

/// Endpoint settings loaded once at startup. Read-only afterward; handlers
/// receive it through `AppState`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL for single-quiz lookups. The quiz id is appended verbatim,
    /// so any separator must already be present here.
    pub quiz_url: String,
    pub quiz_list_url: String,
    pub checker_service_url: String,
    #[serde(default = "default_server_address")]
    pub server_address: String,
}

impl Config {
    /// Resolves the config-file path from `QUIZ_PORTAL_CONFIG`, falling back
    /// to `config.toml` in the working directory.
    pub fn path_from_env() -> PathBuf {
        dotenv().ok();
        env::var("QUIZ_PORTAL_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}
