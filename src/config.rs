use std::fmt;
use std::path::PathBuf;

use crate::llm::gemini::DEFAULT_BASE_URL;

/// Runtime settings, read once from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_model: Option<String>,
    pub gemini_base_url: String,
    pub upload_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub client_url: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{key} is required"),
            ConfigError::Invalid { key, value } => write!(f, "{key} has an invalid value: {value}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gemini_api_key = get("GEMINI_API_KEY").ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;
        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value })?,
            None => 3001,
        };

        Ok(AppConfig {
            gemini_api_key,
            gemini_model: get("GEMINI_MODEL"),
            gemini_base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            upload_path: get("UPLOAD_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./uploads")),
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            client_url: get("CLIENT_URL").unwrap_or_else(|| "http://localhost:3000".to_string()),
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
