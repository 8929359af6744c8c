use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::{error, info, warn};

use backend_domain::RuntimeConfig;

use crate::config::{validate_environment, validate_store_backend};
use crate::crypto::DEFAULT_ENCRYPTION_KEY;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub environment: String,
    pub encryption_key: Option<String>,
    pub store_backend: String,
    pub store_path: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub log_dir: Option<String>,
    #[serde(skip)]
    pub loaded_from: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3280".to_string(),
            api_token: None,
            environment: "development".to_string(),
            encryption_key: None,
            store_backend: "json".to_string(),
            store_path: "./data/stocks.json".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            log_dir: None,
            loaded_from: None,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("STOCKROOM_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            let mut config: AppConfig = toml::from_str(&content)?;
            config.loaded_from = Some(path.clone());
            config
        } else {
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(key) = &self.encryption_key {
            if key.is_empty() {
                self.encryption_key = None;
            }
        }
        if let Some(log_dir) = &self.log_dir {
            if log_dir.trim().is_empty() {
                self.log_dir = None;
            }
        }
        self.environment = self.environment.trim().to_lowercase();
        self.store_backend = self.store_backend.trim().to_lowercase();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.store_path = resolve_path(base, &self.store_path);
        if let Some(log_dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, log_dir));
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// The configured secret, or the hard-coded fallback.
    pub fn effective_encryption_key(&self) -> &str {
        self.encryption_key
            .as_deref()
            .unwrap_or(DEFAULT_ENCRYPTION_KEY)
    }

    pub fn uses_default_encryption_key(&self) -> bool {
        self.effective_encryption_key() == DEFAULT_ENCRYPTION_KEY
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_environment(&self.environment)?;
        validate_store_backend(&self.store_backend)?;
        if self.store_backend == "json" && self.store_path.trim().is_empty() {
            return Err(anyhow!("store_path must not be empty for the json store"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.is_production() && self.uses_default_encryption_key() {
            return Err(anyhow!(
                "encryption_key is unset or uses the built-in default; refusing to start in production"
            ));
        }
        Ok(())
    }

    /// Logs where the settings came from. Called once tracing is up.
    pub fn report_sources(&self) {
        match &self.loaded_from {
            Some(path) => info!("config loaded from {}", path),
            None => warn!("config file not found, using defaults"),
        }
        if self.uses_default_encryption_key() {
            error!(
                "encryption key not configured, using the built-in default; stored fields are not protected"
            );
        }
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("STOCKROOM_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("STOCKROOM_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("STOCKROOM_ENVIRONMENT") {
            self.environment = value;
        }
        if let Ok(value) = env::var("STOCKROOM_ENCRYPTION_KEY").or_else(|_| env::var("ENCRYPTION_KEY")) {
            self.encryption_key = Some(value);
        }
        if let Ok(value) = env::var("STOCKROOM_STORE_BACKEND") {
            self.store_backend = value;
        }
        if let Ok(value) = env::var("STOCKROOM_STORE_PATH") {
            self.store_path = value;
        }
        if let Ok(value) = env::var("STOCKROOM_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("STOCKROOM_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("STOCKROOM_LOG_DIR") {
            self.log_dir = Some(value);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fall_back_to_builtin_secret() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.uses_default_encryption_key());
        assert_eq!(config.effective_encryption_key(), DEFAULT_ENCRYPTION_KEY);
    }

    #[test]
    fn production_rejects_default_secret() {
        let err = AppConfig::from_toml_str("environment = \"production\"\n")
            .expect_err("default secret in production");
        assert!(err.to_string().contains("encryption_key"));

        let config = AppConfig::from_toml_str(
            "environment = \"Production\"\nencryption_key = \"a-real-secret\"\n",
        )
        .expect("configured secret");
        assert!(config.is_production());
        assert!(!config.uses_default_encryption_key());
    }

    #[test]
    fn blank_values_normalize_to_none() {
        let config = AppConfig::from_toml_str(
            "api_token = \"  \"\nencryption_key = \"\"\nstore_backend = \"MEMORY\"\n",
        )
        .expect("config");
        assert!(config.api_token.is_none());
        assert!(config.encryption_key.is_none());
        assert_eq!(config.store_backend, "memory");
    }

    #[test]
    fn rejects_unknown_store_backend() {
        assert!(AppConfig::from_toml_str("store_backend = \"firebase\"\n").is_err());
    }

    #[test]
    fn relative_store_path_resolves_against_config_dir() {
        let mut config = AppConfig::default();
        config.resolve_paths(Some(Path::new("/etc/stockroom")));
        assert_eq!(config.store_path, "/etc/stockroom/./data/stocks.json");
    }
}
