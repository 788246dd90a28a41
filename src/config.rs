use crate::error::{PortfolioError, Result};
use portfolio_common::{digest_secret, DEFAULT_PASSWORD_DIGEST};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the store location
pub const STORE_ENV: &str = "PORTFOLIO_STORE";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    /// SHA-256 hex digest of the admin password
    #[serde(default)]
    pub password_digest: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("portfolio-site").join("config.json"))
    }

    /// `--store` flag, then `PORTFOLIO_STORE`, then config, then the data dir
    pub fn store_path(&self, flag: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(STORE_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }
        let data = dirs::data_dir()
            .ok_or_else(|| PortfolioError::Config("data directory not found".into()))?;
        Ok(data.join("portfolio-site").join("projects.json"))
    }

    pub fn expected_digest(&self) -> &str {
        self.password_digest.as_deref().unwrap_or(DEFAULT_PASSWORD_DIGEST)
    }

    pub fn set_password(&mut self, password: &str) {
        self.password_digest = Some(digest_secret(password));
    }
}
