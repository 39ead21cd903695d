use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/";

#[derive(Debug, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub server_url: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).context("read config")?;
        let config = serde_json::from_str(&data).context("parse config")?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("create config directory")?;
        }
        let data = serde_json::to_string_pretty(self).context("serialize config")?;
        fs::write(path, data).context("write config")?;
        Ok(())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let project =
        ProjectDirs::from("com", "yumcon", "yumcon").context("resolve project dirs")?;
    Ok(project.config_dir().join("config.json"))
}

pub fn default_audit_dir() -> anyhow::Result<PathBuf> {
    let project =
        ProjectDirs::from("com", "yumcon", "yumcon").context("resolve project dirs")?;
    Ok(project.data_local_dir().join("audit"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_returns_default_when_missing() {
        let tmp = TempDir::new().unwrap();
        let config = ConsoleConfig::load(&tmp.path().join("config.json")).unwrap();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn config_round_trips_through_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.json");
        let config = ConsoleConfig {
            server_url: "http://repo.example/console/".to_string(),
        };
        config.save(&path).unwrap();
        let loaded = ConsoleConfig::load(&path).unwrap();
        assert_eq!(loaded.server_url, "http://repo.example/console/");
    }
}
