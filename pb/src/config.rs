//! Configuration for promptbuilder

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory searched for prompt template overrides
    #[serde(default = "default_template_root")]
    pub template_root: PathBuf,

    /// PBM business model injected as {{BUSINESS_MODEL}} when not set explicitly
    #[serde(default = "default_business_model")]
    pub business_model: String,
}

fn default_template_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_business_model() -> String {
    "passthrough".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_root: default_template_root(),
            business_model: default_business_model(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("promptbuilder").join("config.yml")),
            Some(PathBuf::from("promptbuilder.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.template_root, PathBuf::from("."));
        assert_eq!(config.business_model, "passthrough");
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "template_root: /opt/cdm\nbusiness_model: spread\n")
            .expect("Failed to write config");

        let config = Config::load(Some(&path)).expect("config should load");
        assert_eq!(config.template_root, PathBuf::from("/opt/cdm"));
        assert_eq!(config.business_model, "spread");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "business_model: spread\n").expect("Failed to write config");

        let config = Config::load(Some(&path)).expect("config should load");
        assert_eq!(config.template_root, PathBuf::from("."));
        assert_eq!(config.business_model, "spread");
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.yml");

        let config = Config {
            template_root: PathBuf::from("/tmp/templates"),
            business_model: "spread".to_string(),
        };
        config.save(&path).expect("config should save");

        let loaded = Config::load(Some(&path)).expect("config should load");
        assert_eq!(loaded.template_root, config.template_root);
        assert_eq!(loaded.business_model, config.business_model);
    }
}
