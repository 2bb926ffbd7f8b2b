use crate::ranking::RankingConfig;
use crate::registry::types::{DuplicatePolicy, RegistryOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "sxi";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rank table settings (fallback rank, per-identifier overrides)
    #[serde(default)]
    pub ranking: RankingConfig,

    /// How duplicate manifest identifiers are handled
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ranking: RankingConfig::default(),
            duplicate_policy: DuplicatePolicy::default(),
            color: default_color(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from an explicit path, or return default if the file is missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path).with_context(|| {
                format!("Failed to read config file {}", config_path.display())
            })?;
            let config: AppConfig = serde_json::from_str(&content).with_context(|| {
                format!("Failed to parse config file {}", config_path.display())
            })?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = get_config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config to an explicit path, creating its parent directory
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file {}", config_path.display()))?;
        Ok(())
    }

    /// Registry options derived from this config
    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            duplicates: self.duplicate_policy,
        }
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_CONFIG_HOME or ~/.config
        dirs::config_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::table::RANK_OTHERS;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert!(config.color);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.ranking.fallback_rank, Some(RANK_OTHERS));
    }

    #[test]
    fn test_app_config_serialization() {
        let mut config = AppConfig {
            color: false,
            duplicate_policy: DuplicatePolicy::LastWriteWins,
            ..Default::default()
        };
        config.ranking.overrides.insert("a.B".to_string(), 3);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_app_config_partial_json() {
        // Should use defaults for missing fields
        let json = r#"{"duplicate_policy": "last_write_wins"}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.duplicate_policy, DuplicatePolicy::LastWriteWins);
        assert!(config.color);
        assert_eq!(
            config.registry_options().duplicates,
            DuplicatePolicy::LastWriteWins
        );
    }

    #[test]
    fn test_app_config_empty_json() {
        // Empty object should use all defaults
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir()
            .join(format!("sxi_missing_{}", std::process::id()))
            .join(CONFIG_FILE);
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_invalid_file_fails() {
        let dir = std::env::temp_dir().join(format!("sxi_invalid_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, "not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_to_writes_loadable_config() {
        let dir = std::env::temp_dir().join(format!("sxi_save_{}", std::process::id()));
        let path = dir.join("nested").join(CONFIG_FILE);
        let mut config = AppConfig {
            color: false,
            ..Default::default()
        };
        config.ranking.overrides.insert("wifi.Settings".to_string(), 7);

        config.save_to(&path).unwrap();
        assert!(path.exists());
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);

        let _ = fs::remove_dir_all(&dir);
    }
}
