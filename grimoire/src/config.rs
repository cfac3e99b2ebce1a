//! Process configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings read from `grimoire.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// The name the assistant answers to; also forms the address prefix.
    pub bot_name: String,
    /// Directory holding the per-category reference data files.
    pub data_dir: PathBuf,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_name: "grimoire".to_string(),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl BotConfig {
    /// Load configuration from the user config directory, then the working
    /// directory. Returns `Default` if neither holds a parseable file.
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        log::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(_) => {
                    log::debug!("No config file at {}", path.display());
                }
            }
        }
        Self::default()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("grimoire.toml"));
        }
        paths.push(PathBuf::from("grimoire.toml"));
        paths
    }

    /// The address prefix a chat transport strips before dispatch,
    /// e.g. `!grimoire `.
    pub fn command_prefix(&self) -> String {
        format!("!{} ", self.bot_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BotConfig::default();
        assert_eq!(config.bot_name, "grimoire");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.command_prefix(), "!grimoire ");
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: BotConfig = toml::from_str(r#"bot_name = "pip""#).unwrap();
        assert_eq!(config.bot_name, "pip");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.command_prefix(), "!pip ");
    }
}
