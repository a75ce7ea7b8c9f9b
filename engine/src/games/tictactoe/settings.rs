use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::logger::LogLevel;
use super::types::GameMode;

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";
pub const DEFAULT_AI_DELAY_MS: u64 = 500;
pub const MAX_AI_DELAY_MS: u64 = 10_000;

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(CONFIG_FILE)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub ai_delay_ms: u64,
    pub default_mode: GameMode,
    pub log_prefix: Option<String>,
    pub debug_logging: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            default_mode: GameMode::HumanVsHuman,
            log_prefix: None,
            debug_logging: false,
        }
    }
}

impl GameConfig {
    pub fn log_level(&self) -> LogLevel {
        if self.debug_logging {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(format!(
                "ai_delay_ms must not exceed {}, got {}",
                MAX_AI_DELAY_MS, self.ai_delay_ms
            ));
        }
        if self.log_prefix.as_deref().is_some_and(str::is_empty) {
            return Err("log_prefix must not be empty when set".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub ai_delay: Duration,
    pub initial_mode: GameMode,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for TicTacToeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            ai_delay: Duration::from_millis(config.ai_delay_ms),
            initial_mode: config.default_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, MemoryConfigProvider};

    fn memory_manager(
        content: Option<&str>,
    ) -> ConfigManager<MemoryConfigProvider, GameConfig, YamlConfigSerializer> {
        ConfigManager::new(
            MemoryConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer,
        )
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let manager = memory_manager(None);
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let manager = memory_manager(Some("default_mode: human_vs_ai\n"));
        let config = manager.get_config().unwrap();
        assert_eq!(config.default_mode, GameMode::HumanVsAi);
        assert_eq!(config.ai_delay_ms, DEFAULT_AI_DELAY_MS);
    }

    #[test]
    fn test_set_config_persists_yaml() {
        let manager = memory_manager(None);
        let config = GameConfig {
            ai_delay_ms: 0,
            default_mode: GameMode::HumanVsAi,
            log_prefix: Some("Engine".to_string()),
            debug_logging: true,
        };
        manager.set_config(&config).unwrap();

        let stored = manager.provider().content().unwrap();
        assert!(stored.contains("human_vs_ai"));

        let reloaded = memory_manager(Some(stored.as_str()));
        assert_eq!(reloaded.get_config().unwrap(), config);
        assert_eq!(config.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_rejects_long_ai_delay() {
        let manager = memory_manager(Some("ai_delay_ms: 60000\n"));
        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            ai_delay_ms: MAX_AI_DELAY_MS + 1,
            ..GameConfig::default()
        };
        assert!(manager.set_config(&config).is_err());
        assert_eq!(manager.provider().content().as_deref(), Some("ai_delay_ms: 60000\n"));
    }

    #[test]
    fn test_unknown_mode_is_parse_error() {
        let manager = memory_manager(Some("default_mode: online\n"));
        assert!(matches!(manager.get_config(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_file_manager_without_file_uses_defaults() {
        assert!(!std::path::Path::new(CONFIG_FILE).exists());
        let manager = get_config_manager();
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_session_settings_from_config() {
        let config = GameConfig {
            ai_delay_ms: 250,
            ..GameConfig::default()
        };
        let settings = TicTacToeSessionSettings::from(&config);
        assert_eq!(settings.ai_delay, Duration::from_millis(250));
        assert_eq!(settings.initial_mode, GameMode::HumanVsHuman);
    }
}
