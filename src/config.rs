use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Mark, Player};

/// One seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub id: i64,
    pub mark: Mark,
}

impl PlayerConfig {
    pub fn player(&self) -> Player {
        Player::new(self.id, self.mark)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub player_one: PlayerConfig,
    pub player_two: PlayerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: "info".to_string(),
            player_one: PlayerConfig {
                id: 1,
                mark: Mark::Red,
            },
            player_two: PlayerConfig {
                id: 2,
                mark: Mark::Yellow,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_one.id == self.player_two.id {
            return Err(ConfigError::Validation(
                "player_one.id and player_two.id must differ".into(),
            ));
        }
        if self.player_one.mark == self.player_two.mark {
            return Err(ConfigError::Validation(
                "player_one.mark and player_two.mark must differ".into(),
            ));
        }
        Ok(())
    }

    /// The two players, first mover first
    pub fn players(&self) -> (Player, Player) {
        (self.player_one.player(), self.player_two.player())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
