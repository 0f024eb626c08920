use std::path::Path;

use ratatui::style::Color;
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Player, WIDTH};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub ui: UiConfig,
}

/// How the front end presents each player. The engine only knows
/// `Player1`/`Player2`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player1_label: String,
    pub player2_label: String,
    /// Any colour name or `#rrggbb` value ratatui understands
    pub player1_color: String,
    pub player2_color: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player1_label: "Red".into(),
            player2_label: "Blue".into(),
            player1_color: "red".into(),
            player2_color: "blue".into(),
        }
    }
}

impl PlayersConfig {
    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::Player1 => &self.player1_label,
            Player::Player2 => &self.player2_label,
        }
    }

    /// Display colour for `player`. Only meaningful on a validated config;
    /// a name that does not parse yields white.
    pub fn color(&self, player: Player) -> Color {
        let name = match player {
            Player::Player1 => &self.player1_color,
            Player::Player2 => &self.player2_color,
        };
        name.parse().unwrap_or(Color::White)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on, 0-based
    pub start_column: usize,
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: WIDTH / 2,
            poll_interval_ms: 100,
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
        let players = &self.players;
        if players.player1_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.player1_label must not be empty".into(),
            ));
        }
        if players.player2_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.player2_label must not be empty".into(),
            ));
        }
        if players.player1_label == players.player2_label {
            return Err(ConfigError::Validation(
                "players.player1_label and players.player2_label must differ".into(),
            ));
        }
        if players.player1_color.parse::<Color>().is_err() {
            return Err(ConfigError::Validation(format!(
                "players.player1_color '{}' is not a known colour",
                players.player1_color
            )));
        }
        if players.player2_color.parse::<Color>().is_err() {
            return Err(ConfigError::Validation(format!(
                "players.player2_color '{}' is not a known colour",
                players.player2_color
            )));
        }

        if self.ui.start_column >= WIDTH {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {WIDTH}"
            )));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
