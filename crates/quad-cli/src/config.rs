//! Configuration file loading for the command-line host.
//!
//! The host reads `quad.toml` from the current directory unless another path
//! is given. Every setting is optional; a missing file means the standard
//! board with the standard layout.

use quad_engine::{BoardConfig, Game, STANDARD_LAYOUT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration or setting up a game.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The `[board]` section describes an unusable board.
    #[error("Invalid board: {0}")]
    BoardError(#[from] quad_engine::ConfigError),
}

/// Top-level configuration.
///
/// ```toml
/// layout = "boards/custom.txt"
///
/// [board]
/// size = 16
/// walls = [ { start = [0, 4], end = [4, 4] } ]
/// ```
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct CliConfig {
    /// Path to a board layout file. Defaults to the built-in standard layout.
    #[serde(default)]
    pub layout: Option<PathBuf>,
    /// Board dimensions, pixel metrics and walls.
    #[serde(default)]
    pub board: BoardConfig,
}

impl CliConfig {
    /// Loads the configuration from `path`, or from [`Self::config_path()`]
    /// when no path is given. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map_or_else(Self::config_path, Path::to_path_buf);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `quad.toml` in the current
    /// working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("quad.toml")
    }

    /// Builds a game from this configuration.
    ///
    /// An unreadable layout file leaves the board empty; the engine logs it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BoardError`] if the board section is invalid.
    pub fn new_game(&self) -> Result<Game, ConfigError> {
        let mut game = Game::new(self.board.clone())?;
        match &self.layout {
            Some(path) => {
                let _ = game.load_layout_file(path);
            }
            None => {
                game.load_layout(STANDARD_LAYOUT);
            }
        }
        Ok(game)
    }
}
