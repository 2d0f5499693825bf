//! Game configuration
//!
//! Playfield size, starting lives, RNG seed and the level sequence.
//! Loaded from JSON; every field falls back to the built-in default.

use serde::{Deserialize, Serialize};

use crate::consts::{GAME_HEIGHT, GAME_WIDTH, STARTING_LIVES};
use crate::error::{GameError, Result};
use crate::sim::level::{LevelDef, default_levels};

/// What happens after the last level is cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLevels {
    /// Stop in the terminal `Victory` state
    #[default]
    Victory,
    /// Wrap around to the first level
    Loop,
}

impl EndOfLevels {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndOfLevels::Victory => "victory",
            EndOfLevels::Loop => "loop",
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Lives at session start
    pub lives: u32,
    /// Seed for the serve RNG
    pub seed: u64,
    /// Behaviour once every level is cleared
    pub end_of_levels: EndOfLevels,
    /// Level layouts, played in order
    pub levels: Vec<LevelDef>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            lives: STARTING_LIVES,
            seed: 0,
            end_of_levels: EndOfLevels::Victory,
            levels: default_levels(),
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the controller relies on
    pub fn validate(&self) -> Result<()> {
        let valid_dim = |v: f32| v.is_finite() && v > 0.0;
        if !valid_dim(self.width) || !valid_dim(self.height) {
            return Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.lives == 0 {
            return Err(GameError::NoLives);
        }
        if self.levels.is_empty() {
            return Err(GameError::NoLevels);
        }
        if let Some(index) = self.levels.iter().position(|l| l.brick_count() == 0) {
            return Err(GameError::EmptyLevel(index));
        }
        // Unreachable bricks would leave the level uncleared forever
        if let Some(index) = self
            .levels
            .iter()
            .position(|l| !l.fits(self.width, self.height))
        {
            return Err(GameError::LevelOutOfBounds {
                index,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
