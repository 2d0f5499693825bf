//! Game state machine
//!
//! The controller holds exactly one `GameState`. Every change goes through
//! [`transition`], a pure function of the current state and an event.

use serde::{Deserialize, Serialize};

/// Current state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameState {
    /// Title screen, waiting for start
    #[default]
    Menu,
    /// Active gameplay
    Running,
    /// Simulation frozen by the player
    Paused,
    /// A new level was just loaded; becomes `Running` on the next update
    NewLevel,
    /// Out of lives
    GameOver,
    /// Every level cleared
    Victory,
}

impl GameState {
    /// States in which entities are updated each frame
    pub fn is_simulating(self) -> bool {
        matches!(self, GameState::Running | GameState::NewLevel)
    }

    /// States that only a new session can leave
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::GameOver | GameState::Victory)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Menu => "Menu",
            GameState::Running => "Running",
            GameState::Paused => "Paused",
            GameState::NewLevel => "NewLevel",
            GameState::GameOver => "GameOver",
            GameState::Victory => "Victory",
        }
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player asked to start (spacebar)
    Start,
    /// Player pressed pause
    TogglePause,
    /// Lives reached zero
    LivesExhausted,
    /// All bricks of the current level are gone and another level was loaded
    LevelCleared,
    /// The frame after a level load
    LevelBegun,
    /// The last level was cleared
    LevelsExhausted,
}

/// Next state for `event` in `state`; unlisted pairs leave the state unchanged
pub fn transition(state: GameState, event: GameEvent) -> GameState {
    use GameEvent::*;
    use GameState::*;

    match (state, event) {
        (s, LivesExhausted) if !s.is_terminal() => GameOver,
        (Menu, Start) => Running,
        (Running | NewLevel, TogglePause) => Paused,
        (Paused, TogglePause) => Running,
        (Running | NewLevel, LevelCleared) => NewLevel,
        (NewLevel, LevelBegun) => Running,
        (Running | NewLevel, LevelsExhausted) => Victory,
        (s, _) => s,
    }
}
