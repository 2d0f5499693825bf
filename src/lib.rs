//! Brick Breaker - A classic brick breaking arcade game
//!
//! Core modules:
//! - `sim`: Game controller, state machine and entities (paddle, ball, bricks)
//! - `render`: Drawing surface abstraction and a recording surface
//! - `input`: Keyboard decoding and autopilot
//! - `platform`: Browser canvas integration
//! - `config`: Data-driven playfield and level configuration

pub mod config;
pub mod error;
pub mod input;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::{EndOfLevels, GameConfig};
pub use error::{GameError, Result};
pub use sim::{Game, GameState};

/// Game configuration constants
///
/// Speeds are in pixels per second; `Game::update` takes milliseconds.
pub mod consts {
    /// Default playfield dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Lives at the start of a session
    pub const STARTING_LIVES: u32 = 3;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Gap between the paddle and the bottom edge
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    pub const PADDLE_MAX_SPEED: f32 = 420.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 16.0;
    /// Serve velocity (horizontal sign is picked per serve)
    pub const BALL_SERVE_SPEED_X: f32 = 240.0;
    pub const BALL_SERVE_SPEED_Y: f32 = -120.0;
    /// Distance from the side wall the ball is served from
    pub const BALL_SERVE_MARGIN: f32 = 10.0;

    /// Brick layout
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 24.0;
    pub const BRICK_TOP_OFFSET: f32 = 75.0;
    /// Points awarded per destroyed brick
    pub const BRICK_POINTS: u64 = 10;

    /// Longest frame the platform loop will feed into `update` (ms)
    pub const MAX_FRAME_MS: f32 = 100.0;
}
