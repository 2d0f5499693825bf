//! Simulation module
//!
//! All gameplay logic lives here:
//! - Frame-driven updates, one `update` then one `draw` per frame
//! - Seeded RNG only
//! - Stable iteration order (active objects, then bricks in layout order)
//! - No platform dependencies; drawing goes through `render::Surface`

pub mod ball;
pub mod brick;
pub mod entity;
pub mod game;
pub mod level;
pub mod paddle;
pub mod state;

pub use ball::Ball;
pub use brick::Brick;
pub use entity::{ActiveObject, Entity, Rect, World};
pub use game::Game;
pub use level::{LevelDef, build_level, default_levels};
pub use paddle::Paddle;
pub use state::{GameEvent, GameState, transition};
