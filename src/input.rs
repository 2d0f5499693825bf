//! Keyboard decoding
//!
//! Maps key names (as reported by `KeyboardEvent.key`) to paddle moves and
//! controller commands. Purely event-driven: nothing here runs per frame
//! except the optional autopilot.

use crate::sim::Game;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Pause,
    Start,
}

impl Key {
    /// Decode a DOM key name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "Escape" | "Esc" => Some(Key::Pause),
            " " | "Spacebar" => Some(Key::Start),
            _ => None,
        }
    }
}

pub fn key_down(game: &mut Game, key: Key) {
    match key {
        Key::Left => game.paddle_mut().move_left(),
        Key::Right => game.paddle_mut().move_right(),
        Key::Pause => game.toggle_pause(),
        Key::Start => game.start(),
    }
}

/// Releasing an arrow only stops the paddle if it was moving that way
pub fn key_up(game: &mut Game, key: Key) {
    let paddle = game.paddle_mut();
    match key {
        Key::Left if paddle.speed() < 0.0 => paddle.stop(),
        Key::Right if paddle.speed() > 0.0 => paddle.stop(),
        _ => {}
    }
}

/// Arrow key to hold so the paddle stays under the ball (None = release both)
pub fn autopilot(game: &Game) -> Option<Key> {
    let ball = game.ball().rect().center().x;
    let paddle = game.paddle().rect();
    // Aim slightly off-center so returns are not perfectly vertical
    let target = paddle.center().x + paddle.size.x * 0.1;
    let dead_zone = paddle.size.x * 0.2;

    if ball < target - dead_zone {
        Some(Key::Left)
    } else if ball > target + dead_zone {
        Some(Key::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use crate::sim::GameState;

    fn game() -> Game {
        Game::new(GameConfig::default()).unwrap()
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name("Escape"), Some(Key::Pause));
        assert_eq!(Key::from_name(" "), Some(Key::Start));
        assert_eq!(Key::from_name("q"), None);
    }

    #[test]
    fn test_space_starts_and_escape_pauses() {
        let mut game = game();
        key_down(&mut game, Key::Start);
        assert_eq!(game.state(), GameState::Running);
        key_down(&mut game, Key::Pause);
        assert_eq!(game.state(), GameState::Paused);
        key_down(&mut game, Key::Pause);
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn test_release_stops_only_matching_direction() {
        let mut game = game();
        key_down(&mut game, Key::Left);
        assert!(game.paddle().speed() < 0.0);

        // Left then right pressed; letting go of left keeps moving right
        key_down(&mut game, Key::Right);
        key_up(&mut game, Key::Left);
        assert!(game.paddle().speed() > 0.0);

        key_up(&mut game, Key::Right);
        assert_eq!(game.paddle().speed(), 0.0);
    }

    #[test]
    fn test_autopilot_follows_ball() {
        let game = game();
        let ball = game.ball().rect().center().x;
        let paddle = game.paddle().rect().center().x;
        match autopilot(&game) {
            Some(Key::Left) => assert!(ball < paddle),
            Some(Key::Right) => assert!(ball > paddle),
            other => panic!("serve position is far from the paddle, got {:?}", other),
        }
    }
}
