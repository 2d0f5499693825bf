//! Game controller
//!
//! Owns the state machine, the paddle, the ball and the current level's
//! bricks, and sequences them once per frame:
//!
//! 1. lives check
//! 2. early return unless simulating
//! 3. entity updates (active objects, then bricks)
//! 4. deletion flush
//! 5. level advance when the bricks run out

use glam::Vec2;

use super::ball::Ball;
use super::brick::Brick;
use super::entity::{ActiveObject, Entity, World};
use super::level::{LevelDef, build_level};
use super::paddle::Paddle;
use super::state::{GameEvent, GameState, transition};
use crate::config::{EndOfLevels, GameConfig};
use crate::consts::BRICK_POINTS;
use crate::error::Result;
use crate::render::{Color, Surface, TextAlign};

/// HUD anchor points
const LIVES_POS: Vec2 = Vec2::new(720.0, 40.0);
const LEVEL_POS: Vec2 = Vec2::new(80.0, 40.0);
const HUD_FONT: &str = "bold 20px Arial";
const PANEL_FONT: &str = "30px Arial";

pub struct Game {
    state: GameState,
    width: f32,
    height: f32,
    paddle: Paddle,
    ball: Ball,
    active_objects: Vec<ActiveObject>,
    bricks: Vec<Brick>,
    lives: u32,
    score: u64,
    levels: Vec<LevelDef>,
    current_level: usize,
    end_of_levels: EndOfLevels,
}

impl Game {
    /// Validate `config` and build a session waiting in `Menu`
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let bounds = Vec2::new(config.width, config.height);

        log::info!(
            "New game {}x{}, {} lives, {} levels, seed {}",
            config.width,
            config.height,
            config.lives,
            config.levels.len(),
            config.seed
        );

        Ok(Self {
            state: GameState::Menu,
            width: config.width,
            height: config.height,
            paddle: Paddle::new(bounds),
            ball: Ball::new(bounds, config.seed),
            active_objects: Vec::new(),
            bricks: Vec::new(),
            lives: config.lives,
            score: 0,
            levels: config.levels,
            current_level: 0,
            end_of_levels: config.end_of_levels,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// 0-based index into the level sequence
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn active_objects(&self) -> &[ActiveObject] {
        &self.active_objects
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    /// For the input decoder
    pub fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Leave the menu and load the current level; ignored in any other state
    /// and with no lives left
    pub fn start(&mut self) {
        if transition(self.state, GameEvent::Start) == self.state {
            log::debug!("start ignored in {}", self.state.as_str());
            return;
        }
        if self.lives == 0 {
            log::debug!("start ignored with no lives left");
            return;
        }
        self.load_level();
        self.apply(GameEvent::Start);
    }

    /// Running <-> Paused; other states ignore the toggle
    pub fn toggle_pause(&mut self) {
        self.apply(GameEvent::TogglePause);
    }

    /// Advance the simulation by `dt` milliseconds
    pub fn update(&mut self, dt: f32) {
        if self.lives == 0 {
            self.apply(GameEvent::LivesExhausted);
        }

        if !self.state.is_simulating() {
            return;
        }

        if self.state == GameState::NewLevel {
            self.apply(GameEvent::LevelBegun);
        }

        if self.bricks.is_empty() {
            self.advance_level();
            if !self.state.is_simulating() {
                return;
            }
        }

        self.update_entities(dt);
        self.flush_destroyed();

        if self.bricks.is_empty() {
            self.advance_level();
        }
    }

    /// Paint entities, the state panel and the HUD
    pub fn draw(&self, surface: &mut dyn Surface) {
        for &object in &self.active_objects {
            self.entity(object).draw(surface);
        }
        for brick in &self.bricks {
            brick.draw(surface);
        }

        match self.state {
            GameState::Paused => self.draw_panel(surface, "Paused", Color::rgba(0, 0, 0, 0.5)),
            GameState::Menu => self.draw_panel(surface, "Press SPACEBAR to Start", Color::BLACK),
            GameState::GameOver => self.draw_panel(surface, "GAME OVER", Color::BLACK),
            GameState::Victory => self.draw_panel(surface, "YOU WIN", Color::BLACK),
            GameState::Running | GameState::NewLevel => {}
        }

        self.draw_info(surface);
    }

    fn entity(&self, object: ActiveObject) -> &dyn Entity {
        match object {
            ActiveObject::Ball => &self.ball,
            ActiveObject::Paddle => &self.paddle,
        }
    }

    fn apply(&mut self, event: GameEvent) {
        let next = transition(self.state, event);
        if next != self.state {
            log::info!(
                "{} -> {} ({:?})",
                self.state.as_str(),
                next.as_str(),
                event
            );
            self.state = next;
        }
    }

    /// Build the current level's bricks, re-serve the ball, reset the object set
    fn load_level(&mut self) {
        let level = &self.levels[self.current_level];
        self.bricks = build_level(level, self.width);
        self.ball.reset();
        self.active_objects = vec![ActiveObject::Ball, ActiveObject::Paddle];
        log::info!(
            "Level {} loaded with {} bricks",
            self.current_level + 1,
            self.bricks.len()
        );
    }

    fn advance_level(&mut self) {
        let next = self.current_level + 1;
        if next < self.levels.len() {
            self.current_level = next;
        } else {
            match self.end_of_levels {
                EndOfLevels::Victory => {
                    log::info!("All {} levels cleared", self.levels.len());
                    self.apply(GameEvent::LevelsExhausted);
                    return;
                }
                EndOfLevels::Loop => {
                    log::info!("All levels cleared, policy {}", self.end_of_levels.as_str());
                    self.current_level = 0;
                }
            }
        }
        self.load_level();
        self.apply(GameEvent::LevelCleared);
    }

    fn update_entities(&mut self, dt: f32) {
        let bounds = Vec2::new(self.width, self.height);

        for i in 0..self.active_objects.len() {
            let mut world = World {
                bounds,
                paddle: self.paddle.rect(),
                bricks: &mut self.bricks,
                lives: &mut self.lives,
            };
            match self.active_objects[i] {
                ActiveObject::Ball => self.ball.update(dt, &mut world),
                ActiveObject::Paddle => self.paddle.update(dt, &mut world),
            }
        }

        let mut world = World {
            bounds,
            paddle: self.paddle.rect(),
            bricks: Default::default(),
            lives: &mut self.lives,
        };
        for brick in &mut self.bricks {
            brick.update(dt, &mut world);
        }
    }

    /// Drop every brick marked during this update; the only structural removal
    fn flush_destroyed(&mut self) {
        let before = self.bricks.len();
        self.bricks.retain(|b| !b.is_marked_for_deletion());
        let removed = (before - self.bricks.len()) as u64;
        if removed > 0 {
            self.score += removed * BRICK_POINTS;
            log::debug!("{} bricks destroyed, {} left", removed, self.bricks.len());
        }
    }

    fn draw_panel(&self, surface: &mut dyn Surface, text: &str, fill: Color) {
        surface.set_fill_style(fill);
        surface.fill_rect(0.0, 0.0, self.width, self.height);

        surface.set_font(PANEL_FONT);
        surface.set_fill_style(Color::WHITE);
        surface.fill_text(text, self.width / 2.0, self.height / 2.0, TextAlign::Center);
    }

    fn draw_info(&self, surface: &mut dyn Surface) {
        surface.set_font(HUD_FONT);
        surface.set_fill_style(Color::BLACK);
        surface.fill_text(
            &format!("Lives left {}", self.lives),
            LIVES_POS.x,
            LIVES_POS.y,
            TextAlign::Center,
        );
        surface.fill_text(
            &format!("Level {}", self.current_level + 1),
            LEVEL_POS.x,
            LEVEL_POS.y,
            TextAlign::Center,
        );
        surface.fill_text(
            &format!("Score {}", self.score),
            self.width / 2.0,
            LEVEL_POS.y,
            TextAlign::Center,
        );
    }
}
