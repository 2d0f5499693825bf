//! The player's paddle

use glam::Vec2;

use super::entity::{Entity, Rect, World};
use crate::consts::{PADDLE_BOTTOM_MARGIN, PADDLE_HEIGHT, PADDLE_MAX_SPEED, PADDLE_WIDTH};
use crate::render::{Color, Surface};

#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed (pixels/second, negative = left)
    speed: f32,
    max_speed: f32,
}

impl Paddle {
    /// Centered near the bottom of a `bounds`-sized playfield
    pub fn new(bounds: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                bounds.x / 2.0 - PADDLE_WIDTH / 2.0,
                bounds.y - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN,
            ),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: 0.0,
            max_speed: PADDLE_MAX_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn move_left(&mut self) {
        self.speed = -self.max_speed;
    }

    pub fn move_right(&mut self) {
        self.speed = self.max_speed;
    }

    pub fn stop(&mut self) {
        self.speed = 0.0;
    }
}

impl Entity for Paddle {
    fn update(&mut self, dt: f32, world: &mut World<'_>) {
        self.pos.x += self.speed * dt / 1000.0;
        let max_x = (world.bounds.x - self.size.x).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill_style(Color::CYAN);
        self.rect().fill(surface);
    }
}
