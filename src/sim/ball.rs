//! The ball: motion, wall/paddle/brick response and life loss

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Entity, Rect, World};
use crate::consts::{BALL_SERVE_MARGIN, BALL_SERVE_SPEED_X, BALL_SERVE_SPEED_Y, BALL_SIZE};
use crate::render::{Color, Surface};

const BALL_COLOR: Color = Color::rgb(52, 73, 94);

#[derive(Debug, Clone)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels/second
    pub vel: Vec2,
    pub size: f32,
    bounds: Vec2,
    rng: Pcg32,
}

impl Ball {
    /// Create a ball in serve position for a `bounds`-sized playfield
    pub fn new(bounds: Vec2, seed: u64) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: BALL_SIZE,
            bounds,
            rng: Pcg32::seed_from_u64(seed),
        };
        ball.reset();
        ball
    }

    /// Back to the serve spot, heading up and away from the near wall
    pub fn reset(&mut self) {
        let rightward = self.rng.random_bool(0.5);
        let x = if rightward {
            BALL_SERVE_MARGIN
        } else {
            self.bounds.x - BALL_SERVE_MARGIN - self.size
        };
        self.pos = Vec2::new(x, self.bounds.y * 2.0 / 3.0);
        self.vel = Vec2::new(
            if rightward {
                BALL_SERVE_SPEED_X
            } else {
                -BALL_SERVE_SPEED_X
            },
            BALL_SERVE_SPEED_Y,
        );
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::splat(self.size),
        }
    }
}

impl Entity for Ball {
    fn update(&mut self, dt: f32, world: &mut World<'_>) {
        self.pos += self.vel * (dt / 1000.0);

        // Side walls
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x + self.size > world.bounds.x {
            self.pos.x = world.bounds.x - self.size;
            self.vel.x = -self.vel.x.abs();
        }

        // Ceiling
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = self.vel.y.abs();
        }

        // Floor: life lost
        if self.pos.y + self.size > world.bounds.y {
            *world.lives = world.lives.saturating_sub(1);
            log::info!("Ball lost, {} lives left", world.lives);
            self.reset();
            return;
        }

        let rect = self.rect();

        // Paddle (only while falling, so the ball can't stick)
        if self.vel.y > 0.0 && rect.overlaps(&world.paddle) {
            self.vel.y = -self.vel.y;
            self.pos.y = world.paddle.top() - self.size;
        }

        // Bricks: every overlapped brick breaks, one reflection per frame
        let mut hit = false;
        for brick in world
            .bricks
            .iter_mut()
            .filter(|b| !b.is_marked_for_deletion())
        {
            if rect.overlaps(&brick.rect()) {
                brick.mark_for_deletion();
                hit = true;
            }
        }
        if hit {
            self.vel.y = -self.vel.y;
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill_style(BALL_COLOR);
        self.rect().fill(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::brick::Brick;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn far_paddle() -> Rect {
        Rect::new(0.0, 2000.0, 150.0, 20.0)
    }

    #[test]
    fn test_reset_is_serve_state() {
        let mut ball = Ball::new(BOUNDS, 7);
        ball.pos = Vec2::new(123.0, 456.0);
        ball.vel = Vec2::ZERO;
        ball.reset();

        assert_eq!(ball.pos.y, 400.0);
        assert_eq!(ball.vel.y, BALL_SERVE_SPEED_Y);
        assert_eq!(ball.vel.x.abs(), BALL_SERVE_SPEED_X);
        // Served from the wall it moves away from
        if ball.vel.x > 0.0 {
            assert_eq!(ball.pos.x, BALL_SERVE_MARGIN);
        } else {
            assert_eq!(ball.pos.x, BOUNDS.x - BALL_SERVE_MARGIN - BALL_SIZE);
        }
    }

    #[test]
    fn test_same_seed_same_serves() {
        let mut a = Ball::new(BOUNDS, 42);
        let mut b = Ball::new(BOUNDS, 42);
        for _ in 0..8 {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
            a.reset();
            b.reset();
        }
    }

    #[test]
    fn test_bounces_off_walls() {
        let mut ball = Ball::new(BOUNDS, 1);
        let mut lives = 3;

        ball.pos = Vec2::new(1.0, 300.0);
        ball.vel = Vec2::new(-240.0, -120.0);
        let mut world = World {
            bounds: BOUNDS,
            paddle: far_paddle(),
            bricks: Default::default(),
            lives: &mut lives,
        };
        ball.update(16.0, &mut world);
        assert!(ball.vel.x > 0.0);
        assert_eq!(ball.pos.x, 0.0);

        ball.pos = Vec2::new(300.0, 1.0);
        ball.update(16.0, &mut world);
        assert!(ball.vel.y > 0.0);
        assert_eq!(*world.lives, 3);
    }

    #[test]
    fn test_floor_costs_a_life_and_resets() {
        let mut ball = Ball::new(BOUNDS, 1);
        let mut lives = 3;
        ball.pos = Vec2::new(300.0, 590.0);
        ball.vel = Vec2::new(0.0, 240.0);
        let mut world = World {
            bounds: BOUNDS,
            paddle: far_paddle(),
            bricks: Default::default(),
            lives: &mut lives,
        };
        ball.update(16.0, &mut world);
        assert_eq!(lives, 2);
        assert_eq!(ball.pos.y, 400.0);
        assert_eq!(ball.vel.y, BALL_SERVE_SPEED_Y);
    }

    #[test]
    fn test_lives_never_underflow() {
        let mut ball = Ball::new(BOUNDS, 1);
        let mut lives = 0;
        ball.pos = Vec2::new(300.0, 595.0);
        ball.vel = Vec2::new(0.0, 240.0);
        let mut world = World {
            bounds: BOUNDS,
            paddle: far_paddle(),
            bricks: Default::default(),
            lives: &mut lives,
        };
        ball.update(16.0, &mut world);
        assert_eq!(lives, 0);
    }

    #[test]
    fn test_paddle_bounce_places_ball_on_top() {
        let mut ball = Ball::new(BOUNDS, 1);
        let mut lives = 3;
        let paddle = Rect::new(325.0, 570.0, 150.0, 20.0);
        ball.pos = Vec2::new(400.0, 553.0);
        ball.vel = Vec2::new(0.0, 240.0);
        let mut world = World {
            bounds: BOUNDS,
            paddle,
            bricks: Default::default(),
            lives: &mut lives,
        };
        ball.update(16.0, &mut world);
        assert!(ball.vel.y < 0.0);
        assert_eq!(ball.pos.y, 570.0 - BALL_SIZE);
    }

    #[test]
    fn test_rising_ball_passes_paddle() {
        let mut ball = Ball::new(BOUNDS, 1);
        let mut lives = 3;
        let paddle = Rect::new(325.0, 570.0, 150.0, 20.0);
        ball.pos = Vec2::new(400.0, 565.0);
        ball.vel = Vec2::new(0.0, -240.0);
        let mut world = World {
            bounds: BOUNDS,
            paddle,
            bricks: Default::default(),
            lives: &mut lives,
        };
        ball.update(16.0, &mut world);
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_brick_hit_marks_and_reflects_once() {
        let mut ball = Ball::new(BOUNDS, 1);
        let mut lives = 3;
        let mut bricks = vec![
            Brick::new(80.0, 75.0, 0),
            Brick::new(160.0, 75.0, 0),
            Brick::new(400.0, 75.0, 0),
        ];
        // Straddles the seam between the first two bricks
        ball.pos = Vec2::new(152.0, 100.0);
        ball.vel = Vec2::new(0.0, -120.0);
        let mut world = World {
            bounds: BOUNDS,
            paddle: far_paddle(),
            bricks: &mut bricks,
            lives: &mut lives,
        };
        ball.update(16.0, &mut world);

        assert!(ball.vel.y > 0.0);
        assert!(bricks[0].is_marked_for_deletion());
        assert!(bricks[1].is_marked_for_deletion());
        assert!(!bricks[2].is_marked_for_deletion());
    }
}
