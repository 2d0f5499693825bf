//! Entity capability shared by paddle, ball and bricks

use glam::Vec2;

use super::brick::Brick;
use crate::render::Surface;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Edges touching counts as overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() >= other.left()
            && self.left() <= other.right()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }

    pub fn fill(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y);
    }
}

/// What an entity may see and touch during its update
///
/// Built by the controller from disjoint borrows of its own fields, so an
/// entity never holds a reference to the controller itself.
pub struct World<'a> {
    /// Playfield size
    pub bounds: Vec2,
    /// Paddle rectangle at the start of this entity's update
    pub paddle: Rect,
    /// Current level's bricks (empty while bricks themselves are updated)
    pub bricks: &'a mut [Brick],
    /// Lives counter, decremented by the ball
    pub lives: &'a mut u32,
}

/// Anything the controller updates and draws every frame
pub trait Entity {
    /// Advance by `dt` milliseconds
    fn update(&mut self, dt: f32, world: &mut World<'_>);

    /// Paint without mutating
    fn draw(&self, surface: &mut dyn Surface);
}

/// Handle into the controller-owned active object set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveObject {
    Ball,
    Paddle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges
        assert!(a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(11.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.5, 10.0, 10.0)));
    }
}
