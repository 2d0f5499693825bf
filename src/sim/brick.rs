//! Destructible bricks

use super::entity::{Entity, Rect, World};
use crate::consts::{BRICK_HEIGHT, BRICK_WIDTH};
use crate::render::{Color, Surface};

/// Row-based brick colors (top to bottom)
const BRICK_COLORS: [Color; 4] = [
    Color::rgb(231, 76, 60),
    Color::rgb(241, 196, 15),
    Color::rgb(46, 204, 113),
    Color::rgb(52, 152, 219),
];

/// A brick in the current level
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    rect: Rect,
    /// Layout row, for color lookup
    row: usize,
    marked_for_deletion: bool,
}

impl Brick {
    pub fn new(x: f32, y: f32, row: usize) -> Self {
        Self {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            row,
            marked_for_deletion: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Flag for removal at the end of the current update
    pub fn mark_for_deletion(&mut self) {
        self.marked_for_deletion = true;
    }

    pub fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }

    pub fn color(&self) -> Color {
        BRICK_COLORS[self.row % BRICK_COLORS.len()]
    }
}

impl Entity for Brick {
    fn update(&mut self, _dt: f32, _world: &mut World<'_>) {
        // Static bricks; hits are resolved by the ball
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill_style(self.color());
        self.rect.fill(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn test_mark_for_deletion() {
        let mut brick = Brick::new(0.0, 75.0, 0);
        assert!(!brick.is_marked_for_deletion());
        brick.mark_for_deletion();
        assert!(brick.is_marked_for_deletion());
    }

    #[test]
    fn test_draw_uses_row_color() {
        let brick = Brick::new(80.0, 99.0, 5);
        let mut surface = RecordingSurface::new();
        brick.draw(&mut surface);
        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::FillStyle(BRICK_COLORS[1]),
                DrawCommand::FillRect {
                    x: 80.0,
                    y: 99.0,
                    width: BRICK_WIDTH,
                    height: BRICK_HEIGHT,
                },
            ]
        );
    }
}
