//! Level layouts and the brick builder

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::brick::Brick;
use crate::consts::{BRICK_HEIGHT, BRICK_TOP_OFFSET, BRICK_WIDTH};

/// Grid of brick cells; any nonzero cell places a brick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelDef {
    pub rows: Vec<Vec<u8>>,
}

impl LevelDef {
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    /// Number of bricks `build_level` will produce
    pub fn brick_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != 0)
            .count()
    }

    /// Bottom-right corner of the furthest brick; zero for an empty level
    pub fn extent(&self) -> Vec2 {
        let mut extent = Vec2::ZERO;
        for (row_index, row) in self.rows.iter().enumerate() {
            if let Some(col_index) = row.iter().rposition(|&cell| cell != 0) {
                extent.x = extent.x.max(BRICK_WIDTH * (col_index + 1) as f32);
                extent.y = BRICK_TOP_OFFSET + BRICK_HEIGHT * (row_index + 1) as f32;
            }
        }
        extent
    }

    /// Whether every brick lies inside a `width` x `height` playfield
    pub fn fits(&self, width: f32, height: f32) -> bool {
        let extent = self.extent();
        extent.x <= width && extent.y <= height
    }
}

/// Two sparse pairs
pub fn level1() -> LevelDef {
    LevelDef::new(vec![vec![0, 1, 1, 0, 0, 0, 0, 1, 1, 0]])
}

/// Checkered cap over three full rows
pub fn level2() -> LevelDef {
    LevelDef::new(vec![
        vec![0, 1, 0, 1, 0, 0, 1, 0, 1, 0],
        vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ])
}

pub fn default_levels() -> Vec<LevelDef> {
    vec![level1(), level2()]
}

/// Lay out the bricks for `level` in row-major order
pub fn build_level(level: &LevelDef, playfield_width: f32) -> Vec<Brick> {
    if level.extent().x > playfield_width {
        log::warn!(
            "Level is {}px wide but the playfield is {}px; some bricks are off-screen",
            level.extent().x,
            playfield_width
        );
    }

    let mut bricks = Vec::with_capacity(level.brick_count());
    for (row_index, row) in level.rows.iter().enumerate() {
        for (col_index, &cell) in row.iter().enumerate() {
            if cell == 0 {
                continue;
            }
            let x = BRICK_WIDTH * col_index as f32;
            let y = BRICK_TOP_OFFSET + BRICK_HEIGHT * row_index as f32;
            bricks.push(Brick::new(x, y, row_index));
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_counts() {
        assert_eq!(level1().brick_count(), 4);
        assert_eq!(level2().brick_count(), 34);
        assert_eq!(LevelDef::new(vec![vec![0, 0], vec![]]).brick_count(), 0);
    }

    #[test]
    fn test_build_level_positions() {
        let bricks = build_level(&level1(), 800.0);
        assert_eq!(bricks.len(), 4);
        let xs: Vec<f32> = bricks.iter().map(|b| b.rect().left()).collect();
        assert_eq!(xs, vec![80.0, 160.0, 560.0, 640.0]);
        assert!(bricks.iter().all(|b| b.rect().top() == BRICK_TOP_OFFSET));
        assert!(bricks.iter().all(|b| !b.is_marked_for_deletion()));
    }

    #[test]
    fn test_build_level_rows() {
        let bricks = build_level(&level2(), 800.0);
        assert_eq!(bricks.len(), level2().brick_count());
        let last = bricks.last().unwrap();
        assert_eq!(last.row(), 3);
        assert_eq!(last.rect().top(), BRICK_TOP_OFFSET + 3.0 * BRICK_HEIGHT);
        assert_eq!(last.rect().left(), 9.0 * BRICK_WIDTH);
    }

    #[test]
    fn test_extent_ignores_trailing_gaps() {
        assert_eq!(level1().extent(), Vec2::new(720.0, 99.0));
        assert_eq!(level2().extent(), Vec2::new(800.0, 171.0));
        assert_eq!(LevelDef::new(vec![vec![1, 0, 0, 0]]).extent().x, 80.0);
        assert_eq!(LevelDef::new(vec![vec![0, 0]]).extent(), Vec2::ZERO);
    }

    #[test]
    fn test_fits_playfield() {
        assert!(level1().fits(800.0, 600.0));
        assert!(level1().fits(720.0, 99.0));
        assert!(!level1().fits(400.0, 600.0));
        assert!(!level2().fits(800.0, 150.0));
    }

    #[test]
    fn test_level_json_is_bare_grid() {
        let json = serde_json::to_string(&level1()).unwrap();
        assert_eq!(json, "[[0,1,1,0,0,0,0,1,1,0]]");
    }
}
