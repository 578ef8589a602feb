//! Playfield bounds on the cell grid
//!
//! Coordinates are whole cells with `y` growing downward. The playable area is
//! inclusive on both ends: `min` and `max` are both valid cells.

use glam::{IVec2, UVec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Inclusive cell bounds of the playable area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub min: IVec2,
    pub max: IVec2,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::from_screen(UVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), CELL_SIZE_PX)
    }
}

impl Playfield {
    /// Derive bounds from a display size in pixels and a cell size.
    ///
    /// 640x400 at 16px gives `x in [2, 37]`, `y in [2, 22]`. Grids too small
    /// for the margins grow to the smallest playable field: one player footprint
    /// wide, one row above the player.
    pub fn from_screen(screen_px: UVec2, cell_px: u32) -> Self {
        let cells = (screen_px / cell_px.max(1)).as_ivec2();
        let min = IVec2::splat(PLAYFIELD_MIN);
        let smallest = min + IVec2::new(PLAYER_WIDTH - 1, 1);
        Self {
            min,
            max: (cells - IVec2::splat(PLAYFIELD_FAR_MARGIN)).max(smallest),
        }
    }

    /// Whether a cell lies inside the bounds
    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(self.min).all() && cell.cmple(self.max).all()
    }

    /// Rightmost column the player's left edge may occupy
    #[inline]
    pub fn player_x_max(&self) -> i32 {
        self.max.x - (PLAYER_WIDTH - 1)
    }

    /// Row the player lives on
    #[inline]
    pub fn player_row(&self) -> i32 {
        self.max.y
    }

    /// Half-open column range targets spawn in (walls excluded)
    pub fn target_columns(&self) -> std::ops::Range<i32> {
        (self.min.x + 1)..(self.max.x - 1)
    }

    /// Half-open row range targets spawn in (upper band only)
    pub fn target_rows(&self) -> std::ops::Range<i32> {
        self.min.y..TARGET_SPAWN_Y_END.min(self.max.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let field = Playfield::default();
        assert_eq!(field.min, IVec2::new(2, 2));
        assert_eq!(field.max, IVec2::new(37, 22));
        assert_eq!(field.player_x_max(), 35);
        assert_eq!(field.player_row(), 22);
    }

    #[test]
    fn test_from_screen_other_cell_size() {
        let field = Playfield::from_screen(UVec2::new(640, 400), 8);
        assert_eq!(field.max, IVec2::new(77, 47));
    }

    #[test]
    fn test_from_screen_tiny_grid() {
        let field = Playfield::from_screen(UVec2::new(64, 64), 16);
        assert_eq!(field.max, IVec2::new(4, 3));
        assert_eq!(field.player_x_max(), field.min.x);
        assert!(field.target_columns().is_empty());

        let field = Playfield::from_screen(UVec2::new(640, 400), 128);
        assert_eq!(field.max, IVec2::new(4, 3));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let field = Playfield::default();
        assert!(field.contains(field.min));
        assert!(field.contains(field.max));
        assert!(!field.contains(IVec2::new(1, 10)));
        assert!(!field.contains(IVec2::new(10, 23)));
    }

    #[test]
    fn test_target_band() {
        let field = Playfield::default();
        assert_eq!(field.target_columns(), 3..36);
        assert_eq!(field.target_rows(), 2..15);
    }
}
