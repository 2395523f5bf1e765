#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod grid;

/// Standard board dimension. The game always plays on a 16x16 grid.
pub const GRID_SIZE: Coord = 16;

/// Standard mine count for the 16x16 grid.
pub const MINE_COUNT: CellCount = 40;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    /// The fixed configuration the game ships with.
    pub const DEFAULT: Self = Self::new_unchecked((GRID_SIZE, GRID_SIZE), MINE_COUNT);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new((rows, cols): Coord2, mines: CellCount) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        let mines = mines.clamp(1, mult(rows, cols));
        Self::new_unchecked((rows, cols), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_standard_game() {
        let config = GameConfig::default();

        assert_eq!(config.size, (16, 16));
        assert_eq!(config.mines, 40);
        assert_eq!(config.total_cells(), 256);
    }

    #[test]
    fn config_clamps_mine_count_into_the_valid_range() {
        assert_eq!(GameConfig::new((4, 4), 0).mines, 1);
        assert_eq!(GameConfig::new((4, 4), 100).mines, 16);
    }
}
