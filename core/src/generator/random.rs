use ndarray::Array2;

use super::*;

/// Uniform placement by rejection sampling: draw random coordinates and keep
/// the first `mines` distinct hits. Expected draws stay close to `mines` at
/// the default 40/256 density, degrading only as the board fills up.
///
/// No first-move safety: the first reveal can hit a mine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        let (rows, cols) = config.size;

        // rejection sampling would spin forever on a full board
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Board already full, generated anyway, requested {} mines but only {} fit",
                    config.mines,
                    total_cells
                );
            }
            return Board::from_mine_mask(Array2::from_elem(config.size.to_nd_index(), true));
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut placed: CellCount = 0;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        while placed < config.mines {
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            let slot = &mut mine_mask[coords.to_nd_index()];
            if !*slot {
                *slot = true;
                placed += 1;
            }
        }

        Board::from_mine_mask(mine_mask)
    }
}
