use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mutable per-game state: the cell grid plus the derived counters. Created
/// fresh by a generator for every game and exclusively owned by one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mines_placed: CellCount,
    flagged_count: Saturating<CellCount>,
    outcome: GameOutcome,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Builds a board from a mine mask, computing every safe cell's adjacency
    /// count. Mine placement and adjacency never change after this point.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mut cells: Array2<Cell> = Array2::default(mine_mask.dim());
        let mut mines_placed: CellCount = 0;

        for (index, &is_mine) in mine_mask.indexed_iter() {
            cells[index].is_mine = is_mine;
            if is_mine {
                mines_placed += 1;
            }
        }

        let dim = cells.dim();
        for row in 0..dim.0 {
            for col in 0..dim.1 {
                if cells[(row, col)].is_mine {
                    continue;
                }
                let coords = (row.try_into().unwrap(), col.try_into().unwrap());
                let count = mine_mask
                    .iter_neighbors(coords)
                    .filter(|&pos| mine_mask[pos.to_nd_index()])
                    .count();
                cells[(row, col)].adjacent_mines = count.try_into().unwrap();
            }
        }

        Self {
            cells,
            mines_placed,
            flagged_count: Saturating(0),
            outcome: GameOutcome::InProgress,
            triggered_mine: None,
        }
    }

    /// Builds a board with mines at exactly the given coordinates. Mainly
    /// used by tests that need a known layout.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines_placed
    }

    pub fn mines_placed(&self) -> CellCount {
        self.mines_placed
    }

    /// Placed mines minus current flags. Goes negative when the player
    /// over-flags; flags are a player aid, not validated against placement.
    pub fn mines_remaining(&self) -> i32 {
        i32::from(self.mines_placed) - i32::from(self.flagged_count.0)
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// The mine whose reveal ended the game, if it ended in a loss.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// Mine-hidden view of one cell for rendering.
    pub fn view_at(&self, coords: Coord2) -> CellView {
        self.cell_at(coords).view()
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub(crate) fn all_safe_cells_revealed(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_mine || cell.is_revealed)
    }

    pub(crate) fn adjust_flagged(&mut self, flagged: bool) {
        if flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
    }

    pub(crate) fn set_outcome(&mut self, outcome: GameOutcome) {
        self.outcome = outcome;
    }

    pub(crate) fn set_triggered_mine(&mut self, coords: Coord2) {
        self.triggered_mine = Some(coords);
    }
}
