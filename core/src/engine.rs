use alloc::collections::{BTreeSet, VecDeque};
use serde::{Deserialize, Serialize};

use crate::*;

/// Overall game status. `Won` and `Lost` are terminal: once reached, every
/// further mutating call is rejected with `AlreadyTerminal`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameOutcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of a flag toggle, so callers can skip redraws on no-ops.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

impl Board {
    /// Reveals a single cell. Already-revealed and flagged cells are left
    /// untouched. Revealing a mine loses the game; otherwise the win
    /// condition is evaluated.
    pub fn reveal_single(&mut self, coords: Coord2) -> Result<GameOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_in_progress()?;

        let cell = self.cell_at(coords);
        if cell.is_revealed() || cell.is_flagged() {
            return Ok(GameOutcome::InProgress);
        }

        self.cell_mut(coords).is_revealed = true;

        if cell.is_mine() {
            self.end_game_lost(coords);
            return Ok(GameOutcome::Lost);
        }

        Ok(self.evaluate_win())
    }

    /// Breadth-first reveal seeded at `coords`. A revealed cell with zero
    /// adjacent mines enqueues all its neighbors; numbered cells are revealed
    /// but stop the cascade. Only the seed can be a mine, since no cell
    /// bordering a mine has a zero count.
    pub fn reveal_flood(&mut self, coords: Coord2) -> Result<GameOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_in_progress()?;

        let mut visited = BTreeSet::new();
        let mut to_visit = VecDeque::from([coords]);
        let mut hit_mine = None;

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            let cell = self.cell_at(visit_coords);
            if cell.is_revealed() || cell.is_flagged() {
                continue;
            }

            self.cell_mut(visit_coords).is_revealed = true;

            if cell.is_mine() {
                hit_mine.get_or_insert(visit_coords);
                continue;
            }

            if cell.adjacent_mines() == 0 {
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }

        if let Some(mine_coords) = hit_mine {
            self.end_game_lost(mine_coords);
            return Ok(GameOutcome::Lost);
        }

        Ok(self.evaluate_win())
    }

    /// Flips the flag on an unrevealed cell and adjusts the remaining-mines
    /// counter. Over-flagging past the real mine count is allowed.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_in_progress()?;

        if self.cell_at(coords).is_revealed() {
            return Ok(MarkOutcome::NoChange);
        }

        let flagged = !self.cell_at(coords).is_flagged();
        self.cell_mut(coords).is_flagged = flagged;
        self.adjust_flagged(flagged);
        Ok(MarkOutcome::Changed)
    }

    /// Win scan over the whole grid: every cell must be a mine or revealed.
    /// Mines never need to be flagged. Callers check for a mine hit first,
    /// so the scan never runs on a lost board.
    fn evaluate_win(&mut self) -> GameOutcome {
        if self.all_safe_cells_revealed() {
            self.set_outcome(GameOutcome::Won);
            GameOutcome::Won
        } else {
            GameOutcome::InProgress
        }
    }

    fn end_game_lost(&mut self, mine_coords: Coord2) {
        self.set_triggered_mine(mine_coords);
        self.set_outcome(GameOutcome::Lost);
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.is_terminal() {
            Err(GameError::AlreadyTerminal)
        } else {
            Ok(())
        }
    }
}
