use serde::{Deserialize, Serialize};

/// Full per-cell state owned by the board. Mine placement and adjacency are
/// fixed at generation time; only the reveal and flag bits mutate afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// Mine-hidden projection handed to renderers: an unrevealed mine is
    /// indistinguishable from an unrevealed safe cell.
    pub const fn view(&self) -> CellView {
        if self.is_revealed {
            if self.is_mine {
                CellView::Mine
            } else {
                CellView::Revealed(self.adjacent_mines)
            }
        } else if self.is_flagged {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }
}

/// Player-visible state of one cell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// A mine made visible by revealing it, which only happens on a loss.
    Mine,
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_mine_is_not_exposed_by_view() {
        let cell = Cell {
            is_mine: true,
            ..Default::default()
        };

        assert_eq!(cell.view(), CellView::Hidden);
    }

    #[test]
    fn revealed_safe_cell_shows_adjacency() {
        let cell = Cell {
            is_revealed: true,
            adjacent_mines: 3,
            ..Default::default()
        };

        assert_eq!(cell.view(), CellView::Revealed(3));
    }

    #[test]
    fn revealed_mine_shows_as_mine() {
        let cell = Cell {
            is_mine: true,
            is_revealed: true,
            ..Default::default()
        };

        assert_eq!(cell.view(), CellView::Mine);
    }
}
