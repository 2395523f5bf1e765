use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and dimensions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Bounds check against an exclusive `(rows, cols)` upper corner.
pub const fn in_bounds(coords: Coord2, bounds: Coord2) -> bool {
    coords.0 < bounds.0 && coords.1 < bounds.1
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(index, bounds)
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Enumerates the up-to-8 grid neighbors of a cell in a fixed row-major
/// order, clipping at edges and corners. Never yields the center itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((5, 5), (16, 16)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(5, 5)));
        for (row, col) in neighbors {
            assert!(row.abs_diff(5) <= 1 && col.abs_diff(5) <= 1);
        }
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (16, 16)).collect();

        assert_eq!(neighbors, alloc::vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 7), (16, 16)).collect();

        assert_eq!(neighbors.len(), 5);
    }

    #[test]
    fn neighbor_order_is_deterministic() {
        let first: Vec<_> = NeighborIter::new((3, 3), (16, 16)).collect();
        let second: Vec<_> = NeighborIter::new((3, 3), (16, 16)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn bounds_check_rejects_out_of_range_coords() {
        assert!(in_bounds((15, 15), (16, 16)));
        assert!(!in_bounds((16, 0), (16, 16)));
        assert!(!in_bounds((0, 16), (16, 16)));
    }
}
