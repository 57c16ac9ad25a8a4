use rand::{Rng, XorShiftRng};
use smallvec::SmallVec;

use crate::units::{ColumnLength, ColumnsCount, EdgesCount, NodesCount, RowLength, RowsCount};

pub type CellSmallVec = SmallVec<[usize; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridDirection {
    North,
    South,
    East,
    West,
}

pub const ALL_DIRECTIONS: [GridDirection; 4] = [GridDirection::North,
                                                GridDirection::South,
                                                GridDirection::East,
                                                GridDirection::West];

/// A rectangular grid of cells addressed by row-major linear index:
/// `index = row * width + column`, `0 <= index < height * width`.
///
/// The grid is a pure adjacency model - it holds no wall or passage state.
#[derive(Debug, Copy, Clone)]
pub struct RectGrid {
    row_width: RowLength,
    column_height: ColumnLength,
}

impl RectGrid {
    /// Both dimensions are expected to be at least 1.
    pub fn new(row_width: RowLength, column_height: ColumnLength) -> RectGrid {
        RectGrid {
            row_width,
            column_height,
        }
    }

    #[inline]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.row_width.0 * self.column_height.0)
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.column_height.0)
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.row_width.0)
    }

    /// Node count and internal (removable) wall count of the grid graph.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let RowLength(width) = self.row_width;
        let ColumnLength(height) = self.column_height;
        let edges_count = height * (width - 1) + width * (height - 1);
        (self.size(), EdgesCount(edges_count))
    }

    /// The adjacent cell in the given direction, or None at a grid boundary.
    ///
    /// Boundary predicates come from row/column arithmetic, so an east step at
    /// the end of a row never wraps to the start of the next one.
    pub fn neighbour_at_direction(&self,
                                  cell: usize,
                                  direction: GridDirection)
                                  -> Option<usize> {
        let RowLength(width) = self.row_width;
        let ColumnLength(height) = self.column_height;
        let row = cell / width;
        let column = cell % width;

        match direction {
            GridDirection::North => {
                if row > 0 {
                    Some(cell - width)
                } else {
                    None
                }
            }
            GridDirection::South => {
                if row + 1 < height {
                    Some(cell + width)
                } else {
                    None
                }
            }
            GridDirection::East => {
                if column + 1 < width {
                    Some(cell + 1)
                } else {
                    None
                }
            }
            GridDirection::West => {
                if column > 0 {
                    Some(cell - 1)
                } else {
                    None
                }
            }
        }
    }

    /// Cells to the North, South, East or West of a particular cell.
    pub fn neighbours(&self, cell: usize) -> CellSmallVec {
        ALL_DIRECTIONS.iter()
                      .filter_map(|direction| self.neighbour_at_direction(cell, *direction))
                      .collect()
    }

    pub fn random_cell(&self, rng: &mut XorShiftRng) -> usize {
        rng.gen::<usize>() % self.size().0
    }
}
