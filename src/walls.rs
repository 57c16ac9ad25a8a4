use crate::grid::{GridDirection, RectGrid};
use crate::units::{ColumnsCount, NodesCount};
use crate::utils::{fnv_hashset, FnvHashSet};

/// One removable wall between a pair of adjacent cells.
///
/// Each internal wall of the grid has exactly one identifier: a horizontal
/// wall is tagged with the cell below it, a vertical wall with the cell to
/// its east. The tag replaces the sign channel of encodings that fold the
/// wall axis into a signed integer, so the two axes can never collide.
#[derive(Hash, Eq, PartialEq, Debug, Copy, Clone, Ord, PartialOrd)]
pub enum Wall {
    /// Between `cell` and the cell directly above it (`cell - width`).
    Horizontal(usize),
    /// Between `cell` and the cell directly to its left (`cell - 1`).
    Vertical(usize),
}

/// The set of walls that have been knocked down, i.e. where a passage exists.
/// The walls still standing are the implicit complement.
pub type Knockdowns = FnvHashSet<Wall>;

/// An empty knockdown set sized for a spanning tree over `nodes` cells.
pub fn knockdowns_for(nodes: NodesCount) -> Knockdowns {
    fnv_hashset(nodes.0.saturating_sub(1))
}

impl Wall {
    /// The wall above `cell`. Meaningful only when `cell` is not in row 0.
    #[inline]
    pub fn above(cell: usize) -> Wall {
        Wall::Horizontal(cell)
    }

    /// The wall to the left of `cell`. Meaningful only when `cell` is not in
    /// column 0.
    #[inline]
    pub fn left_of(cell: usize) -> Wall {
        Wall::Vertical(cell)
    }

    /// The wall separating `cell` from `neighbour`, where `neighbour` lies in
    /// the given direction from `cell` (as reported by the grid's adjacency
    /// queries).
    pub fn between(cell: usize, neighbour: usize, direction: GridDirection) -> Wall {
        match direction {
            GridDirection::North => Wall::Horizontal(cell),
            GridDirection::South => Wall::Horizontal(neighbour),
            GridDirection::East => Wall::Vertical(neighbour),
            GridDirection::West => Wall::Vertical(cell),
        }
    }

    /// The two cells this wall separates, in row-major order.
    ///
    /// The wall must be an internal wall of `grid` - one whose both sides are
    /// in-bounds cells.
    pub fn cells(&self, grid: &RectGrid) -> (usize, usize) {
        let ColumnsCount(width) = grid.columns();
        match *self {
            Wall::Horizontal(cell) => (cell - width, cell),
            Wall::Vertical(cell) => (cell - 1, cell),
        }
    }
}
