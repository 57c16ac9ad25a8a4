use rand::{Rng, XorShiftRng};
use smallvec::SmallVec;

use crate::disjoint_set::{DisjointSets, UnionFind};
use crate::grid::{RectGrid, ALL_DIRECTIONS};
use crate::walls::{knockdowns_for, Knockdowns, Wall};

/// Carve a perfect maze with the randomized union-find algorithm.
///
/// Every cell starts as its own disjoint set. Each iteration draws a random
/// cell and, when that cell still has a neighbour it is not connected to,
/// knocks down the wall to one such neighbour (chosen uniformly) and unions
/// the two sets. When a single set remains every cell is reachable from every
/// other, and since a wall only ever falls between two previously disconnected
/// regions the passages contain no cycle: the knockdown set is a spanning tree
/// of the grid graph, with exactly `grid.size() - 1` entries.
///
/// Close to randomized Kruskal, but driven by random cell draws instead of a
/// shuffled edge list; draws landing on a fully connected cell are wasted and
/// simply retried, so the iteration count is probabilistic while termination
/// is certain.
pub fn kruskal(grid: &RectGrid, rng: &mut XorShiftRng) -> Knockdowns {
    let mut sets = UnionFind::new(grid.size().0);
    kruskal_with_sets(grid, &mut sets, rng)
}

/// As [`kruskal`], but using a caller supplied disjoint-set structure.
///
/// `sets` must be fresh: one singleton per grid cell.
pub fn kruskal_with_sets<D>(grid: &RectGrid, sets: &mut D, rng: &mut XorShiftRng) -> Knockdowns
    where D: DisjointSets
{
    debug_assert_eq!(sets.len(), grid.size().0);

    let mut knockdowns = knockdowns_for(grid.size());

    while sets.num_sets() > 1 {
        let cell = grid.random_cell(rng);
        let candidates = disjoint_neighbours(grid, sets, cell);

        if !candidates.is_empty() {
            let (neighbour, wall) = candidates[rng.gen::<usize>() % candidates.len()];
            knockdowns.insert(wall);
            sets.union(cell, neighbour);
        }
    }

    knockdowns
}

/// The grid-neighbours of `cell` not yet connected to it, each paired with
/// the wall separating it from `cell`. Empty when `cell` is already connected
/// to every one of its existing neighbours.
pub fn disjoint_neighbours<D>(grid: &RectGrid,
                              sets: &mut D,
                              cell: usize)
                              -> SmallVec<[(usize, Wall); 4]>
    where D: DisjointSets
{
    let cell_root = sets.find(cell);

    ALL_DIRECTIONS.iter()
                  .filter_map(|direction| {
                      grid.neighbour_at_direction(cell, *direction)
                          .map(|neighbour| (neighbour, Wall::between(cell, neighbour, *direction)))
                  })
                  .filter(|&(neighbour, _)| sets.find(neighbour) != cell_root)
                  .collect()
}

#[cfg(test)]
mod tests {

    use std::collections::HashSet;

    use petgraph::unionfind;
    use quickcheck::{quickcheck, TestResult};
    use rand::{SeedableRng, XorShiftRng};

    use super::*;
    use crate::units::{ColumnLength, ColumnsCount, EdgesCount, RowLength};

    fn grid(w: usize, h: usize) -> RectGrid {
        RectGrid::new(RowLength(w), ColumnLength(h))
    }

    fn seeded_rng(seed: u32) -> XorShiftRng {
        XorShiftRng::from_seed([0x193a6754, 0xa8a7d469, 0x97830e05, seed])
    }

    /// Independent check with a union-find that is not the crate's own:
    /// a spanning tree has exactly n - 1 edges and connects every cell.
    fn is_spanning_tree(g: &RectGrid, knockdowns: &Knockdowns) -> bool {
        let cells = g.size().0;
        if knockdowns.len() != cells - 1 {
            return false;
        }

        let mut verifier = unionfind::UnionFind::<usize>::new(cells);
        for wall in knockdowns {
            let (a, b) = wall.cells(g);
            verifier.union(a, b);
        }
        let labels = verifier.into_labeling();
        labels.iter().all(|&label| label == labels[0])
    }

    fn assert_walls_are_internal(g: &RectGrid, knockdowns: &Knockdowns) {
        let ColumnsCount(width) = g.columns();
        for wall in knockdowns {
            let (a, b) = wall.cells(g);
            assert!(b < g.size().0);
            match *wall {
                // pair is vertically adjacent
                Wall::Horizontal(_) => assert_eq!(a + width, b),
                // pair is horizontally adjacent within one row - no wrap
                Wall::Vertical(_) => {
                    assert_eq!(a + 1, b);
                    assert_eq!(a / width, b / width);
                }
            }
        }
    }

    #[test]
    fn carves_a_spanning_tree() {
        for &(w, h) in &[(2, 2), (3, 3), (5, 4), (4, 5), (10, 10), (1, 7), (7, 1)] {
            let g = grid(w, h);
            let mut rng = seeded_rng((w * 31 + h) as u32);
            let knockdowns = kruskal(&g, &mut rng);

            assert!(is_spanning_tree(&g, &knockdowns),
                    "no spanning tree for {}x{}",
                    w,
                    h);
            assert_walls_are_internal(&g, &knockdowns);
        }
    }

    #[test]
    fn single_cell_maze_needs_no_knockdowns() {
        let g = grid(1, 1);
        let mut rng = seeded_rng(1);
        let knockdowns = kruskal(&g, &mut rng);
        assert!(knockdowns.is_empty());
    }

    #[test]
    fn two_by_two_knocks_down_three_of_four_walls() {
        let g = grid(2, 2);
        let (_, EdgesCount(candidate_walls)) = g.graph_size();
        assert_eq!(candidate_walls, 4);

        let mut rng = seeded_rng(42);
        let knockdowns = kruskal(&g, &mut rng);
        assert_eq!(knockdowns.len(), 3);
        assert!(is_spanning_tree(&g, &knockdowns));
    }

    #[test]
    fn two_by_two_reaches_every_topology() {
        // The 2x2 grid graph is a 4-cycle; dropping any one of its 4 walls'
        // complement gives 4 distinct spanning trees. All of them should be
        // generated across enough differently seeded runs.
        let g = grid(2, 2);
        let mut seen = HashSet::new();
        for seed in 0..200 {
            let mut rng = seeded_rng(seed);
            let mut tree: Vec<Wall> = kruskal(&g, &mut rng).into_iter().collect();
            tree.sort();
            seen.insert(tree);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn disjoint_neighbours_shrink_as_sets_merge() {
        let g = grid(2, 2);
        let mut sets = UnionFind::new(4);

        let initial = disjoint_neighbours(&g, &mut sets, 0);
        assert_eq!(initial.len(), 2);
        assert!(initial.contains(&(1, Wall::left_of(1))));
        assert!(initial.contains(&(2, Wall::above(2))));

        sets.union(0, 1);
        let after_east_merge = disjoint_neighbours(&g, &mut sets, 0);
        assert_eq!(&after_east_merge[..], &[(2, Wall::above(2))]);

        sets.union(0, 2);
        assert!(disjoint_neighbours(&g, &mut sets, 0).is_empty());

        // 3 is still reachable through either remaining wall from its side
        let from_last = disjoint_neighbours(&g, &mut sets, 3);
        assert_eq!(from_last.len(), 2);
    }

    #[test]
    fn injected_sets_end_fully_merged() {
        let g = grid(3, 3);
        let mut sets = UnionFind::new(9);
        let mut rng = seeded_rng(7);
        let knockdowns = kruskal_with_sets(&g, &mut sets, &mut rng);

        assert_eq!(sets.num_sets(), 1);
        assert_eq!(knockdowns.len(), 8);
    }

    #[test]
    fn quickcheck_spanning_tree_property() {
        fn p(w: u8, h: u8) -> TestResult {
            if w == 0 || h == 0 || w > 12 || h > 12 {
                return TestResult::discard();
            }
            let g = grid(w as usize, h as usize);
            let mut rng = rand::weak_rng();
            let knockdowns = kruskal(&g, &mut rng);
            TestResult::from_bool(is_spanning_tree(&g, &knockdowns))
        }
        quickcheck(p as fn(u8, u8) -> TestResult)
    }
}
