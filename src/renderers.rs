use std::iter;

use itertools::Itertools;

use crate::grid::RectGrid;
use crate::units::{ColumnsCount, RowsCount};
use crate::walls::{Knockdowns, Wall};

/// Render a maze as ASCII text, using only `+`, `-`, `|` and spaces.
///
/// A pure function of the grid dimensions and the knockdown set: the same
/// inputs always produce the same string. Each of the grid's rows becomes two
/// printed lines (the walls above the row's cells, then the cells themselves
/// with their left walls), followed by one solid border line at the bottom.
///
/// The entrance (left wall of the top-left cell) and the exit (east boundary
/// of the bottom-right cell) are always rendered open. They are structural
/// openings in the outer boundary, not knockdowns.
pub fn render_ascii(grid: &RectGrid, knockdowns: &Knockdowns) -> String {
    let RowsCount(rows) = grid.rows();
    let ColumnsCount(columns) = grid.columns();

    // per grid row two lines of 2 * columns + 2 bytes, plus the border line
    let mut output = String::with_capacity((rows * 2 + 1) * (columns * 2 + 2));

    for row in 0..rows {
        let is_last_row = row == rows - 1;

        for column in 0..columns {
            let cell = row * columns + column;
            output.push('+');
            if knockdowns.contains(&Wall::above(cell)) {
                output.push(' ');
            } else {
                output.push('-');
            }
        }
        output.push_str("+\n");

        for column in 0..columns {
            let cell = row * columns + column;
            let is_entrance = cell == 0;
            if is_entrance || knockdowns.contains(&Wall::left_of(cell)) {
                output.push_str("  ");
            } else {
                output.push_str("| ");
            }
        }
        if !is_last_row {
            output.push('|');
        }
        output.push('\n');
    }

    output.push_str(&iter::repeat("+-").take(columns).join(""));
    output.push_str("+\n");

    output
}
