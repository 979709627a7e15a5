use crate::error::Result;
use crate::grids::{Dimensions, Position, WallGrid};
use crate::layout::{Layout, BORDER_CELLS};

pub const PLAYER: char = '@';
pub const EXIT: char = 'X';

/// Terminal columns and lines taken up by one cell of the text maze.
pub const CELL_COLUMNS: f32 = 4.0;
pub const CELL_LINES: f32 = 2.0;

/// Draws the maze as text, `2 * rows + 1` lines of `4 * columns + 1` chars.
///
/// Walls are shared between neighbors, so each cell draws its top and left
/// walls and the last row and column close off the bottom and right edges.
pub fn render(grid: &WallGrid) -> String {
    let dims = grid.dims();
    let mut out = String::with_capacity((2 * dims.rows + 1) * (4 * dims.columns + 2));
    let mut top = String::new();
    let mut middle = String::new();
    let mut bottom = String::new();

    for (pos, cell) in grid.cells() {
        top.push('+');
        top.push_str(if cell.top { "---" } else { "   " });

        middle.push(if cell.left { '|' } else { ' ' });
        middle.push(' ');
        middle.push(marker(grid, pos));
        middle.push(' ');

        if pos.row + 1 == dims.rows {
            bottom.push('+');
            bottom.push_str(if cell.bottom { "---" } else { "   " });
        }

        if pos.column + 1 == dims.columns {
            top.push('+');
            middle.push(if cell.right { '|' } else { ' ' });

            out.push_str(&top);
            out.push('\n');
            out.push_str(&middle);
            out.push('\n');
            top.clear();
            middle.clear();
        }
    }

    out.push_str(&bottom);
    out.push('+');
    out.push('\n');

    out
}

/// Layout of the text maze in cell units, with the text drawn from the top
/// left corner of the terminal.
pub fn text_layout(dims: Dimensions) -> Result<Layout> {
    Layout::compute(
        dims,
        dims.columns as f32 + BORDER_CELLS,
        dims.rows as f32 + BORDER_CELLS,
    )
}

/// Maps a terminal character position onto the surface of [`text_layout`].
pub fn surface_point(layout: &Layout, column: u16, row: u16) -> (f32, f32) {
    // the center of a character, not its corner
    let x = (f32::from(column) + 0.5) / CELL_COLUMNS;
    let y = (f32::from(row) + 0.5) / CELL_LINES;

    (
        layout.h_margin + x * layout.cell_size,
        layout.v_margin + y * layout.cell_size,
    )
}

fn marker(grid: &WallGrid, pos: Position) -> char {
    if pos == grid.player {
        PLAYER
    } else if pos == grid.exit() {
        EXIT
    } else {
        ' '
    }
}
