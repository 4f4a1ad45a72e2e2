use crate::grid::Grid;
use crate::rule::TransitionTable;
use crate::torus::wrap;

/// Keeps columns x-1 and x of every row after sliding the window two columns.
const KEEP_AFTER_SLIDE: usize = 0x333;

/// Writes the generation after `prev` into `next`.
///
/// Cells are produced in pairs. The 3x4 window for the pair at `x` covers
/// columns `x-1..=x+2`, which overlaps the next pair's window by two columns,
/// so sliding right only reads two fresh columns.
pub fn step(next: &mut Grid, prev: &Grid, table: &TransitionTable) {
    assert_eq!(
        (next.width(), next.height()),
        (prev.width(), prev.height()),
        "generation buffers must share dimensions"
    );
    let width = prev.width();
    let height = prev.height();

    for y in 0..height {
        let above = prev.row(wrap(y, height, -1));
        let own = prev.row(y);
        let below = prev.row(wrap(y, height, 1));
        // One column of the window, placed at col 0 of each row nibble.
        let column = |x: usize| -> usize {
            (above[x] & 1) as usize | ((own[x] & 1) as usize) << 4 | ((below[x] & 1) as usize) << 8
        };

        let mut window = column(wrap(0, width, -1)) | column(0) << 1 | column(1) << 2 | column(wrap(0, width, 2)) << 3;
        let out = &mut next.cells_mut()[y * width..(y + 1) * width];
        for x in (0..width).step_by(2) {
            out[x..x + 2].copy_from_slice(&table.lookup(window));
            window = (window >> 2) & KEEP_AFTER_SLIDE
                | column(wrap(x, width, 3)) << 2
                | column(wrap(x, width, 4)) << 3;
        }
    }
}
