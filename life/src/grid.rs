use rand::Rng;

use crate::config::SEED_ALIVE_ODDS;

/// Byte stored for a dead cell. Doubles as a black pixel.
pub const DEAD: u8 = 0x00;
/// Byte stored for a live cell. Doubles as a white pixel.
pub const ALIVE: u8 = 0xFF;

/// One generation of the world, row-major, one byte per cell.
///
/// Every byte is either [`DEAD`] or [`ALIVE`], so the buffer can be handed to
/// a display as a luminance image without conversion.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates an all-dead grid.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not a non-zero multiple of 8 or `height` is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && width % 8 == 0, "width must be a non-zero multiple of 8, got {width}");
        assert!(height > 0, "height must be non-zero");
        Grid {
            width,
            height,
            cells: vec![DEAD; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The display-ready buffer.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x] == ALIVE
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        self.cells[y * self.width + x] = if alive { ALIVE } else { DEAD };
    }

    /// Stamps a pattern whose top-left corner lands on `(x, y)`.
    ///
    /// Rows are strings where `#` or `O` marks a live cell and anything else a
    /// dead one. The pattern wraps around the edges like the world does.
    pub fn place(&mut self, x: usize, y: usize, pattern: &[&str]) {
        for (dy, line) in pattern.iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                let alive = matches!(ch, '#' | 'O');
                self.set((x + dx) % self.width, (y + dy) % self.height, alive);
            }
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }

    /// Reseeds every cell independently, alive with odds [`SEED_ALIVE_ODDS`].
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (numerator, denominator) = SEED_ALIVE_ODDS;
        for cell in self.cells.iter_mut() {
            *cell = if rng.random_ratio(numerator, denominator) { ALIVE } else { DEAD };
        }
    }
}
