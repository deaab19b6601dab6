use super::{Cell, GridError};
use rand::Rng;

/// Moore neighborhood offsets, excluding the centre cell.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid manages the bounded 2D cellular automaton.
///
/// Edges do not wrap: cells on the border simply have fewer neighbors.
/// Generations are computed into a scratch buffer and swapped in, so every
/// cell of the next generation is derived from the same previous one.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = match width.checked_mul(height) {
            Some(len) if len > 0 => len,
            _ => return Err(GridError::InvalidDimensions { width, height }),
        };
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
            scratch: vec![Cell::Dead; len],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index, rejecting anything off the grid
    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell at position
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position. The grid is untouched on error.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Mark each cell alive with probability `fraction`.
    ///
    /// Cells that lose the draw keep their current state. Fractions outside
    /// `[0, 1]` (including NaN) are rejected and the grid is left as is.
    pub fn seed_random<R: Rng>(&mut self, fraction: f64, rng: &mut R) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(GridError::InvalidProbability(fraction));
        }
        self.cells.iter_mut().for_each(|cell| {
            if rng.random::<f64>() < fraction {
                *cell = Cell::Alive;
            }
        });
        Ok(())
    }

    /// Count live cells in the Moore neighborhood that lie on the grid.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> Result<u8, GridError> {
        self.index(x, y)?;
        Ok(self.neighbors_unchecked(x, y))
    }

    fn neighbors_unchecked(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny).ok()
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Step one generation forward.
    ///
    /// The next generation is written into the scratch buffer from the
    /// current one and the two are then swapped.
    pub fn advance(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let neighbors = self.neighbors_unchecked(x, y);
                self.scratch[idx] = self.cells[idx].evolve(neighbors);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}
