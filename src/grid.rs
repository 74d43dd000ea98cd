use crate::{Error, Pattern, Result, MIN_SIZE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

/// Square field with edges stitched together.
///
/// Cells are stored row-major: `(i, j)` is row `i`, column `j`.
/// The side length is fixed at construction and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Cell>,
    n: usize,
}

impl Grid {
    /// Create a blank `size x size` field.
    ///
    /// `MIN_SIZE <= size` and `size * size` must not exceed `isize::MAX`.
    pub fn new(size: usize) -> Result<Self> {
        let total = size
            .checked_mul(size)
            .filter(|&total| size >= MIN_SIZE && total <= isize::MAX as usize)
            .ok_or(Error::InvalidSize { size })?;
        Ok(Self {
            cells: vec![Cell::Dead; total],
            n: size,
        })
    }

    /// Create a field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(size: usize, seed: Option<u64>) -> Result<Self> {
        let mut grid = Self::new(size)?;
        grid.randomize(seed);
        Ok(grid)
    }

    /// Sets every cell alive with probability 1/2, independently.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>) {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        self.randomize_with(&mut rng);
    }

    /// Same as [`Grid::randomize`], drawing from a caller-owned generator.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::from(rng.gen_bool(0.5));
        }
    }

    /// Overwrites the block with top-left corner at (`i`, `j`) by `pattern`.
    ///
    /// The block must fit without wrapping.
    pub fn stamp(&mut self, pattern: &Pattern, i: usize, j: usize) -> Result<()> {
        let (h, w) = (pattern.height(), pattern.width());
        let fits = |start: usize, len: usize| {
            start.checked_add(len).is_some_and(|end| end <= self.n)
        };
        if !fits(i, h) || !fits(j, w) {
            return Err(Error::OutOfBounds {
                row: i,
                col: j,
                height: h,
                width: w,
                size: self.n,
            });
        }
        for (di, row) in pattern.rows().enumerate() {
            let start = (i + di) * self.n + j;
            self.cells[start..start + w].copy_from_slice(row);
        }
        Ok(())
    }

    /// Side length of the field.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Get cell state at (`i` mod N, `j` mod N).
    pub fn get(&self, i: usize, j: usize) -> Cell {
        self.cells[(i % self.n) * self.n + j % self.n]
    }

    /// Set cell state at (`i`, `j`); both must already be in `0..N`.
    pub fn set(&mut self, i: usize, j: usize, cell: Cell) -> Result<()> {
        if i >= self.n || j >= self.n {
            return Err(Error::OutOfBounds {
                row: i,
                col: j,
                height: 1,
                width: 1,
                size: self.n,
            });
        }
        self.cells[i * self.n + j] = cell;
        Ok(())
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Rows of the field, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.n)
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// `true` if no cell is alive.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|c| c.is_alive())
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", if cell.is_alive() { 'O' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
