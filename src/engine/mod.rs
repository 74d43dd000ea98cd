mod parallel;
mod sequential;

pub use parallel::ParallelEngine;
pub use sequential::SequentialEngine;

use crate::{Cell, Grid, Pattern, Result, SeedMode, SimulationConfig};

/// Game engine for Game of Life on a torus.
///
/// Engines hold no state between calls: everything lives in the [`Grid`]s
/// passed in and out.
pub trait Engine {
    /// Writes the generation following `src` into `dst`.
    ///
    /// `src` is only read, so every cell of `dst` is computed from the same
    /// frozen generation. Both grids must have the same size.
    fn step_into(&self, src: &Grid, dst: &mut Grid);

    /// Returns the next generation as an independent grid; `grid` is left untouched.
    fn step(&self, grid: &Grid) -> Grid {
        let mut next = grid.clone();
        self.step_into(grid, &mut next);
        next
    }

    /// Advances `grid` by `generations`, swapping two buffers between generations.
    fn run(&self, grid: Grid, generations: u64) -> Grid {
        let mut curr = grid;
        let mut next = curr.clone();
        for _ in 0..generations {
            self.step_into(&curr, &mut next);
            std::mem::swap(&mut curr, &mut next);
        }
        curr
    }
}

/// Number of alive cells among the 8 neighbours of (`i`, `j`), each axis wrapped independently.
pub fn neighbor_count(grid: &Grid, i: usize, j: usize) -> u8 {
    let n = grid.size();
    let (i1, i2) = (i % n + n - 1, i % n + 1);
    let (j1, j2) = (j % n + n - 1, j % n + 1);
    grid.get(i1, j1) as u8
        + grid.get(i1, j) as u8
        + grid.get(i1, j2) as u8
        + grid.get(i, j1) as u8
        + grid.get(i, j2) as u8
        + grid.get(i2, j1) as u8
        + grid.get(i2, j) as u8
        + grid.get(i2, j2) as u8
}

/// B3/S23: survival on 2 or 3 neighbours, birth on exactly 3.
pub fn transition(cell: Cell, count: u8) -> Cell {
    match (cell, count) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Computes row `i` of the next generation of `src` into `dst`.
pub(crate) fn update_row(src: &Grid, i: usize, dst: &mut [Cell]) {
    let n = src.size();
    debug_assert_eq!(dst.len(), n);
    let cells = src.cells();
    let prev = &cells[((i + n - 1) % n) * n..][..n];
    let curr = &cells[i * n..][..n];
    let next = &cells[((i + 1) % n) * n..][..n];
    for (j, out) in dst.iter_mut().enumerate() {
        let (j1, j2) = (if j == 0 { n - 1 } else { j - 1 }, if j + 1 == n { 0 } else { j + 1 });
        let count = prev[j1] as u8
            + prev[j] as u8
            + prev[j2] as u8
            + curr[j1] as u8
            + curr[j2] as u8
            + next[j1] as u8
            + next[j] as u8
            + next[j2] as u8;
        *out = transition(curr[j], count);
    }
}

/// Returns the generation following `grid`, computed sequentially.
pub fn step(grid: &Grid) -> Grid {
    SequentialEngine.step(grid)
}

/// Top-left corner of the glider placed by [`SeedMode::Glider`].
///
/// A 3x3 grid cannot hold the glider at (1, 1), so it is placed at the origin
/// and fills the whole grid.
fn glider_offset(size: usize) -> usize {
    if size > Pattern::glider().height() {
        1
    } else {
        0
    }
}

/// Creates the starting grid of side `size` for `seed_mode`.
pub fn initialize(seed_mode: SeedMode, size: usize) -> Result<Grid> {
    initialize_with(&SimulationConfig::new(size, seed_mode)?)
}

/// Creates the starting grid described by `config`, honouring its random seed.
pub fn initialize_with(config: &SimulationConfig) -> Result<Grid> {
    let size = config.size();
    let grid = match config.seed_mode() {
        SeedMode::Random => Grid::random(size, config.seed())?,
        SeedMode::Glider => {
            let mut grid = Grid::new(size)?;
            let offset = glider_offset(size);
            grid.stamp(&Pattern::glider(), offset, offset)?;
            grid
        }
    };
    log::debug!(
        "initialized {}x{} grid ({:?}), population {}",
        size,
        size,
        config.seed_mode(),
        grid.population()
    );
    Ok(grid)
}
