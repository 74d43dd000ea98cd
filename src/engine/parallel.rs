use super::{update_row, Engine};
use crate::Grid;
use rayon::prelude::*;

/// Computes the rows of the next generation concurrently on the rayon pool.
///
/// Each worker only reads the frozen source grid and writes its own
/// destination row, so the result is identical to [`super::SequentialEngine`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ParallelEngine;

impl Engine for ParallelEngine {
    fn step_into(&self, src: &Grid, dst: &mut Grid) {
        assert_eq!(src.size(), dst.size(), "grids must have the same size");
        let n = src.size();
        dst.cells_mut()
            .par_chunks_exact_mut(n)
            .enumerate()
            .for_each(|(i, row)| update_row(src, i, row));
    }
}
