use super::{update_row, Engine};
use crate::Grid;

/// Computes the rows of the next generation one after another.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl Engine for SequentialEngine {
    fn step_into(&self, src: &Grid, dst: &mut Grid) {
        assert_eq!(src.size(), dst.size(), "grids must have the same size");
        let n = src.size();
        for (i, row) in dst.cells_mut().chunks_exact_mut(n).enumerate() {
            update_row(src, i, row);
        }
    }
}
