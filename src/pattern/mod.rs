mod parse_rle;
mod plaintext;

use crate::{Cell, Error, Result};

/// Immutable rectangular template of cells that can be stamped onto a [`crate::Grid`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Pattern {
    /// Builds a pattern from row-major `cells` with rows of length `width`.
    pub fn from_cells(width: usize, cells: Vec<Cell>) -> Result<Self> {
        if width == 0 || cells.is_empty() {
            return Err(Error::InvalidPattern("pattern is empty".to_string()));
        }
        if cells.len() % width != 0 {
            return Err(Error::InvalidPattern(format!(
                "{} cells do not form rows of width {}",
                cells.len(),
                width
            )));
        }
        let height = cells.len() / width;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// The 3x3 glider, moving towards increasing row and column indices:
    /// ```text
    /// ..O
    /// O.O
    /// .OO
    /// ```
    pub fn glider() -> Self {
        use Cell::{Alive as O, Dead as D};
        Self {
            cells: vec![D, D, O, O, D, O, D, O, O],
            width: 3,
            height: 3,
        }
    }

    /// Parses the plaintext format (`.` dead, `O` or `*` alive, `!` comment lines).
    pub fn from_plaintext(data: &str) -> Result<Self> {
        plaintext::parse_plaintext(data)
    }

    /// Parses the run-length encoded format with a B3/S23 (or absent) rule.
    pub fn from_rle(data: &[u8]) -> Result<Self> {
        parse_rle::parse_rle(data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_shape() {
        let glider = Pattern::glider();
        assert_eq!((glider.height(), glider.width()), (3, 3));
        assert_eq!(glider.population(), 5);
        let rows: Vec<Vec<bool>> = glider
            .rows()
            .map(|r| r.iter().map(|&c| c.into()).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec![false, false, true],
                vec![true, false, true],
                vec![false, true, true]
            ]
        );
    }

    #[test]
    fn test_from_cells_validation() {
        assert!(Pattern::from_cells(0, vec![]).is_err());
        assert!(Pattern::from_cells(2, vec![Cell::Alive; 3]).is_err());
        let p = Pattern::from_cells(2, vec![Cell::Alive; 4]).unwrap();
        assert_eq!((p.height(), p.width()), (2, 2));
    }
}
