use thiserror::Error;

/// Errors raised by grid construction, explicit writes and pattern parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Side length below the minimum of 3, or too large to allocate.
    #[error("invalid grid size {size}, the minimum is {}", crate::MIN_SIZE)]
    InvalidSize { size: usize },
    /// A `height x width` block at (`row`, `col`) does not fit into the grid.
    #[error("{height}x{width} block at ({row}, {col}) does not fit into a {size}x{size} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        size: usize,
    },
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("unsupported rule {0:?}, only B3/S23 is supported")]
    UnsupportedRule(String),
}

pub type Result<T> = std::result::Result<T, Error>;
