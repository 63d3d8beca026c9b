// ---------------------------------------------------------------------------
// GridError: construction and edit errors for height grids
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised while building or editing a [`Grid`](crate::grid::Grid).
///
/// Construction and edits are atomic: when one of these is returned nothing
/// was built or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Supplied height data does not match the computed cell count.
    ShapeMismatch { expected: usize, actual: usize },
    /// A coordinate lies outside the grid's logical extent.
    OutOfBounds {
        coords: Vec<usize>,
        sizes: Vec<usize>,
    },
    /// Padded storage for these logical sizes does not fit in `usize`.
    SizeOverflow { sizes: Vec<usize> },
    /// A height the solver cannot order, such as NaN, at this flat index.
    InvalidHeight { index: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ShapeMismatch { expected, actual } => write!(
                f,
                "Shape mismatch: grid needs {expected} height values, got {actual}"
            ),
            GridError::OutOfBounds { coords, sizes } => {
                write!(f, "Coordinate {coords:?} is outside grid of size {sizes:?}")
            }
            GridError::SizeOverflow { sizes } => {
                write!(f, "Grid of size {sizes:?} is too large to address")
            }
            GridError::InvalidHeight { index } => {
                write!(f, "Height at cell {index} is not a finite value")
            }
        }
    }
}

impl std::error::Error for GridError {}
