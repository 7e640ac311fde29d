//! Error types for the pcgrl simulation core.
//!
//! Organized by subsystem: grid access, grid generation, and
//! representation edits. Unsolvable or degenerate mazes are *not* errors;
//! they are ordinary analyzer results.

use std::error::Error;
use std::fmt;

use crate::tile::TileKind;

/// Errors from constructing or indexing a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid must have at least one row and one column.
    EmptyGrid,
    /// A cell address lies outside the grid.
    OutOfBounds {
        /// Column of the offending address.
        x: usize,
        /// Row of the offending address.
        y: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// A numeric tile code has no [`TileKind`].
    InvalidTile {
        /// The offending code.
        code: u8,
    },
    /// A cell buffer does not hold `height * width` entries.
    ShapeMismatch {
        /// `height * width`.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "cell ({x}, {y}) outside {width}x{height} grid"),
            Self::InvalidTile { code } => write!(f, "no tile kind has code {code}"),
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from grid generation.
///
/// All of these are configuration mistakes detectable before any
/// episode runs, except [`PlacementExhausted`](Self::PlacementExhausted),
/// which bounds the rejection-sampling loop of random corner placement.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerateError {
    /// Height or width is zero.
    ZeroDimension {
        /// Requested height.
        height: usize,
        /// Requested width.
        width: usize,
    },
    /// The probability table does not sum to 1 within tolerance.
    ProbabilitySum {
        /// The actual sum.
        sum: f64,
    },
    /// A probability is negative or not finite.
    InvalidProbability {
        /// The tile the probability belongs to.
        tile: TileKind,
        /// The offending value.
        value: f64,
    },
    /// Random corner placement needs two distinct cells.
    TooFewCells {
        /// Cells available in the grid.
        cells: usize,
    },
    /// Rejection sampling did not find a distinct END cell.
    PlacementExhausted {
        /// Draws made before giving up.
        attempts: usize,
    },
    /// A numeric strategy code names no known generator.
    UnknownStrategy {
        /// The offending code.
        code: u8,
    },
    /// Building the grid itself failed.
    Grid(GridError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { height, width } => {
                write!(f, "grid dimensions must be positive, got {height}x{width}")
            }
            Self::ProbabilitySum { sum } => {
                write!(f, "tile probabilities must sum to 1.0, got {sum}")
            }
            Self::InvalidProbability { tile, value } => {
                write!(f, "probability for {tile} must be finite and >= 0, got {value}")
            }
            Self::TooFewCells { cells } => {
                write!(f, "random corners need at least 2 cells, grid has {cells}")
            }
            Self::PlacementExhausted { attempts } => {
                write!(f, "no distinct END cell found after {attempts} draws")
            }
            Self::UnknownStrategy { code } => {
                write!(f, "unknown generation strategy code {code}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GenerateError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors from applying an action through a representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReprError {
    /// `update` or `observation` was called before the first `reset`.
    NotReset,
    /// A wide action addressed a cell outside the grid.
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// The action encoding does not belong to this representation.
    ActionMismatch {
        /// The encoding this representation accepts.
        expected: &'static str,
    },
    /// The random cursor found no EMPTY or WALL cell to land on.
    NoEditableCell,
    /// The underlying grid rejected the edit.
    Grid(GridError),
}

impl fmt::Display for ReprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReset => write!(f, "representation has not been reset"),
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "action targets ({x}, {y}) outside {width}x{height} grid"),
            Self::ActionMismatch { expected } => {
                write!(f, "action encoding mismatch, expected {expected}")
            }
            Self::NoEditableCell => write!(f, "grid has no EMPTY or WALL cell for the cursor"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ReprError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ReprError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => Self::OutOfBounds {
                x,
                y,
                width,
                height,
            },
            other => Self::Grid(other),
        }
    }
}
