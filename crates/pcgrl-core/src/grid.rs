//! Dense two-dimensional tile grid.

use std::fmt;

use crate::error::GridError;
use crate::tile::TileKind;

/// A `height × width` array of [`TileKind`]s stored row-major.
///
/// Cells are addressed as `(x, y)` with `x` the column and `y` the row;
/// the flat index is `y * width + x`. Storing `TileKind` rather than raw
/// codes makes the "every cell is a valid tile" invariant structural.
///
/// # Examples
///
/// ```
/// use pcgrl_core::{Grid, TileKind};
///
/// let mut grid = Grid::filled(2, 3, TileKind::Empty).unwrap();
/// grid.set(2, 1, TileKind::End).unwrap();
/// assert_eq!(grid.get(2, 1), Some(TileKind::End));
/// assert_eq!(grid.count(TileKind::Empty), 5);
/// assert_eq!(grid.to_string(), "...\n..E");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<TileKind>,
}

impl Grid {
    /// A grid with every cell set to `tile`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn filled(height: usize, width: usize, tile: TileKind) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            height,
            width,
            cells: vec![tile; height * width],
        })
    }

    /// Wrap a row-major cell buffer.
    pub fn from_cells(
        height: usize,
        width: usize,
        cells: Vec<TileKind>,
    ) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        if cells.len() != height * width {
            return Err(GridError::ShapeMismatch {
                expected: height * width,
                actual: cells.len(),
            });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Build from raw tile codes, rejecting codes outside the tile range.
    pub fn from_codes(height: usize, width: usize, codes: &[u8]) -> Result<Self, GridError> {
        let cells = codes
            .iter()
            .map(|&c| TileKind::try_from(c))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(height, width, cells)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// `height * width`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat index of `(x, y)`, or `None` outside the grid.
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// `(x, y)` of a flat index. The index must be `< cell_count()`.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Tile at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<TileKind> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrite `(x, y)` and return the tile it held before.
    pub fn set(&mut self, x: usize, y: usize, tile: TileKind) -> Result<TileKind, GridError> {
        let i = self.index(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        Ok(std::mem::replace(&mut self.cells[i], tile))
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[TileKind] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> {
        self.cells.chunks(self.width)
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: TileKind) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// `(x, y)` of every cell holding `tile`, in row-major order.
    pub fn positions(&self, tile: TileKind) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, &t)| t == tile)
            .map(|(i, _)| self.coords(i))
    }

    /// Row-major tile codes, the form handed to observers and renderers.
    pub fn to_codes(&self) -> Vec<u8> {
        self.cells.iter().map(|t| t.code()).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for tile in row {
                write!(f, "{}", tile.symbol())?;
            }
        }
        Ok(())
    }
}
