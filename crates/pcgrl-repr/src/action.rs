//! Actions, edit results, and observations.

use pcgrl_core::{Grid, TileKind};

/// One edit request, already mapped from action indices to tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Narrow encoding: write this tile under the cursor.
    Tile(TileKind),
    /// Wide encoding: write `tile` at `(x, y)`.
    Place {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
        /// Tile to write.
        tile: TileKind,
    },
}

impl Action {
    /// The tile this action writes.
    pub fn tile(self) -> TileKind {
        match self {
            Action::Tile(tile) | Action::Place { tile, .. } => tile,
        }
    }
}

/// Result of applying one [`Action`].
///
/// `x` and `y` always name the cell the action was applied to. For the
/// narrow encoding that is the cursor position before it moved, not the
/// next cursor; callers that count edits per cell charge this cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Update {
    /// Whether the edited cell now holds a different tile.
    pub changed: bool,
    /// Column of the edited cell.
    pub x: usize,
    /// Row of the edited cell.
    pub y: usize,
    /// The action as applied.
    pub action: Action,
}

impl Update {
    /// `1` for a change, `0` otherwise; the unit of the change budget.
    pub fn change_count(&self) -> u32 {
        u32::from(self.changed)
    }
}

/// What the agent sees after a reset or an edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Copy of the grid.
    pub grid: Grid,
    /// `(x, y)` of the next editable cell, narrow representation only.
    pub cursor: Option<(usize, usize)>,
}
