//! Cursor-based representation.
//!
//! The action is only a tile. It is written at the cursor, then the
//! cursor moves according to its [`CursorPolicy`].

use std::fmt;

use pcgrl_core::{noop_observer, EditEvent, Grid, ReprError, SharedObserver};
use rand::{Rng, RngCore};

use crate::action::{Action, Observation, Update};
use crate::representation::{Representation, RepresentationKind};
use crate::spaces::{ActionSpace, BoxSpace, CursorSpace, ObservationSpace};

/// Rejection draws before the random cursor falls back to an exact pick
/// among eligible cells.
pub const MAX_CURSOR_DRAWS: usize = 64;

/// How the cursor moves after an edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorPolicy {
    /// Jump to a uniformly drawn cell. With a two-tile alphabet the draw
    /// skips START and END cells.
    #[default]
    Random,
    /// Step one column right, wrapping to the next row and then to `(0, 0)`.
    Sequential,
}

impl fmt::Display for CursorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CursorPolicy::Random => "random",
            CursorPolicy::Sequential => "sequential",
        })
    }
}

/// Narrow representation: one tile per action, applied at the cursor.
pub struct NarrowRepresentation {
    grid: Option<Grid>,
    cursor: (usize, usize),
    policy: CursorPolicy,
    observer: SharedObserver,
}

impl NarrowRepresentation {
    /// A representation with the given cursor policy, not yet reset.
    pub fn new(policy: CursorPolicy) -> Self {
        Self {
            grid: None,
            cursor: (0, 0),
            policy,
            observer: noop_observer(),
        }
    }

    /// Report edits to `observer`.
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Cursor position as `(x, y)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// The active cursor policy.
    pub fn policy(&self) -> CursorPolicy {
        self.policy
    }

    fn next_cursor(
        &self,
        protect_endpoints: bool,
        rng: &mut dyn RngCore,
    ) -> Result<(usize, usize), ReprError> {
        let grid = self.grid.as_ref().ok_or(ReprError::NotReset)?;
        match self.policy {
            CursorPolicy::Sequential => {
                Ok(step_sequential(self.cursor, grid.width(), grid.height()))
            }
            CursorPolicy::Random => draw_cursor(grid, protect_endpoints, rng),
        }
    }
}

impl Default for NarrowRepresentation {
    fn default() -> Self {
        Self::new(CursorPolicy::default())
    }
}

impl fmt::Debug for NarrowRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarrowRepresentation")
            .field("cursor", &self.cursor)
            .field("policy", &self.policy)
            .field("reset", &self.grid.is_some())
            .finish()
    }
}

fn step_sequential((x, y): (usize, usize), width: usize, height: usize) -> (usize, usize) {
    if x + 1 < width {
        (x + 1, y)
    } else if y + 1 < height {
        (0, y + 1)
    } else {
        (0, 0)
    }
}

fn draw_cursor(
    grid: &Grid,
    protect_endpoints: bool,
    rng: &mut dyn RngCore,
) -> Result<(usize, usize), ReprError> {
    let (width, height) = (grid.width(), grid.height());
    for _ in 0..MAX_CURSOR_DRAWS {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let editable = grid
            .get(x, y)
            .is_some_and(|t| !(protect_endpoints && t.is_endpoint()));
        if editable {
            return Ok((x, y));
        }
    }

    // Rejection kept hitting endpoints; pick exactly among the rest.
    let eligible: Vec<usize> = grid
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.is_endpoint())
        .map(|(i, _)| i)
        .collect();
    if eligible.is_empty() {
        return Err(ReprError::NoEditableCell);
    }
    Ok(grid.coords(eligible[rng.random_range(0..eligible.len())]))
}

impl Representation for NarrowRepresentation {
    fn kind(&self) -> RepresentationKind {
        RepresentationKind::Narrow
    }

    fn reset(&mut self, grid: Grid, rng: &mut dyn RngCore) {
        self.cursor = match self.policy {
            CursorPolicy::Random => (
                rng.random_range(0..grid.width()),
                rng.random_range(0..grid.height()),
            ),
            CursorPolicy::Sequential => (0, 0),
        };
        self.grid = Some(grid);
    }

    fn action_space(&self, _height: usize, _width: usize, num_tiles: usize) -> ActionSpace {
        ActionSpace::Discrete(num_tiles)
    }

    fn observation_space(
        &self,
        height: usize,
        width: usize,
        num_tiles: usize,
    ) -> ObservationSpace {
        ObservationSpace {
            grid: BoxSpace::grid(height, width, 0, num_tiles.saturating_sub(1) as u32),
            cursor: Some(CursorSpace {
                max_x: width.saturating_sub(1),
                max_y: height.saturating_sub(1),
            }),
            heatmap: None,
        }
    }

    fn observation(&self) -> Result<Observation, ReprError> {
        let grid = self.grid.as_ref().ok_or(ReprError::NotReset)?;
        Ok(Observation {
            grid: grid.clone(),
            cursor: Some(self.cursor),
        })
    }

    fn update(
        &mut self,
        action: Action,
        num_tiles: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Update, ReprError> {
        let Action::Tile(requested) = action else {
            return Err(ReprError::ActionMismatch {
                expected: "Action::Tile",
            });
        };
        let grid = self.grid.as_mut().ok_or(ReprError::NotReset)?;
        let (x, y) = self.cursor;
        let previous = grid.get(x, y).ok_or(ReprError::OutOfBounds {
            x,
            y,
            width: grid.width(),
            height: grid.height(),
        })?;

        let protect_endpoints = num_tiles == 2;
        let suppressed = protect_endpoints && previous.is_endpoint();
        if !suppressed {
            grid.set(x, y, requested)?;
        }
        let changed = !suppressed && previous != requested;

        // The cursor is drawn against the edited grid; if no cell is left
        // to land on, the edit is undone so a failed update changes nothing.
        let next = match self.next_cursor(protect_endpoints, rng) {
            Ok(next) => next,
            Err(e) => {
                if changed {
                    if let Some(grid) = self.grid.as_mut() {
                        grid.set(x, y, previous)?;
                    }
                }
                return Err(e);
            }
        };
        self.cursor = next;

        self.observer.on_edit(&EditEvent {
            x,
            y,
            previous,
            requested,
            changed,
            suppressed,
        });
        Ok(Update {
            changed,
            x,
            y,
            action,
        })
    }

    fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }
}
