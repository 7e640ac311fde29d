//! Coordinate-addressed representation.

use std::fmt;

use pcgrl_core::{noop_observer, EditEvent, Grid, ReprError, SharedObserver};
use rand::RngCore;
use smallvec::smallvec;

use crate::action::{Action, Observation, Update};
use crate::representation::{Representation, RepresentationKind};
use crate::spaces::{ActionSpace, BoxSpace, ObservationSpace};

/// Wide representation: each action names the cell it edits.
///
/// There is no cursor and no endpoint protection; any in-bounds cell may
/// take any tile.
pub struct WideRepresentation {
    grid: Option<Grid>,
    observer: SharedObserver,
}

impl WideRepresentation {
    /// A representation that has not been reset.
    pub fn new() -> Self {
        Self {
            grid: None,
            observer: noop_observer(),
        }
    }

    /// Report edits to `observer`.
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observer = observer;
        self
    }
}

impl Default for WideRepresentation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WideRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WideRepresentation")
            .field("reset", &self.grid.is_some())
            .finish()
    }
}

impl Representation for WideRepresentation {
    fn kind(&self) -> RepresentationKind {
        RepresentationKind::Wide
    }

    fn reset(&mut self, grid: Grid, _rng: &mut dyn RngCore) {
        self.grid = Some(grid);
    }

    fn action_space(&self, height: usize, width: usize, num_tiles: usize) -> ActionSpace {
        ActionSpace::MultiDiscrete(smallvec![width, height, num_tiles])
    }

    fn observation_space(
        &self,
        height: usize,
        width: usize,
        num_tiles: usize,
    ) -> ObservationSpace {
        ObservationSpace {
            grid: BoxSpace::grid(height, width, 0, num_tiles.saturating_sub(1) as u32),
            cursor: None,
            heatmap: None,
        }
    }

    fn observation(&self) -> Result<Observation, ReprError> {
        let grid = self.grid.as_ref().ok_or(ReprError::NotReset)?;
        Ok(Observation {
            grid: grid.clone(),
            cursor: None,
        })
    }

    fn update(
        &mut self,
        action: Action,
        _num_tiles: usize,
        _rng: &mut dyn RngCore,
    ) -> Result<Update, ReprError> {
        let Action::Place { x, y, tile } = action else {
            return Err(ReprError::ActionMismatch {
                expected: "Action::Place",
            });
        };
        let grid = self.grid.as_mut().ok_or(ReprError::NotReset)?;
        let previous = grid.set(x, y, tile)?;
        let changed = previous != tile;
        self.observer.on_edit(&EditEvent {
            x,
            y,
            previous,
            requested: tile,
            changed,
            suppressed: false,
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

#[cfg(test)]
mod tests {
    use super::*;
    use pcgrl_core::TileKind;
    use pcgrl_test_utils::grid_from_ascii;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn place(x: usize, y: usize, tile: TileKind) -> Action {
        Action::Place { x, y, tile }
    }

    #[test]
    fn edits_the_named_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut repr = WideRepresentation::new();
        repr.reset(grid_from_ascii(&["...", "..."]), &mut rng);

        let update = repr.update(place(2, 1, TileKind::Wall), 4, &mut rng).unwrap();
        assert_eq!((update.x, update.y, update.changed), (2, 1, true));
        assert_eq!(repr.grid().unwrap().to_string(), "...\n..#");

        let again = repr.update(place(2, 1, TileKind::Wall), 4, &mut rng).unwrap();
        assert!(!again.changed);
    }

    #[test]
    fn endpoints_are_not_protected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut repr = WideRepresentation::new();
        repr.reset(grid_from_ascii(&["SE"]), &mut rng);
        let update = repr.update(place(0, 0, TileKind::Wall), 2, &mut rng).unwrap();
        assert!(update.changed);
    }

    #[test]
    fn out_of_bounds_is_rejected_without_mutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut repr = WideRepresentation::new();
        repr.reset(grid_from_ascii(&["..", ".."]), &mut rng);
        let err = repr.update(place(2, 0, TileKind::Wall), 4, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ReprError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            }
        );
        assert_eq!(repr.grid().unwrap().count(TileKind::Wall), 0);
    }

    #[test]
    fn requires_reset_and_place_actions() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut repr = WideRepresentation::new();
        assert_eq!(
            repr.update(place(0, 0, TileKind::Wall), 4, &mut rng).unwrap_err(),
            ReprError::NotReset
        );
        repr.reset(grid_from_ascii(&["."]), &mut rng);
        assert!(matches!(
            repr.update(Action::Tile(TileKind::Wall), 4, &mut rng),
            Err(ReprError::ActionMismatch { .. })
        ));
    }

    #[test]
    fn spaces_list_coordinates_then_tile() {
        let repr = WideRepresentation::new();
        assert_eq!(
            repr.action_space(3, 5, 4),
            ActionSpace::MultiDiscrete(smallvec![5, 3, 4])
        );
        let obs = repr.observation_space(3, 5, 4);
        assert!(obs.cursor.is_none());
        assert_eq!(obs.grid.high, 3);
    }
}
