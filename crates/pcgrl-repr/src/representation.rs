//! The [`Representation`] trait and its selector.

use std::fmt;

use pcgrl_core::{Grid, ReprError, SharedObserver};
use rand::RngCore;

use crate::action::{Action, Observation, Update};
use crate::narrow::{CursorPolicy, NarrowRepresentation};
use crate::spaces::{ActionSpace, ObservationSpace};
use crate::wide::WideRepresentation;

/// How an external action addresses the grid.
///
/// Implementations own the episode grid between `reset` calls. Every
/// method except `reset`, the space descriptors and `kind` fails with
/// [`ReprError::NotReset`] until the first `reset`.
pub trait Representation: Send {
    /// Which encoding this is.
    fn kind(&self) -> RepresentationKind;

    /// Take ownership of a fresh grid and reinitialise internal state.
    fn reset(&mut self, grid: Grid, rng: &mut dyn RngCore);

    /// Action indices accepted for a `height x width` grid with
    /// `num_tiles` editable tiles.
    fn action_space(&self, height: usize, width: usize, num_tiles: usize) -> ActionSpace;

    /// Observation layout for the same parameters.
    fn observation_space(&self, height: usize, width: usize, num_tiles: usize)
        -> ObservationSpace;

    /// Snapshot of the grid plus any representation-specific fields.
    fn observation(&self) -> Result<Observation, ReprError>;

    /// Apply one edit.
    ///
    /// `num_tiles` is the size of the editable alphabet; with exactly two
    /// tiles the narrow encoding protects START and END cells.
    fn update(
        &mut self,
        action: Action,
        num_tiles: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Update, ReprError>;

    /// The current grid, if reset.
    fn grid(&self) -> Option<&Grid>;
}

/// Representation selector used by configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RepresentationKind {
    /// Tile-only actions applied under a moving cursor.
    #[default]
    Narrow,
    /// Actions carry coordinates and a tile.
    Wide,
}

impl RepresentationKind {
    /// Construct a boxed representation of this kind.
    ///
    /// `cursor` only affects [`RepresentationKind::Narrow`].
    pub fn build(self, cursor: CursorPolicy, observer: SharedObserver) -> Box<dyn Representation> {
        match self {
            RepresentationKind::Narrow => {
                Box::new(NarrowRepresentation::new(cursor).with_observer(observer))
            }
            RepresentationKind::Wide => Box::new(WideRepresentation::new().with_observer(observer)),
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            RepresentationKind::Narrow => "narrow",
            RepresentationKind::Wide => "wide",
        }
    }
}

impl fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
