//! Action representations for pcgrl grid editing.
//!
//! A [`Representation`] owns the episode's grid and turns one external
//! action into one cell edit:
//!
//! - [`NarrowRepresentation`]: the action is a tile; it lands on a cursor
//!   that the representation moves after every edit.
//! - [`WideRepresentation`]: the action names the cell and the tile.
//!
//! Both report whether the edit changed the cell so the caller can charge
//! its change budget.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod narrow;
pub mod representation;
pub mod spaces;
pub mod wide;

pub use action::{Action, Observation, Update};
pub use narrow::{CursorPolicy, NarrowRepresentation, MAX_CURSOR_DRAWS};
pub use representation::{Representation, RepresentationKind};
pub use spaces::{ActionSpace, BoxSpace, CursorSpace, ObservationSpace};
pub use wide::WideRepresentation;
