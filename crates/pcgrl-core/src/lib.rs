//! Core types and traits for the pcgrl grid-editing simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! shared vocabulary used throughout the workspace: tile kinds, generation
//! strategies, the dense [`Grid`], named statistics, error types, and the
//! [`Observer`] hook through which every other crate reports what it does.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod observe;
pub mod stat;
pub mod tile;

pub use error::{GenerateError, GridError, ReprError};
pub use grid::Grid;
pub use observe::{noop_observer, EditEvent, LogObserver, NoopObserver, Observer, SharedObserver};
pub use stat::{StatKind, StatValue, Stats};
pub use tile::{GenerationStrategy, TileKind, NUM_TILE_KINDS};
