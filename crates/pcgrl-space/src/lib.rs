//! Grid topology and path analysis for pcgrl.
//!
//! The [`Analyzer`] answers the single most expensive question the reward
//! engine asks: can END be reached from START, and how far is it? It keeps
//! its visitation buffers between calls so that a long episode of
//! single-cell edits does not reallocate on every step.
//!
//! Topology is fixed: 4-connected, absorbing edges, WALL impassable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid2d;
pub mod regions;
pub mod solvability;

pub use regions::count_regions;
pub use solvability::{analyze, Analyzer, Solvability};
