//! Initial grid generation for pcgrl episodes.
//!
//! [`generate`] dispatches on a validated [`GenerationParams`] to one of
//! five strategies. Randomness is drawn only from the caller's RNG, so a
//! seeded RNG reproduces the same grid bit for bit.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generate;
pub mod params;

pub use generate::{
    empty, filled, fixed_corners, generate, random, random_corners, MAX_PLACEMENT_ATTEMPTS,
};
pub use params::{GenerationParams, GenerationParamsBuilder, TileProbabilities, PROBABILITY_TOLERANCE};
