//! Runtime errors from [`PcgEnv`](crate::PcgEnv).

use std::error::Error;
use std::fmt;

use pcgrl_core::{GenerateError, ReprError};

/// Errors from `reset` and `step`.
#[derive(Clone, Debug, PartialEq)]
pub enum EnvError {
    /// `step` or `observation` was called before the first `reset`.
    NotReset,
    /// An action's tile index is outside `action_tiles`.
    UnknownActionTile {
        /// The offending index.
        index: usize,
        /// Number of configured action tiles.
        available: usize,
    },
    /// Grid generation failed during `reset`.
    Generate(GenerateError),
    /// The representation rejected the action.
    Repr(ReprError),
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReset => write!(f, "environment has not been reset"),
            Self::UnknownActionTile { index, available } => {
                write!(f, "action tile index {index} out of range (0..{available})")
            }
            Self::Generate(e) => write!(f, "generate: {e}"),
            Self::Repr(e) => write!(f, "representation: {e}"),
        }
    }
}

impl Error for EnvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Generate(e) => Some(e),
            Self::Repr(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GenerateError> for EnvError {
    fn from(e: GenerateError) -> Self {
        Self::Generate(e)
    }
}

impl From<ReprError> for EnvError {
    fn from(e: ReprError) -> Self {
        match e {
            ReprError::NotReset => Self::NotReset,
            other => Self::Repr(other),
        }
    }
}
