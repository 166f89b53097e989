//! Error types for the puzzle crate

use crate::game::PhaseKind;
use glam::IVec3;
use thiserror::Error;

/// Result type alias for puzzle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or playing a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A layout needs at least one cube
    #[error("Layout has no cubes")]
    EmptyLayout,

    /// Two cubes occupy the same lattice cell
    #[error("Duplicate cube at {0}")]
    DuplicateCube(IVec3),

    /// Cube is not 6-adjacent to any cube placed before it
    #[error("Cube at {0} is not connected to the layout")]
    DisconnectedCube(IVec3),

    /// Selected option does not exist
    #[error("Option {index} out of range (round has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    /// Not enough distinct decoys could be derived from the correct pattern
    #[error("Only {found} distinct decoys available, {needed} needed")]
    InsufficientDecoys { found: usize, needed: usize },

    /// Option set does not have the required number of patterns
    #[error("Option set has {found} patterns, expected {expected}")]
    OptionCount { found: usize, expected: usize },

    /// Two options in a set are equal
    #[error("Options {0} and {1} are the same pattern")]
    DuplicateOption(usize, usize),

    /// No option in a set matches the correct pattern
    #[error("Option set does not contain the correct pattern")]
    MissingCorrectOption,

    /// Operation is not allowed in the current game phase
    #[error("Cannot {action} while {actual}")]
    InvalidPhase {
        action: &'static str,
        actual: PhaseKind,
    },

    /// View name could not be parsed
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// Difficulty name could not be parsed
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
}
