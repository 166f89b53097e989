//! Puzzle crate - Orthographic projection puzzle core for Cube Views
//!
//! A round shows a connected cluster of unit cubes and asks which of four
//! 2D patterns is its silhouette from a named view.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Game (state machine)                  │
//! ├─────────────────────────────────────────────────────────┤
//! │  RoundState                                              │
//! │  ├── Layout     - connected cubes grown from the origin  │
//! │  ├── View       - Top / Left / Front                     │
//! │  ├── Pattern    - silhouette from project()              │
//! │  └── OptionSet  - correct pattern + three decoys         │
//! ├─────────────────────────────────────────────────────────┤
//! │  Decoys                                                  │
//! │  ├── First order  - single removals / additions          │
//! │  └── Second order - swaps, only when the first runs out  │
//! ├─────────────────────────────────────────────────────────┤
//! │  Toast - single-shot status message timer                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use puzzle::{Game, Settings};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::time::Instant;
//!
//! let mut game = Game::new(Settings::default(), StdRng::seed_from_u64(1)).unwrap();
//! let answer = game.round().options().correct_index();
//!
//! let feedback = game.select(answer, Instant::now()).unwrap();
//! assert!(feedback.correct);
//!
//! game.acknowledge().unwrap();
//! let next = game.commit_transition().unwrap();
//! assert_eq!(next.id(), 1);
//! ```

pub mod decoy;
mod error;
mod game;
mod layout;
mod options;
mod pattern;
pub mod projection;
mod round;
mod settings;
mod toast;
mod view;

pub use decoy::{generate_decoys, DECOY_COUNT};
pub use error::{Error, Result};
pub use game::{Feedback, Game, Phase, PhaseKind, Score};
pub use layout::{Layout, NEIGHBOR_OFFSETS};
pub use options::{OptionSet, OPTION_COUNT};
pub use pattern::{evaluate, Pattern};
pub use projection::{project, LEFT_VIEW_ANCHOR};
pub use round::RoundState;
pub use settings::{Difficulty, Settings};
pub use toast::{StatusMessage, Toast};
pub use view::View;

// Re-export glam for convenience
pub use glam;
