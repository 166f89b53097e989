//! Terminal front-end for the Cube Views puzzle
//!
//! The `puzzle` crate owns the rules; this crate turns a round into text,
//! reads commands, and loads the config file.

pub mod config;
pub mod render;
pub mod session;

pub use config::{DisplayConfig, GameConfig};
pub use session::{run, Command};
