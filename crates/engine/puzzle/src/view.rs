//! Orthographic view directions

use crate::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The orthographic direction a silhouette is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Looking down the Y axis
    Top,
    /// Looking along the X axis
    Left,
    /// Looking along the Z axis
    Front,
}

impl View {
    /// All views, in display order
    pub const ALL: [View; 3] = [View::Top, View::Left, View::Front];

    /// Human-readable label shown above the options
    pub fn label(self) -> &'static str {
        match self {
            View::Top => "Top View",
            View::Left => "Left View",
            View::Front => "Front View",
        }
    }

    /// Pick a view uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        View::ALL[rng.random_range(0..View::ALL.len())]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_suffix(" view").unwrap_or(&name);
        match name {
            "top" => Ok(View::Top),
            "left" => Ok(View::Left),
            "front" => Ok(View::Front),
            _ => Err(Error::UnknownView(s.to_string())),
        }
    }
}
