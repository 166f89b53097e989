//! Difficulty and timing settings

use crate::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::time::Duration;

/// How many cubes a round's layout has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 3 to 5 cubes
    #[default]
    Easy,
    /// 7 to 10 cubes
    Hard,
}

impl Difficulty {
    /// Half-open range the cube count is drawn from
    pub fn cube_range(self) -> Range<usize> {
        match self {
            Difficulty::Easy => 3..6,
            Difficulty::Hard => 7..11,
        }
    }

    /// Draw a cube count uniformly from [`Difficulty::cube_range`]
    pub fn cube_count<R: Rng + ?Sized>(self, rng: &mut R) -> usize {
        rng.random_range(self.cube_range())
    }

    /// Lowercase name, as used in config files
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Settings for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Layout size range
    pub difficulty: Difficulty,
    /// How long a feedback message stays up, in milliseconds
    pub toast_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            toast_ms: 1500,
        }
    }
}

impl Settings {
    /// Feedback message lifetime
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    /// Set the difficulty (builder pattern)
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the feedback lifetime (builder pattern)
    pub fn with_toast_ms(mut self, toast_ms: u64) -> Self {
        self.toast_ms = toast_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cube_count_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            let range = difficulty.cube_range();
            for _ in 0..100 {
                assert!(range.contains(&difficulty.cube_count(&mut rng)));
            }
        }
    }

    #[test]
    fn test_settings_serialization() {
        let settings: Settings = serde_json::from_str(r#"{"difficulty":"hard"}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.toast_ms, 1500);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("medium".parse::<Difficulty>().is_err());
    }
}
