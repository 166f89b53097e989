use anyhow::{Context, Result};
use puzzle::Settings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "cube-views.toml";

/// Configuration loaded from cube-views.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub puzzle: Settings,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Glyphs used to draw grids
///
/// Both glyphs must have the same width so columns line up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Occupied cell
    pub cell: String,
    /// Empty cell
    pub empty: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell: "[]".to_string(),
            empty: " .".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Display width of one grid cell
    pub fn cell_width(&self) -> usize {
        self.cell.chars().count()
    }
}

impl GameConfig {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load `path` if given, else the default file if present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Self::from_file(default_path)
        } else {
            tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        let display = &self.display;
        anyhow::ensure!(display.cell_width() > 0, "display.cell must not be empty");
        anyhow::ensure!(
            display.cell_width() == display.empty.chars().count(),
            "display.cell and display.empty must have the same width"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle::Difficulty;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = GameConfig::from_toml(
            r###"
            [puzzle]
            difficulty = "hard"

            [display]
            cell = "##"
            empty = ".."
            "###,
        )
        .unwrap();

        assert_eq!(config.puzzle.difficulty, Difficulty::Hard);
        assert_eq!(config.puzzle.toast_ms, 1500);
        assert_eq!(config.display.cell, "##");
    }

    #[test]
    fn test_mismatched_glyphs_rejected() {
        let err = GameConfig::from_toml("[display]\ncell = \"#\"\nempty = \"..\"\n").unwrap_err();
        assert!(err.to_string().contains("same width"));
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(GameConfig::from_toml("[puzzle]\ndifficulty = \"nightmare\"\n").is_err());
    }
}
