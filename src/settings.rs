//! Game settings and preferences
//!
//! Persisted as JSON next to the executable's working directory, separately
//! from high scores.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BRICK_ROWS, DEFAULT_BRICKS_PER_ROW};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Board ===
    /// Brick grid rows
    pub brick_rows: u32,
    /// Bricks per row
    pub bricks_per_row: u32,

    // === HUD ===
    /// Show the numeric life counter next to the heart icons
    pub show_life_counter: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brick_rows: DEFAULT_BRICK_ROWS,
            bricks_per_row: DEFAULT_BRICKS_PER_ROW,
            show_life_counter: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "brickfall_settings.json";

    /// Load settings from the given path, falling back to defaults when the
    /// file is missing or unreadable. Corrupt settings are never fatal.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Corrupt settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to the given path
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Grid dimensions clamped to something playable
    pub fn grid(&self) -> (u32, u32) {
        (
            self.brick_rows.clamp(1, 20),
            self.bricks_per_row.clamp(1, 30),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_board_constants() {
        let settings = Settings::default();
        assert_eq!(settings.brick_rows, DEFAULT_BRICK_ROWS);
        assert_eq!(settings.bricks_per_row, DEFAULT_BRICKS_PER_ROW);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.brick_rows = 10;
        settings.master_volume = 0.5;

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();

        assert_eq!(back.brick_rows, 10);
        assert!((back.master_volume - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_grid_is_clamped() {
        let settings = Settings {
            brick_rows: 0,
            bricks_per_row: 500,
            ..Default::default()
        };
        assert_eq!(settings.grid(), (1, 30));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/brickfall_settings.json"));
        assert_eq!(settings.brick_rows, DEFAULT_BRICK_ROWS);
    }
}
