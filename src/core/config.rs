//! Game configuration loaded from external RON file.
//!
//! Canvas size, physics constants and player tuning live here so they can be
//! tweaked without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

/// Default location of the configuration file.
pub const CONFIG_PATH: &str = "assets/data/config/game.ron";

/// Game configuration loaded from assets/data/config/game.ron.
///
/// Missing fields fall back to their defaults, so a file only needs to name
/// what it changes.
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Window
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Nearest-neighbour sampling for all images
    pub pixel_art: bool,
    // Physics
    /// Downward acceleration in px/s²
    pub gravity: f32,
    /// Draw body outlines
    pub debug: bool,
    // Player
    /// Horizontal speed while a direction key is held, px/s
    pub player_speed: f32,
    /// Vertical velocity applied on jump, px/s (negative is up)
    pub jump_speed: f32,
    // Scene
    /// Length of the fade to black before a restart
    pub fade_duration_ms: u64,
    pub level_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Monster Kong".to_string(),
            width: 360.0,
            height: 640.0,
            pixel_art: false,
            gravity: 1000.0,
            debug: false,
            player_speed: 150.0,
            jump_speed: -600.0,
            fade_duration_ms: 500,
            level_path: "assets/json/levelData.json".to_string(),
        }
    }
}

impl GameConfig {
    /// Load the game config from the default RON file.
    pub fn load() -> Self {
        Self::load_from(CONFIG_PATH)
    }

    /// Load the game config from `path`, falling back to defaults.
    pub fn load_from(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!("Loaded game config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Parse a config from RON text.
    pub fn parse(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    /// Canvas size as a vector.
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
