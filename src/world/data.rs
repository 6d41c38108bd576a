//! Level data structures and JSON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::assets::PLATFORM_TEXTURES;
use super::error::LevelError;

/// A point in level coordinates (top-left origin, y down).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Vec2 {
    fn from(point: Point) -> Self {
        Vec2::new(point.x, point.y)
    }
}

/// Size of the simulated world in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WorldSize {
    pub width: f32,
    pub height: f32,
}

/// A static platform. `x, y` is its top-left corner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    /// Texture key, one of the platform textures
    pub key: String,
    /// 1 for a single sprite, more for a horizontal strip
    pub num_tiles: u32,
}

impl PlatformDef {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Barrel spawner timing.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SpawnerDef {
    /// Milliseconds between barrels
    pub interval: u64,
    /// Horizontal launch speed, px/s
    pub speed: f32,
    /// Milliseconds a barrel stays live
    pub lifespan: u64,
}

/// Complete description of a level, as read from JSON.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct LevelData {
    pub world: WorldSize,
    pub platforms: Vec<PlatformDef>,
    pub fires: Vec<Point>,
    /// Player spawn (sprite centre)
    pub player: Point,
    /// Goal position (sprite centre), also where barrels appear
    pub goal: Point,
    pub spawner: SpawnerDef,
}

impl LevelData {
    /// Read, parse and validate a level file.
    pub fn load(path: &str) -> Result<Self, LevelError> {
        if !Path::new(path).exists() {
            return Err(LevelError::FileNotFound(path.to_string()));
        }

        let contents = fs::read_to_string(path).map_err(|e| LevelError::ReadError {
            path: path.to_string(),
            details: e.to_string(),
        })?;

        Self::parse(&contents, path)
    }

    /// Parse and validate level JSON. `path` is only used in errors.
    pub fn parse(contents: &str, path: &str) -> Result<Self, LevelError> {
        let level: LevelData =
            serde_json::from_str(contents).map_err(|e| LevelError::ParseError {
                path: path.to_string(),
                details: e.to_string(),
            })?;
        level.validate()?;
        Ok(level)
    }

    /// Check the values serde cannot.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.world.width <= 0.0 || self.world.height <= 0.0 {
            return Err(LevelError::InvalidWorldSize {
                width: self.world.width,
                height: self.world.height,
            });
        }

        for (index, platform) in self.platforms.iter().enumerate() {
            if platform.num_tiles == 0 {
                return Err(LevelError::EmptyPlatform { index });
            }
            if !PLATFORM_TEXTURES.contains(&platform.key.as_str()) {
                return Err(LevelError::UnknownTexture {
                    index,
                    key: platform.key.clone(),
                });
            }
        }

        if self.spawner.interval == 0 || self.spawner.lifespan == 0 {
            return Err(LevelError::InvalidSpawnerTiming {
                interval: self.spawner.interval,
                lifespan: self.spawner.lifespan,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "world": { "width": 360, "height": 700 },
        "platforms": [
            { "x": 0, "y": 658, "key": "ground", "numTiles": 1 },
            { "x": 36, "y": 540, "key": "block", "numTiles": 6 },
            { "x": 0, "y": 430, "key": "platform", "numTiles": 1 }
        ],
        "fires": [
            { "x": 180, "y": 519 },
            { "x": 250, "y": 637 }
        ],
        "player": { "x": 30, "y": 620 },
        "goal": { "x": 40, "y": 80 },
        "spawner": { "interval": 2000, "speed": 100, "lifespan": 12000 }
    }"#;

    pub(crate) fn sample() -> LevelData {
        LevelData::parse(SAMPLE, "sample.json").unwrap()
    }

    #[test]
    fn parses_camel_case_level() {
        let level = sample();
        assert_eq!(level.world, WorldSize { width: 360.0, height: 700.0 });
        assert_eq!(level.platforms.len(), 3);
        assert_eq!(level.platforms[1].num_tiles, 6);
        assert_eq!(level.platforms[1].key, "block");
        assert_eq!(level.fires.len(), 2);
        assert_eq!(Vec2::from(level.player), Vec2::new(30.0, 620.0));
        assert_eq!(level.spawner.interval, 2000);
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let err = LevelData::parse(r#"{ "world": { "width": 1, "height": 1 } }"#, "broken.json")
            .unwrap_err();
        match err {
            LevelError::ParseError { path, details } => {
                assert_eq!(path, "broken.json");
                assert!(details.contains("missing field"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_platforms_are_rejected() {
        let mut level = sample();
        level.platforms[2].num_tiles = 0;
        assert!(matches!(level.validate(), Err(LevelError::EmptyPlatform { index: 2 })));
    }

    #[test]
    fn unknown_textures_are_rejected() {
        let mut level = sample();
        level.platforms[0].key = "lava".to_string();
        assert!(matches!(
            level.validate(),
            Err(LevelError::UnknownTexture { index: 0, .. })
        ));
    }

    #[test]
    fn degenerate_world_and_spawner_are_rejected() {
        let mut level = sample();
        level.world.height = 0.0;
        assert!(matches!(level.validate(), Err(LevelError::InvalidWorldSize { .. })));

        let mut level = sample();
        level.spawner.interval = 0;
        assert!(matches!(
            level.validate(),
            Err(LevelError::InvalidSpawnerTiming { .. })
        ));
    }

    #[test]
    fn shipped_level_is_valid() {
        let level = LevelData::load("assets/json/levelData.json").unwrap();
        assert!(!level.platforms.is_empty());
        assert!(level.player.x < level.world.width && level.player.y < level.world.height);
    }

    #[test]
    fn missing_file_is_reported() {
        assert!(matches!(
            LevelData::load("no/such/level.json"),
            Err(LevelError::FileNotFound(_))
        ));
    }
}
