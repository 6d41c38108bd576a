//! World module - assets, level data, level building, and camera.

mod assets;
mod builder;
mod camera;
mod data;
mod error;
mod plugin;

pub use assets::*;
pub use builder::{depth, build_level_from_data, Fire, Goal, LevelSummary, Platform, PlatformShape, SceneEntity};
pub use camera::{follow_target, MainCamera};
pub use data::{LevelData, PlatformDef, Point, SpawnerDef, WorldSize};
pub use error::LevelError;
pub use plugin::{cleanup_level, setup_level, WorldPlugin};
