//! Error types for level data loading.

use thiserror::Error;

/// Errors that can occur when loading or building a level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// JSON parsing failed, including missing fields.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// World must have a positive area.
    #[error("Invalid world size {width}x{height}")]
    InvalidWorldSize { width: f32, height: f32 },

    /// A platform with zero tiles.
    #[error("Platform {index} has no tiles")]
    EmptyPlatform { index: usize },

    /// A platform names a texture that is never loaded.
    #[error("Platform {index} uses unknown texture '{key}'")]
    UnknownTexture { index: usize, key: String },

    /// Spawner timings must be positive.
    #[error("Invalid spawner timing: interval {interval}ms, lifespan {lifespan}ms")]
    InvalidSpawnerTiming { interval: u64, lifespan: u64 },

    /// An image finished loading without reporting a size.
    #[error("No size known for texture '{0}'")]
    MissingTextureSize(String),
}
