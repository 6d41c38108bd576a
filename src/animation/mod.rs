//! Animation module - spritesheet clips and playback.

mod clips;
mod playback;
mod plugin;

pub use clips::*;
pub use playback::{set_frame, SpriteAnimation};
pub use plugin::AnimationPlugin;
