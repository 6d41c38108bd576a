//! Player-related components.

use bevy::prelude::*;

use crate::core::GameConfig;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Spritesheet frame shown while standing still.
pub const STANDING_FRAME: usize = 3;
/// Spritesheet frame shown while jumping.
pub const JUMPING_FRAME: usize = 2;

/// Tuning for the platformer controller.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    /// Horizontal speed in px/s
    pub move_speed: f32,
    /// Vertical velocity set on jump (negative is up)
    pub jump_speed: f32,
}

impl FromWorld for PlayerConfig {
    fn from_world(world: &mut World) -> Self {
        let config = world.get_resource::<GameConfig>().cloned().unwrap_or_default();
        let player_config = Self::from(&config);
        info!(
            "Player speed {}, jump speed {}",
            player_config.move_speed, player_config.jump_speed
        );
        player_config
    }
}

impl From<&GameConfig> for PlayerConfig {
    fn from(config: &GameConfig) -> Self {
        Self {
            move_speed: config.player_speed,
            jump_speed: config.jump_speed,
        }
    }
}
