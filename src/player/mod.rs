//! Player module - player entity and platformer movement.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{spawn_player, steer, MoveInput, Steering};
pub use plugin::PlayerPlugin;
