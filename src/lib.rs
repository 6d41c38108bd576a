//! Monster Kong - a single-screen platformer in Bevy.
//!
//! Climb the platforms to the gorilla at the top while dodging fires and the
//! barrels it throws. Touching a fire, a barrel, or the gorilla itself fades
//! the screen out and starts the level again.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, configuration, global events
//! - **Physics**: Arcade bodies, gravity, world bounds, static colliders
//! - **Animation**: Spritesheet clips and playback
//! - **World**: Asset loading, level data, level building, camera
//! - **Player**: Run and jump controls
//! - **Hazards**: Barrel spawner and restart on contact
//! - **UI**: Fade overlay

pub mod animation;
pub mod core;
pub mod hazards;
pub mod physics;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct MonsterKongPlugin;

impl Plugin for MonsterKongPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Physics and animation
            .add_plugins(physics::PhysicsPlugin)
            .add_plugins(animation::AnimationPlugin)

            // Level loading and building
            .add_plugins(world::WorldPlugin)

            // Player controls
            .add_plugins(player::PlayerPlugin)

            // Barrels and restarts
            .add_plugins(hazards::HazardsPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
