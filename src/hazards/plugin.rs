//! Hazards plugin - barrel spawner and restart-on-contact.

use bevy::prelude::*;

use super::contact::{begin_restart, detect_hazard_contacts, finish_fade};
use super::spawner::{expire_barrels, setup_spawner, spawn_barrels, BarrelSpawner};
use crate::core::GameState;
use crate::physics::PhysicsSet;

/// Hazards plugin - throws barrels and restarts the scene on contact.
pub struct HazardsPlugin;

impl Plugin for HazardsPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fresh spawner timing for every scene
            .add_systems(OnEnter(GameState::InGame), setup_spawner)
            // Expire before spawning so a barrel can be reused the same frame
            .add_systems(
                Update,
                (expire_barrels, spawn_barrels)
                    .chain()
                    .in_set(PhysicsSet::Input)
                    .run_if(resource_exists::<BarrelSpawner>),
            )
            .add_systems(
                Update,
                (detect_hazard_contacts, begin_restart, finish_fade)
                    .chain()
                    .in_set(PhysicsSet::Contacts),
            );
    }
}
