//! Physics plugin - arcade bodies, gravity, and static colliders.

use bevy::prelude::*;

use super::systems::*;
use crate::core::GameState;

/// Ordering for a gameplay frame.
///
/// Input writes velocities, the step moves bodies, then contacts are
/// resolved against the new positions.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    Input,
    Step,
    Contacts,
}

/// Physics plugin - steps every body once per frame during gameplay.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldBounds>()
            .configure_sets(
                Update,
                (PhysicsSet::Input, PhysicsSet::Step, PhysicsSet::Contacts)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                Update,
                (step_bodies, sync_transforms)
                    .chain()
                    .in_set(PhysicsSet::Step),
            )
            .add_systems(
                Update,
                draw_debug_bodies
                    .after(PhysicsSet::Step)
                    .run_if(debug_enabled),
            );
    }
}
