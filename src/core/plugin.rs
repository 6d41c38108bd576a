//! Core plugin that sets up game states, events, and configuration.

use bevy::prelude::*;

use super::config::GameConfig;
use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, Restarting)
/// - Global events (HazardContact)
/// - The `GameConfig` resource, unless `main` already inserted one
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<GameConfig>()

            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<HazardContact>()

            // Everything tagged for the scene is gone by now, go build it again
            .add_systems(OnEnter(GameState::Restarting), finish_restart);
    }
}

/// Re-enter gameplay so `OnEnter(GameState::InGame)` rebuilds the scene.
fn finish_restart(mut next_state: ResMut<NextState<GameState>>) {
    info!("Scene torn down, rebuilding");
    next_state.set(GameState::InGame);
}
