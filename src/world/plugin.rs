//! World plugin - asset loading, level building, camera, and teardown.

use bevy::prelude::*;

use crate::core::GameState;
use crate::physics::{PhysicsSet, WorldBounds};

use super::assets::{check_assets_loaded, load_assets, GameAssets, TextureSizes};
use super::builder::{build_level_from_data, SceneEntity};
use super::camera::{follow_player, spawn_camera};
use super::data::LevelData;

/// World plugin - handles level loading and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(OnEnter(GameState::Loading), load_assets)
            .add_systems(
                Update,
                check_assets_loaded
                    .run_if(in_state(GameState::Loading))
                    .run_if(resource_exists::<LevelData>),
            )
            .add_systems(OnEnter(GameState::InGame), setup_level)
            .add_systems(OnExit(GameState::InGame), cleanup_level)
            .add_systems(
                Update,
                follow_player
                    .after(PhysicsSet::Step)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}

/// Set up the level from data.
pub fn setup_level(
    mut commands: Commands,
    level: Res<LevelData>,
    assets: Res<GameAssets>,
    sizes: Res<TextureSizes>,
    mut bounds: ResMut<WorldBounds>,
    mut exit: EventWriter<AppExit>,
) {
    *bounds = WorldBounds::new(level.world.width, level.world.height);

    match build_level_from_data(&mut commands, &level, &assets, &sizes) {
        Ok(summary) => info!(
            "Scene started: {} platforms, {} fires, world {}x{}",
            summary.platforms, summary.fires, level.world.width, level.world.height
        ),
        Err(e) => {
            error!("Failed to build level: {}", e);
            exit.send(AppExit::error());
        }
    }
}

/// Despawn every scene entity when leaving InGame.
pub fn cleanup_level(mut commands: Commands, scene_query: Query<Entity, With<SceneEntity>>) {
    let mut count = 0;
    for entity in scene_query.iter() {
        commands.entity(entity).despawn_recursive();
        count += 1;
    }
    debug!("Despawned {} scene entities", count);
}
