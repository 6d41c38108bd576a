//! Camera that follows the player inside the level bounds.

use bevy::math::Rect;
use bevy::prelude::*;

use crate::physics::{to_world, Body, WorldBounds};
use crate::player::Player;

/// Marker for the game camera.
#[derive(Component)]
pub struct MainCamera;

/// Spawn the camera once; it outlives scene restarts.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Where the view centre should be to follow `target` without showing
/// anything outside `bounds`.
///
/// An axis where the view is larger than the world is centred on the world.
pub fn follow_target(target: Vec2, view: Vec2, bounds: Rect) -> Vec2 {
    let half = view / 2.0;
    let axis = |target: f32, half: f32, min: f32, max: f32| {
        if max - min <= half * 2.0 {
            (min + max) / 2.0
        } else {
            target.clamp(min + half, max - half)
        }
    };
    Vec2::new(
        axis(target.x, half.x, bounds.min.x, bounds.max.x),
        axis(target.y, half.y, bounds.min.y, bounds.max.y),
    )
}

/// Keep the camera on the player.
pub fn follow_player(
    bounds: Res<WorldBounds>,
    player_query: Query<&Body, With<Player>>,
    mut camera_query: Query<(&mut Transform, &OrthographicProjection), With<MainCamera>>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let Ok((mut transform, projection)) = camera_query.get_single_mut() else {
        return;
    };

    let view = projection.area.size();
    let center = follow_target(player.center(), view, bounds.0);
    transform.translation = to_world(center, transform.translation.z);
}
