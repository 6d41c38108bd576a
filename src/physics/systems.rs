//! Systems that drive the arcade bodies each frame.

use bevy::math::{Isometry2d, Rect};
use bevy::prelude::*;
use std::time::Duration;

use super::body::{step_body, Body, CollidesWithStatics, StaticBody};
use crate::core::GameConfig;

/// Longest step the simulation will take in one frame.
///
/// A hitch longer than this slows the game down instead of letting bodies
/// tunnel through thin platforms.
pub const MAX_STEP: f32 = 1.0 / 30.0;

/// Area that bodies with `collide_world_bounds` are kept inside.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds(pub Rect);

impl Default for WorldBounds {
    fn default() -> Self {
        Self(Rect::from_corners(Vec2::ZERO, GameConfig::default().canvas_size()))
    }
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self(Rect::new(0.0, 0.0, width, height))
    }
}

/// This frame's time, clamped to `MAX_STEP`.
///
/// Gameplay timers tick on this as well, so a hitch slows them down exactly
/// as much as it slows the bodies.
pub fn capped_delta(time: &Time) -> Duration {
    time.delta().min(Duration::from_secs_f32(MAX_STEP))
}

/// Bevy translation for a point in level coordinates.
///
/// Level coordinates grow downward, Bevy's world grows upward, so y flips.
pub fn to_world(point: Vec2, z: f32) -> Vec3 {
    Vec3::new(point.x, -point.y, z)
}

/// Apply gravity, move every body, and separate colliders from statics.
pub fn step_bodies(
    time: Res<Time>,
    config: Res<GameConfig>,
    bounds: Res<WorldBounds>,
    statics: Query<&StaticBody>,
    mut bodies: Query<(&mut Body, Has<CollidesWithStatics>)>,
) {
    let dt = capped_delta(&time).as_secs_f32();
    if dt <= 0.0 {
        return;
    }

    let solids: Vec<Rect> = statics.iter().map(|s| s.rect).collect();

    for (mut body, collides) in bodies.iter_mut() {
        let colliders: &[Rect] = if collides { &solids } else { &[] };
        step_body(&mut body, dt, config.gravity, bounds.0, colliders);
    }
}

/// Copy body centres into transforms, keeping each sprite's depth.
pub fn sync_transforms(mut query: Query<(&Body, &mut Transform), Changed<Body>>) {
    for (body, mut transform) in query.iter_mut() {
        transform.translation = to_world(body.center(), transform.translation.z);
    }
}

/// Outline every enabled body when `debug` is on.
pub fn draw_debug_bodies(
    mut gizmos: Gizmos,
    bodies: Query<&Body>,
    statics: Query<&StaticBody>,
) {
    for body in bodies.iter().filter(|b| b.enabled) {
        let center = body.center();
        gizmos.rect_2d(flipped(center), body.size, Color::srgb(1.0, 0.0, 1.0));
    }
    for solid in statics.iter() {
        let center = solid.rect.center();
        gizmos.rect_2d(flipped(center), solid.rect.size(), Color::srgb(0.0, 0.6, 1.0));
    }
}

fn flipped(center: Vec2) -> Isometry2d {
    Isometry2d::from_translation(to_world(center, 0.0).truncate())
}

/// Run condition for the debug overlay.
pub fn debug_enabled(config: Res<GameConfig>) -> bool {
    config.debug
}
