//! Barrel spawner: the goal throws a barrel every interval.

use bevy::prelude::*;
use std::time::Duration;

use super::components::{Barrel, Hazard};
use crate::core::HazardKind;
use crate::physics::{capped_delta, to_world, Body, CollidesWithStatics};
use crate::world::{depth, GameAssets, Goal, LevelData, SceneEntity, SpawnerDef, TextureSizes, BARREL};

/// Barrels bounce fully off walls and barely off floors.
const BARREL_BOUNCE: Vec2 = Vec2::new(1.0, 0.1);

/// Launch timing for the current scene.
#[derive(Resource, Debug, Clone)]
pub struct BarrelSpawner {
    pub timer: Timer,
    /// Horizontal launch speed, px/s
    pub speed: f32,
    pub lifespan: Duration,
}

impl BarrelSpawner {
    pub fn from_level(def: &SpawnerDef) -> Self {
        Self {
            timer: Timer::new(Duration::from_millis(def.interval), TimerMode::Repeating),
            speed: def.speed,
            lifespan: Duration::from_millis(def.lifespan),
        }
    }
}

/// Start a fresh spawner for the new scene.
pub fn setup_spawner(mut commands: Commands, level: Res<LevelData>) {
    commands.insert_resource(BarrelSpawner::from_level(&level.spawner));
}

/// Launch a barrel from the goal whenever the spawner timer fires.
///
/// Inactive barrels are reused before new ones are spawned. A reused barrel
/// starts with velocity `(speed, 0)`; its old fall speed is dropped.
pub fn spawn_barrels(
    mut commands: Commands,
    time: Res<Time>,
    mut spawner: ResMut<BarrelSpawner>,
    assets: Res<GameAssets>,
    sizes: Res<TextureSizes>,
    goal_query: Query<&Body, (With<Goal>, Without<Barrel>)>,
    mut barrels: Query<(&mut Barrel, &mut Body, &mut Visibility)>,
) {
    spawner.timer.tick(capped_delta(&time));
    let launches = spawner.timer.times_finished_this_tick();
    if launches == 0 {
        return;
    }

    let Ok(goal) = goal_query.get_single() else {
        return;
    };
    let origin = goal.center();

    let mut pool = barrels.iter_mut().filter(|(barrel, _, _)| !barrel.active);
    for _ in 0..launches {
        if let Some((mut barrel, mut body, mut visibility)) = pool.next() {
            *barrel = Barrel::new(spawner.lifespan);
            body.set_center(origin);
            body.velocity = Vec2::new(spawner.speed, 0.0);
            body.enabled = true;
            *visibility = Visibility::Inherited;
            continue;
        }

        let size = match sizes.get(BARREL) {
            Ok(size) => size,
            Err(e) => {
                warn!("Cannot spawn barrel: {}", e);
                return;
            }
        };

        let mut body = Body::centered(origin, size)
            .with_bounce(BARREL_BOUNCE)
            .collide_world_bounds();
        body.velocity.x = spawner.speed;

        commands.spawn((
            Barrel::new(spawner.lifespan),
            Hazard(HazardKind::Barrel),
            SceneEntity,
            body,
            CollidesWithStatics,
            Sprite::from_image(assets.image(BARREL)),
            Transform::from_translation(to_world(origin, depth::BARREL)),
        ));
        debug!("Barrel pool grew");
    }
}

/// Kill and hide barrels whose lifespan ran out.
pub fn expire_barrels(
    time: Res<Time>,
    mut barrels: Query<(&mut Barrel, &mut Body, &mut Visibility)>,
) {
    for (mut barrel, mut body, mut visibility) in barrels.iter_mut() {
        if !barrel.active {
            continue;
        }
        barrel.lifespan.tick(capped_delta(&time));
        if barrel.lifespan.finished() {
            barrel.active = false;
            body.enabled = false;
            *visibility = Visibility::Hidden;
        }
    }
}
