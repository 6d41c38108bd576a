//! Level construction from data definitions.

use bevy::prelude::*;
use bevy::sprite::SpriteImageMode;

use super::assets::{GameAssets, TextureSizes, FIRE, FIRE_SHEET, GOAL};
use super::data::{LevelData, PlatformDef};
use super::error::LevelError;
use crate::animation::{SpriteAnimation, BURNING};
use crate::core::HazardKind;
use crate::hazards::Hazard;
use crate::physics::{to_world, Body, CollidesWithStatics, StaticBody};
use crate::player::spawn_player;

/// Draw order, back to front.
pub mod depth {
    pub const PLATFORM: f32 = 0.0;
    pub const FIRE: f32 = 1.0;
    pub const GOAL: f32 = 2.0;
    pub const BARREL: f32 = 3.0;
    pub const PLAYER: f32 = 4.0;
}

/// Marker for everything that belongs to the running scene.
///
/// A restart despawns every entity carrying it.
#[derive(Component)]
pub struct SceneEntity;

/// Marker for static platforms.
#[derive(Component)]
pub struct Platform;

/// Marker for fire hazards.
#[derive(Component)]
pub struct Fire;

/// Marker for the gorilla at the top of the level.
#[derive(Component)]
pub struct Goal;

/// How a platform is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformShape {
    /// One copy of the texture
    Single { size: Vec2 },
    /// The texture repeated horizontally
    Strip { size: Vec2, tiles: u32 },
}

impl PlatformShape {
    /// Shape of `def` given the size of one tile of its texture.
    pub fn new(def: &PlatformDef, tile: Vec2) -> Self {
        if def.num_tiles <= 1 {
            Self::Single { size: tile }
        } else {
            Self::Strip {
                size: Vec2::new(tile.x * def.num_tiles as f32, tile.y),
                tiles: def.num_tiles,
            }
        }
    }

    pub fn size(&self) -> Vec2 {
        match *self {
            Self::Single { size } | Self::Strip { size, .. } => size,
        }
    }
}

/// Entities created for one scene.
#[derive(Debug, Clone, Copy)]
pub struct LevelSummary {
    pub player: Entity,
    pub goal: Entity,
    pub platforms: usize,
    pub fires: usize,
}

/// Build a level from a level definition.
///
/// Every texture size is resolved before anything is spawned, so a failure
/// leaves the world untouched.
pub fn build_level_from_data(
    commands: &mut Commands,
    level: &LevelData,
    assets: &GameAssets,
    sizes: &TextureSizes,
) -> Result<LevelSummary, LevelError> {
    let shapes = level
        .platforms
        .iter()
        .map(|def| Ok((def, PlatformShape::new(def, sizes.get(&def.key)?))))
        .collect::<Result<Vec<_>, LevelError>>()?;
    let goal_size = sizes.get(GOAL)?;

    for (def, shape) in &shapes {
        spawn_platform(commands, assets, def, *shape);
    }

    for fire in &level.fires {
        spawn_fire(commands, assets, Vec2::from(*fire));
    }

    let player = spawn_player(commands, assets, level.player.into());
    let goal = spawn_goal(commands, assets, level.goal.into(), goal_size);

    Ok(LevelSummary {
        player,
        goal,
        platforms: shapes.len(),
        fires: level.fires.len(),
    })
}

fn spawn_platform(commands: &mut Commands, assets: &GameAssets, def: &PlatformDef, shape: PlatformShape) {
    let size = shape.size();
    let image_mode = match shape {
        PlatformShape::Single { .. } => SpriteImageMode::Auto,
        PlatformShape::Strip { .. } => SpriteImageMode::Tiled {
            tile_x: true,
            tile_y: false,
            stretch_value: 1.0,
        },
    };

    commands.spawn((
        Platform,
        SceneEntity,
        StaticBody::new(def.position(), size),
        Sprite {
            image: assets.image(&def.key),
            custom_size: Some(size),
            image_mode,
            ..default()
        },
        Transform::from_translation(to_world(def.position() + size / 2.0, depth::PLATFORM)),
    ));
}

/// Fires hang where they are placed: no gravity, never pushed around.
fn spawn_fire(commands: &mut Commands, assets: &GameAssets, position: Vec2) {
    let size = FIRE_SHEET.frame_size_f32();
    commands.spawn((
        Fire,
        SceneEntity,
        Hazard(HazardKind::Fire),
        Body::new(position, size).without_gravity().immovable(),
        assets.sheet_sprite(FIRE, 0),
        SpriteAnimation::playing(BURNING),
        Transform::from_translation(to_world(position + size / 2.0, depth::FIRE)),
    ));
}

/// The goal falls onto whatever platform is below it.
fn spawn_goal(commands: &mut Commands, assets: &GameAssets, center: Vec2, size: Vec2) -> Entity {
    commands
        .spawn((
            Goal,
            SceneEntity,
            Hazard(HazardKind::Goal),
            Body::centered(center, size),
            CollidesWithStatics,
            Sprite::from_image(assets.image(GOAL)),
            Transform::from_translation(to_world(center, depth::GOAL)),
        ))
        .id()
}
