//! Image preloading and texture metadata.

use bevy::asset::LoadState;
use bevy::prelude::*;
use std::collections::HashMap;

use super::data::LevelData;
use super::error::LevelError;
use crate::core::{GameConfig, GameState};

pub const GROUND: &str = "ground";
pub const PLATFORM: &str = "platform";
pub const BLOCK: &str = "block";
pub const GOAL: &str = "goal";
pub const BARREL: &str = "barrel";
pub const PLAYER: &str = "player";
pub const FIRE: &str = "fire";

/// Textures a level platform may use.
pub const PLATFORM_TEXTURES: [&str; 3] = [GROUND, PLATFORM, BLOCK];

/// Plain images, by key.
const IMAGES: [(&str, &str); 5] = [
    (GROUND, "images/ground.png"),
    (PLATFORM, "images/platform.png"),
    (BLOCK, "images/block.png"),
    (GOAL, "images/gorilla3.png"),
    (BARREL, "images/barrel.png"),
];

/// Layout of a single-row spritesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    pub frame_size: UVec2,
    /// Border around the whole sheet
    pub margin: u32,
    /// Gap between frames
    pub spacing: u32,
    pub frames: u32,
}

impl SpriteSheet {
    pub fn layout(&self) -> TextureAtlasLayout {
        TextureAtlasLayout::from_grid(
            self.frame_size,
            self.frames,
            1,
            Some(UVec2::splat(self.spacing)),
            Some(UVec2::splat(self.margin)),
        )
    }

    pub fn frame_size_f32(&self) -> Vec2 {
        self.frame_size.as_vec2()
    }
}

pub const PLAYER_SHEET: SpriteSheet = SpriteSheet {
    frame_size: UVec2::new(28, 30),
    margin: 1,
    spacing: 1,
    frames: 4,
};

pub const FIRE_SHEET: SpriteSheet = SpriteSheet {
    frame_size: UVec2::new(20, 21),
    margin: 1,
    spacing: 1,
    frames: 2,
};

/// Spritesheets, by key.
const SHEETS: [(&str, &str, SpriteSheet); 2] = [
    (PLAYER, "images/player_spritesheet.png", PLAYER_SHEET),
    (FIRE, "images/fire_spritesheet.png", FIRE_SHEET),
];

/// Handles for every image the game draws.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameAssets {
    pub images: HashMap<String, Handle<Image>>,
    pub layouts: HashMap<String, Handle<TextureAtlasLayout>>,
}

impl GameAssets {
    /// Image handle for `key`, or the default handle if it was never loaded.
    pub fn image(&self, key: &str) -> Handle<Image> {
        self.images.get(key).cloned().unwrap_or_default()
    }

    /// A sprite showing `frame` of the spritesheet `key`.
    pub fn sheet_sprite(&self, key: &str, frame: usize) -> Sprite {
        Sprite::from_atlas_image(
            self.image(key),
            TextureAtlas {
                layout: self.layouts.get(key).cloned().unwrap_or_default(),
                index: frame,
            },
        )
    }
}

/// Pixel size of each texture (one frame for spritesheets).
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct TextureSizes(pub HashMap<String, Vec2>);

impl TextureSizes {
    pub fn get(&self, key: &str) -> Result<Vec2, LevelError> {
        self.0
            .get(key)
            .copied()
            .ok_or_else(|| LevelError::MissingTextureSize(key.to_string()))
    }

    pub fn insert(&mut self, key: &str, size: Vec2) {
        self.0.insert(key.to_string(), size);
    }
}

/// Request every image, build spritesheet layouts, and read the level file.
pub fn load_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    config: Res<GameConfig>,
    mut exit: EventWriter<AppExit>,
) {
    let mut assets = GameAssets::default();

    for (key, path) in IMAGES {
        assets.images.insert(key.to_string(), asset_server.load(path));
    }
    for (key, path, sheet) in SHEETS {
        assets.images.insert(key.to_string(), asset_server.load(path));
        assets
            .layouts
            .insert(key.to_string(), layouts.add(sheet.layout()));
    }
    commands.insert_resource(assets);

    match LevelData::load(&config.level_path) {
        Ok(level) => {
            info!(
                "Loaded level {}: {} platforms, {} fires",
                config.level_path,
                level.platforms.len(),
                level.fires.len()
            );
            commands.insert_resource(level);
        }
        Err(e) => {
            error!("Failed to load level: {}", e);
            exit.send(AppExit::error());
        }
    }
}

/// Move on to gameplay once every image is in memory.
pub fn check_assets_loaded(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    assets: Res<GameAssets>,
    images: Res<Assets<Image>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (key, handle) in &assets.images {
        if let Some(LoadState::Failed(e)) = asset_server.get_load_state(handle) {
            error!("Failed to load image '{}': {}", key, e);
            exit.send(AppExit::error());
            return;
        }
    }

    if !assets
        .images
        .values()
        .all(|handle| asset_server.is_loaded_with_dependencies(handle))
    {
        return;
    }

    let mut sizes = TextureSizes::default();
    for (key, handle) in &assets.images {
        if let Some(image) = images.get(handle) {
            sizes.insert(key, image.size_f32());
        }
    }
    for (key, _, sheet) in SHEETS {
        sizes.insert(key, sheet.frame_size_f32());
    }

    info!("All {} images loaded", assets.images.len());
    commands.insert_resource(sizes);
    next_state.set(GameState::InGame);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spritesheet_layouts_skip_margin_and_spacing() {
        let layout = PLAYER_SHEET.layout();
        assert_eq!(layout.textures.len(), 4);
        assert_eq!(layout.textures[0].min, UVec2::new(1, 1));
        assert_eq!(layout.textures[1].min, UVec2::new(30, 1));
        assert_eq!(layout.textures[3].max, UVec2::new(116, 31));

        let fire = FIRE_SHEET.layout();
        assert_eq!(fire.textures.len(), 2);
        assert_eq!(fire.textures[1].min, UVec2::new(22, 1));
    }

    #[test]
    fn missing_sizes_are_errors() {
        let mut sizes = TextureSizes::default();
        sizes.insert(BLOCK, Vec2::new(36.0, 30.0));
        assert_eq!(sizes.get(BLOCK).unwrap(), Vec2::new(36.0, 30.0));
        assert!(matches!(sizes.get(GOAL), Err(LevelError::MissingTextureSize(_))));
    }

    #[test]
    fn unloaded_keys_fall_back_to_default_handles() {
        let assets = GameAssets::default();
        assert_eq!(assets.image(GOAL), Handle::default());
        let sprite = assets.sheet_sprite(PLAYER, 3);
        assert_eq!(sprite.texture_atlas.unwrap().index, 3);
    }
}
