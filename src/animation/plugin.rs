//! Animation plugin - clip registry and frame stepping.

use bevy::prelude::*;

use super::clips::AnimationLibrary;
use super::playback::animate_sprites;

/// Animation plugin - registers clips once and steps sprites every frame.
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationLibrary>()
            .add_systems(Update, animate_sprites);
    }
}
