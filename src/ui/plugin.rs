//! UI plugin - screen overlays.

use bevy::prelude::*;

use super::fade::{reset_fade, spawn_fade_overlay, update_fade_overlay, ScreenFade};
use crate::core::GameState;

/// UI plugin - handles the restart fade.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenFade>()
            .add_systems(Startup, spawn_fade_overlay)
            .add_systems(OnEnter(GameState::InGame), reset_fade)
            .add_systems(Update, update_fade_overlay);
    }
}
