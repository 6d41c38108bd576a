//! UI module - the fade overlay shown between scenes.

mod fade;
mod plugin;

pub use fade::{FadeOverlay, ScreenFade};
pub use plugin::UiPlugin;
