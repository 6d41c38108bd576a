//! Monster Kong - Entry Point
//!
//! Controls:
//! - Left/Right arrows: Run
//! - Up arrow or Space: Jump

use bevy::prelude::*;

use monster_kong::core::GameConfig;

fn main() {
    let config = GameConfig::load();

    let image_plugin = if config.pixel_art {
        ImagePlugin::default_nearest()
    } else {
        ImagePlugin::default_linear()
    };

    App::new()
        // Bevy default plugins
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.title.clone(),
                        resolution: config.canvas_size().into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(image_plugin),
        )

        // Loaded before the window exists; plugins read it from here
        .insert_resource(config)
        .insert_resource(ClearColor(Color::BLACK))

        // Our game plugin
        .add_plugins(monster_kong::MonsterKongPlugin)

        .run();
}
