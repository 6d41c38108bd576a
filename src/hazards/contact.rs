//! Player/hazard overlaps and the restart they trigger.

use bevy::prelude::*;

use super::components::Hazard;
use crate::core::{GameConfig, GameState, HazardContact};
use crate::physics::{capped_delta, overlaps, Body};
use crate::player::Player;
use crate::ui::ScreenFade;

/// Report every enabled hazard body the player overlaps.
pub fn detect_hazard_contacts(
    player_query: Query<&Body, With<Player>>,
    hazards: Query<(Entity, &Body, &Hazard), Without<Player>>,
    mut contacts: EventWriter<HazardContact>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    if !player.enabled {
        return;
    }

    let player_rect = player.rect();
    for (entity, body, hazard) in hazards.iter() {
        if body.enabled && overlaps(player_rect, body.rect()) {
            contacts.send(HazardContact {
                hazard: entity,
                kind: hazard.0,
            });
        }
    }
}

/// Start the fade out on the first contact; later contacts are ignored.
pub fn begin_restart(
    mut contacts: EventReader<HazardContact>,
    mut fade: ResMut<ScreenFade>,
    config: Res<GameConfig>,
) {
    for contact in contacts.read() {
        if fade.start(config.fade_duration_ms) {
            info!("Player touched {:?} {}, restarting", contact.kind, contact.hazard);
        }
    }
}

/// Restart the scene once the fade out has finished.
pub fn finish_fade(
    time: Res<Time>,
    mut fade: ResMut<ScreenFade>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !fade.is_fading() {
        return;
    }
    if fade.tick(capped_delta(&time)) {
        next_state.set(GameState::Restarting);
    }
}
