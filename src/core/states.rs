//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Level building and
//! the spawner hang off `OnEnter(GameState::InGame)`, so a restart is just a
//! round trip through `Restarting`.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while images and level data load
/// - Enter `InGame` once everything is ready
/// - `Restarting` is a one-frame hop that tears the scene down so that
///   re-entering `InGame` rebuilds it from scratch
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading images and the level file
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// Scene torn down, about to be rebuilt
    Restarting,
}
