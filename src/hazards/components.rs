//! Hazard components.

use bevy::prelude::*;

use crate::core::HazardKind;

/// Anything that ends the run when the player touches it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hazard(pub HazardKind);

/// A pooled barrel.
///
/// Inactive barrels stay in the world, hidden and with their body disabled,
/// until the spawner hands them out again.
#[derive(Component, Debug, Clone)]
pub struct Barrel {
    pub active: bool,
    /// Time left before the barrel is pulled back into the pool
    pub lifespan: Timer,
}

impl Barrel {
    pub fn new(lifespan: std::time::Duration) -> Self {
        Self {
            active: true,
            lifespan: Timer::new(lifespan, TimerMode::Once),
        }
    }
}
