//! Global events used for cross-system communication.

use bevy::prelude::*;

/// What the player ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    Fire,
    Goal,
    Barrel,
}

/// Sent when the player's body overlaps a fire, the goal, or a live barrel.
///
/// The restart handler listens for these; reaching the goal and getting hit
/// both end the run the same way.
#[derive(Event, Debug, Clone, Copy)]
pub struct HazardContact {
    /// The hazard entity that was touched
    pub hazard: Entity,
    pub kind: HazardKind,
}
