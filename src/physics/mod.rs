//! Physics module - non-rotating boxes, gravity, world bounds, overlaps.

mod body;
mod plugin;
mod systems;

pub use body::*;
pub use plugin::{PhysicsPlugin, PhysicsSet};
pub use systems::{capped_delta, to_world, WorldBounds, MAX_STEP};
