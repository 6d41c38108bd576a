//! Hazards module - barrels, the barrel spawner, and the restart handler.

mod components;
mod contact;
mod plugin;
mod spawner;

pub use components::*;
pub use contact::{begin_restart, detect_hazard_contacts};
pub use plugin::HazardsPlugin;
pub use spawner::BarrelSpawner;
