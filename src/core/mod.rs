//! Core game module - states, events, configuration.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod events;
mod plugin;
mod states;

pub use config::*;
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
