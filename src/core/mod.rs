//! Core game module - states and cross-system events.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod plugin;
mod states;

pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
