//! Lightshy - a first-person horror game in Bevy.
//!
//! Stalkers walk fixed patrol routes through dark levels. Get within their
//! chase range and they come straight for you; flash your light at one and
//! it slinks back to the nearest point on its route. Let one reach you and
//! the run is over.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, cross-system events
//! - **Player**: First-person movement, flashlight, getting caught
//! - **Enemies**: Enemy definitions and the patrol/chase state machine
//! - **World**: Levels, spawning, redirect triggers

pub mod core;
pub mod enemies;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct LightshyPlugin;

impl Plugin for LightshyPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // World systems
            .add_plugins(world::WorldPlugin);
    }
}
