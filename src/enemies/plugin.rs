//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::data::{load_enemy_definitions, EnemyRegistry};
use crate::core::GameState;
use crate::player::flashlight_sweep;

/// Enemy plugin - handles enemy definitions and AI.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<EnemyRegistry>()
            // Definitions must exist before the first level spawns
            .add_systems(Startup, load_enemy_definitions)
            // AI runs after the flashlight so hits land on the same frame
            .add_systems(
                Update,
                ai::enemy_ai_tick
                    .after(flashlight_sweep)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
