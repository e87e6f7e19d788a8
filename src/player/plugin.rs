//! Player plugin - movement, camera, flashlight and capture.

use bevy::prelude::*;

use super::components::*;
use super::flashlight::flashlight_sweep;
use super::lifecycle::{handle_jumpscare, play_jumpscare_sting};
use super::movement::{grab_cursor, mouse_look, player_movement, release_cursor};
use crate::core::GameState;
use crate::enemies::enemy_ai_tick;

/// Player plugin - handles player movement, the flashlight and getting caught.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<PlayerConfig>()
            .add_systems(OnEnter(GameState::InGame), grab_cursor)
            .add_systems(OnExit(GameState::InGame), release_cursor)
            .add_systems(
                Update,
                (mouse_look, player_movement, flashlight_sweep)
                    .run_if(in_state(GameState::InGame)),
            )
            // Consequences of this frame's AI tick
            .add_systems(
                Update,
                (handle_jumpscare, play_jumpscare_sting)
                    .after(enemy_ai_tick)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
