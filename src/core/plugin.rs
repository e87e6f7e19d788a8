//! Core plugin that sets up game states and global events.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, LevelTransition, GameOver)
/// - Global events (FlashlightHitEvent, JumpscareEvent, SceneRedirectEvent)
/// - Level transition flow
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<FlashlightHitEvent>()
            .add_event::<JumpscareEvent>()
            .add_event::<SceneRedirectEvent>()

            // Data files are read at Startup, so gameplay can begin right away
            .add_systems(OnEnter(GameState::Loading), enter_game)

            // Bounce straight back into the game after a redirect
            .add_systems(OnEnter(GameState::LevelTransition), enter_game);
    }
}

/// Move into InGame.
fn enter_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}
