//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Enemy AI and
//! player movement only run in `InGame`; level setup and cleanup hang off
//! the enter/exit transitions of that state.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while data files are read
/// - `InGame` is active play inside the current level
/// - `LevelTransition` is passed through when a redirect loads another
///   level, so `InGame` is exited and re-entered
/// - `GameOver` once the player has been caught
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// Between two levels
    LevelTransition,
    /// Player was caught by an enemy
    GameOver,
}
