//! Player-related components.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Group;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Added when an enemy catches the player. Enemies stop seeing a captured player.
#[derive(Component)]
pub struct Captured;

/// Collision group for the player body, kept out of flashlight ray casts.
pub const PLAYER_GROUP: Group = Group::GROUP_3;

/// Handheld light on the player camera; its forward axis is the sweep direction.
#[derive(Component)]
pub struct Flashlight {
    /// Maximum ray length in world units
    pub range: f32,
}

impl Default for Flashlight {
    fn default() -> Self {
        Self { range: 10.0 }
    }
}

/// Tracks player movement state for physics.
#[derive(Component, Default)]
pub struct MovementState {
    /// Falling speed carried between frames (negative = down)
    pub vertical_velocity: f32,
}

/// Configuration for the first-person controller and flashlight.
#[derive(Resource)]
pub struct PlayerConfig {
    /// Mouse sensitivity multiplier
    pub mouse_sensitivity: f32,
    /// Invert Y-axis for mouse look
    pub invert_y: bool,
    /// Base movement speed in units per second
    pub move_speed: f32,
    /// Sprint speed multiplier
    pub sprint_multiplier: f32,
    /// Gravity acceleration
    pub gravity: f32,
    /// Key that flashes the light at whatever is in front of the player
    pub flashlight_key: KeyCode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 1.5,
            invert_y: false,
            move_speed: 4.0,
            sprint_multiplier: 1.5,
            gravity: 15.0,
            flashlight_key: KeyCode::KeyF,
        }
    }
}
