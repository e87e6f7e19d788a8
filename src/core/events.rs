//! Global events used for cross-system communication.
//!
//! The flashlight, the enemy AI and the player lifecycle never touch each
//! other's components directly; they talk through these events so each
//! side can be driven on its own in tests.

use bevy::prelude::*;

/// Sent when the flashlight ray lands on an enemy this frame.
#[derive(Event, Debug, Clone, Copy)]
pub struct FlashlightHitEvent {
    /// Enemy that was lit up
    pub enemy: Entity,
}

/// Sent when an enemy gets close enough to its target to jumpscare it.
#[derive(Event, Debug, Clone, Copy)]
pub struct JumpscareEvent {
    /// Enemy that caught the target
    pub enemy: Entity,
    /// Entity that was caught
    pub target: Entity,
}

/// Sent when the player walks into a redirect trigger.
#[derive(Event, Debug, Clone)]
pub struct SceneRedirectEvent {
    /// Link to open
    pub url: String,
    /// Level to load afterwards (None or empty = stay)
    pub next_level: Option<String>,
}
