//! Enemy-related components.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Group;
use serde::Deserialize;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Enemy type identifier (matches RON file name).
#[derive(Component, Clone)]
pub struct EnemyType(pub String);

/// Whether a jumpscare is a one-shot or keeps firing while the enemy stays close.
#[derive(Deserialize, Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum JumpscarePolicy {
    /// Fire the first time the target is in reach, then never again.
    #[default]
    Once,
    /// Fire on every tick the target is in reach.
    EveryTick,
}

/// Enemy tuning loaded from RON data files.
#[derive(Component, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EnemyStats {
    /// Ground speed in units per second
    pub move_speed: f32,
    /// Target closer than this starts a chase
    pub chase_range: f32,
    /// Chase ends once the target is this close
    pub stopping_distance: f32,
    /// Furthest a flashlight can be from this enemy and still drive it off
    pub flashlight_range: f32,
    /// Target closer than this gets jumpscared
    pub jumpscare_distance: f32,
    pub jumpscare_policy: JumpscarePolicy,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            chase_range: 5.0,
            stopping_distance: 1.0,
            flashlight_range: 10.0,
            jumpscare_distance: 1.0,
            jumpscare_policy: JumpscarePolicy::Once,
        }
    }
}

/// Fixed, cyclic list of ground-plane waypoints (world x/z).
#[derive(Component, Clone, Debug, Default)]
pub struct PatrolRoute(pub Vec<Vec2>);

/// Collision group enemies live in, so the flashlight ray only sees them.
pub const ENEMY_GROUP: Group = Group::GROUP_2;

/// Project a world position onto the ground plane.
pub fn ground(position: Vec3) -> Vec2 {
    Vec2::new(position.x, position.z)
}
