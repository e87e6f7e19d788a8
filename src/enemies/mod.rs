//! Enemies module - stalker definitions, patrol/chase AI.

mod ai;
mod components;
pub mod data;
mod fsm;
mod plugin;

pub use ai::enemy_ai_tick;
pub use components::*;
pub use data::EnemyRegistry;
pub use fsm::{nearest_waypoint, AiMode, EnemyFsm, TickInput, TickOutcome, WAYPOINT_ARRIVAL_EPSILON};
pub use plugin::EnemyPlugin;
