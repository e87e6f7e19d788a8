//! Player module - player entity, movement, flashlight and capture.

mod components;
mod flashlight;
mod lifecycle;
mod movement;
mod plugin;

pub use components::*;
pub use flashlight::flashlight_sweep;
pub use lifecycle::handle_jumpscare;
pub use movement::{spawn_player, PlayerCamera};
pub use plugin::PlayerPlugin;
