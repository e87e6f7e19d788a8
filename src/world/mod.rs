//! World module - levels, spawning, and redirect triggers.

mod data;
mod error;
mod plugin;
mod redirect;
mod spawning;

pub use data::{CurrentLevel, EnemySpawn, LevelDefinition, LevelRegistry, RedirectDef};
pub use error::DataLoadError;
pub use plugin::{cleanup_level, setup_level, WorldPlugin};
pub use redirect::{OpenedLinks, SceneRedirect};
pub use spawning::{LevelEntity, LEVEL_GROUP};
