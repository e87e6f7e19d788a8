//! Enemy data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::components::EnemyStats;
use crate::world::DataLoadError;

/// Collider configuration for an enemy type.
#[derive(Deserialize, Clone, Debug)]
pub struct ColliderConfig {
    pub half_height: f32,
    pub radius: f32,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            half_height: 0.6,
            radius: 0.35,
        }
    }
}

fn default_scale() -> f32 {
    1.0
}

fn default_color() -> (f32, f32, f32) {
    (0.05, 0.05, 0.05)
}

/// Enemy definition loaded from RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemyDefinition {
    pub name: String,
    #[serde(default)]
    pub stats: EnemyStats,
    #[serde(default)]
    pub collider: Option<ColliderConfig>,
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Body color (placeholder mesh)
    #[serde(default = "default_color")]
    pub color: (f32, f32, f32),
}

impl Default for EnemyDefinition {
    fn default() -> Self {
        Self {
            name: "Stalker".to_string(),
            stats: EnemyStats::default(),
            collider: None,
            scale: default_scale(),
            color: default_color(),
        }
    }
}

/// Resource holding all loaded enemy definitions.
#[derive(Resource, Default)]
pub struct EnemyRegistry {
    pub definitions: HashMap<String, EnemyDefinition>,
}

impl EnemyRegistry {
    /// Get an enemy definition by type name.
    pub fn get(&self, enemy_type: &str) -> Option<&EnemyDefinition> {
        self.definitions.get(enemy_type)
    }
}

/// Parse and validate one enemy definition.
pub fn parse_enemy_definition(path: &str, contents: &str) -> Result<EnemyDefinition, DataLoadError> {
    let definition: EnemyDefinition =
        ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;

    validate_stats(path, &definition.stats)?;
    Ok(definition)
}

fn validate_stats(path: &str, stats: &EnemyStats) -> Result<(), DataLoadError> {
    let fields = [
        ("move_speed", stats.move_speed),
        ("chase_range", stats.chase_range),
        ("stopping_distance", stats.stopping_distance),
        ("flashlight_range", stats.flashlight_range),
        ("jumpscare_distance", stats.jumpscare_distance),
    ];

    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(DataLoadError::InvalidStat {
                path: path.to_string(),
                field,
                value,
            });
        }
    }

    if stats.stopping_distance > stats.chase_range {
        return Err(DataLoadError::StoppingBeyondChase {
            path: path.to_string(),
            stopping_distance: stats.stopping_distance,
            chase_range: stats.chase_range,
        });
    }

    Ok(())
}

/// Read one definition file from disk.
fn read_enemy_definition(path: &Path) -> Result<EnemyDefinition, DataLoadError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;
    parse_enemy_definition(&display, &contents)
}

/// Load all enemy definitions from the assets/data/enemies/ directory.
///
/// A built-in "stalker" is always registered so levels still work when the
/// directory is missing; a file of the same name replaces it.
pub fn load_enemy_definitions(mut registry: ResMut<EnemyRegistry>) {
    registry
        .definitions
        .insert("stalker".to_string(), EnemyDefinition::default());

    let enemies_dir = Path::new("assets/data/enemies");

    if !enemies_dir.exists() {
        warn!("Enemy definitions directory not found: {:?}", enemies_dir);
        return;
    }

    let Ok(entries) = fs::read_dir(enemies_dir) else {
        warn!("Failed to read enemy definitions directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "ron") {
            let enemy_type = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            match read_enemy_definition(&path) {
                Ok(definition) => {
                    info!("Loaded enemy definition: {} ({})", definition.name, enemy_type);
                    registry.definitions.insert(enemy_type, definition);
                }
                Err(e) => error!("{}", e),
            }
        }
    }

    info!("Loaded {} enemy definitions", registry.definitions.len());
}
