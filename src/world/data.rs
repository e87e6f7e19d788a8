//! Level data structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;

fn default_light_color() -> (f32, f32, f32) {
    (1.0, 0.85, 0.6)
}

fn default_light_range() -> f32 {
    12.0
}

fn default_floor_size() -> f32 {
    40.0
}

/// A point light placed in the level.
#[derive(Debug, Clone, Deserialize)]
pub struct LightDef {
    pub position: (f32, f32, f32),
    pub intensity: f32,
    #[serde(default = "default_light_color")]
    pub color: (f32, f32, f32),
    #[serde(default = "default_light_range")]
    pub range: f32,
    #[serde(default)]
    pub shadows: bool,
}

/// One enemy placed in the level.
#[derive(Debug, Clone, Deserialize)]
pub struct EnemySpawn {
    /// Enemy type (file stem in assets/data/enemies)
    pub kind: String,
    /// Patrol route on the ground plane (x, z)
    #[serde(default)]
    pub waypoints: Vec<(f32, f32)>,
    /// Where to stand when there is no route
    #[serde(default)]
    pub position: Option<(f32, f32)>,
}

impl EnemySpawn {
    pub fn route(&self) -> Vec<Vec2> {
        self.waypoints.iter().map(|&(x, z)| Vec2::new(x, z)).collect()
    }
}

/// A trigger volume that opens a link and loads another level.
#[derive(Debug, Clone, Deserialize)]
pub struct RedirectDef {
    pub position: (f32, f32, f32),
    pub half_extents: (f32, f32, f32),
    pub url: String,
    #[serde(default)]
    pub next_level: Option<String>,
}

/// Level definition loaded from RON file.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub player_start: (f32, f32, f32),
    #[serde(default = "default_floor_size")]
    pub floor_size: f32,
    #[serde(default)]
    pub lights: Vec<LightDef>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
    #[serde(default)]
    pub redirects: Vec<RedirectDef>,
}

impl LevelDefinition {
    pub fn player_start(&self) -> Vec3 {
        Vec3::new(self.player_start.0, self.player_start.1, self.player_start.2)
    }

    /// Built-in level used when no level files are present.
    pub fn fallback() -> Self {
        Self {
            name: "crypt".to_string(),
            player_start: (0.0, 1.0, 8.0),
            floor_size: default_floor_size(),
            lights: vec![LightDef {
                position: (0.0, 4.0, 0.0),
                intensity: 60_000.0,
                color: default_light_color(),
                range: default_light_range(),
                shadows: true,
            }],
            enemies: vec![EnemySpawn {
                kind: "stalker".to_string(),
                waypoints: vec![(-6.0, -6.0), (6.0, -6.0), (6.0, 2.0), (-6.0, 2.0)],
                position: None,
            }],
            redirects: Vec::new(),
        }
    }
}

/// Resource holding all loaded levels by name.
#[derive(Resource, Default)]
pub struct LevelRegistry {
    pub levels: HashMap<String, LevelDefinition>,
}

impl LevelRegistry {
    /// Get a level by name.
    pub fn get(&self, name: &str) -> Option<&LevelDefinition> {
        self.levels.get(name)
    }
}

/// Name of the level currently loaded (or about to be).
#[derive(Resource, Debug)]
pub struct CurrentLevel {
    pub name: String,
}

impl Default for CurrentLevel {
    fn default() -> Self {
        Self {
            name: "crypt".to_string(),
        }
    }
}

/// Parse one level definition.
pub fn parse_level_definition(path: &str, contents: &str) -> Result<LevelDefinition, DataLoadError> {
    ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
        path: path.to_string(),
        details: e.to_string(),
    })
}

fn read_level_definition(path: &Path) -> Result<LevelDefinition, DataLoadError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;
    parse_level_definition(&display, &contents)
}

/// Load all level definitions from assets/data/levels/.
///
/// Levels are keyed by their `name` field, not the file name.
pub fn load_level_definitions(mut registry: ResMut<LevelRegistry>) {
    let fallback = LevelDefinition::fallback();
    registry.levels.insert(fallback.name.clone(), fallback);

    let levels_dir = Path::new("assets/data/levels");

    if !levels_dir.exists() {
        warn!("Level directory not found: {:?}", levels_dir);
        return;
    }

    let Ok(entries) = fs::read_dir(levels_dir) else {
        warn!("Failed to read level directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "ron") {
            match read_level_definition(&path) {
                Ok(level) => {
                    info!(
                        "Loaded level '{}': {} enemies, {} redirects",
                        level.name,
                        level.enemies.len(),
                        level.redirects.len()
                    );
                    registry.levels.insert(level.name.clone(), level);
                }
                Err(e) => error!("{}", e),
            }
        }
    }
}
