//! World plugin - level loading, spawning and redirects.

use bevy::prelude::*;

use super::data::{load_level_definitions, CurrentLevel, LevelRegistry};
use super::redirect::{apply_scene_redirect, detect_redirect_entry, OpenedLinks};
use super::spawning::{spawn_enemy, spawn_floor, spawn_light, spawn_redirect, LevelEntity};
use crate::core::GameState;
use crate::enemies::data::EnemyRegistry;
use crate::player::{spawn_player, Player};

/// World plugin - handles level loading and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelRegistry>()
            .init_resource::<CurrentLevel>()
            .init_resource::<OpenedLinks>()
            .add_systems(Startup, load_level_definitions)
            .add_systems(OnEnter(GameState::InGame), setup_level)
            // The level stays on screen through GameOver
            .add_systems(OnEnter(GameState::LevelTransition), cleanup_level)
            .add_systems(OnExit(GameState::GameOver), cleanup_level)
            .add_systems(
                Update,
                (detect_redirect_entry, apply_scene_redirect)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(Update, restart_level.run_if(in_state(GameState::GameOver)));
    }
}

/// Set up the current level from data.
pub fn setup_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    level_registry: Res<LevelRegistry>,
    current_level: Res<CurrentLevel>,
    enemy_registry: Res<EnemyRegistry>,
) {
    let Some(level) = level_registry.get(&current_level.name) else {
        error!("Level '{}' not found in registry!", current_level.name);
        return;
    };

    info!("Building level: {}", level.name);

    spawn_floor(&mut commands, &mut meshes, &mut materials, level.floor_size);

    for light in &level.lights {
        spawn_light(&mut commands, light);
    }

    for spawn in &level.enemies {
        if let Err(e) = spawn_enemy(
            &mut commands,
            &mut meshes,
            &mut materials,
            level,
            spawn,
            &enemy_registry,
        ) {
            warn!("{}", e);
        }
    }

    for redirect in &level.redirects {
        spawn_redirect(&mut commands, redirect);
    }

    spawn_player(&mut commands, level.player_start());
}

/// Key that restarts the current level after getting caught.
const RESTART_KEY: KeyCode = KeyCode::KeyR;

/// Despawn everything the current level spawned, player included.
pub fn cleanup_level(
    mut commands: Commands,
    level_query: Query<Entity, With<LevelEntity>>,
    player_query: Query<Entity, With<Player>>,
) {
    for entity in level_query.iter().chain(player_query.iter()) {
        commands.entity(entity).despawn_recursive();
    }
}

/// Start the current level over.
fn restart_level(keyboard: Res<ButtonInput<KeyCode>>, mut next_state: ResMut<NextState<GameState>>) {
    if keyboard.just_pressed(RESTART_KEY) {
        info!("Restarting level");
        next_state.set(GameState::InGame);
    }
}
