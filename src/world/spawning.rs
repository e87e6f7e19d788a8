//! Entity spawning functions for level construction.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::data::{EnemySpawn, LevelDefinition, LightDef, RedirectDef};
use super::error::DataLoadError;
use super::redirect::SceneRedirect;
use crate::enemies::data::EnemyRegistry;
use crate::enemies::{Enemy, EnemyFsm, EnemyType, PatrolRoute, ENEMY_GROUP};

/// Marker for everything that belongs to the loaded level.
#[derive(Component)]
pub struct LevelEntity;

/// Collision group for static level geometry.
pub const LEVEL_GROUP: Group = Group::GROUP_1;

/// Spawn the floor slab.
pub fn spawn_floor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    size: f32,
) {
    let half = size / 2.0;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(size, size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.18, 0.16, 0.14),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::default(),
        RigidBody::Fixed,
        Collider::cuboid(half, 0.05, half),
        CollisionGroups::new(LEVEL_GROUP, Group::ALL),
        LevelEntity,
    ));
}

/// Spawn a point light.
pub fn spawn_light(commands: &mut Commands, light: &LightDef) {
    commands.spawn((
        PointLight {
            color: Color::srgb(light.color.0, light.color.1, light.color.2),
            intensity: light.intensity,
            range: light.range,
            shadows_enabled: light.shadows,
            ..default()
        },
        Transform::from_xyz(light.position.0, light.position.1, light.position.2),
        LevelEntity,
    ));
}

/// Spawn one enemy at the head of its patrol route.
pub fn spawn_enemy(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    level: &LevelDefinition,
    spawn: &EnemySpawn,
    enemy_registry: &EnemyRegistry,
) -> Result<Entity, DataLoadError> {
    let definition = enemy_registry
        .get(&spawn.kind)
        .ok_or_else(|| DataLoadError::UnknownEnemyType {
            level: level.name.clone(),
            enemy_type: spawn.kind.clone(),
        })?;

    let route = spawn.route();
    let ground = EnemyFsm::spawn_position(&route)
        .or_else(|| spawn.position.map(|(x, z)| Vec2::new(x, z)))
        .unwrap_or(Vec2::ZERO);

    let collider = definition.collider.clone().unwrap_or_default();
    let standing_height = (collider.half_height + collider.radius) * definition.scale;
    let (r, g, b) = definition.color;

    let entity = commands
        .spawn((
            Enemy,
            EnemyType(spawn.kind.clone()),
            definition.stats.clone(),
            PatrolRoute(route),
            EnemyFsm::new(),
            Mesh3d(meshes.add(Capsule3d::new(collider.radius, collider.half_height * 2.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(r, g, b),
                perceptual_roughness: 1.0,
                ..default()
            })),
            Transform::from_xyz(ground.x, standing_height, ground.y)
                .with_scale(Vec3::splat(definition.scale)),
            Collider::capsule_y(collider.half_height, collider.radius),
            CollisionGroups::new(ENEMY_GROUP, Group::ALL),
            RigidBody::KinematicPositionBased,
            LevelEntity,
        ))
        .id();

    info!(
        "Spawned {} at ({:.1}, {:.1}) with {} waypoints",
        definition.name,
        ground.x,
        ground.y,
        spawn.waypoints.len()
    );

    Ok(entity)
}

/// Spawn a redirect trigger volume.
pub fn spawn_redirect(commands: &mut Commands, redirect: &RedirectDef) {
    let (hx, hy, hz) = redirect.half_extents;
    commands.spawn((
        SceneRedirect {
            url: redirect.url.clone(),
            next_level: redirect.next_level.clone(),
        },
        Transform::from_xyz(redirect.position.0, redirect.position.1, redirect.position.2),
        Collider::cuboid(hx, hy, hz),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
        CollisionGroups::new(LEVEL_GROUP, Group::ALL),
        LevelEntity,
    ));
}
