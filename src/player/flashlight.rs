//! Flashlight sensor - the player's only defense.
//!
//! Pressing the flashlight key casts a single ray along the light's forward
//! axis. The first enemy the ray touches within that enemy's own
//! `flashlight_range` is driven back onto its patrol route.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{Flashlight, PlayerConfig};
use crate::core::FlashlightHitEvent;
use crate::enemies::{Enemy, EnemyStats, ENEMY_GROUP};

/// Cast the flashlight ray on the key's press edge.
pub fn flashlight_sweep(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<PlayerConfig>,
    rapier_context: Query<&RapierContext>,
    flashlight_query: Query<(&GlobalTransform, &Flashlight)>,
    enemy_query: Query<&EnemyStats, With<Enemy>>,
    mut hits: EventWriter<FlashlightHitEvent>,
) {
    if !keyboard.just_pressed(config.flashlight_key) {
        return;
    }

    let Ok((light_transform, flashlight)) = flashlight_query.get_single() else {
        return;
    };
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    // Only colliders in the enemy group can stop the ray
    let filter = QueryFilter::default().groups(CollisionGroups::new(Group::ALL, ENEMY_GROUP));

    let Some((entity, distance)) = context.cast_ray(
        light_transform.translation(),
        *light_transform.forward(),
        flashlight.range,
        true,
        filter,
    ) else {
        return;
    };

    if let Some(enemy) = exposed_enemy(entity, distance, &enemy_query) {
        debug!("Flashlight hit {:?} at {:.2}", enemy, distance);
        hits.send(FlashlightHitEvent { enemy });
    }
}

/// The hit entity, if it is an enemy close enough to be affected.
fn exposed_enemy(
    entity: Entity,
    distance: f32,
    enemy_query: &Query<&EnemyStats, With<Enemy>>,
) -> Option<Entity> {
    let stats = enemy_query.get(entity).ok()?;
    (distance <= stats.flashlight_range).then_some(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn check(world: &mut World, entity: Entity, distance: f32) -> Option<Entity> {
        world
            .run_system_once(move |query: Query<&EnemyStats, With<Enemy>>| {
                exposed_enemy(entity, distance, &query)
            })
            .unwrap()
    }

    #[test]
    fn enemy_within_its_range_is_exposed() {
        let mut world = World::new();
        let enemy = world
            .spawn((
                Enemy,
                EnemyStats {
                    flashlight_range: 6.0,
                    ..default()
                },
            ))
            .id();

        assert_eq!(check(&mut world, enemy, 5.5), Some(enemy));
        assert_eq!(check(&mut world, enemy, 6.5), None);
    }

    #[test]
    fn non_enemy_is_never_exposed() {
        let mut world = World::new();
        let prop = world.spawn(EnemyStats::default()).id();

        assert_eq!(check(&mut world, prop, 1.0), None);
    }

    fn lit_enemies(app: &App) -> Vec<Entity> {
        app.world()
            .resource::<Events<FlashlightHitEvent>>()
            .iter_current_update_events()
            .map(|hit| hit.enemy)
            .collect()
    }

    fn spawn_target(app: &mut App, z: f32) -> Entity {
        app.world_mut()
            .spawn((
                Enemy,
                EnemyStats::default(),
                Collider::capsule_y(0.5, 0.3),
                CollisionGroups::new(ENEMY_GROUP, Group::ALL),
                Transform::from_xyz(0.0, 1.0, z),
            ))
            .id()
    }

    #[test]
    fn key_press_lights_nearest_enemy_through_walls_and_player() {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            bevy::transform::TransformPlugin,
            bevy::hierarchy::HierarchyPlugin,
            AssetPlugin::default(),
            bevy::scene::ScenePlugin,
        ))
        .init_asset::<Mesh>()
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
            std::time::Duration::from_millis(16),
        ))
        .init_resource::<PlayerConfig>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_event::<FlashlightHitEvent>()
        .add_systems(Update, flashlight_sweep);

        // Light at eye height looking down -Z, starting inside the player body
        app.world_mut()
            .spawn((Flashlight::default(), Transform::from_xyz(0.0, 1.0, 0.0)));
        app.world_mut().spawn((
            Collider::capsule_y(0.5, 0.3),
            CollisionGroups::new(crate::player::PLAYER_GROUP, Group::ALL),
            Transform::from_xyz(0.0, 1.0, 0.0),
        ));
        app.world_mut().spawn((
            Collider::cuboid(2.0, 2.0, 0.1),
            CollisionGroups::new(crate::world::LEVEL_GROUP, Group::ALL),
            Transform::from_xyz(0.0, 1.0, -2.0),
        ));
        let near = spawn_target(&mut app, -5.0);
        spawn_target(&mut app, -8.0);

        // Let rapier pick up the colliders
        for _ in 0..3 {
            app.update();
        }
        assert!(lit_enemies(&app).is_empty());

        let key = app.world().resource::<PlayerConfig>().flashlight_key;
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        app.update();
        assert_eq!(lit_enemies(&app), vec![near]);

        // Still held, no new press edge
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();
        assert!(lit_enemies(&app).is_empty());
    }
}
