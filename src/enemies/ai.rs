//! Enemy AI behavior systems.

use bevy::prelude::*;

use super::components::{ground, Enemy, EnemyStats, EnemyType, PatrolRoute};
use super::fsm::{EnemyFsm, TickInput};
use crate::core::{FlashlightHitEvent, JumpscareEvent};
use crate::player::{Captured, Player};

/// Run one state machine tick for every enemy.
///
/// Gathers the player position (absent once the player is captured) and
/// this frame's flashlight hits, feeds them to each enemy's [`EnemyFsm`],
/// then writes the new ground position back to the transform.
pub fn enemy_ai_tick(
    time: Res<Time>,
    mut flashlight_hits: EventReader<FlashlightHitEvent>,
    mut jumpscares: EventWriter<JumpscareEvent>,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<Captured>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            Entity,
            &EnemyType,
            &mut Transform,
            &EnemyStats,
            &PatrolRoute,
            &mut EnemyFsm,
        ),
        (With<Enemy>, Without<Player>),
    >,
) {
    let exposed: Vec<Entity> = flashlight_hits.read().map(|hit| hit.enemy).collect();

    let player = player_query.get_single().ok();
    let target = player.map(|(_, transform)| ground(transform.translation));

    for (entity, kind, mut transform, stats, route, mut fsm) in enemy_query.iter_mut() {
        let previous_mode = fsm.mode();
        let position = ground(transform.translation);

        let outcome = fsm.tick(
            position,
            &route.0,
            stats,
            &TickInput {
                target,
                delta: time.delta_secs(),
                exposed: exposed.contains(&entity),
            },
        );

        if fsm.mode() != previous_mode {
            debug!(
                "{} {:?}: {:?} -> {:?}",
                kind.0,
                entity,
                previous_mode,
                fsm.mode()
            );
        }
        if outcome.returned_to_path {
            debug!(
                "{} {:?} driven off by flashlight, resuming at waypoint {}",
                kind.0,
                entity,
                fsm.waypoint_index()
            );
        }

        transform.translation.x = outcome.position.x;
        transform.translation.z = outcome.position.y;

        // Face the direction of travel (horizontal only)
        let travel = outcome.position - position;
        if travel.length_squared() > f32::EPSILON {
            transform.look_to(Vec3::new(travel.x, 0.0, travel.y), Vec3::Y);
        }

        if outcome.jumpscare {
            if let Some((player_entity, _)) = player {
                jumpscares.send(JumpscareEvent {
                    enemy: entity,
                    target: player_entity,
                });
            }
        }
    }
}
