//! First-person player movement and camera control.

use bevy::input::mouse::MouseMotion;
use bevy::pbr::FogFalloff;
use bevy::render::camera::ClearColorConfig;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use bevy_rapier3d::prelude::*;

use bevy::prelude::*;

use super::components::*;

/// Marker component for the player's camera.
#[derive(Component, Default)]
pub struct PlayerCamera {
    /// Current pitch angle in radians (looking up/down)
    pub pitch: f32,
}

/// Grab and hide cursor when entering gameplay.
pub fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when leaving gameplay.
pub fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Handle mouse movement for looking around.
///
/// Rotates the player entity horizontally (yaw) and the camera vertically (pitch).
/// The camera, and the flashlight on it, are children of the player.
pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    config: Res<PlayerConfig>,
    mut player_query: Query<&mut Transform, (With<Player>, Without<Captured>)>,
    mut camera_query: Query<(&mut Transform, &mut PlayerCamera), Without<Player>>,
) {
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }

    if delta == Vec2::ZERO {
        return;
    }

    let Ok(mut player_transform) = player_query.get_single_mut() else {
        return;
    };
    let Ok((mut camera_transform, mut camera)) = camera_query.get_single_mut() else {
        return;
    };

    let sensitivity = config.mouse_sensitivity * 0.001;
    let y_invert = if config.invert_y { -1.0 } else { 1.0 };

    player_transform.rotate_y(-delta.x * sensitivity);

    // Clamped to prevent flipping
    camera.pitch -= delta.y * sensitivity * y_invert;
    camera.pitch = camera.pitch.clamp(-1.4, 1.4);

    camera_transform.rotation = Quat::from_rotation_x(camera.pitch);
}

/// Handle WASD movement.
///
/// Uses Rapier's KinematicCharacterController for collision detection.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    rapier_context: Query<&RapierContext>,
    mut player_query: Query<
        (Entity, &Transform, &mut MovementState, &mut KinematicCharacterController),
        (With<Player>, Without<Captured>),
    >,
) {
    let Ok((player_entity, transform, mut movement_state, mut controller)) =
        player_query.get_single_mut()
    else {
        return;
    };

    // Player capsule is capsule_y(0.5, 0.3), so bottom is 0.8 units below center
    let is_grounded = if let Ok(context) = rapier_context.get_single() {
        context
            .cast_ray(
                transform.translation - Vec3::Y * 0.75,
                Vec3::NEG_Y,
                0.15,
                true,
                QueryFilter::default().exclude_collider(player_entity),
            )
            .is_some()
    } else {
        true
    };

    if is_grounded {
        movement_state.vertical_velocity = movement_state.vertical_velocity.max(0.0);
    } else {
        movement_state.vertical_velocity -= config.gravity * time.delta_secs();
    }

    let mut direction = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }

    // Normalize to prevent faster diagonal movement
    if direction != Vec3::ZERO {
        direction = direction.normalize();
    }

    // Rotate direction to face where player is looking (only horizontal)
    let yaw = transform.rotation.to_euler(EulerRot::YXZ).0;
    let movement = Quat::from_rotation_y(yaw) * direction;

    let speed = if keyboard.pressed(KeyCode::ShiftLeft) {
        config.move_speed * config.sprint_multiplier
    } else {
        config.move_speed
    };

    let horizontal = movement * speed * time.delta_secs();
    let vertical = Vec3::new(0.0, movement_state.vertical_velocity * time.delta_secs(), 0.0);

    controller.translation = Some(horizontal + vertical);
}

/// Spawn the player entity with camera and flashlight.
pub fn spawn_player(commands: &mut Commands, position: Vec3) -> Entity {
    let player = commands
        .spawn((
            Player,
            MovementState::default(),
            Transform::from_translation(position),
            Visibility::default(),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.3),
            CollisionGroups::new(PLAYER_GROUP, Group::ALL),
            ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                snap_to_ground: Some(CharacterLength::Absolute(0.5)),
                ..default()
            },
        ))
        .id();

    commands.entity(player).with_children(|parent| {
        parent
            .spawn((
                Camera3d::default(),
                Camera {
                    clear_color: ClearColorConfig::Custom(Color::srgb(0.01, 0.01, 0.02)),
                    ..default()
                },
                DistanceFog {
                    color: Color::srgb(0.02, 0.02, 0.03),
                    falloff: FogFalloff::ExponentialSquared { density: 0.08 },
                    ..default()
                },
                PlayerCamera::default(),
                // Eye level relative to the capsule center
                Transform::from_xyz(0.0, 0.4, 0.0),
            ))
            .with_children(|camera| {
                camera.spawn((
                    Flashlight::default(),
                    SpotLight {
                        color: Color::srgb(1.0, 0.95, 0.8),
                        intensity: 400_000.0,
                        range: Flashlight::default().range,
                        outer_angle: 0.45,
                        inner_angle: 0.3,
                        shadows_enabled: true,
                        ..default()
                    },
                    Transform::from_xyz(0.2, -0.15, 0.0),
                ));
            });
    });

    player
}
