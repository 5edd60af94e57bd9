//! Movement domain: player bootstrap from the loaded movement config.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::PlayerAnimator;
use crate::fx::DashTrail;
use crate::movement::{GameLayer, MovementController, MovementDefaults, Player};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.6);

/// Spawn the player once the movement config has been validated.
/// Without `MovementDefaults` the app is already shutting down, so nothing is spawned.
pub(crate) fn spawn_player(
    mut commands: Commands,
    defaults: Option<Res<MovementDefaults>>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let Some(defaults) = defaults else {
        warn!("Movement config unavailable, refusing to spawn player controller");
        return;
    };

    info!(
        "Spawning player: move_speed={}, jump_power={}, max_jumps={}, dash_speed={}",
        defaults.tuning.move_speed,
        defaults.tuning.jump_power,
        defaults.tuning.max_jumps,
        defaults.tuning.dash_speed
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementController::new(defaults.tuning.clone(), defaults.probes),
            PlayerAnimator::default(),
            DashTrail::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(defaults.tuning.base_gravity),
            // Zero friction so walls never hold the player in place
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Pickup],
            ),
        ),
    ));
}
