//! FX domain: particle and trail systems.

use bevy::color::Alpha;
use bevy::prelude::*;
use rand::Rng;

use crate::fx::{DashTrail, FxParticle, PendingPuffs, PuffRequest};
use crate::movement::{MovementController, MovementFx, MovementFxEvent};

const DUST_COLOR: Color = Color::srgba(0.75, 0.7, 0.6, 0.8);
const JUMP_COLOR: Color = Color::srgba(0.95, 0.95, 1.0, 0.7);
const TRAIL_COLOR: Color = Color::srgba(0.6, 0.8, 1.0, 0.35);
const PUFF_LIFETIME: f32 = 0.35;
const TRAIL_LIFETIME: f32 = 0.15;

pub(crate) fn handle_movement_fx(
    mut fx_events: MessageReader<MovementFxEvent>,
    mut pending: ResMut<PendingPuffs>,
    mut query: Query<(&Transform, &MovementController, Option<&mut DashTrail>)>,
) {
    for event in fx_events.read() {
        let Ok((transform, controller, trail)) = query.get_mut(event.entity) else {
            continue;
        };
        let feet = controller
            .probes()
            .ground
            .center(transform.translation.truncate(), controller.facing());

        match event.fx {
            MovementFx::Dust => pending.0.push(PuffRequest {
                origin: feet,
                color: DUST_COLOR,
                count: 6,
            }),
            MovementFx::Jump => pending.0.push(PuffRequest {
                origin: feet,
                color: JUMP_COLOR,
                count: 4,
            }),
            MovementFx::Trail(emitting) => {
                if let Some(mut trail) = trail {
                    trail.emitting = emitting;
                }
            }
            MovementFx::HorizontalSpeed(_) => {}
        }
    }
}

pub(crate) fn spawn_dust_particles(mut commands: Commands, mut pending: ResMut<PendingPuffs>) {
    if pending.0.is_empty() {
        return;
    }

    let mut rng = rand::rng();
    for puff in pending.0.drain(..) {
        for _ in 0..puff.count {
            let velocity = Vec2::new(rng.random_range(-1.5..1.5), rng.random_range(0.2..1.2));
            commands.spawn((
                FxParticle::new(PUFF_LIFETIME, velocity, puff.color),
                Sprite {
                    color: puff.color,
                    custom_size: Some(Vec2::splat(0.15)),
                    ..default()
                },
                Transform::from_translation(puff.origin.extend(2.0)),
            ));
        }
    }
}

pub(crate) fn emit_trail_afterimages(
    mut commands: Commands,
    query: Query<(&Transform, &Sprite, &DashTrail)>,
) {
    for (transform, sprite, trail) in &query {
        if !trail.emitting {
            continue;
        }

        commands.spawn((
            FxParticle::new(TRAIL_LIFETIME, Vec2::ZERO, TRAIL_COLOR),
            Sprite {
                color: TRAIL_COLOR,
                custom_size: sprite.custom_size,
                flip_x: sprite.flip_x,
                ..default()
            },
            Transform::from_translation(transform.translation.truncate().extend(0.9)),
        ));
    }
}

pub(crate) fn fade_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut FxParticle, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut particle, mut transform, mut sprite) in &mut query {
        particle.remaining -= dt;
        if particle.remaining <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }

        transform.translation += (particle.velocity * dt).extend(0.0);
        let alpha = particle.base_alpha * particle.fraction_left();
        sprite.color.set_alpha(alpha);
    }
}
