//! Animation domain: systems feeding and advancing the animator.

use bevy::prelude::*;

use crate::animation::{AnimationStateChanged, PlayerAnimator, PlayerHurt, Transition};
use crate::movement::{MovementController, MovementFx, MovementFxEvent};

fn announce(
    changed_events: &mut MessageWriter<AnimationStateChanged>,
    entity: Entity,
    transition: Transition,
) {
    debug!(
        "Animation {:?}: {} -> {}",
        entity,
        transition.from.clip_name(),
        transition.to.clip_name()
    );
    changed_events.write(AnimationStateChanged {
        entity,
        from: transition.from,
        to: transition.to,
    });
}

pub(crate) fn read_animator_params(
    mut fx_events: MessageReader<MovementFxEvent>,
    mut query: Query<&mut PlayerAnimator>,
) {
    for event in fx_events.read() {
        let MovementFx::HorizontalSpeed(speed) = event.fx else {
            continue;
        };
        if let Ok(mut animator) = query.get_mut(event.entity) {
            animator.x_speed = speed;
        }
    }
}

pub(crate) fn apply_hurt(
    mut hurt_events: MessageReader<PlayerHurt>,
    mut query: Query<&mut PlayerAnimator>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    for event in hurt_events.read() {
        if let Ok(mut animator) = query.get_mut(event.entity) {
            let transition = animator.hurt();
            announce(&mut changed_events, event.entity, transition);
        }
    }
}

pub(crate) fn update_animation_state(
    time: Res<Time>,
    mut query: Query<(Entity, &MovementController, &mut PlayerAnimator)>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    let dt = time.delta_secs();

    for (entity, controller, mut animator) in &mut query {
        if let Some(transition) = animator.update(dt, controller.motion_owner()) {
            announce(&mut changed_events, entity, transition);
        }
    }
}
