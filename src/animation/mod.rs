//! Animation domain: player animation states driven by movement output.

mod state;
mod systems;
#[cfg(test)]
mod tests;

pub use state::{AnimationState, PlayerAnimator, Transition};

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::animation::systems::{apply_hurt, read_animator_params, update_animation_state};
use crate::movement::MovementSet;

/// The player took a hit.
#[derive(Debug, Clone, Copy)]
pub struct PlayerHurt {
    pub entity: Entity,
}

impl Message for PlayerHurt {}

/// Message fired when animation state changes.
#[derive(Debug, Clone, Copy)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerHurt>()
            .add_message::<AnimationStateChanged>()
            .add_systems(
                Update,
                (read_animator_params, apply_hurt, update_animation_state)
                    .chain()
                    .after(MovementSet),
            );
    }
}
