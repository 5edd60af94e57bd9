//! FX domain: cosmetic responses to movement commands.
//!
//! Nothing here feeds back into movement.

mod systems;
#[cfg(test)]
mod tests;

use bevy::color::Alpha;
use bevy::prelude::*;

use crate::fx::systems::{
    emit_trail_afterimages, fade_particles, handle_movement_fx, spawn_dust_particles,
};
use crate::movement::MovementSet;

/// Dash trail emitter on the player.
#[derive(Component, Debug, Default)]
pub struct DashTrail {
    pub emitting: bool,
}

/// A short-lived cosmetic sprite that fades out and despawns.
#[derive(Component, Debug)]
pub struct FxParticle {
    pub lifetime: f32,
    pub remaining: f32,
    pub velocity: Vec2,
    /// Alpha at spawn; fades linearly to zero
    pub base_alpha: f32,
}

impl FxParticle {
    pub fn new(lifetime: f32, velocity: Vec2, color: Color) -> Self {
        Self {
            lifetime,
            remaining: lifetime,
            velocity,
            base_alpha: color.alpha(),
        }
    }

    /// 1.0 when fresh, 0.0 when expired.
    pub fn fraction_left(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        (self.remaining / self.lifetime).clamp(0.0, 1.0)
    }
}

/// Puff request produced from a movement command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PuffRequest {
    pub origin: Vec2,
    pub color: Color,
    pub count: u32,
}

#[derive(Resource, Debug, Default)]
pub(crate) struct PendingPuffs(pub Vec<PuffRequest>);

pub struct FxPlugin;

impl Plugin for FxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingPuffs>().add_systems(
            Update,
            (
                handle_movement_fx,
                spawn_dust_particles,
                emit_trail_afterimages,
                fade_particles,
            )
                .chain()
                .after(MovementSet),
        );
    }
}
