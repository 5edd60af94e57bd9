//! Movement domain: tuning and spawn-time defaults.

use bevy::prelude::*;

use crate::movement::SensorProbes;

/// Tunables for one controller. Copied into each controller at spawn and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_power: f32,
    /// Multiplier applied to every jump that is not the first of an airborne sequence
    pub double_jump_factor: f32,
    /// Multiplier applied to vertical velocity when the jump button is released early
    pub jump_release_damping: f32,
    /// Jump charges before any unlock (1 = single jump)
    pub max_jumps: u32,
    pub wall_jump_power: Vec2,
    pub wall_jump_duration: f32,
    pub wall_jump_lockout_buffer: f32,
    /// Grace window after leaving a wall during which a jump still counts as a wall jump
    pub coyote_time: f32,
    pub wall_slide_acceleration: f32,
    pub base_gravity: f32,
    pub fall_speed_multiplier: f32,
    pub max_fall_speed: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            jump_power: 10.0,
            double_jump_factor: 0.85,
            jump_release_damping: 0.5,
            max_jumps: 1,
            wall_jump_power: Vec2::new(8.0, 10.0),
            wall_jump_duration: 0.1,
            wall_jump_lockout_buffer: 0.1,
            coyote_time: 0.25,
            wall_slide_acceleration: 35.0,
            base_gravity: 1.5,
            fall_speed_multiplier: 2.5,
            max_fall_speed: 12.0,
            dash_speed: 20.0,
            dash_duration: 0.2,
            dash_cooldown: 0.1,
        }
    }
}

impl MovementTuning {
    /// How long locomotion stays suppressed after a wall jump.
    pub fn wall_jump_lockout(&self) -> f32 {
        self.wall_jump_duration + self.wall_jump_lockout_buffer
    }

    /// Gravity scale while falling.
    pub fn fall_gravity(&self) -> f32 {
        self.base_gravity * self.fall_speed_multiplier
    }
}

/// Validated configuration used when spawning player controllers.
/// Only inserted when the movement config loaded cleanly.
#[derive(Resource, Debug, Clone)]
pub struct MovementDefaults {
    pub tuning: MovementTuning,
    pub probes: SensorProbes,
}
