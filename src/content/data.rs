//! Serialized shape of `assets/data/movement.ron`.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementConfigFile {
    pub schema_version: u32,
    #[serde(default)]
    pub tuning: MovementTuningDef,
    #[serde(default)]
    pub probes: ProbesDef,
}

/// Every field is optional in the file; omitted fields keep the built-in value.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuningDef {
    pub move_speed: f32,
    pub jump_power: f32,
    pub double_jump_factor: f32,
    pub jump_release_damping: f32,
    pub max_jumps: u32,
    pub wall_jump_power: (f32, f32),
    pub wall_jump_duration: f32,
    pub wall_jump_lockout_buffer: f32,
    pub coyote_time: f32,
    pub wall_slide_acceleration: f32,
    pub base_gravity: f32,
    pub fall_speed_multiplier: f32,
    pub max_fall_speed: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
}

impl Default for MovementTuningDef {
    fn default() -> Self {
        let tuning = MovementTuning::default();
        Self {
            move_speed: tuning.move_speed,
            jump_power: tuning.jump_power,
            double_jump_factor: tuning.double_jump_factor,
            jump_release_damping: tuning.jump_release_damping,
            max_jumps: tuning.max_jumps,
            wall_jump_power: (tuning.wall_jump_power.x, tuning.wall_jump_power.y),
            wall_jump_duration: tuning.wall_jump_duration,
            wall_jump_lockout_buffer: tuning.wall_jump_lockout_buffer,
            coyote_time: tuning.coyote_time,
            wall_slide_acceleration: tuning.wall_slide_acceleration,
            base_gravity: tuning.base_gravity,
            fall_speed_multiplier: tuning.fall_speed_multiplier,
            max_fall_speed: tuning.max_fall_speed,
            dash_speed: tuning.dash_speed,
            dash_duration: tuning.dash_duration,
            dash_cooldown: tuning.dash_cooldown,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProbesDef {
    #[serde(default)]
    pub ground: Option<ProbeDef>,
    #[serde(default)]
    pub wall: Option<ProbeDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeDef {
    /// Offset from the player origin while facing right
    #[serde(default)]
    pub anchor: Option<(f32, f32)>,
    /// Full width and height of the probe box
    pub size: (f32, f32),
    #[serde(default)]
    pub layer: Option<ProbeLayer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ProbeLayer {
    Ground,
    Wall,
}
