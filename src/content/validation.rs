//! Validation of the movement config into controller-ready values.

use bevy::prelude::*;

use super::data::{MovementConfigFile, MovementTuningDef, ProbeDef, ProbeLayer};
use crate::movement::{GameLayer, MovementTuning, ProbeBox, SensorProbes};

pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

/// A validation error with the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

/// Helper macro for checking a tunable is a finite number
macro_rules! check_finite {
    ($errors:expr, $def:expr, $($field:ident),+ $(,)?) => {
        $(
            if !$def.$field.is_finite() {
                $errors.push(ConfigError {
                    field: format!("tuning.{}", stringify!($field)),
                    message: format!("must be finite, got {}", $def.$field),
                });
            }
        )+
    };
}

/// Rates that only make sense pointing one way. NaN is left to `check_finite!`.
macro_rules! check_non_negative {
    ($errors:expr, $def:expr, $($field:ident),+ $(,)?) => {
        $(
            if $def.$field < 0.0 {
                $errors.push(ConfigError {
                    field: format!("tuning.{}", stringify!($field)),
                    message: format!("must not be negative, got {}", $def.$field),
                });
            }
        )+
    };
}

impl From<ProbeLayer> for GameLayer {
    fn from(layer: ProbeLayer) -> Self {
        match layer {
            ProbeLayer::Ground => GameLayer::Ground,
            ProbeLayer::Wall => GameLayer::Wall,
        }
    }
}

fn validate_tuning(def: &MovementTuningDef, errors: &mut Vec<ConfigError>) -> MovementTuning {
    check_finite!(
        errors,
        def,
        move_speed,
        jump_power,
        double_jump_factor,
        jump_release_damping,
        wall_jump_duration,
        wall_jump_lockout_buffer,
        coyote_time,
        wall_slide_acceleration,
        base_gravity,
        fall_speed_multiplier,
        max_fall_speed,
        dash_speed,
        dash_duration,
        dash_cooldown,
    );

    check_non_negative!(
        errors,
        def,
        move_speed,
        jump_power,
        wall_slide_acceleration,
        base_gravity,
        fall_speed_multiplier,
        dash_speed,
    );

    // A zero or negative terminal speed inverts the fall clamp
    if def.max_fall_speed <= 0.0 {
        errors.push(ConfigError {
            field: "tuning.max_fall_speed".to_string(),
            message: format!("must be positive, got {}", def.max_fall_speed),
        });
    }

    let (power_x, power_y) = def.wall_jump_power;
    if !power_x.is_finite() || !power_y.is_finite() {
        errors.push(ConfigError {
            field: "tuning.wall_jump_power".to_string(),
            message: format!("must be finite, got ({}, {})", power_x, power_y),
        });
    }

    MovementTuning {
        move_speed: def.move_speed,
        jump_power: def.jump_power,
        double_jump_factor: def.double_jump_factor,
        jump_release_damping: def.jump_release_damping,
        max_jumps: def.max_jumps,
        wall_jump_power: Vec2::new(power_x, power_y),
        wall_jump_duration: def.wall_jump_duration,
        wall_jump_lockout_buffer: def.wall_jump_lockout_buffer,
        coyote_time: def.coyote_time,
        wall_slide_acceleration: def.wall_slide_acceleration,
        base_gravity: def.base_gravity,
        fall_speed_multiplier: def.fall_speed_multiplier,
        max_fall_speed: def.max_fall_speed,
        dash_speed: def.dash_speed,
        dash_duration: def.dash_duration,
        dash_cooldown: def.dash_cooldown,
    }
}

fn validate_probe(
    name: &str,
    def: Option<&ProbeDef>,
    errors: &mut Vec<ConfigError>,
) -> Option<ProbeBox> {
    let Some(def) = def else {
        errors.push(ConfigError {
            field: format!("probes.{}", name),
            message: "is missing".to_string(),
        });
        return None;
    };

    let error_count = errors.len();

    let anchor = match def.anchor {
        Some((x, y)) if x.is_finite() && y.is_finite() => Some(Vec2::new(x, y)),
        Some((x, y)) => {
            errors.push(ConfigError {
                field: format!("probes.{}.anchor", name),
                message: format!("must be finite, got ({}, {})", x, y),
            });
            None
        }
        None => {
            errors.push(ConfigError {
                field: format!("probes.{}.anchor", name),
                message: "is not set".to_string(),
            });
            None
        }
    };

    let (width, height) = def.size;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        errors.push(ConfigError {
            field: format!("probes.{}.size", name),
            message: format!("must be positive, got ({}, {})", width, height),
        });
    }

    if def.layer.is_none() {
        errors.push(ConfigError {
            field: format!("probes.{}.layer", name),
            message: "is not set".to_string(),
        });
    }

    if errors.len() > error_count {
        return None;
    }

    Some(ProbeBox {
        anchor: anchor?,
        half_extents: Vec2::new(width, height) * 0.5,
        layer: def.layer?.into(),
    })
}

/// Convert a parsed config into tuning and probes.
/// Returns every error found, not just the first.
pub fn validate_movement_config(
    file: &MovementConfigFile,
) -> Result<(MovementTuning, SensorProbes), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if file.schema_version != SUPPORTED_SCHEMA_VERSION {
        errors.push(ConfigError {
            field: "schema_version".to_string(),
            message: format!(
                "unsupported version {}, expected {}",
                file.schema_version, SUPPORTED_SCHEMA_VERSION
            ),
        });
    }

    let tuning = validate_tuning(&file.tuning, &mut errors);
    let ground = validate_probe("ground", file.probes.ground.as_ref(), &mut errors);
    let wall = validate_probe("wall", file.probes.wall.as_ref(), &mut errors);

    match (ground, wall) {
        (Some(ground), Some(wall)) if errors.is_empty() => {
            Ok((tuning, SensorProbes { ground, wall }))
        }
        _ => Err(errors),
    }
}

/// Abilities switched off by non-positive durations. Not an error.
pub fn disabled_features(tuning: &MovementTuning) -> Vec<&'static str> {
    let mut disabled = Vec::new();
    if tuning.coyote_time <= 0.0 {
        disabled.push("wall jump (coyote_time <= 0)");
    }
    if tuning.dash_duration <= 0.0 {
        disabled.push("dash (dash_duration <= 0)");
    }
    if tuning.wall_jump_lockout() <= 0.0 {
        disabled.push("wall-jump lockout");
    }
    if tuning.dash_cooldown <= 0.0 {
        disabled.push("dash cooldown");
    }
    disabled
}
