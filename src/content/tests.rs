use bevy::prelude::*;
use std::path::Path;

use super::data::MovementConfigFile;
use super::loader::{load_movement_config, parse_movement_config};
use super::validation::{disabled_features, validate_movement_config};
use crate::movement::{GameLayer, MovementTuning};

const SHIPPED_CONFIG: &str = include_str!("../../assets/data/movement.ron");

const PROBES: &str = r#"
    probes: (
        ground: (anchor: (0.0, -0.82), size: (0.5, 0.05), layer: Ground),
        wall: (anchor: (0.45, 0.0), size: (0.1, 1.2), layer: Wall),
    ),
"#;

fn parse(contents: &str) -> MovementConfigFile {
    parse_movement_config(contents, "test.ron").unwrap()
}

fn error_fields(contents: &str) -> Vec<String> {
    validate_movement_config(&parse(contents))
        .unwrap_err()
        .into_iter()
        .map(|e| e.field)
        .collect()
}

#[test]
fn test_shipped_config_is_valid() {
    let (tuning, probes) = validate_movement_config(&parse(SHIPPED_CONFIG)).unwrap();

    assert_eq!(tuning.move_speed, 8.0);
    assert_eq!(tuning.wall_jump_power, Vec2::new(8.0, 10.0));
    assert_eq!(tuning.max_jumps, 1);
    assert_eq!(probes.ground.half_extents, Vec2::new(0.25, 0.025));
    assert_eq!(probes.ground.layer, GameLayer::Ground);
    assert_eq!(probes.wall.anchor, Vec2::new(0.45, 0.0));
    assert_eq!(probes.wall.layer, GameLayer::Wall);
}

#[test]
fn test_omitted_tuning_uses_defaults() {
    let contents = format!("(schema_version: 1, tuning: (move_speed: 5.0), {PROBES})");
    let (tuning, _) = validate_movement_config(&parse(&contents)).unwrap();

    let defaults = MovementTuning::default();
    assert_eq!(tuning.move_speed, 5.0);
    assert_eq!(tuning.jump_power, defaults.jump_power);
    assert_eq!(tuning.dash_cooldown, defaults.dash_cooldown);
}

#[test]
fn test_missing_probe_is_reported() {
    let contents = r#"(
        schema_version: 1,
        probes: (
            ground: (anchor: (0.0, -0.82), size: (0.5, 0.05), layer: Ground),
        ),
    )"#;

    assert_eq!(error_fields(contents), vec!["probes.wall".to_string()]);
}

#[test]
fn test_unset_anchor_and_layer_are_reported() {
    let contents = r#"(
        schema_version: 1,
        probes: (
            ground: (size: (0.5, 0.05), layer: Ground),
            wall: (anchor: (0.45, 0.0), size: (0.1, 1.2)),
        ),
    )"#;

    let fields = error_fields(contents);
    assert!(fields.contains(&"probes.ground.anchor".to_string()));
    assert!(fields.contains(&"probes.wall.layer".to_string()));
    assert_eq!(fields.len(), 2);
}

#[test]
fn test_non_positive_probe_size_is_reported() {
    let contents = r#"(
        schema_version: 1,
        probes: (
            ground: (anchor: (0.0, -0.82), size: (0.0, 0.05), layer: Ground),
            wall: (anchor: (0.45, 0.0), size: (0.1, 1.2), layer: Wall),
        ),
    )"#;

    assert_eq!(error_fields(contents), vec!["probes.ground.size".to_string()]);
}

#[test]
fn test_unsupported_schema_version() {
    let contents = format!("(schema_version: 2, {PROBES})");

    assert_eq!(error_fields(&contents), vec!["schema_version".to_string()]);
}

#[test]
fn test_non_finite_tuning_is_reported() {
    let mut file = parse(SHIPPED_CONFIG);
    file.tuning.dash_speed = f32::NAN;
    file.tuning.wall_jump_power = (f32::INFINITY, 10.0);

    let errors = validate_movement_config(&file).unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();

    assert_eq!(fields, vec!["tuning.dash_speed", "tuning.wall_jump_power"]);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_movement_config("(schema_version: )", "broken.ron").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_movement_config(Path::new("does/not/exist.ron")).unwrap_err();

    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_disabled_features() {
    assert!(disabled_features(&MovementTuning::default()).is_empty());

    let tuning = MovementTuning {
        coyote_time: 0.0,
        dash_duration: -1.0,
        ..MovementTuning::default()
    };
    let disabled = disabled_features(&tuning);

    assert_eq!(disabled.len(), 2);
    assert!(disabled[0].starts_with("wall jump"));
    assert!(disabled[1].starts_with("dash"));
}

#[test]
fn test_negative_rates_are_reported() {
    let mut file = parse(SHIPPED_CONFIG);
    file.tuning.wall_slide_acceleration = -35.0;
    file.tuning.max_fall_speed = -12.0;
    file.tuning.dash_speed = -20.0;

    let errors = validate_movement_config(&file).unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();

    assert_eq!(
        fields,
        vec![
            "tuning.wall_slide_acceleration",
            "tuning.dash_speed",
            "tuning.max_fall_speed",
        ]
    );
}

#[test]
fn test_zero_max_fall_speed_is_reported() {
    let mut file = parse(SHIPPED_CONFIG);
    file.tuning.max_fall_speed = 0.0;

    let errors = validate_movement_config(&file).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "tuning.max_fall_speed");
}
