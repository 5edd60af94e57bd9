//! Debug domain: hotkeys and gizmo overlay.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::animation::PlayerHurt;
use crate::debug::DebugState;
use crate::movement::{MovementController, Player};
use crate::pickups::DoubleJumpCollected;

const GROUND_PROBE_COLOR: Color = Color::WHITE;
const WALL_PROBE_COLOR: Color = Color::srgb(0.2, 0.4, 1.0);

/// Toggle the probe overlay with F1
pub(crate) fn toggle_probe_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_probes = !debug_state.show_probes;
        info!("[DEBUG] Probe overlay: {}", debug_state.show_probes);
    }
}

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    player_query: Query<Entity, With<Player>>,
    mut hurt_events: MessageWriter<PlayerHurt>,
    mut unlock_events: MessageWriter<DoubleJumpCollected>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+H: Hurt every player
    if keyboard.just_pressed(KeyCode::KeyH) {
        for entity in &player_query {
            hurt_events.write(PlayerHurt { entity });
        }
        info!("[DEBUG] Player hurt");
    }

    // Ctrl+U: Unlock double jump without the pickup
    if keyboard.just_pressed(KeyCode::KeyU) {
        unlock_events.write(DoubleJumpCollected { step: 1 });
        info!("[DEBUG] Double jump unlocked");
    }
}

/// Draw the ground and wall probes as wire boxes. Purely observational.
pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &MovementController), With<Player>>,
) {
    for (transform, controller) in &query {
        let origin = transform.translation.truncate();
        let probes = controller.probes();

        for (probe, color) in [
            (probes.ground, GROUND_PROBE_COLOR),
            (probes.wall, WALL_PROBE_COLOR),
        ] {
            let center = probe.center(origin, controller.facing());
            gizmos.rect_2d(
                Isometry2d::from_translation(center),
                probe.half_extents * 2.0,
                color,
            );
        }
    }
}
