//! Debug tooling for iterating on movement feel.
//!
//! - F1: toggle probe box overlay
//! - Ctrl+H: hurt the player
//! - Ctrl+U: broadcast a double-jump unlock

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{draw_probe_gizmos, handle_debug_hotkeys, toggle_probe_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_probe_overlay, handle_debug_hotkeys))
            .add_systems(
                PostUpdate,
                draw_probe_gizmos.run_if(|state: Res<DebugState>| state.show_probes),
            );
    }
}
