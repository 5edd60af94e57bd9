//! Debug domain: overlay state.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the ground/wall probe boxes are drawn
    pub show_probes: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_probes: true }
    }
}
