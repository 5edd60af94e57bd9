//! Pickups domain: one-shot world items that unlock abilities.

mod events;
mod systems;
#[cfg(test)]
mod tests;

pub use events::DoubleJumpCollected;
pub use systems::double_jump_item;

use bevy::prelude::*;

use crate::movement::MovementSet;
use crate::pickups::systems::collect_double_jump_items;

/// A collectible that unlocks extra jumps.
#[derive(Component, Debug, Clone, Copy)]
pub struct DoubleJumpItem {
    pub step: u32,
}

impl Default for DoubleJumpItem {
    fn default() -> Self {
        Self { step: 1 }
    }
}

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DoubleJumpCollected>()
            .add_systems(Update, collect_double_jump_items.before(MovementSet));
    }
}
