//! Movement domain: player controller, sensing, and abilities.

mod bootstrap;
mod components;
mod controller;
mod dev;
mod events;
mod resources;
mod systems;

pub use components::{Facing, GameLayer, Ground, Player, ProbeBox, SensorProbes, Wall};
pub use controller::{CollisionProbe, MotionOwner, MovementController, MovementFx, PhysicsBody};
pub use events::{MovementCommand, MovementFxEvent};
pub use resources::{MovementDefaults, MovementTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_double_jump_unlocks, apply_movement_commands, read_input, sync_facing,
    tick_controllers,
};

/// Ordering anchor for everything that reads controller output this frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MovementCommand>()
            .add_message::<MovementFxEvent>()
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(
                Update,
                (
                    read_input,
                    apply_double_jump_unlocks,
                    apply_movement_commands,
                    tick_controllers,
                    sync_facing,
                )
                    .chain()
                    .in_set(MovementSet),
            );
    }
}
