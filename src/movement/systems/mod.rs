//! Movement domain: system modules for controller updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_double_jump_unlocks, apply_movement_commands, sync_facing, tick_controllers,
};
