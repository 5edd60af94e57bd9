//! Movement domain: intent and cosmetic messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::MovementFx;

/// Abstract player intent, produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementCommand {
    /// Horizontal axis in [-1, 1]; held until the next MoveAxis
    MoveAxis(f32),
    JumpPressed,
    JumpReleased,
    DashPressed,
}

impl Message for MovementCommand {}

/// A cosmetic command emitted by a controller during this frame
#[derive(Debug, Clone, Copy)]
pub struct MovementFxEvent {
    pub entity: Entity,
    pub fx: MovementFx,
}

impl Message for MovementFxEvent {}
