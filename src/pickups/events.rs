//! Pickups domain: ability unlock broadcast.

use bevy::ecs::message::Message;

/// Fired once when a double-jump item is collected. Every live controller
/// raises its jump count to at least `1 + step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleJumpCollected {
    pub step: u32,
}

impl Message for DoubleJumpCollected {}
