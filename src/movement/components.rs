//! Movement domain: components, physics layers, and sensor probe shapes.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Collectible items (sensors, never block movement)
    Pickup,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// A box probe attached to the player, queried against a single layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeBox {
    /// Offset from the entity origin while facing right. Mirrored on x when facing left.
    pub anchor: Vec2,
    pub half_extents: Vec2,
    pub layer: GameLayer,
}

impl ProbeBox {
    /// World-space center of the probe for an entity at `origin`.
    pub fn center(&self, origin: Vec2, facing: Facing) -> Vec2 {
        origin + Vec2::new(self.anchor.x * facing.sign(), self.anchor.y)
    }
}

/// Ground and wall probes for one controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorProbes {
    pub ground: ProbeBox,
    pub wall: ProbeBox,
}
