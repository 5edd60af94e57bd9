//! Movement domain: systems driving controllers against avian bodies.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::collisions::SpatialProbe;
use crate::movement::{
    Facing, MovementCommand, MovementController, MovementFx, MovementFxEvent, PhysicsBody, Player,
};
use crate::pickups::DoubleJumpCollected;

/// Rigid body seam over avian's velocity and gravity components.
pub(crate) struct AvianBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub gravity_scale: &'a mut GravityScale,
}

impl PhysicsBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }
}

fn write_fx(fx_out: &mut MessageWriter<MovementFxEvent>, entity: Entity, fx: Vec<MovementFx>) {
    for fx in fx {
        fx_out.write(MovementFxEvent { entity, fx });
    }
}

/// Every live controller receives the broadcast, so a pickup collected by any
/// player upgrades all of them.
pub(crate) fn apply_double_jump_unlocks(
    mut unlocks: MessageReader<DoubleJumpCollected>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    for unlock in unlocks.read() {
        for mut controller in &mut query {
            controller.unlock_double_jump(unlock.step);
        }
    }
}

pub(crate) fn apply_movement_commands(
    mut commands_in: MessageReader<MovementCommand>,
    mut query: Query<
        (
            Entity,
            &mut MovementController,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
    mut fx_out: MessageWriter<MovementFxEvent>,
) {
    let commands: Vec<MovementCommand> = commands_in.read().copied().collect();
    if commands.is_empty() {
        return;
    }

    for (entity, mut controller, mut velocity, mut gravity_scale) in &mut query {
        let mut body = AvianBody {
            velocity: &mut velocity,
            gravity_scale: &mut gravity_scale,
        };
        let mut fx = Vec::new();

        for command in &commands {
            match *command {
                MovementCommand::MoveAxis(x) => controller.set_move_axis(x),
                MovementCommand::JumpPressed => controller.jump_pressed(&mut body, &mut fx),
                MovementCommand::JumpReleased => controller.jump_released(&mut body),
                MovementCommand::DashPressed => controller.dash_pressed(&mut body, &mut fx),
            }
        }

        write_fx(&mut fx_out, entity, fx);
    }
}

pub(crate) fn tick_controllers(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut MovementController,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
    mut fx_out: MessageWriter<MovementFxEvent>,
) {
    let dt = time.delta_secs();
    let probe = SpatialProbe {
        spatial_query: &spatial_query,
    };

    for (entity, transform, mut controller, mut velocity, mut gravity_scale) in &mut query {
        let mut body = AvianBody {
            velocity: &mut velocity,
            gravity_scale: &mut gravity_scale,
        };
        let mut fx = Vec::new();

        controller.tick(
            dt,
            transform.translation.truncate(),
            &mut body,
            &probe,
            &mut fx,
        );

        write_fx(&mut fx_out, entity, fx);
    }
}

/// Mirror the sprite to match the controller's facing.
pub(crate) fn sync_facing(
    mut query: Query<(&MovementController, &mut Sprite), (With<Player>, Changed<MovementController>)>,
) {
    for (controller, mut sprite) in &mut query {
        sprite.flip_x = controller.facing() == Facing::Left;
    }
}
