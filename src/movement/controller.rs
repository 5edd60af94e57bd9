//! Movement domain: the per-player controller state machine.
//!
//! The controller owns every timer and flag that decides who controls the
//! body on a given tick. It never talks to the physics engine directly; the
//! systems hand it a [`PhysicsBody`], a [`CollisionProbe`] and an [`FxSink`].
//!
//! Tick order:
//! 1. animator speed parameter
//! 2. dash phase (returns early while the dash owns the tick)
//! 3. ground sensing
//! 4. gravity shaping, then wall slide
//! 5. wall-jump grace timer and lockout
//! 6. horizontal locomotion and facing (skipped while wall-jumping)

use bevy::prelude::*;

use crate::movement::{Facing, GameLayer, MovementTuning, ProbeBox, SensorProbes};

/// Velocity and gravity of the rigid body being driven.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn set_gravity_scale(&mut self, scale: f32);
}

/// Box overlap queries against the collision world.
pub trait CollisionProbe {
    fn query_overlap(&self, center: Vec2, half_extents: Vec2, rotation: f32, layer: GameLayer)
    -> bool;
}

/// Fire-and-forget cosmetic commands produced by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementFx {
    /// Absolute horizontal speed, fed to the animator every tick
    HorizontalSpeed(f32),
    /// Dust puff when turning around with no vertical motion
    Dust,
    /// Jump or wall-jump puff
    Jump,
    /// Dash trail on/off
    Trail(bool),
}

pub trait FxSink {
    fn emit(&mut self, fx: MovementFx);
}

impl FxSink for Vec<MovementFx> {
    fn emit(&mut self, fx: MovementFx) {
        self.push(fx);
    }
}

/// Dash sub-state. The phases run strictly in order and cannot be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    #[default]
    Ready,
    Dashing {
        remaining: f32,
        direction: Facing,
    },
    Cooldown {
        remaining: f32,
    },
}

/// Which mechanic owns the body this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOwner {
    Dashing,
    WallJumping,
    WallSliding,
    Grounded,
    Airborne,
}

#[derive(Component, Debug, Clone)]
pub struct MovementController {
    pub(crate) tuning: MovementTuning,
    pub(crate) probes: SensorProbes,
    pub(crate) horizontal_input: f32,
    pub(crate) facing: Facing,
    pub(crate) max_jumps: u32,
    pub(crate) jumps_remaining: u32,
    pub(crate) is_grounded: bool,
    pub(crate) is_wall_sliding: bool,
    pub(crate) wall_jump_timer: f32,
    pub(crate) wall_jump_direction: Facing,
    /// Remaining wall-jump lockout. `Some` means the player is wall-jumping.
    pub(crate) wall_jump_lock: Option<f32>,
    pub(crate) dash: DashPhase,
}

impl MovementController {
    pub fn new(tuning: MovementTuning, probes: SensorProbes) -> Self {
        Self {
            max_jumps: tuning.max_jumps,
            jumps_remaining: 0,
            tuning,
            probes,
            horizontal_input: 0.0,
            facing: Facing::Right,
            is_grounded: false,
            is_wall_sliding: false,
            wall_jump_timer: 0.0,
            wall_jump_direction: Facing::Left,
            wall_jump_lock: None,
            dash: DashPhase::Ready,
        }
    }

    pub fn probes(&self) -> &SensorProbes {
        &self.probes
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn max_jumps(&self) -> u32 {
        self.max_jumps
    }

    pub fn jumps_remaining(&self) -> u32 {
        self.jumps_remaining
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn is_wall_sliding(&self) -> bool {
        self.is_wall_sliding
    }

    pub fn is_wall_jumping(&self) -> bool {
        self.wall_jump_lock.is_some()
    }

    pub fn wall_jump_timer(&self) -> f32 {
        self.wall_jump_timer
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self.dash, DashPhase::Dashing { .. })
    }

    pub fn can_dash(&self) -> bool {
        self.dash == DashPhase::Ready
    }

    pub fn motion_owner(&self) -> MotionOwner {
        if self.is_dashing() {
            MotionOwner::Dashing
        } else if self.is_wall_jumping() {
            MotionOwner::WallJumping
        } else if self.is_wall_sliding {
            MotionOwner::WallSliding
        } else if self.is_grounded {
            MotionOwner::Grounded
        } else {
            MotionOwner::Airborne
        }
    }

    // ------------------------------------------------------------------
    // Input events
    // ------------------------------------------------------------------

    pub fn set_move_axis(&mut self, x: f32) {
        self.horizontal_input = if x.is_finite() { x.clamp(-1.0, 1.0) } else { 0.0 };
    }

    pub fn jump_pressed(&mut self, body: &mut impl PhysicsBody, fx: &mut impl FxSink) {
        if self.is_dashing() {
            return;
        }

        if self.jumps_remaining > 0 {
            let mut power = self.tuning.jump_power;
            if self.jumps_remaining != self.max_jumps {
                power *= self.tuning.double_jump_factor;
            }
            let velocity = body.velocity();
            body.set_velocity(Vec2::new(velocity.x, power));
            self.jumps_remaining -= 1;
            fx.emit(MovementFx::Jump);
            debug!(
                "Jump: power={}, jumps_remaining={}",
                power, self.jumps_remaining
            );
        }

        // Not exclusive with the branch above; the wall jump overrides its velocity
        if self.wall_jump_timer > 0.0 {
            self.wall_jump(body, fx);
        }
    }

    pub fn jump_released(&mut self, body: &mut impl PhysicsBody) {
        if self.is_dashing() || self.jumps_remaining == 0 {
            return;
        }

        let velocity = body.velocity();
        body.set_velocity(Vec2::new(
            velocity.x,
            velocity.y * self.tuning.jump_release_damping,
        ));
        // Releasing early costs a charge just like jumping does
        self.jumps_remaining -= 1;
    }

    pub fn dash_pressed(&mut self, body: &mut impl PhysicsBody, fx: &mut impl FxSink) {
        if !self.can_dash() || self.tuning.dash_duration <= 0.0 {
            return;
        }

        let direction = self.facing;
        self.dash = DashPhase::Dashing {
            remaining: self.tuning.dash_duration,
            direction,
        };
        self.wall_jump_lock = None;
        self.pin_dash_velocity(direction, body);
        fx.emit(MovementFx::Trail(true));
        debug!("Dash start: direction={:?}", direction);
    }

    /// Raise the jump count after a pickup. Never lowers it.
    pub fn unlock_double_jump(&mut self, step: u32) {
        let upgraded = self.max_jumps.max(step.saturating_add(1));
        if upgraded != self.max_jumps {
            info!("Jump unlock: max_jumps {} -> {}", self.max_jumps, upgraded);
            self.max_jumps = upgraded;
        }
    }

    // ------------------------------------------------------------------
    // Per-tick update
    // ------------------------------------------------------------------

    pub fn tick(
        &mut self,
        dt: f32,
        origin: Vec2,
        body: &mut impl PhysicsBody,
        probe: &impl CollisionProbe,
        fx: &mut impl FxSink,
    ) {
        fx.emit(MovementFx::HorizontalSpeed(body.velocity().x.abs()));

        if self.advance_dash(dt, body, fx) {
            return;
        }

        self.sense_ground(origin, probe);
        self.apply_gravity(body);
        self.apply_wall_slide(dt, origin, body, probe);
        self.update_wall_jump_timer(dt);

        if !self.is_wall_jumping() {
            let velocity = body.velocity();
            body.set_velocity(Vec2::new(
                self.horizontal_input * self.tuning.move_speed,
                velocity.y,
            ));
            self.face_velocity(body, fx);
        }
    }

    /// Returns true while the dash owns this tick.
    fn advance_dash(&mut self, dt: f32, body: &mut impl PhysicsBody, fx: &mut impl FxSink) -> bool {
        match self.dash {
            DashPhase::Ready => false,
            DashPhase::Dashing {
                remaining,
                direction,
            } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.dash = DashPhase::Dashing {
                        remaining,
                        direction,
                    };
                    self.pin_dash_velocity(direction, body);
                    return true;
                }

                let velocity = body.velocity();
                body.set_velocity(Vec2::new(0.0, velocity.y));
                fx.emit(MovementFx::Trail(false));
                self.dash = if self.tuning.dash_cooldown > 0.0 {
                    DashPhase::Cooldown {
                        remaining: self.tuning.dash_cooldown,
                    }
                } else {
                    DashPhase::Ready
                };
                debug!("Dash end: next phase={:?}", self.dash);
                true
            }
            DashPhase::Cooldown { remaining } => {
                let remaining = remaining - dt;
                self.dash = if remaining > 0.0 {
                    DashPhase::Cooldown { remaining }
                } else {
                    DashPhase::Ready
                };
                false
            }
        }
    }

    fn pin_dash_velocity(&self, direction: Facing, body: &mut impl PhysicsBody) {
        body.set_velocity(Vec2::new(direction.sign() * self.tuning.dash_speed, 0.0));
        body.set_gravity_scale(0.0);
    }

    fn sense_ground(&mut self, origin: Vec2, probe: &impl CollisionProbe) {
        let was_grounded = self.is_grounded;
        self.is_grounded = self.overlaps(&self.probes.ground, origin, probe);

        if self.is_grounded {
            self.jumps_remaining = self.max_jumps;
            if !was_grounded {
                debug!("Landed: jumps_remaining={}", self.jumps_remaining);
            }
        }
    }

    fn touching_wall(&self, origin: Vec2, probe: &impl CollisionProbe) -> bool {
        self.overlaps(&self.probes.wall, origin, probe)
    }

    fn overlaps(&self, probe_box: &ProbeBox, origin: Vec2, probe: &impl CollisionProbe) -> bool {
        probe.query_overlap(
            probe_box.center(origin, self.facing),
            probe_box.half_extents,
            0.0,
            probe_box.layer,
        )
    }

    fn apply_gravity(&self, body: &mut impl PhysicsBody) {
        // Wall slide owns vertical velocity
        if self.is_wall_sliding {
            body.set_gravity_scale(0.0);
            return;
        }

        let velocity = body.velocity();
        if velocity.y < 0.0 {
            body.set_gravity_scale(self.tuning.fall_gravity());
            body.set_velocity(Vec2::new(
                velocity.x,
                velocity.y.max(-self.tuning.max_fall_speed),
            ));
        } else {
            body.set_gravity_scale(self.tuning.base_gravity);
        }
    }

    fn apply_wall_slide(
        &mut self,
        dt: f32,
        origin: Vec2,
        body: &mut impl PhysicsBody,
        probe: &impl CollisionProbe,
    ) {
        // Idle against a wall, or standing next to one, is not a slide
        let touching = !self.is_grounded
            && self.horizontal_input != 0.0
            && self.touching_wall(origin, probe);

        if !touching {
            self.is_wall_sliding = false;
            return;
        }

        if !self.is_wall_sliding {
            self.is_wall_sliding = true;
            let velocity = body.velocity();
            body.set_velocity(Vec2::new(velocity.x, 0.0));
            debug!("Wall slide start: facing={:?}", self.facing);
        }

        let velocity = body.velocity();
        let y = move_towards(
            velocity.y,
            -self.tuning.max_fall_speed,
            self.tuning.wall_slide_acceleration * dt,
        );
        body.set_velocity(Vec2::new(velocity.x, y));
    }

    fn update_wall_jump_timer(&mut self, dt: f32) {
        if self.is_wall_sliding {
            // Re-armed every sliding tick; only leaving the wall starts the countdown
            self.wall_jump_lock = None;
            self.wall_jump_direction = self.facing.opposite();
            self.wall_jump_timer = self.tuning.coyote_time.max(0.0);
            return;
        }

        if let Some(remaining) = self.wall_jump_lock {
            let remaining = remaining - dt;
            self.wall_jump_lock = (remaining > 0.0).then_some(remaining);
        }

        if self.wall_jump_timer > 0.0 {
            self.wall_jump_timer = (self.wall_jump_timer - dt).max(0.0);
        }
    }

    fn wall_jump(&mut self, body: &mut impl PhysicsBody, fx: &mut impl FxSink) {
        self.wall_jump_timer = 0.0;

        let lockout = self.tuning.wall_jump_lockout();
        self.wall_jump_lock = (lockout > 0.0).then_some(lockout);

        let direction = self.wall_jump_direction;
        body.set_velocity(Vec2::new(
            direction.sign() * self.tuning.wall_jump_power.x,
            self.tuning.wall_jump_power.y,
        ));
        fx.emit(MovementFx::Jump);

        if self.facing != direction {
            self.flip(body, fx);
        }

        debug!("Wall jump: direction={:?}, lockout={}", direction, lockout);
    }

    fn face_velocity(&mut self, body: &impl PhysicsBody, fx: &mut impl FxSink) {
        let vx = body.velocity().x;
        let disagrees = match self.facing {
            Facing::Right => vx < 0.0,
            Facing::Left => vx > 0.0,
        };
        if disagrees {
            self.flip(body, fx);
        }
    }

    fn flip(&mut self, body: &impl PhysicsBody, fx: &mut impl FxSink) {
        self.facing = self.facing.opposite();

        // Cosmetic approximation of "turned on the ground or at the apex"
        if body.velocity().y == 0.0 {
            fx.emit(MovementFx::Dust);
        }
    }
}

/// Move `current` toward `target` by at most `max_delta`.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}
