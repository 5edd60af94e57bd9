//! Animation state machine for the player.
//!
//! States only track which clip should be playing; sprite playback itself is
//! out of scope. Transitions are picked from the animator speed parameter fed
//! by the movement controller and from hurt messages.

use bevy::prelude::*;

use crate::movement::MotionOwner;

/// How long the hurt state holds before motion takes over again.
pub const HURT_DURATION: f32 = 0.4;
/// Below this horizontal speed the player counts as standing still.
pub const WALK_SPEED_MIN: f32 = 0.1;
/// At or above this horizontal speed the walk becomes a run.
pub const RUN_SPEED_MIN: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
    Hurt,
}

impl AnimationState {
    /// The state motion alone would select.
    pub fn from_motion(owner: MotionOwner, x_speed: f32) -> Self {
        match owner {
            MotionOwner::Airborne | MotionOwner::WallJumping | MotionOwner::WallSliding => {
                AnimationState::Jump
            }
            MotionOwner::Dashing => AnimationState::Run,
            MotionOwner::Grounded if x_speed >= RUN_SPEED_MIN => AnimationState::Run,
            MotionOwner::Grounded if x_speed >= WALK_SPEED_MIN => AnimationState::Walk,
            MotionOwner::Grounded => AnimationState::Idle,
        }
    }

    pub fn clip_name(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Walk => "walk",
            AnimationState::Run => "run",
            AnimationState::Jump => "jump",
            AnimationState::Hurt => "hurt",
        }
    }
}

/// A completed state change, `from` exited and `to` entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: AnimationState,
    pub to: AnimationState,
}

#[derive(Component, Debug, Default)]
pub struct PlayerAnimator {
    pub state: AnimationState,
    pub previous_state: AnimationState,
    /// Latest "xVelocity" parameter from the controller
    pub x_speed: f32,
    pub hurt_timer: f32,
}

impl PlayerAnimator {
    /// Exit the current state and enter `next`. No-op if already there.
    pub fn change_state(&mut self, next: AnimationState) -> Option<Transition> {
        if self.state == next {
            return None;
        }
        Some(self.enter(next))
    }

    /// Hurt interrupts every state. Hurt while hurt re-enters and restarts the timer.
    pub fn hurt(&mut self) -> Transition {
        self.hurt_timer = HURT_DURATION;
        self.enter(AnimationState::Hurt)
    }

    pub fn update(&mut self, dt: f32, owner: MotionOwner) -> Option<Transition> {
        if self.hurt_timer > 0.0 {
            self.hurt_timer = (self.hurt_timer - dt).max(0.0);
            if self.hurt_timer > 0.0 {
                return None;
            }
        }

        self.change_state(AnimationState::from_motion(owner, self.x_speed))
    }

    fn enter(&mut self, next: AnimationState) -> Transition {
        let from = self.state;
        self.previous_state = from;
        self.state = next;
        Transition { from, to: next }
    }
}
