use super::state::{AnimationState, HURT_DURATION, PlayerAnimator, Transition};
use crate::movement::MotionOwner;

#[test]
fn test_motion_picks_state() {
    assert_eq!(
        AnimationState::from_motion(MotionOwner::Grounded, 0.0),
        AnimationState::Idle
    );
    assert_eq!(
        AnimationState::from_motion(MotionOwner::Grounded, 2.0),
        AnimationState::Walk
    );
    assert_eq!(
        AnimationState::from_motion(MotionOwner::Grounded, 8.0),
        AnimationState::Run
    );
    assert_eq!(
        AnimationState::from_motion(MotionOwner::Airborne, 8.0),
        AnimationState::Jump
    );
    assert_eq!(
        AnimationState::from_motion(MotionOwner::WallSliding, 0.0),
        AnimationState::Jump
    );
    assert_eq!(
        AnimationState::from_motion(MotionOwner::Dashing, 20.0),
        AnimationState::Run
    );
}

#[test]
fn test_change_to_same_state_is_noop() {
    let mut animator = PlayerAnimator::default();
    assert_eq!(animator.change_state(AnimationState::Idle), None);

    let transition = animator.change_state(AnimationState::Walk);
    assert_eq!(
        transition,
        Some(Transition {
            from: AnimationState::Idle,
            to: AnimationState::Walk,
        })
    );
    assert_eq!(animator.previous_state, AnimationState::Idle);
}

#[test]
fn test_hurt_interrupts_and_reenters() {
    let mut animator = PlayerAnimator::default();
    animator.change_state(AnimationState::Run);

    let first = animator.hurt();
    assert_eq!(first.from, AnimationState::Run);
    assert_eq!(animator.state, AnimationState::Hurt);

    animator.hurt_timer = 0.1;
    let second = animator.hurt();
    assert_eq!(
        second,
        Transition {
            from: AnimationState::Hurt,
            to: AnimationState::Hurt,
        }
    );
    assert_eq!(animator.hurt_timer, HURT_DURATION);
}

#[test]
fn test_hurt_holds_until_timer_runs_out() {
    let mut animator = PlayerAnimator::default();
    animator.x_speed = 8.0;
    animator.hurt();

    assert_eq!(animator.update(0.25, MotionOwner::Grounded), None);
    assert_eq!(animator.state, AnimationState::Hurt);

    let transition = animator.update(0.25, MotionOwner::Grounded);
    assert_eq!(
        transition,
        Some(Transition {
            from: AnimationState::Hurt,
            to: AnimationState::Run,
        })
    );
}

#[test]
fn test_clip_names() {
    assert_eq!(AnimationState::Idle.clip_name(), "idle");
    assert_eq!(AnimationState::Hurt.clip_name(), "hurt");
}
