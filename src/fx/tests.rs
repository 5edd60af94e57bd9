use bevy::color::Alpha;
use bevy::prelude::*;

use super::FxParticle;

#[test]
fn test_particle_keeps_spawn_alpha() {
    let particle = FxParticle::new(0.5, Vec2::ZERO, Color::srgba(1.0, 1.0, 1.0, 0.5));

    assert_eq!(particle.base_alpha, 0.5);
    assert_eq!(particle.fraction_left(), 1.0);
}

#[test]
fn test_particle_fraction_left() {
    let mut particle = FxParticle::new(0.5, Vec2::ZERO, Color::WHITE.with_alpha(0.8));
    particle.remaining = 0.125;

    assert_eq!(particle.fraction_left(), 0.25);

    particle.remaining = -1.0;
    assert_eq!(particle.fraction_left(), 0.0);
}

#[test]
fn test_zero_lifetime_is_expired() {
    let particle = FxParticle::new(0.0, Vec2::ZERO, Color::WHITE);

    assert_eq!(particle.fraction_left(), 0.0);
}
