//! Movement domain: hard-coded test room for exercising the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};
use crate::pickups::double_jump_item;

fn spawn_block(
    commands: &mut Commands,
    position: Vec2,
    size: Vec2,
    color: Color,
    layers: CollisionLayers,
) -> Entity {
    commands
        .spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            layers,
        ))
        .id()
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let grounds = [
        // Floor
        (Vec2::new(0.0, -6.0), Vec2::new(26.0, 1.0), ground_color),
        // Left platform
        (Vec2::new(-7.0, -2.0), Vec2::new(4.5, 0.5), platform_color),
        // Right platform, higher
        (Vec2::new(7.0, 1.0), Vec2::new(4.5, 0.5), platform_color),
        // Center, only reachable with the double jump
        (Vec2::new(0.0, 4.5), Vec2::new(3.5, 0.5), platform_color),
    ];
    for (position, size, color) in grounds {
        let entity = spawn_block(&mut commands, position, size, color, ground_layers);
        commands.entity(entity).insert(Ground);
    }

    let walls = [
        (Vec2::new(-13.5, 1.5), Vec2::new(1.0, 16.0)),
        (Vec2::new(13.5, 1.5), Vec2::new(1.0, 16.0)),
        // Pillar for wall-jump practice
        (Vec2::new(-3.0, -3.0), Vec2::new(0.8, 5.0)),
    ];
    for (position, size) in walls {
        let entity = spawn_block(&mut commands, position, size, wall_color, wall_layers);
        commands.entity(entity).insert(Wall);
    }

    commands.spawn(double_jump_item(Vec2::new(7.0, 2.5), 1));
}
