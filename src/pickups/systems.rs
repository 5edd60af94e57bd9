//! Pickups domain: collection on contact.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Player};
use crate::pickups::{DoubleJumpCollected, DoubleJumpItem};

const ITEM_SIZE: f32 = 0.5;

pub fn double_jump_item(position: Vec2, step: u32) -> impl Bundle {
    (
        DoubleJumpItem { step },
        Sprite {
            color: Color::srgb(0.95, 0.8, 0.2),
            custom_size: Some(Vec2::splat(ITEM_SIZE)),
            ..default()
        },
        Transform::from_translation(position.extend(0.5)),
        RigidBody::Static,
        Collider::rectangle(ITEM_SIZE, ITEM_SIZE),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Pickup, [GameLayer::Player]),
    )
}

/// Orders a contact pair as `(item, collector)`, or `None` if the pair is not
/// an item touching a collector.
pub(crate) fn item_contact(
    a: Entity,
    b: Entity,
    is_item: impl Fn(Entity) -> bool,
    is_collector: impl Fn(Entity) -> bool,
) -> Option<(Entity, Entity)> {
    [(a, b), (b, a)]
        .into_iter()
        .find(|&(item, collector)| is_item(item) && is_collector(collector))
}

pub(crate) fn collect_double_jump_items(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut collected_events: MessageWriter<DoubleJumpCollected>,
    item_query: Query<&DoubleJumpItem>,
    player_query: Query<(), With<Player>>,
) {
    // Despawn is deferred, so guard against a second contact in the same frame
    let mut collected: Vec<Entity> = Vec::new();

    for event in collision_events.read() {
        let Some((item_entity, _player)) = item_contact(
            event.collider1,
            event.collider2,
            |e| item_query.contains(e),
            |e| player_query.contains(e),
        ) else {
            continue;
        };

        if collected.contains(&item_entity) {
            continue;
        }

        let Ok(item) = item_query.get(item_entity) else {
            continue;
        };

        info!("Double jump item collected: step={}", item.step);
        collected_events.write(DoubleJumpCollected { step: item.step });
        commands.entity(item_entity).despawn();
        collected.push(item_entity);
    }
}
